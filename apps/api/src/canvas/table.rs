//! Pipe-table rendering for resume sections (skills matrices, education grids).

/// A line that could belong to a table: starts and ends with `|` and has room
/// for both pipes. Leading whitespace disqualifies it.
pub fn is_table_row(line: &str) -> bool {
    line.len() >= 2 && line.starts_with('|') && line.ends_with('|')
}

/// A header separator such as `| --- | :---: |`: only pipes, dashes, colons
/// and whitespace, with at least one of them between the outer pipes.
pub fn is_separator_row(line: &str) -> bool {
    is_table_row(line)
        && line.len() >= 3
        && line[1..line.len() - 1]
            .chars()
            .all(|c| matches!(c, '|' | '-' | ':') || c.is_whitespace())
}

/// Splits a row on `|`, drops the fields outside the outer pipes, trims the rest.
fn cells(row: &str) -> Vec<&str> {
    let fields: Vec<&str> = row.split('|').collect();
    match fields.len() {
        0..=2 => Vec::new(),
        n => fields[1..n - 1].iter().map(|f| f.trim()).collect(),
    }
}

fn push_row(out: &mut String, row: &str, tag: &str) {
    out.push_str("<tr>");
    for cell in cells(row) {
        out.push('<');
        out.push_str(tag);
        out.push('>');
        out.push_str(cell);
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }
    out.push_str("</tr>\n");
}

/// Renders a run of table rows as one `<table class="resume-table">` block.
///
/// When the second row is a separator the first row becomes the `<thead>` and
/// the separator is dropped. Every remaining row goes into `<tbody>`. Callers
/// only pass runs of two or more rows; shorter input still renders.
pub fn render_table<S: AsRef<str>>(rows: &[S]) -> String {
    let has_header = rows.len() > 1 && is_separator_row(rows[1].as_ref());

    let mut out = String::from("<table class=\"resume-table\">\n");

    let body_rows = if has_header {
        out.push_str("<thead>\n");
        push_row(&mut out, rows[0].as_ref(), "th");
        out.push_str("</thead>\n");
        &rows[2..]
    } else {
        rows
    };

    if !body_rows.is_empty() {
        out.push_str("<tbody>\n");
        for row in body_rows {
            push_row(&mut out, row.as_ref(), "td");
        }
        out.push_str("</tbody>\n");
    }

    out.push_str("</table>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_table_row() {
        assert!(is_table_row("| a | b |"));
        assert!(is_table_row("||"));
        assert!(!is_table_row("|"));
        assert!(!is_table_row(" | a |"));
        assert!(!is_table_row("| a | b"));
        assert!(!is_table_row(""));
    }

    #[test]
    fn test_is_separator_row() {
        assert!(is_separator_row("| --- | --- |"));
        assert!(is_separator_row("|:---|---:|"));
        assert!(is_separator_row("| - |"));
        assert!(!is_separator_row("||"));
        assert!(!is_separator_row("| Jane | Engineer |"));
        assert!(!is_separator_row("| --- | x |"));
    }

    #[test]
    fn test_cells_are_trimmed_and_outer_fields_dropped() {
        assert_eq!(cells("|  Jane |Engineer  |"), vec!["Jane", "Engineer"]);
        assert_eq!(cells("| a || c |"), vec!["a", "", "c"]);
    }

    #[test]
    fn test_table_with_header() {
        let html = render_table(&[
            "| Name | Role |",
            "| --- | --- |",
            "| Jane | Engineer |",
        ]);
        assert_eq!(
            html,
            "<table class=\"resume-table\">\n\
             <thead>\n\
             <tr><th>Name</th><th>Role</th></tr>\n\
             </thead>\n\
             <tbody>\n\
             <tr><td>Jane</td><td>Engineer</td></tr>\n\
             </tbody>\n\
             </table>"
        );
        assert!(!html.contains("---"));
    }

    #[test]
    fn test_table_without_header_opens_tbody_at_first_row() {
        let html = render_table(&["| Rust | 6 yrs |", "| Go | 3 yrs |"]);
        assert!(!html.contains("<thead>"));
        assert!(html.contains("<tbody>\n<tr><td>Rust</td><td>6 yrs</td></tr>\n<tr><td>Go</td>"));
        assert_eq!(html.matches("<tbody>").count(), 1);
        assert!(html.ends_with("</tbody>\n</table>"));
    }

    #[test]
    fn test_header_and_separator_only_has_no_tbody() {
        let html = render_table(&["| Skill | Level |", "|---|---|"]);
        assert!(html.contains("<th>Skill</th><th>Level</th>"));
        assert!(!html.contains("<tbody>"));
    }

    #[test]
    fn test_later_separator_rows_render_as_data() {
        let html = render_table(&["| a |", "| b |", "| --- |"]);
        assert!(html.contains("<td>---</td>"));
    }
}
