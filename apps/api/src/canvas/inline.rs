//! Inline emphasis: `**bold**` and `*italic*` within a single line.

/// Replaces every `marker X marker` span with `open X close`.
///
/// The closing marker is the nearest one after the opening marker, so spans
/// never nest. Once an opening marker has no partner the rest of the line is
/// copied through untouched.
fn replace_spans(line: &str, marker: &str, open: &str, close: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;

    while let Some(start) = rest.find(marker) {
        let after_open = &rest[start + marker.len()..];
        let Some(end) = after_open.find(marker) else {
            break;
        };
        out.push_str(&rest[..start]);
        out.push_str(open);
        out.push_str(&after_open[..end]);
        out.push_str(close);
        rest = &after_open[end + marker.len()..];
    }

    out.push_str(rest);
    out
}

/// Converts bold then italic markers. Bold goes first so the asterisks of a
/// `**` pair are never consumed as two italic markers.
pub fn render_inline(line: &str) -> String {
    let bold = replace_spans(line, "**", "<strong>", "</strong>");
    replace_spans(&bold, "*", "<em>", "</em>")
}
