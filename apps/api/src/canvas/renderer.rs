//! Resume markdown → standalone HTML document.
//!
//! Handles the constrained subset the resume assistant emits: ATX headings up
//! to level 3, `**bold**` / `*italic*`, `---` rules, `- ` bullets and pipe
//! tables. Anything else passes through as paragraph text. Rendering is a pure
//! function of its input and never fails; malformed input degrades into
//! best-effort HTML.
//!
//! # Pipeline
//! 1. [`lex_line`] classifies each source line after the per-line rewrites
//!    (headings, emphasis, horizontal rules).
//! 2. [`Assembler`] groups consecutive rows into tables and bullets into lists,
//!    then wraps the remaining prose into paragraphs.
//! 3. [`wrap_document`] places the body inside the shared document shell.
//!
//! Both stages are single linear scans over the lines.

use crate::canvas::inline::render_inline;
use crate::canvas::table::{is_table_row, render_table};
use crate::canvas::template::wrap_document;

/// Fewer consecutive pipe rows than this are plain text, not a table.
const MIN_TABLE_ROWS: usize = 2;

/// Line prefixes that are never wrapped in a paragraph.
const STRUCTURAL_PREFIXES: &[&str] = &["<h", "<ul>", "<li>", "<table", "<hr"];

// ────────────────────────────────────────────────────────────────────────────
// Line classification
// ────────────────────────────────────────────────────────────────────────────

/// A source line after headings, emphasis and rules have been rewritten.
#[derive(Debug, Clone, PartialEq)]
enum Line {
    Heading(String),
    Rule,
    /// Candidate table row; only a run of `MIN_TABLE_ROWS` becomes a table.
    Row(String),
    /// Bullet content, already wrapped in `<li>`.
    Item(String),
    /// Prose, blank lines and raw HTML.
    Text(String),
}

fn heading(raw: &str) -> Option<String> {
    let (open, close, rest) = if let Some(rest) = raw.strip_prefix("# ") {
        ("<h1 class=\"resume-name\">", "</h1>", rest)
    } else if let Some(rest) = raw.strip_prefix("## ") {
        ("<h2 class=\"section-heading\">", "</h2>", rest)
    } else if let Some(rest) = raw.strip_prefix("### ") {
        ("<h3>", "</h3>", rest)
    } else {
        return None;
    };
    Some(format!("{open}{}{close}", render_inline(rest)))
}

fn lex_line(raw: &str) -> Line {
    if let Some(html) = heading(raw) {
        return Line::Heading(html);
    }

    let line = render_inline(raw);
    if line == "---" {
        Line::Rule
    } else if is_table_row(&line) {
        Line::Row(line)
    } else if let Some(item) = line.strip_prefix("- ") {
        Line::Item(format!("<li>{item}</li>"))
    } else {
        Line::Text(line)
    }
}

fn is_structural(line: &str) -> bool {
    line.trim().is_empty() || STRUCTURAL_PREFIXES.iter().any(|p| line.starts_with(p))
}

// ────────────────────────────────────────────────────────────────────────────
// Block assembly
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
enum State {
    #[default]
    Idle,
    /// A `<p>` has been opened on an emitted line and not yet closed.
    Paragraph,
    List(Vec<String>),
    /// Buffered rows. `in_paragraph` remembers an open paragraph so a lone
    /// row can continue it instead of becoming a table.
    Table { rows: Vec<String>, in_paragraph: bool },
}

#[derive(Debug, Default)]
struct Assembler {
    out: Vec<String>,
    state: State,
}

impl Assembler {
    fn feed(&mut self, line: Line) {
        match line {
            Line::Heading(html) => self.push_block(html),
            Line::Rule => self.push_block("<hr>".to_string()),
            Line::Row(row) => self.push_row(row),
            Line::Item(item) => self.push_item(item),
            Line::Text(text) => self.push_text(text),
        }
    }

    fn finish(mut self) -> String {
        self.flush();
        self.close_paragraph();
        self.out.join("\n")
    }

    fn push_row(&mut self, row: String) {
        if let State::Table { rows, .. } = &mut self.state {
            rows.push(row);
            return;
        }
        self.flush();
        let in_paragraph = matches!(self.state, State::Paragraph);
        self.state = State::Table {
            rows: vec![row],
            in_paragraph,
        };
    }

    fn push_item(&mut self, item: String) {
        if let State::List(items) = &mut self.state {
            items.push(item);
            return;
        }
        self.flush();
        self.close_paragraph();
        self.state = State::List(vec![item]);
    }

    fn push_block(&mut self, html: String) {
        self.flush();
        self.close_paragraph();
        self.out.push(html);
    }

    fn push_text(&mut self, text: String) {
        self.flush();
        if is_structural(&text) {
            self.close_paragraph();
            self.out.push(text);
        } else if matches!(self.state, State::Paragraph) {
            self.out.push(text);
        } else {
            self.out.push(format!("<p>{text}"));
            self.state = State::Paragraph;
        }
    }

    /// Emits a buffered list or table. Leaves `Idle` and `Paragraph` as they are.
    fn flush(&mut self) {
        match std::mem::take(&mut self.state) {
            State::List(items) => {
                self.out.push(format!("<ul>{}</ul>", items.join("\n")));
            }
            State::Table { rows, in_paragraph } if rows.len() >= MIN_TABLE_ROWS => {
                if in_paragraph {
                    self.state = State::Paragraph;
                    self.close_paragraph();
                }
                self.out.push(render_table(&rows));
            }
            State::Table { rows, in_paragraph } => {
                if in_paragraph {
                    self.state = State::Paragraph;
                }
                for row in rows {
                    self.push_text(row);
                }
            }
            other => self.state = other,
        }
    }

    fn close_paragraph(&mut self) {
        if matches!(self.state, State::Paragraph) {
            if let Some(last) = self.out.last_mut() {
                last.push_str("</p>");
            }
            self.state = State::Idle;
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Public API
// ────────────────────────────────────────────────────────────────────────────

/// Renders resume markdown into the HTML fragment placed inside the document
/// container.
pub fn render_body(markdown: &str) -> String {
    let mut assembler = Assembler::default();
    for raw in markdown.split('\n') {
        assembler.feed(lex_line(raw));
    }
    assembler.finish()
}

/// Renders resume markdown into a complete, self-contained HTML5 document
/// suitable for an iframe `srcdoc` or for PDF rasterization.
pub fn render_resume_html(markdown: &str) -> String {
    wrap_document(&render_body(markdown))
}
