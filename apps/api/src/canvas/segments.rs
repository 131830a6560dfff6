//! Fence extraction. Splits a chat message into prose and fenced payloads.
//!
//! The UI renders `Normal` segments as prose and offers every `Code` segment as
//! an "open in canvas" action. Segments are positional: empty normal segments
//! between adjacent fences are kept so callers iterate a deterministic list.

use serde::{Deserialize, Serialize};

/// Triple-backtick fence marker.
pub const FENCE: &str = "```";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    Normal,
    Code,
}

/// One contiguous run of message text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub kind: SegmentKind,
}

impl Segment {
    fn normal(text: &str) -> Self {
        Self {
            text: text.to_string(),
            kind: SegmentKind::Normal,
        }
    }

    fn code(text: &str) -> Self {
        Self {
            text: text.to_string(),
            kind: SegmentKind::Code,
        }
    }

    pub fn is_code(&self) -> bool {
        self.kind == SegmentKind::Code
    }
}

/// Locates the next complete fence pair at or after `from`.
///
/// Returns `(open, close)` byte offsets of the two markers. An opening marker
/// without a closing one is not a match: no later pair can exist either, since
/// any candidate closing marker would already have been found.
fn next_fence_pair(source: &str, from: usize) -> Option<(usize, usize)> {
    let open = from + source[from..].find(FENCE)?;
    let body_start = open + FENCE.len();
    let close = body_start + source[body_start..].find(FENCE)?;
    Some((open, close))
}

/// Splits `source` into alternating normal / code segments.
///
/// Always returns at least one segment; the last one is always `Normal`.
/// Language tags after the opening fence are part of the code text.
pub fn extract_segments(source: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    while let Some((open, close)) = next_fence_pair(source, cursor) {
        segments.push(Segment::normal(&source[cursor..open]));
        segments.push(Segment::code(&source[open + FENCE.len()..close]));
        cursor = close + FENCE.len();
    }

    segments.push(Segment::normal(&source[cursor..]));
    segments
}

/// Returns the payload the canvas should auto-open for a bot reply: the first
/// fenced block, provided it is non-empty.
pub fn canvas_content(source: &str) -> Option<&str> {
    let (open, close) = next_fence_pair(source, 0)?;
    let payload = &source[open + FENCE.len()..close];
    (!payload.is_empty()).then_some(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Rebuilds the source by re-wrapping every code segment in fences.
    fn reassemble(segments: &[Segment]) -> String {
        segments
            .iter()
            .map(|s| match s.kind {
                SegmentKind::Normal => s.text.clone(),
                SegmentKind::Code => format!("{FENCE}{}{FENCE}", s.text),
            })
            .collect()
    }

    #[test]
    fn test_no_fence_returns_single_normal_segment() {
        let segments = extract_segments("Tell me about your last role.");
        assert_eq!(segments, vec![Segment::normal("Tell me about your last role.")]);
    }

    #[test]
    fn test_empty_input_returns_single_empty_segment() {
        let segments = extract_segments("");
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].kind, SegmentKind::Normal);
        assert!(segments[0].text.is_empty());
    }

    #[test]
    fn test_single_fence_splits_into_three_segments() {
        let source = "Here is your resume:\n```\n# Jane Doe\n```\nAnything else?";
        let segments = extract_segments(source);
        assert_eq!(
            segments,
            vec![
                Segment::normal("Here is your resume:\n"),
                Segment::code("\n# Jane Doe\n"),
                Segment::normal("\nAnything else?"),
            ]
        );
    }

    #[test]
    fn test_language_tag_is_kept_in_code_text() {
        let segments = extract_segments("```markdown\n# Jane\n```");
        assert_eq!(segments[1].text, "markdown\n# Jane\n");
        assert!(segments[1].is_code());
    }

    #[test]
    fn test_adjacent_fences_keep_empty_normal_segments() {
        let segments = extract_segments("```a``````b```");
        let kinds: Vec<SegmentKind> = segments.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SegmentKind::Normal,
                SegmentKind::Code,
                SegmentKind::Normal,
                SegmentKind::Code,
                SegmentKind::Normal,
            ]
        );
        assert_eq!(segments[0].text, "");
        assert_eq!(segments[2].text, "");
        assert_eq!(segments[4].text, "");
    }

    #[test]
    fn test_empty_fence_yields_empty_code_segment() {
        let segments = extract_segments("before``````after");
        assert_eq!(
            segments,
            vec![
                Segment::normal("before"),
                Segment::code(""),
                Segment::normal("after"),
            ]
        );
    }

    #[test]
    fn test_unterminated_fence_stays_normal_text() {
        let source = "intro ```\nno closing marker here";
        assert_eq!(extract_segments(source), vec![Segment::normal(source)]);
    }

    #[test]
    fn test_unterminated_fence_after_complete_pair() {
        let source = "```one``` tail ```open";
        let segments = extract_segments(source);
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[1].text, "one");
        assert_eq!(segments[2].text, " tail ```open");
    }

    #[test]
    fn test_four_backticks_match_nearest_closing_marker() {
        // Non-greedy: the body starts right after the first three backticks.
        let segments = extract_segments("````x```");
        assert_eq!(segments[1].text, "`x");
    }

    #[test]
    fn test_round_trip_reproduces_source() {
        let sources = [
            "",
            "plain",
            "```",
            "a```b```c```d```e",
            "```python\nprint(1)\n```\n\n```\n```",
            "mixed ```x``` and ``` unterminated",
            "résumé ```ünïcödé``` ✓",
        ];
        for source in sources {
            assert_eq!(reassemble(&extract_segments(source)), source, "source: {source:?}");
        }
    }

    #[test]
    fn test_segment_serializes_with_lowercase_kind() {
        let json = serde_json::to_value(Segment::code("x")).unwrap();
        assert_eq!(json, serde_json::json!({"text": "x", "kind": "code"}));
    }

    #[test]
    fn test_canvas_content_returns_first_non_empty_block() {
        let source = "Done!\n```\n# Jane\n```\nand ```second```";
        assert_eq!(canvas_content(source), Some("\n# Jane\n"));
    }

    #[test]
    fn test_canvas_content_ignores_empty_first_block() {
        assert_eq!(canvas_content("``````"), None);
        assert_eq!(canvas_content("no fences"), None);
        assert_eq!(canvas_content("```unterminated"), None);
    }
}
