use lazy_static::lazy_static;
use regex::Regex;
use std::borrow::Cow;

use crate::replace;

static COMMENT: &str = r"(?m)^[ \t]*\[comment\]:[^\n]*\n?";

lazy_static! {
    static ref COMMENT_REGEX: Regex = Regex::new(COMMENT).unwrap();
}

/// Delete every `[comment]:` line, together with its newline.
// TODO: a comment which swallows a footnote definition leaves that note's marker
// without a body; reconciling the two would need the comment pass to know about footnotes.
pub fn strip_comments(text: Cow<'_, str>) -> Cow<'_, str> {
    replace(text, &COMMENT_REGEX, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_lines_are_removed() {
        let text = "First paragraph.\n\n[comment]: remember to fix this\nSecond paragraph.";
        assert_eq!(strip_comments(text.into()), "First paragraph.\n\nSecond paragraph.");
    }

    #[test]
    fn indented_comment_and_final_line() {
        let text = "Text.\n  [comment]: indented\n[comment]: last line";
        assert_eq!(strip_comments(text.into()), "Text.\n");
    }

    #[test]
    fn only_line_starts_count() {
        let text = "This mentions [comment]: in passing.";
        assert_eq!(strip_comments(text.into()), text);
    }

    #[test]
    fn other_labels_survive() {
        let text = "[link]: http://example.com\n[comments]: not a comment";
        assert_eq!(strip_comments(text.into()), text);
    }
}
