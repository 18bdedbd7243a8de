use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::collections::HashMap;

use crate::{replace, MarkupOptions};

static DEFINITION: &str = r"\[\^([^\]]+)\]:(.*)";
static MARKER: &str = r"\[\^([^\]]+)\]";

lazy_static! {
    static ref DEFINITION_REGEX: Regex = Regex::new(DEFINITION).unwrap();
    static ref MARKER_REGEX: Regex = Regex::new(MARKER).unwrap();
}

fn render_note(body: &str, options: &MarkupOptions) -> String {
    let mut out = String::with_capacity(body.len() + 64);
    out.push_str("{\\super\\chftn}{\\footnote\\pard\\plain\\f0\\fs");
    out.push_str(&options.font_size.to_string());
    out.push_str("\\chftn ");
    out.push_str(body);
    out.push('}');
    out
}

/// Resolve footnotes in a scene.
///
/// A marker looks like `[^label]`; a definition is the same bracket form
/// followed immediately by a colon, running to the end of its line.
///
/// If footnotes are kept, each marker becomes an rtf footnote whose body is
/// the matching definition, or the label itself where no definition exists;
/// definitions are then deleted whether or not anything referred to them.
/// Otherwise markers and definitions are all deleted.
pub fn resolve_footnotes<'a>(text: Cow<'a, str>, options: &MarkupOptions) -> Cow<'a, str> {
    if options.keep_footnotes {
        keep_footnotes(text, options)
    } else {
        strip_footnotes(text)
    }
}

fn keep_footnotes<'a>(text: Cow<'a, str>, options: &MarkupOptions) -> Cow<'a, str> {
    let definitions = DEFINITION_REGEX
        .captures_iter(&text)
        .map(|caps| (caps[1].to_string(), caps[2].trim().to_string()))
        .collect::<HashMap<_, _>>();

    let text = replace(text, &DEFINITION_REGEX, "");
    replace(text, &MARKER_REGEX, |caps: &Captures| {
        let label = &caps[1];
        match definitions.get(label) {
            Some(body) => render_note(body, options),
            None => render_note(label, options),
        }
    })
}

fn strip_footnotes(mut text: Cow<'_, str>) -> Cow<'_, str> {
    // deleting one marker can bring the pieces of another together,
    // so keep going until nothing is left to delete
    while DEFINITION_REGEX.is_match(&text) || MARKER_REGEX.is_match(&text) {
        text = replace(text, &DEFINITION_REGEX, "");
        text = replace(text, &MARKER_REGEX, "");
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keeping() -> MarkupOptions {
        MarkupOptions {
            keep_footnotes: true,
            ..Default::default()
        }
    }

    fn removing() -> MarkupOptions {
        MarkupOptions {
            keep_footnotes: false,
            ..Default::default()
        }
    }

    #[test]
    fn paired_and_inline_notes() {
        let text = "Body[^a] more[^b]\n\n[^a]: defined text";
        let out = resolve_footnotes(text.into(), &keeping());
        let expected = concat!(
            "Body{\\super\\chftn}{\\footnote\\pard\\plain\\f0\\fs24\\chftn defined text}",
            " more{\\super\\chftn}{\\footnote\\pard\\plain\\f0\\fs24\\chftn b}",
            "\n\n"
        );
        assert_eq!(out, expected);
        assert!(!out.contains("[^"));
    }

    #[test]
    fn repeated_label_uses_definition_everywhere() {
        let text = "One[^n] two[^n]\n[^n]: shared";
        let out = resolve_footnotes(text.into(), &keeping());
        assert_eq!(out.matches("\\chftn shared}").count(), 2);
    }

    #[test]
    fn unused_definitions_are_deleted() {
        let text = "Nothing refers to this.\n\n[^orphan]: never used";
        let out = resolve_footnotes(text.into(), &keeping());
        assert_eq!(out, "Nothing refers to this.\n\n");
    }

    #[test]
    fn note_font_size_follows_options() {
        let options = MarkupOptions {
            keep_footnotes: true,
            font_size: 20,
            ..Default::default()
        };
        let out = resolve_footnotes("x[^y]".into(), &options);
        assert!(out.contains("\\fs20\\chftn y}"));
    }

    #[test]
    fn marker_at_end_of_text() {
        let out = resolve_footnotes("The end[^fin]".into(), &keeping());
        assert!(out.ends_with("\\chftn fin}"));
    }

    #[test]
    fn removal_leaves_no_trace() {
        let inputs = [
            "Body[^a] more[^b]\n\n[^a]: defined text",
            "Nested [^[^a]] markers",
            "Rejoined [[^a]^b] markers",
            "[^x]: only a definition",
            "[^^]",
        ];
        for input in inputs.iter() {
            let out = resolve_footnotes((*input).into(), &removing());
            assert!(!MARKER_REGEX.is_match(&out), "marker left in {:?}", out);
            assert!(!DEFINITION_REGEX.is_match(&out), "definition left in {:?}", out);
        }

        let out = resolve_footnotes("Body[^a] more[^b]\n\n[^a]: defined text".into(), &removing());
        assert_eq!(out, "Body more\n\n");
    }

    #[test]
    fn untouched_text_is_borrowed() {
        let out = resolve_footnotes("No notes here.".into(), &keeping());
        assert!(matches!(out, Cow::Borrowed(_)));
        let out = resolve_footnotes("No notes here.".into(), &removing());
        assert!(matches!(out, Cow::Borrowed(_)));
    }
}
