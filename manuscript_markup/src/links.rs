use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::collections::HashMap;
use tracing::debug;

use crate::replace;

static INLINE: &str = r"\[([^\]]*)\]\(([^)]*)\)";
static REFERENCE_PAIR: &str = r"\[([^\]]*)\]\[([^\]]*)\]";
// a trailing `:` marks a definition, a trailing `[` an unresolved reference pair
static BARE_REFERENCE: &str = r"\[([^\]\^][^\]]*)\]([:\[]?)";
static DEFINITION: &str = r"(?m)^[ \t]*\[([^\]\^][^\]]*)\]:[ \t]*(\S*)[^\n]*\n?";

lazy_static! {
    static ref INLINE_REGEX: Regex = Regex::new(INLINE).unwrap();
    static ref REFERENCE_PAIR_REGEX: Regex = Regex::new(REFERENCE_PAIR).unwrap();
    static ref BARE_REFERENCE_REGEX: Regex = Regex::new(BARE_REFERENCE).unwrap();
    static ref DEFINITION_REGEX: Regex = Regex::new(DEFINITION).unwrap();
}

/// Render a hyperlink field.
///
/// The output must not contain `*`, since emphasis is substituted after links;
/// hence no `\*` on the field instruction.
pub fn hyperlink(url: &str, text: &str) -> String {
    let mut out = String::with_capacity(url.len() + text.len() + 56);
    out.push_str("{\\field{\\fldinst{HYPERLINK \"");
    out.push_str(url);
    out.push_str("\"}}{\\fldrslt{\\ul ");
    out.push_str(text);
    out.push_str("}}}");
    out
}

/// Reference labels match regardless of case or internal spacing
fn normalize_label(label: &str) -> String {
    label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn definitions(text: &str) -> HashMap<String, String> {
    DEFINITION_REGEX
        .captures_iter(text)
        .map(|caps| {
            let target = caps[2].trim_start_matches('<').trim_end_matches('>');
            (normalize_label(&caps[1]), target.to_string())
        })
        .collect()
}

/// Resolve hyperlinks in a scene.
///
/// Three forms are understood, and resolved in this order:
///
/// 1. inline links, `[text](url)`
/// 2. reference links, `[text][label]` (or `[text][]`, using the text as label)
///    with a `[label]: url` definition somewhere in the scene
/// 3. bare references, `[label]`, displaying the label itself
///
/// References without a definition are left as they are.
/// Definition lines never appear in the output.
pub fn resolve_links(text: Cow<'_, str>) -> Cow<'_, str> {
    let definitions = definitions(&text);

    let text = replace(text, &INLINE_REGEX, |caps: &Captures| {
        hyperlink(&caps[2], &caps[1])
    });

    let text = replace(text, &REFERENCE_PAIR_REGEX, |caps: &Captures| {
        let shown = &caps[1];
        let label = match &caps[2] {
            "" => shown,
            label => label,
        };
        match definitions.get(&normalize_label(label)) {
            Some(url) => hyperlink(url, shown),
            None => {
                debug!(label, "unresolved link reference");
                caps[0].to_string()
            }
        }
    });

    let text = replace(text, &BARE_REFERENCE_REGEX, |caps: &Captures| {
        if !caps[2].is_empty() {
            return caps[0].to_string();
        }
        let label = &caps[1];
        match definitions.get(&normalize_label(label)) {
            Some(url) => hyperlink(url, label),
            None => caps[0].to_string(),
        }
    });

    replace(text, &DEFINITION_REGEX, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_links_resolve_directly() {
        let out = resolve_links("See [Example](http://x) now.".into());
        assert_eq!(out, format!("See {} now.", hyperlink("http://x", "Example")));
    }

    #[test]
    fn reference_pairs_use_definitions() {
        let text = "Go to [shown][ref] today.\n\n[ref]: http://y\n";
        let out = resolve_links(text.into());
        assert_eq!(out, format!("Go to {} today.\n\n", hyperlink("http://y", "shown")));
    }

    #[test]
    fn collapsed_reference() {
        let text = "Read [The Docs][] first.\n[the docs]: <http://docs>";
        let out = resolve_links(text.into());
        assert_eq!(out, format!("Read {} first.\n", hyperlink("http://docs", "The Docs")));
    }

    #[test]
    fn bare_reference_displays_label() {
        let text = "Ask [Wikipedia] about it.\n\n[wikipedia]: http://w \"title\"\n";
        let out = resolve_links(text.into());
        assert_eq!(out, format!("Ask {} about it.\n\n", hyperlink("http://w", "Wikipedia")));
    }

    #[test]
    fn unresolved_references_fall_through() {
        let text = "A [dangling][nowhere] and a [bare] one.";
        assert_eq!(resolve_links(text.into()), text);
    }

    #[test]
    fn unresolved_pair_is_not_split_into_bare_references() {
        let text = "A [dangling][nowhere] link.\n[dangling]: http://d\n";
        assert_eq!(resolve_links(text.into()), "A [dangling][nowhere] link.\n");

        let text = "A [dangling][nowhere] and [dangling] alone.\n[dangling]: http://d\n";
        assert_eq!(
            resolve_links(text.into()),
            format!("A [dangling][nowhere] and {} alone.\n", hyperlink("http://d", "dangling"))
        );
    }

    #[test]
    fn definitions_always_removed() {
        let text = "Nothing links here.\n[unused]: http://z\n[also]: http://q\n";
        let out = resolve_links(text.into());
        assert_eq!(out, "Nothing links here.\n");
        assert!(!out.contains("http://"));
    }

    #[test]
    fn footnote_syntax_is_not_a_link() {
        let text = "Note[^1] here.";
        assert_eq!(resolve_links(text.into()), text);
    }

    #[test]
    fn hyperlink_field_shape() {
        assert_eq!(
            hyperlink("http://x", "x"),
            "{\\field{\\fldinst{HYPERLINK \"http://x\"}}{\\fldrslt{\\ul x}}}"
        );
    }
}
