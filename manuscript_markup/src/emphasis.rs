use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::borrow::Cow;

use crate::replace;

static BOLD: &str = r"\*\*([^*]+)\*\*";
// an opening delimiter followed by a space is a bullet or a rule, not emphasis
static ITALIC: &str = r"\*([^*\s][^*]*)\*";

lazy_static! {
    static ref BOLD_REGEX: Regex = Regex::new(BOLD).unwrap();
    static ref ITALIC_REGEX: Regex = Regex::new(ITALIC).unwrap();
}

macro_rules! replace_emphasis {
    ($open:expr, $close:expr, $fnname:ident) => {
        fn $fnname(caps: &Captures) -> String {
            let inner = &caps[1];
            let mut out = String::with_capacity(inner.len() + 8);
            out.push('{');
            out.push_str($open);
            out.push(' ');
            out.push_str(inner);
            out.push_str($close);
            out.push('}');
            out
        }
    };
}

replace_emphasis!("\\b", "\\b0", replace_bold);
replace_emphasis!("\\i", "\\i0", replace_italic);
replace_emphasis!("\\ul", "\\ul0", replace_underline);

/// Replace `**strong**` spans with bold, or underline if `underline` is set.
///
/// This must run before `sub_italics`, which would otherwise
/// consume the inner delimiters of a strong span.
pub fn sub_bold(text: Cow<'_, str>, underline: bool) -> Cow<'_, str> {
    if underline {
        replace(text, &BOLD_REGEX, replace_underline)
    } else {
        replace(text, &BOLD_REGEX, replace_bold)
    }
}

/// Replace `*emphasised*` spans with italics, or underline if `underline` is set.
pub fn sub_italics(text: Cow<'_, str>, underline: bool) -> Cow<'_, str> {
    if underline {
        replace(text, &ITALIC_REGEX, replace_underline)
    } else {
        replace(text, &ITALIC_REGEX, replace_italic)
    }
}
