//! This crate translates the markdown dialect in which OpenManuscript
//! scenes are written into rtf fragments.
//!
//! A scene is passed through a fixed sequence of text-to-text transforms:
//!
//!  1. rtf escaping of the raw text
//!  2. footnotes, which are either turned into rtf notes or removed
//!  3. comments (`[comment]: ...` lines), which are removed
//!  4. hyperlinks, in inline, reference and bare-reference forms
//!  5. `**strong**` spans
//!  6. `*emphasised*` spans
//!
//! The order matters: definitions of footnotes look like link definitions,
//! and strong delimiters look like two emphasis delimiters,
//! so each pass relies on the ones before it having run.
//!
//! What remains is still divided into paragraphs by blank lines;
//! `paragraphs` splits it up for a writer to classify and emit.
//!
//! # Example
//!
//! ```
//! use manuscript_markup::{transform_scene, MarkupOptions};
//!
//! let options = MarkupOptions::default();
//! let rtf = transform_scene("A *fine* day[^1].\n\n[^1]: It rained.", &options);
//! assert_eq!(
//!     rtf,
//!     "A {\\i fine\\i0} day{\\super\\chftn}{\\footnote\\pard\\plain\\f0\\fs24\\chftn It rained.}.\n\n"
//! );
//! ```
//!
#![deny(unreachable_patterns)]
#![deny(unused_extern_crates)]
#![deny(unused_imports)]
#![deny(unused_qualifications)]
#![deny(clippy::all)]
#![deny(missing_docs)]

use lazy_static::lazy_static;
use regex::{Regex, Replacer};
use std::borrow::Cow;
mod comments;
mod emphasis;
mod footnotes;
mod links;
pub use comments::strip_comments;
pub use emphasis::{sub_bold, sub_italics};
pub use footnotes::resolve_footnotes;
pub use links::{hyperlink, resolve_links};

lazy_static! {
    static ref PARAGRAPH_BREAK: Regex = Regex::new(r"\n[ \t\r]*\n").unwrap();
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Options for translating a scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkupOptions {
    /// turn footnotes into rtf notes; if false they are removed
    pub keep_footnotes: bool,
    /// render both strong and emphasised spans as underlined,
    /// as is traditional in a typed manuscript
    pub underline: bool,
    /// font size for footnote text, in rtf half-points
    pub font_size: u32,
}

impl Default for MarkupOptions {
    fn default() -> Self {
        MarkupOptions {
            keep_footnotes: true,
            underline: false,
            font_size: 24,
        }
    }
}

/// Apply `regex` to `text`, keeping the original allocation (or borrow)
/// when nothing matched
pub(crate) fn replace<'a, R: Replacer>(text: Cow<'a, str>, regex: &Regex, rep: R) -> Cow<'a, str> {
    let replaced = match regex.replace_all(&text, rep) {
        Cow::Borrowed(_) => None,
        Cow::Owned(o) => Some(o),
    };
    match replaced {
        Some(o) => Cow::Owned(o),
        None => text,
    }
}

/// Run the full sequence of transforms over the raw text of a scene
pub fn transform_scene(raw: &str, options: &MarkupOptions) -> String {
    let text = rtfbinder_common::escape_to_rtf(raw);
    let text = resolve_footnotes(text, options);
    let text = strip_comments(text);
    let text = resolve_links(text);
    let text = sub_bold(text, options.underline);
    let text = sub_italics(text, options.underline);
    text.into_owned()
}

/// The number of whitespace-separated words in `raw`.
///
/// This should be given a scene's text before it is transformed;
/// rtf markup would otherwise inflate the count and removed syntax deflate it.
pub fn count_words(raw: &str) -> usize {
    raw.split_whitespace().count()
}

/// Split transformed text into paragraphs at blank lines,
/// collapsing each paragraph's internal whitespace into single spaces
/// and skipping any which are empty.
pub fn paragraphs(text: &str) -> impl Iterator<Item = String> + '_ {
    PARAGRAPH_BREAK
        .split(text.trim())
        .map(|p| WHITESPACE_RUN.replace_all(p.trim(), " ").into_owned())
        .filter(|p| !p.is_empty())
}
