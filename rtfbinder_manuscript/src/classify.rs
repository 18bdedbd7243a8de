use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HEADER_MARKER: Regex = Regex::new(r"^\s*#+\s*").unwrap();
    static ref HORRULE: Regex = Regex::new(r"^\s*(?:(?:\*\s*){3,}|(?:-\s*){3,}|(?:_\s*){3,})$").unwrap();
    static ref BULLET_MARKER: Regex = Regex::new(r"^\s*[-*+]\s+").unwrap();
    static ref NUMBERED_MARKER: Regex = Regex::new(r"^\s*[0-9]+\.\s+").unwrap();
}

/// Is this paragraph a header, e.g. `## Interlude`?
pub fn is_header(paragraph: &str) -> bool {
    paragraph.trim_start().starts_with('#')
}

/// Is this paragraph a horizontal rule: three or more of the same one of `*`, `-` or `_`,
/// optionally spaced out?
pub fn is_horrule(paragraph: &str) -> bool {
    HORRULE.is_match(paragraph)
}

/// Is this paragraph an item in a bulleted list, e.g. `- milk`?
pub fn is_bulletlist_item(paragraph: &str) -> bool {
    BULLET_MARKER.is_match(paragraph)
}

/// Is this paragraph an item in a numbered list, e.g. `1. eggs`?
pub fn is_numberedlist_item(paragraph: &str) -> bool {
    NUMBERED_MARKER.is_match(paragraph)
}

/// A paragraph of scene text, classified by the markup at its start.
///
/// Text carried by each variant has had that markup removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paragraph<'a> {
    /// A header
    Header(&'a str),
    /// A horizontal rule, which carries no text
    Rule,
    /// An item in a bulleted list
    BulletItem(&'a str),
    /// An item in a numbered list; the number written in the source
    /// is discarded, since items are numbered as they are emitted
    NumberedItem(&'a str),
    /// Any other paragraph
    Plain(&'a str),
}

fn strip<'a>(marker: &Regex, paragraph: &'a str) -> &'a str {
    match marker.find(paragraph) {
        Some(m) => &paragraph[m.end()..],
        None => paragraph,
    }
}

impl<'a> Paragraph<'a> {
    /// Classify a paragraph; the first matching kind wins,
    /// in the order header, rule, bullet item, numbered item.
    pub fn classify(paragraph: &'a str) -> Self {
        if is_header(paragraph) {
            Paragraph::Header(strip(&HEADER_MARKER, paragraph))
        } else if is_horrule(paragraph) {
            Paragraph::Rule
        } else if is_bulletlist_item(paragraph) {
            Paragraph::BulletItem(strip(&BULLET_MARKER, paragraph))
        } else if is_numberedlist_item(paragraph) {
            Paragraph::NumberedItem(strip(&NUMBERED_MARKER, paragraph))
        } else {
            Paragraph::Plain(paragraph)
        }
    }
}
