#![deny(dead_code)]
#![deny(unreachable_patterns)]
#![deny(unused_extern_crates)]
#![deny(unused_imports)]
#![deny(unused_qualifications)]
#![deny(clippy::all)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

//! A set of utilites used across the rtfbinder crates:
//!
//! - escaping plain text so that it can sit inside an rtf group
//! - telling image scenes apart from prose scenes by their extension
//! - naming the staging file a document is written to before it is published
//! - capturing the creation time recorded in a document's info block

use std::borrow::Cow;
use aho_corasick::AhoCorasick;
use lazy_static::lazy_static;
mod mimetypes;
pub use mimetypes::{FileKind, GuessFileKind};
mod staging;
pub use staging::StagingPath;

lazy_static!{
	static ref RTF_FINDER: AhoCorasick = AhoCorasick::new(&RTF_TARGET_CHARS);
}

static RTF_TARGET_CHARS: [&str; 3] = [
	"\\",
	"{",
	"}",
];

static RTF_REPLACEMENTS: [&str; 3] = [
	"\\\\",
	"\\{",
	"\\}",
];

/// escape `input` for rtf output.
///
/// Control characters of rtf (`\`, `{` and `}`) are escaped with a backslash,
/// and anything outside ascii is written as a `\uN?` control word,
/// using surrogate pairs where a character lies outside the basic multilingual plane.
/// Markdown punctuation is left alone.
///
/// ```
/// # use rtfbinder_common::escape_to_rtf;
/// assert_eq!(escape_to_rtf("{a}"), "\\{a\\}");
/// assert_eq!(escape_to_rtf("café"), "caf\\u233?");
/// ```
pub fn escape_to_rtf<'a, S: Into<Cow<'a, str>>>(input: S) -> Cow<'a, str> {
	let input = input.into();
	let escaped = if RTF_FINDER.is_match(&*input) {
		Cow::Owned(RTF_FINDER.replace_all(&*input, &RTF_REPLACEMENTS))
	} else {
		input
	};

	if escaped.is_ascii() {
		return escaped;
	}

	let mut out = String::with_capacity(escaped.len() + 16);
	let mut units = [0u16; 2];
	for c in escaped.chars() {
		if c.is_ascii() {
			out.push(c);
		} else {
			for unit in c.encode_utf16(&mut units).iter() {
				out.push_str("\\u");
				out.push_str(&(*unit as i16).to_string());
				out.push('?');
			}
		}
	}
	Cow::Owned(out)
}

/// The moment a document was created, as recorded in its `\creatim` group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
	/// the full year, e.g. 2019
	pub year: i32,
	/// month of the year, from 1
	pub month: u8,
	/// day of the month, from 1
	pub day: u8,
	/// hour of the day, 0-23
	pub hour: u8,
	/// minute of the hour
	pub minute: u8
}

impl Timestamp {
	/// the current local time, falling back to utc
	/// where the local offset cannot be determined
	pub fn now() -> Self {
		let now = time::OffsetDateTime::now_local()
			.unwrap_or_else(|_| time::OffsetDateTime::now_utc());
		Timestamp {
			year: now.year(),
			month: u8::from(now.month()),
			day: now.day(),
			hour: now.hour(),
			minute: now.minute()
		}
	}
}

/// round a word count up to the nearest hundred,
/// as is conventional for the count given on a manuscript's first page
/// ```
/// # use rtfbinder_common::round_up_to_hundred;
/// assert_eq!(round_up_to_hundred(101), 200);
/// ```
pub const fn round_up_to_hundred(n: usize) -> usize {
	match n % 100 {
		0 => n,
		r => n + (100 - r)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_rtf_escapes() {
		let escapes = [
			("plain text", "plain text"),
			("{Hello}", "\\{Hello\\}"),
			("back\\slash", "back\\\\slash"),
			("[link](http://x) **bold** # - 1.", "[link](http://x) **bold** # - 1."),
			("[^note]: body", "[^note]: body"),
			("naïve", "na\\u239?ve"),
			("“quoted”", "\\u8220?quoted\\u8221?"),
			("em—dash", "em\\u8212?dash"),
		];
		for (input, expected) in escapes.iter() {
			let out = escape_to_rtf(*input);
			assert_eq!(out, *expected);
		}
	}

	#[test]
	fn test_escape_outside_bmp() {
		// U+1F600 is written as a surrogate pair of signed 16-bit units
		assert_eq!(escape_to_rtf("😀"), "\\u-10179?\\u-8704?");
	}

	#[test]
	fn test_plain_ascii_is_borrowed() {
		let out = escape_to_rtf("nothing to see");
		assert!(matches!(out, Cow::Borrowed(_)));
	}

	#[test]
	fn test_round_up_to_hundred() {
		let expected = [
			(0, 0),
			(1, 100),
			(99, 100),
			(100, 100),
			(101, 200),
			(199, 200),
			(200, 200),
			(250, 300),
			(300, 300),
		];
		for (count, rounded) in expected.iter() {
			assert_eq!(round_up_to_hundred(*count), *rounded);
		}
	}

	#[test]
	fn test_timestamp_is_plausible() {
		let now = Timestamp::now();
		assert!(now.year >= 2020);
		assert!((1..=12).contains(&now.month));
		assert!((1..=31).contains(&now.day));
		assert!(now.hour < 24);
		assert!(now.minute < 60);
	}
}
