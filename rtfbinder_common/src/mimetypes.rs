use std::path::Path;

/// The kind of file a scene reference points at
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub enum FileKind {
	/// A markdown or plain text scene
	Prose,
	/// A jpeg file
	Jpeg,
	/// A png file
	Png,
	/// A svg file
	Svg,
	/// A gif file
	Gif,
	/// A tiff file
	Tiff,
	/// A bitmap file
	Bmp,
	/// A pdf file; in a manuscript this is always a scanned page
	Pdf,
}

impl FileKind {

	/// Guess a file kind from an extension, ignoring case
	pub fn new_from_extension(ext: &str) -> Option<Self> {
		use FileKind::*;
		match ext.to_ascii_lowercase().as_str() {
			"jpg" | "jpeg" => Some(Jpeg),
			"png" => Some(Png),
			"svg" => Some(Svg),
			"gif" => Some(Gif),
			"tif" | "tiff" => Some(Tiff),
			"bmp" => Some(Bmp),
			"pdf" => Some(Pdf),
			"md" | "txt" | "markdown" => Some(Prose),
			_ => None
		}
	}

	/// Is this an image rather than text?
	pub fn is_image(&self) -> bool {
		!matches!(self, FileKind::Prose)
	}
}

/// Helper to guess the kind of path-like objects
pub trait GuessFileKind {
	/// guess the kind of file this is from its extension
	fn guess_kind(&self) -> Option<FileKind>;

	/// Is this likely to represent an image?
	fn is_image(&self) -> bool {
		self.guess_kind()
			.map(|k| k.is_image())
			.unwrap_or(false)
	}
}

impl <T> GuessFileKind for T where T: AsRef<Path> {
	fn guess_kind(&self) -> Option<FileKind> {
		match self.as_ref().extension() {
			Some(ext) => {
				match ext.to_str() {
					Some(ext) => FileKind::new_from_extension(ext),
					None => None
				}
			},
			None => None
		}
	}
}
