use manuscript_markup::MarkupOptions;
use rtfbinder_manuscript::TagFilter;

const DEFAULT_FONT_FAMILY: &str = "Courier";
const DEFAULT_FONT_SIZE: u32 = 12;
const DEFAULT_MARGIN: u32 = 1440;

/// Page margins, in twips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Margins {
	/// top margin
	pub top: u32,
	/// bottom margin
	pub bottom: u32,
	/// left margin
	pub left: u32,
	/// right margin
	pub right: u32,
}

impl Margins {
	/// The same margin on every side
	pub const fn uniform(twips: u32) -> Self {
		Margins {
			top: twips,
			bottom: twips,
			left: twips,
			right: twips
		}
	}
}

impl Default for Margins {
	fn default() -> Self {
		Margins::uniform(DEFAULT_MARGIN)
	}
}

/// Line spacing, indents and the space around headings, in twips
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spacing {
	/// line spacing of body text; 480 is double-spaced at 12pt
	pub paragraph: u32,
	/// first-line indent of a paragraph, and the hanging indent of list items
	pub parindent: u32,
	/// space after the `CHAPTER N` line
	pub chapter_after: u32,
	/// space after a chapter's title
	pub chapter_subtitle_after: u32,
	/// space above the title on the first page
	pub title_skip: u32,
	/// space above the synopsis heading
	pub synopsis_before: u32,
	/// space below the synopsis heading
	pub synopsis_after: u32,
	/// space above the quote
	pub quote_before: u32,
	/// space below the quote heading
	pub quote_after: u32,
	/// blank paragraphs which drop a chapter heading down its first page
	pub chapter_spacer_paragraphs: usize,
}

impl Default for Spacing {
	fn default() -> Self {
		Spacing {
			paragraph: 480,
			parindent: 720,
			chapter_after: 360,
			chapter_subtitle_after: 720,
			title_skip: 3600,
			synopsis_before: 720,
			synopsis_after: 720,
			quote_before: 1440,
			quote_after: 720,
			chapter_spacer_paragraphs: 16,
		}
	}
}

/// Options for laying out a manuscript as an rtf document.
///
/// Build one of these at the start of a run and pass it by reference
/// to everything that writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentStyle {
	font_family: String,
	font_size: u32,
	margins: Margins,
	spacing: Spacing,
	underline: bool,
	footnotes: bool,
	filename_scene_separators: bool,
	separate_first_scene: bool,
	synopsis: bool,
	quote: bool,
	strict: bool,
	tags: TagFilter,
}

impl Default for DocumentStyle {
	fn default() -> Self {
		DocumentStyle {
			font_family: DEFAULT_FONT_FAMILY.to_string(),
			font_size: DEFAULT_FONT_SIZE,
			margins: Margins::default(),
			spacing: Spacing::default(),
			underline: false,
			footnotes: true,
			filename_scene_separators: false,
			separate_first_scene: false,
			synopsis: false,
			quote: false,
			strict: false,
			tags: TagFilter::all(),
		}
	}
}

impl DocumentStyle {

	/// Set the typeface of the whole document
	pub fn set_font_family<S: Into<String>>(&mut self, family: S) -> &mut Self {
		self.font_family = family.into();
		self
	}

	/// Set the font size, in points
	pub fn set_font_size(&mut self, points: u32) -> &mut Self {
		self.font_size = points;
		self
	}

	/// Set the page margins
	pub fn set_margins(&mut self, margins: Margins) -> &mut Self {
		self.margins = margins;
		self
	}

	/// Set line spacing and the space around headings
	pub fn set_spacing(&mut self, spacing: Spacing) -> &mut Self {
		self.spacing = spacing;
		self
	}

	/// Render both strong and emphasised text as underlined
	pub fn underline(&mut self) -> &mut Self {
		self.underline = true;
		self
	}

	/// Drop footnotes entirely rather than rendering them as rtf notes
	pub fn remove_footnotes(&mut self) -> &mut Self {
		self.footnotes = false;
		self
	}

	/// Separate scenes with their filename, e.g. `(opening)`,
	/// rather than with `###`
	pub fn use_filename_scene_separators(&mut self) -> &mut Self {
		self.filename_scene_separators = true;
		self
	}

	/// Put a separator before the first scene of a chapter too
	pub fn separate_first_scene(&mut self) -> &mut Self {
		self.separate_first_scene = true;
		self
	}

	/// Include the synopsis after the title
	pub fn include_synopsis(&mut self) -> &mut Self {
		self.synopsis = true;
		self
	}

	/// Include the quote after the title and any synopsis
	pub fn include_quote(&mut self) -> &mut Self {
		self.quote = true;
		self
	}

	/// Refuse to publish a document in which any scene is missing
	pub fn strict(&mut self) -> &mut Self {
		self.strict = true;
		self
	}

	/// Only include chapters which pass `tags`
	pub fn set_tags(&mut self, tags: TagFilter) -> &mut Self {
		self.tags = tags;
		self
	}

	/// the typeface of the document
	pub fn font_family(&self) -> &str {
		&self.font_family
	}

	/// the font size in rtf half-points, as used by `\fs`
	pub fn half_points(&self) -> u32 {
		self.font_size * 2
	}

	/// the page margins
	pub fn margins(&self) -> &Margins {
		&self.margins
	}

	/// the spacing
	pub fn spacing(&self) -> &Spacing {
		&self.spacing
	}

	/// the chapter filter
	pub fn tags(&self) -> &TagFilter {
		&self.tags
	}

	pub(crate) fn uses_filename_scene_separators(&self) -> bool {
		self.filename_scene_separators
	}

	pub(crate) fn separates_first_scene(&self) -> bool {
		self.separate_first_scene
	}

	pub(crate) fn includes_synopsis(&self) -> bool {
		self.synopsis
	}

	pub(crate) fn includes_quote(&self) -> bool {
		self.quote
	}

	pub(crate) fn is_strict(&self) -> bool {
		self.strict
	}

	/// the options for translating scene text in this style
	pub fn markup_options(&self) -> MarkupOptions {
		MarkupOptions {
			keep_footnotes: self.footnotes,
			underline: self.underline,
			font_size: self.half_points(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_are_a_standard_manuscript() {
		let style = DocumentStyle::default();
		assert_eq!(style.font_family(), "Courier");
		assert_eq!(style.half_points(), 24);
		assert_eq!(style.margins(), &Margins::uniform(1440));
		assert_eq!(style.spacing().paragraph, 480);
		assert_eq!(style.spacing().chapter_spacer_paragraphs, 16);
		assert!(!style.uses_filename_scene_separators());
		assert!(!style.separates_first_scene());
		assert!(!style.is_strict());
		assert!(style.tags().is_all());

		let options = style.markup_options();
		assert!(options.keep_footnotes);
		assert!(!options.underline);
		assert_eq!(options.font_size, 24);
	}

	#[test]
	fn builder() {
		let mut style = DocumentStyle::default();
		style.set_font_family("Times New Roman")
			.set_font_size(11)
			.underline()
			.remove_footnotes()
			.use_filename_scene_separators()
			.include_synopsis();
		assert_eq!(style.font_family(), "Times New Roman");
		assert_eq!(style.half_points(), 22);
		assert!(style.uses_filename_scene_separators());
		assert!(style.includes_synopsis());
		assert!(!style.includes_quote());

		let options = style.markup_options();
		assert!(!options.keep_footnotes);
		assert!(options.underline);
		assert_eq!(options.font_size, 22);
	}
}
