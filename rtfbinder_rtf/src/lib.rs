//! This crate provides support, with various options, for writing a `Manuscript` out as an rtf document
//! in standard manuscript format: a title page with the author's contact details and an approximate word count,
//! running headers, and each chapter beginning a third of the way down a new page.
//!
//! Scene text is read through a `SceneLocator`, translated with `manuscript_markup`,
//! and emitted paragraph by paragraph. The whole document is assembled in memory;
//! once every scene has been counted, the word count placeholder on the first page is filled in.
//!
//! ```no_run
//! use rtfbinder_manuscript::{Author, Chapter, ManuscriptBuilder, SceneLocator};
//! use rtfbinder_rtf::{DocumentStyle, RtfRenderer};
//!
//! let mut chapter = Chapter::new("Arrival");
//! chapter.add_scene("station");
//! let manuscript = ManuscriptBuilder::new("A Journey")
//!     .author(Author::new("A.N. Author"))
//!     .add_chapter(chapter)
//!     .process();
//!
//! let mut style = DocumentStyle::default();
//! style.include_synopsis();
//! let scenes = SceneLocator::new("scenes");
//! let report = manuscript.write_rtf("journey.rtf", &style, &scenes).unwrap();
//! println!("{} words", report.word_count);
//! ```
#![deny(dead_code)]
#![deny(unreachable_patterns)]
#![deny(unused_extern_crates)]
#![deny(unused_imports)]
#![deny(unused_qualifications)]
#![deny(clippy::all)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

use manuscript_markup::{count_words, paragraphs, transform_scene, MarkupOptions};
use rtfbinder_common::{escape_to_rtf, round_up_to_hundred, Timestamp};
use rtfbinder_manuscript::{Author, Chapter, Manuscript, Paragraph, Scene, SceneLocator};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};
mod output;
mod style;
pub use style::{DocumentStyle, Margins, Spacing};

/// Stands in for the word count until the whole document has been written
pub const WORD_COUNT_SENTINEL: &str = "TMPPROX";

const GENERATOR: &str = "rtfbinder";
const GENERATOR_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Errors in producing an rtf document
#[derive(Debug, Error)]
pub enum RenderError {
	/// The output file could not be written
	#[error("error writing rtf: {0}")]
	Io(#[from] std::io::Error),
	/// Scenes were missing while rendering in strict mode
	#[error("not writing rtf file; {} scene file(s) missing", .missing.len())]
	IncompleteDocument {
		/// every scene file which could not be read
		missing: Vec<PathBuf>
	}
}

/// What happened in producing a document
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RenderReport {
	/// words in every scene written, counted before translation
	pub word_count: usize,
	/// chapters which passed the tag filter
	pub chapters_written: usize,
	/// scene files which could not be read, and so were left out
	pub missing_scenes: Vec<PathBuf>
}

impl RenderReport {
	/// the word count as shown on the first page
	pub fn rounded_word_count(&self) -> usize {
		round_up_to_hundred(self.word_count)
	}

	/// Was every scene found?
	pub fn is_complete(&self) -> bool {
		self.missing_scenes.is_empty()
	}
}

/// An rtf document held in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
	/// the rtf source
	pub text: String,
	/// how it was produced
	pub report: RenderReport
}

/// State carried from paragraph to paragraph through a whole document
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunState {
	current_list_number: usize,
	word_count: usize
}

impl RunState {
	/// Note that `paragraph` is about to be emitted.
	///
	/// Numbered items count up from 1; anything else resets the count.
	pub fn update_state(&mut self, paragraph: &Paragraph<'_>) {
		match paragraph {
			Paragraph::NumberedItem(_) => self.current_list_number += 1,
			_ => self.current_list_number = 0
		}
	}

	/// Note that something other than a scene paragraph, such as a heading
	/// or a scene separator, is about to be emitted
	pub fn end_list(&mut self) {
		self.current_list_number = 0;
	}

	/// Add the words of a scene to the running total
	pub fn add_words(&mut self, words: usize) {
		self.word_count += words;
	}

	/// the number of the most recent numbered item, or 0 outside a list
	pub fn current_list_number(&self) -> usize {
		self.current_list_number
	}

	/// the words counted so far
	pub fn word_count(&self) -> usize {
		self.word_count
	}
}

/// simple commands to write standard rtf items,
/// such as closing a paragraph or breaking a page
trait RtfOps {
	fn end_paragraph(&mut self);
	fn blank_paragraph(&mut self);
	fn page_break(&mut self);
}

impl RtfOps for String {
	fn end_paragraph(&mut self) {
		self.push_str("\\par\n");
	}

	fn blank_paragraph(&mut self) {
		self.push_str("\\pard {} \\par\n");
	}

	fn page_break(&mut self) {
		self.push_str("\\pard \\pagebb \\par\n");
	}
}

/// `\fmodern` is the rtf family for fixed-pitch faces
fn font_class(family: &str) -> &'static str {
	let family = family.to_lowercase();
	if family.contains("courier") || family.contains("mono") {
		"\\fmodern"
	} else {
		"\\froman"
	}
}

#[derive(Debug)]
struct RtfWriter<'a> {
	style: &'a DocumentStyle,
	scenes: &'a SceneLocator,
	markup: MarkupOptions,
	output: String,
	state: RunState,
	report: RenderReport
}

impl <'a> RtfWriter<'a> {

	fn new(style: &'a DocumentStyle, scenes: &'a SceneLocator) -> Self {
		RtfWriter {
			style,
			scenes,
			markup: style.markup_options(),
			output: String::new(),
			state: RunState::default(),
			report: RenderReport::default()
		}
	}

	fn write_preamble(&mut self) {
		let family = self.style.font_family();
		let margins = self.style.margins();
		self.output.push_str(&format!(
			"{{\\rtf1\\ansi\\deff0 {{\\fonttbl {{\\f0{} {};}}{{\\f1\\froman Times;}}}}\n",
			font_class(family),
			escape_to_rtf(family)
		));
		self.output.push_str(&format!(
			"\\deflang1033 \\plain \\fs{} \\widowctrl \\hyphauto \\ftnbj\n",
			self.style.half_points()
		));
		self.output.push_str(&format!(
			"\\titlepg \\margt{} \\margb{} \\margl{} \\margr{} \\pgnrestart \\pgnstarts0\n\n",
			margins.top, margins.bottom, margins.left, margins.right
		));
	}

	fn write_docinfo(&mut self, manuscript: &Manuscript, created: Timestamp) {
		self.output.push_str("{\\info\n");
		self.output.push_str(&format!("{{\\title {}}}\n", escape_to_rtf(manuscript.metadata.title.as_str())));
		self.output.push_str(&format!("{{\\author {}}}\n", escape_to_rtf(manuscript.author.name.as_str())));
		self.output.push_str(&format!(
			"{{\\creatim\\yr{}\\mo{}\\dy{}\\hr{}\\min{}}}\n",
			created.year, created.month, created.day, created.hour, created.minute
		));
		self.output.push_str(&format!(
			"{{\\doccomm Created from OpenManuscript using {} v{}}}\n",
			GENERATOR, GENERATOR_VERSION
		));
		self.output.push_str("}\n");
	}

	fn write_headers(&mut self, manuscript: &Manuscript) {
		self.output.blank_paragraph();
		let running_title = manuscript.metadata.get_running_title().to_uppercase();
		self.output.push_str(&format!(
			"{{\\header \\pard \\qr \\fs{} {} / {} / \\chpgn \\par}}\n",
			self.style.half_points(),
			escape_to_rtf(manuscript.author.surname.as_str()),
			escape_to_rtf(running_title)
		));
	}

	fn write_word_count_placeholder(&mut self) {
		self.output.push_str(&format!(
			"\n\\pard \\f0 \\fs{} \\qr\n{}\n\\par\n\n",
			self.style.half_points(),
			WORD_COUNT_SENTINEL
		));
	}

	fn write_author(&mut self, author: &Author) {
		let locality = author.locality_line();
		let lines = [
			author.name.as_str(),
			author.street_address.as_str(),
			locality.as_str(),
			author.email.as_str(),
			author.phone.as_str()
		];
		let block = lines.iter()
			.filter(|line| !line.is_empty())
			.map(|line| escape_to_rtf(*line))
			.collect::<Vec<_>>()
			.join(" \\line\n");

		self.output.push_str(&format!("\n\\pard \\f0 \\fs{} \\ql\n", self.style.half_points()));
		self.output.push_str(&block);
		self.output.push_str("\n\\par\n\n");
	}

	fn write_title(&mut self, manuscript: &Manuscript) {
		let fs = self.style.half_points();
		let spacing = self.style.spacing();
		self.output.push_str(&format!(
			"\n\\pard \\f0 \\fs{fs} \\sl{sl} \\slmult1 \\sb{skip} \\qc {title} \\par\n",
			fs=fs,
			sl=spacing.paragraph,
			skip=spacing.title_skip,
			title=escape_to_rtf(manuscript.metadata.title.as_str())
		));
		self.output.push_str(&format!(
			"\\pard \\f0 \\fs{fs} \\sl{sl} \\slmult1 \\qc by \\line\n{name}\n",
			fs=fs,
			sl=spacing.paragraph,
			name=escape_to_rtf(manuscript.author.name.as_str())
		));
		self.output.end_paragraph();
	}

	fn write_synopsis(&mut self) {
		self.state.end_list();
		let spacing = self.style.spacing();
		self.output.push_str(&format!(
			"\n\\pard \\pagebb \\f0 \\fs{} \\sl{} \\slmult1 \\qc \\sb{} \\sa{} {{\\b Synopsis}}\n",
			self.style.half_points(),
			spacing.paragraph,
			spacing.synopsis_before,
			spacing.synopsis_after
		));
		self.output.end_paragraph();
		let path = self.scenes.resolve_synopsis_path();
		self.write_scene_file(&path);
	}

	fn write_quote(&mut self) {
		self.state.end_list();
		let spacing = self.style.spacing();
		self.output.push_str(&format!(
			"\n\\pard \\pagebb \\f0 \\fs{} \\sl{} \\slmult1 \\qc \\sb{} \\sa{}\n",
			self.style.half_points(),
			spacing.paragraph,
			spacing.quote_before,
			spacing.quote_after
		));
		self.output.end_paragraph();
		let path = self.scenes.resolve_quote_path();
		self.write_scene_file(&path);
	}

	fn write_chapters(&mut self, manuscript: &Manuscript) {
		let style = self.style;
		for (number, chapter) in manuscript.included_chapters(style.tags()) {
			self.write_chapter(number, chapter);
		}
	}

	fn write_chapter(&mut self, number: usize, chapter: &Chapter) {
		self.write_chapter_heading(number, chapter);
		for (i, scene) in chapter.scenes.iter().enumerate() {
			if i > 0 || self.style.separates_first_scene() {
				self.write_scene_separator(scene);
			}
			if scene.is_image() {
				// TODO: embed scans with an INCLUDEPICTURE field once image scenes are resolved against real files
				debug!(scene = %scene, "skipping image scene");
				continue;
			}
			let path = self.scenes.resolve_scene_path(scene);
			self.write_scene_file(&path);
		}
		self.report.chapters_written += 1;
	}

	fn write_chapter_heading(&mut self, number: usize, chapter: &Chapter) {
		self.state.end_list();
		self.output.page_break();
		for _ in 0..self.style.spacing().chapter_spacer_paragraphs {
			self.output.blank_paragraph();
		}
		let fs = self.style.half_points();
		let spacing = self.style.spacing();
		let label = format!("CHAPTER {}", number);
		self.output.push_str(&format!(
			"\n\\pard \\f0 \\fs{fs} \\sl{sl} \\slmult1 \\qc \\sa{sa} {{\\b {label}}}{{\\tc {label}}} \\par\n",
			fs=fs,
			sl=spacing.paragraph,
			sa=spacing.chapter_after,
			label=label
		));
		self.output.push_str(&format!(
			"\\pard \\f0 \\fs{fs} \\sl{sl} \\slmult1 \\qc \\sa{sa} {{\\b {title}}}\n",
			fs=fs,
			sl=spacing.paragraph,
			sa=spacing.chapter_subtitle_after,
			title=escape_to_rtf(chapter.title.as_str())
		));
		self.output.end_paragraph();
	}

	fn write_scene_separator(&mut self, scene: &Scene) {
		self.state.end_list();
		let sl = self.style.spacing().paragraph;
		if self.style.uses_filename_scene_separators() {
			self.output.push_str(&format!(
				"\n\\pard \\sl{} \\slmult1 \\qc \\sa720 ({})\n\\par\n",
				sl,
				escape_to_rtf(scene.reference())
			));
		} else {
			self.output.push_str(&format!("\n\\pard \\sl{} \\slmult1 \\qc \\sa720 ### \\par\n", sl));
		}
	}

	fn write_scene_file(&mut self, path: &Path) {
		match self.scenes.read(path) {
			Ok(raw) => self.write_scene_text(&raw),
			Err(e) => {
				warn!("{}", e);
				self.report.missing_scenes.push(path.to_path_buf());
			}
		}
	}

	fn write_scene_text(&mut self, raw: &str) {
		self.state.add_words(count_words(raw));
		let text = transform_scene(raw, &self.markup);
		for paragraph in paragraphs(&text) {
			self.write_paragraph(Paragraph::classify(&paragraph));
		}
	}

	fn write_paragraph(&mut self, paragraph: Paragraph<'_>) {
		self.state.update_state(&paragraph);
		let fs = self.style.half_points();
		let sl = self.style.spacing().paragraph;
		let indent = self.style.spacing().parindent;

		let block = match paragraph {
			Paragraph::Header(text) => format!(
				"\\pard \\fi0 \\sl{} \\slmult1 \\f0 \\fs{} {{\\b {}\\b0}}",
				sl, fs, text
			),
			Paragraph::Rule => format!(
				"\\pard \\qc \\fi0 \\sl{} \\slmult1 \\f0 \\fs{} ###",
				sl, fs
			),
			Paragraph::BulletItem(text) => format!(
				"\\pard \\fi-{indent} \\sl{sl} \\slmult1 \\f0 \\fs{fs} \\li{indent} \\bullet \\tab {text}",
				indent=indent, sl=sl, fs=fs, text=text
			),
			Paragraph::NumberedItem(text) => format!(
				"\\pard \\fi-{indent} \\sl{sl} \\slmult1 \\f0 \\fs{fs} \\li{indent} {n}. \\tab {text}",
				indent=indent, sl=sl, fs=fs, n=self.state.current_list_number(), text=text
			),
			Paragraph::Plain(text) => format!(
				"\\pard \\fi{} \\sl{} \\slmult1 \\f0 \\fs{} {}",
				indent, sl, fs, text
			)
		};
		self.output.push_str(&block);
		self.output.end_paragraph();
	}

	fn write_postamble(&mut self) {
		self.output.push_str("\n}\n");
	}

	fn write(&mut self, manuscript: &Manuscript, created: Timestamp) {
		self.write_preamble();
		self.write_docinfo(manuscript, created);
		self.write_headers(manuscript);
		self.write_word_count_placeholder();
		self.write_author(&manuscript.author);
		self.write_title(manuscript);
		if self.style.includes_synopsis() {
			self.write_synopsis();
		}
		if self.style.includes_quote() {
			self.write_quote();
		}
		self.write_chapters(manuscript);
		self.write_postamble();
	}

	/// Fill in the word count and hand back the document
	fn finish(mut self) -> RenderedDocument {
		self.report.word_count = self.state.word_count();
		let words = format!("approx. {} words", self.report.rounded_word_count());
		let text = self.output.replacen(WORD_COUNT_SENTINEL, &words, 1);
		RenderedDocument {
			text,
			report: self.report
		}
	}
}

/// Support for rendering to an rtf document
pub trait RtfRenderer {
	/// Render to rtf, recording `created` as the creation time
	fn render_to_rtf_at(&self, style: &DocumentStyle, scenes: &SceneLocator, created: Timestamp) -> Result<RenderedDocument, RenderError>;

	/// Render to rtf, created now
	fn render_to_rtf(&self, style: &DocumentStyle, scenes: &SceneLocator) -> Result<RenderedDocument, RenderError> {
		self.render_to_rtf_at(style, scenes, Timestamp::now())
	}

	/// Render and write the document to `path`.
	///
	/// On any failure the file at `path` is removed rather than left incomplete.
	fn write_rtf<P: AsRef<Path>>(&self, path: P, style: &DocumentStyle, scenes: &SceneLocator) -> Result<RenderReport, RenderError> {
		let path = path.as_ref();
		match self.render_to_rtf(style, scenes) {
			Ok(document) => {
				output::publish(path, &document.text)?;
				Ok(document.report)
			},
			Err(e) => {
				output::discard(path);
				Err(e)
			}
		}
	}
}

impl RtfRenderer for Manuscript {
	fn render_to_rtf_at(&self, style: &DocumentStyle, scenes: &SceneLocator, created: Timestamp) -> Result<RenderedDocument, RenderError> {
		let mut writer = RtfWriter::new(style, scenes);
		writer.write(self, created);
		let document = writer.finish();
		if style.is_strict() && !document.report.is_complete() {
			return Err(RenderError::IncompleteDocument {
				missing: document.report.missing_scenes
			});
		}
		Ok(document)
	}
}
