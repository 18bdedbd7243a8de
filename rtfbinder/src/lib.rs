//! Create rtf manuscripts from OpenManuscript projects.
//!
//! A manuscript here is what a writer sends to an agent or editor, not a typeset book:
//! double-spaced Courier, the author's contact details and an approximate word count on the first page,
//! the author's surname and a short title in the running header of every page,
//! and each chapter starting a third of the way down a fresh page.
//! Rtf is the lowest common denominator for this; every word processor will open it.
//!
//! There is a binary which takes the path of a json project file and writes the rtf document it describes;
//! `rtfbinder project.json` is enough in most cases, and `rtfbinder --help` lists the flags which override
//! the project's settings. But you can also use this as a library.
//!
//! # Basic Example
//!
//! ```no_run
//! use rtfbinder::{create_rtf, Author, Chapter, DocumentStyle, ManuscriptBuilder, SceneLocator};
//!
//! let mut chapter = Chapter::new("Early Life");
//! chapter.add_scene("born")
//!     .add_scene("school");
//!
//! let manuscript = ManuscriptBuilder::new("A Book")
//!     .author(Author::new("A.N. Author"))
//!     .add_chapter(chapter)
//!     .process();
//!
//! let scenes = SceneLocator::new("scenes");
//! let report = create_rtf(&manuscript, "a_book.rtf", &DocumentStyle::default(), &scenes)
//!     .expect("Error producing rtf");
//! println!("approx. {} words", report.rounded_word_count());
//! ```
//!
//! # Scenes
//!
//! A manuscript doesn't contain its own text; each chapter lists scenes,
//! and each scene is a separate file in the project's scene directory,
//! written in a small dialect of markdown:
//!
//! - paragraphs are separated by blank lines
//! - `# headers`, `- bulleted` and `1. numbered` list items, and `***` rules
//! - `**strong**` and `*emphasised*` text
//! - footnotes, either `[^inline notes]` or `[^label]` with a `[^label]: definition`
//! - links: `[inline](http://example.com)`, `[reference][label]` or bare `[label]`, with a `[label]: http://example.com` definition
//! - `[comment]: lines` which are left out altogether
//!
//! Scenes which are images (a `.pdf` scan, say) are skipped for now.
//!
//! # Deserialization
//!
//! `create_rtf_from_json` and `load_project` support producing a document from a json project file
//! rather than controlling the process through manually building objects.
//! OpenManuscript's own key names (`runningtitle`, `filescenesep`, `streetAddress` and so on) are understood.
//!
//! For full details, see the `deserialization` module.
//!
//! # Logging
//!
//! Missing scenes and other diagnostics are reported through `tracing`;
//! the binary prints them to stderr, at a level controlled by `RUST_LOG`.
//!
use std::path::{Path, PathBuf};
use thiserror::Error;
pub use rtfbinder_manuscript::{Author, Chapter, Manuscript, ManuscriptBuilder, Scene, SceneLocator, TagFilter};
pub use rtfbinder_rtf::{DocumentStyle, Margins, RenderError, RenderReport, RenderedDocument, RtfRenderer, Spacing};
pub mod deserialization;
pub use deserialization::{create_rtf_from_json, load_project};

/// Errors in producing a document from a project file
#[derive(Debug, Error)]
pub enum ProjectError {
    /// The project file could not be read
    #[error("error reading project file {}: {source}", .path.display())]
    Read {
        /// the project file
        path: PathBuf,
        /// the underlying error
        #[source]
        source: std::io::Error,
    },
    /// The project file is not a valid project
    #[error("error parsing project: {0}")]
    Parse(#[from] serde_json::Error),
    /// The project's scene directory does not exist
    #[error("scene directory does not exist: {}", .0.display())]
    MissingSceneDir(PathBuf),
    /// The document could not be written
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// A manuscript with everything needed to write it out
#[derive(Debug, Clone)]
pub struct Project {
    /// the manuscript
    pub manuscript: Manuscript,
    /// how to lay it out
    pub style: DocumentStyle,
    /// where to find its scenes
    pub scenes: SceneLocator,
    /// where to write it
    pub output: PathBuf,
}

impl Project {
    /// Write the document to `self.output`
    pub fn write(&self) -> Result<RenderReport, RenderError> {
        create_rtf(&self.manuscript, &self.output, &self.style, &self.scenes)
    }
}

/// Create an rtf document at `path` from a `Manuscript` with the given style
pub fn create_rtf<P: AsRef<Path>>(
    manuscript: &Manuscript,
    path: P,
    style: &DocumentStyle,
    scenes: &SceneLocator,
) -> Result<RenderReport, RenderError> {
    manuscript.write_rtf(path, style, scenes)
}

/// Create an rtf document at `path` from a `Manuscript` with default options
pub fn create_rtf_default<P: AsRef<Path>>(
    manuscript: &Manuscript,
    path: P,
    scenes: &SceneLocator,
) -> Result<RenderReport, RenderError> {
    manuscript.write_rtf(path, &DocumentStyle::default(), scenes)
}
