//! This crate makes the building of a `Manuscript` easy;
//! this struct can then be written out as an rtf document.
//!
//! A manuscript is a title, an author, and an ordered list of chapters;
//! each chapter has a title, a set of tags, and an ordered list of scenes.
//! Scenes are references to files, resolved through a `SceneLocator`,
//! so a manuscript can be built and filtered without reading any of its text.
//!
//! ```
//! use rtfbinder_manuscript::{Author, Chapter, ManuscriptBuilder, TagFilter};
//!
//! let mut opening = Chapter::new("Arrival");
//! opening.tag("draft")
//!     .add_scene("station")
//!     .add_scene("hotel");
//!
//! let mut ending = Chapter::new("Departure");
//! ending.tag("final")
//!     .add_scene("platform");
//!
//! let manuscript = ManuscriptBuilder::new("A Journey")
//!     .running_title("Journey")
//!     .author(Author::new("A.N. Author"))
//!     .add_chapter(opening)
//!     .add_chapter(ending)
//!     .process();
//!
//! let filter = TagFilter::new(vec!["final"]);
//! let included = manuscript.included_chapters(&filter)
//!     .map(|(n, chapter)| (n, chapter.title.as_str()))
//!     .collect::<Vec<_>>();
//! assert_eq!(included, vec![(1, "Departure")]);
//! ```
//!
//! # Scene markup
//!
//! The text of a scene is lightly marked up; paragraphs are separated by blank lines,
//! and this crate provides the predicates which decide what kind of paragraph each one is:
//!
//! - headers: `# Header`
//! - horizontal rules: `***`, `---`, `___`
//! - bulleted list items: `- item`
//! - numbered list items: `1. item`
//!
//! Inline markup (emphasis, footnotes, links and comments) is the business of `manuscript_markup`.

#![deny(dead_code)]
#![deny(unreachable_patterns)]
#![deny(unused_extern_crates)]
#![deny(unused_imports)]
#![deny(unused_qualifications)]
#![deny(clippy::all)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]
use std::collections::BTreeSet;
use tracing::debug;
mod classify;
mod metadata;
mod scenes;
pub use classify::{is_bulletlist_item, is_header, is_horrule, is_numberedlist_item, Paragraph};
pub use metadata::{Author, Metadata};
pub use scenes::{Scene, SceneError, SceneLocator, DEFAULT_SCENE_EXTENSION};

/// The tag which, in a filter, lets through every chapter
pub const ALL_TAGS: &str = "all";

/// A chapter: a titled, tagged, ordered group of scenes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chapter {
    /// The title of this chapter, shown under its number
    pub title: String,
    /// Tags used to decide whether this chapter is included
    pub tags: BTreeSet<String>,
    /// The scenes of this chapter, in order
    pub scenes: Vec<Scene>,
}

impl Chapter {
    /// Begin a chapter with `title`
    pub fn new<S: Into<String>>(title: S) -> Self {
        Chapter {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Add a tag to this chapter
    pub fn tag<S: Into<String>>(&mut self, tag: S) -> &mut Self {
        let _ = self.tags.insert(tag.into());
        self
    }

    /// Add a scene to the end of this chapter
    pub fn add_scene<S: Into<Scene>>(&mut self, scene: S) -> &mut Self {
        self.scenes.push(scene.into());
        self
    }
}

/// Selects which chapters are included in a document by their tags.
///
/// An empty filter, or one containing `all`, includes every chapter;
/// otherwise a chapter is included when it shares at least one tag with the filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFilter(BTreeSet<String>);

impl TagFilter {
    /// a filter admitting chapters with any of `tags`
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TagFilter(tags.into_iter().map(Into::into).collect())
    }

    /// a filter admitting every chapter
    pub fn all() -> Self {
        TagFilter::default()
    }

    /// Does this filter admit every chapter?
    pub fn is_all(&self) -> bool {
        self.0.is_empty() || self.0.contains(ALL_TAGS)
    }

    /// Should `chapter` be included?
    pub fn passes(&self, chapter: &Chapter) -> bool {
        self.is_all() || !self.0.is_disjoint(&chapter.tags)
    }
}

/// A manuscript, ready to be written out
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manuscript {
    /// Title and running title
    pub metadata: Metadata,
    /// The author
    pub author: Author,
    /// Every chapter, whether or not it will be included
    pub chapters: Vec<Chapter>,
}

impl Manuscript {
    /// The chapters admitted by `filter`, in order, each with its chapter number.
    ///
    /// Numbers count only included chapters and start at 1,
    /// so excluding a chapter never leaves a gap.
    pub fn included_chapters<'a>(
        &'a self,
        filter: &'a TagFilter,
    ) -> impl Iterator<Item = (usize, &'a Chapter)> + 'a {
        self.chapters
            .iter()
            .filter(move |chapter| {
                let passes = filter.passes(chapter);
                if !passes {
                    debug!(chapter = %chapter.title, "chapter excluded by tag filter");
                }
                passes
            })
            .enumerate()
            .map(|(i, chapter)| (i + 1, chapter))
    }
}

/// Builds a `Manuscript`
#[derive(Debug, Clone, Default)]
pub struct ManuscriptBuilder {
    metadata: Metadata,
    author: Author,
    chapters: Vec<Chapter>,
}

impl ManuscriptBuilder {
    /// Begin building a new manuscript with `title`
    pub fn new<S: Into<String>>(title: S) -> Self {
        ManuscriptBuilder {
            metadata: Metadata::new(title),
            ..Default::default()
        }
    }

    /// Set a shorter title for the running header
    pub fn running_title<S: Into<String>>(&mut self, running_title: S) -> &mut Self {
        self.metadata.running_title(running_title);
        self
    }

    /// Set the author
    pub fn author(&mut self, author: Author) -> &mut Self {
        self.author = author;
        self
    }

    /// Add a chapter to the end of the manuscript
    pub fn add_chapter(&mut self, chapter: Chapter) -> &mut Self {
        self.chapters.push(chapter);
        self
    }

    /// Finish building
    pub fn process(&mut self) -> Manuscript {
        Manuscript {
            metadata: std::mem::take(&mut self.metadata),
            author: std::mem::take(&mut self.author),
            chapters: std::mem::take(&mut self.chapters),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chapter(title: &str, tags: &[&str]) -> Chapter {
        let mut chapter = Chapter::new(title);
        for tag in tags {
            chapter.tag(*tag);
        }
        chapter.add_scene(format!("{}-scene", title));
        chapter
    }

    fn manuscript() -> Manuscript {
        ManuscriptBuilder::new("Title")
            .add_chapter(chapter("one", &["draft"]))
            .add_chapter(chapter("two", &["final"]))
            .add_chapter(chapter("three", &["draft", "final"]))
            .add_chapter(chapter("four", &[]))
            .process()
    }

    fn numbered(manuscript: &Manuscript, filter: &TagFilter) -> Vec<(usize, String)> {
        manuscript
            .included_chapters(filter)
            .map(|(n, c)| (n, c.title.clone()))
            .collect()
    }

    #[test]
    fn tag_filter() {
        let draft = TagFilter::new(vec!["draft"]);
        assert!(draft.passes(&chapter("a", &["draft"])));
        assert!(draft.passes(&chapter("a", &["final", "draft"])));
        assert!(!draft.passes(&chapter("a", &["final"])));
        assert!(!draft.passes(&chapter("a", &[])));

        assert!(TagFilter::all().passes(&chapter("a", &[])));
        assert!(TagFilter::new(vec!["all"]).passes(&chapter("a", &["anything"])));
    }

    #[test]
    fn excluded_chapters_take_no_number() {
        let m = manuscript();
        assert_eq!(
            numbered(&m, &TagFilter::new(vec!["final"])),
            vec![(1, "two".to_string()), (2, "three".to_string())]
        );
        assert_eq!(
            numbered(&m, &TagFilter::new(vec!["draft"])),
            vec![(1, "one".to_string()), (2, "three".to_string())]
        );
        assert_eq!(numbered(&m, &TagFilter::all()).len(), 4);
        assert!(numbered(&m, &TagFilter::new(vec!["nothing"])).is_empty());
    }

    #[test]
    fn builder() {
        let m = ManuscriptBuilder::new("A Long Title")
            .running_title("Long")
            .author(Author::new("Jane Roe"))
            .process();
        assert_eq!(m.metadata.title, "A Long Title");
        assert_eq!(m.metadata.get_running_title(), "Long");
        assert_eq!(m.author.surname, "Roe");
        assert!(m.chapters.is_empty());
    }
}
