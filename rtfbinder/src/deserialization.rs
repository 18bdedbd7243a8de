use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::convert::TryFrom;
use rtfbinder_manuscript::{Author, Chapter, Manuscript, ManuscriptBuilder, SceneLocator, TagFilter};
use crate::{DocumentStyle, Margins, Project, ProjectError, RenderReport};

const DEFAULT_SCENE_DIR: &str = "scenes";
const DEFAULT_OUTPUT_FILE: &str = "manuscript.rtf";

/// Write an rtf document from a json representation of a `DeserializableProject`.
///
/// Relative paths in the project are taken relative to `base_dir`.
pub fn create_rtf_from_json<P: AsRef<Path>>(src: &str, base_dir: P) -> Result<RenderReport, ProjectError> {
	let project = DeserializableProject::new(src)?
		.into_project(base_dir)?;
	let report = project.write()?;
	Ok(report)
}

/// Load a project from a json file;
/// relative paths in the project are taken relative to the directory containing it.
pub fn load_project<P: AsRef<Path>>(path: P) -> Result<Project, ProjectError> {
	let path = path.as_ref();
	let src = DeserializableProject::from_file(path)?;
	src.into_project(project_dir(path))
}

/// The directory relative paths in the project file at `path` are resolved against
pub fn project_dir(path: &Path) -> &Path {
	match path.parent() {
		Some(p) if !p.as_os_str().is_empty() => p,
		_ => Path::new(".")
	}
}

/// Deserializable representation of a chapter
#[derive(Debug, Deserialize)]
pub struct DeserializableChapter {
	/// The title of the chapter
	pub title: String,
	/// Tags by which the chapter can be included or excluded
	#[serde(default)]
	pub tags: Vec<String>,
	/// References to the scene files of the chapter, in order
	#[serde(default)]
	pub scenes: Vec<String>
}

impl From<DeserializableChapter> for Chapter {
	fn from(src: DeserializableChapter) -> Self {
		let mut chapter = Chapter::new(src.title);
		for tag in src.tags.into_iter() {
			chapter.tag(tag);
		}
		for scene in src.scenes.into_iter() {
			chapter.add_scene(scene);
		}
		chapter
	}
}

/// Deserializable representation of an author and their contact details.
///
/// OpenManuscript's camel-cased keys are accepted as well as snake-cased ones.
#[derive(Debug, Deserialize, Default)]
pub struct DeserializableAuthor {
	/// The author's name as it should appear on the title page
	#[serde(default)]
	pub name: String,
	/// The surname for running headers; if not given,
	/// the last word of the name is used
	#[serde(default)]
	pub surname: Option<String>,
	/// street address
	#[serde(default, alias="streetAddress")]
	pub street_address: String,
	/// town or city
	#[serde(default, alias="addressLocality")]
	pub address_locality: String,
	/// state, county or region
	#[serde(default, alias="addressRegion")]
	pub address_region: String,
	/// postal code
	#[serde(default, alias="postalCode")]
	pub postal_code: String,
	/// email address
	#[serde(default)]
	pub email: String,
	/// telephone number
	#[serde(default)]
	pub phone: String
}

impl From<DeserializableAuthor> for Author {
	fn from(src: DeserializableAuthor) -> Self {
		let mut author = Author::new(src.name);
		if let Some(surname) = src.surname {
			author.surname = surname;
		}
		author.street_address = src.street_address;
		author.address_locality = src.address_locality;
		author.address_region = src.address_region;
		author.postal_code = src.postal_code;
		author.email = src.email;
		author.phone = src.phone;
		author
	}
}

/// A simplified representation of a manuscript for easy deserializing.
///
/// The only required value is `title`.
#[derive(Debug, Deserialize)]
pub struct DeserializableManuscript {
	/// The title of the manuscript
	pub title: String,
	/// A shorter title for running headers
	#[serde(default, alias="runningtitle")]
	pub running_title: Option<String>,
	/// The author
	#[serde(default)]
	pub author: DeserializableAuthor,
	/// The chapters, in order
	#[serde(default)]
	pub chapters: Vec<DeserializableChapter>
}

impl From<DeserializableManuscript> for Manuscript {
	fn from(src: DeserializableManuscript) -> Self {
		let mut builder = ManuscriptBuilder::new(src.title);
		if let Some(running_title) = src.running_title {
			builder.running_title(running_title);
		}
		builder.author(src.author.into());
		for chapter in src.chapters.into_iter() {
			builder.add_chapter(chapter.into());
		}
		builder.process()
	}
}

/// Deserializable margins, in twips
#[derive(Debug, Deserialize, Clone, Copy)]
pub struct DeserializableMargins {
	/// top margin
	pub top: u32,
	/// bottom margin
	pub bottom: u32,
	/// left margin
	pub left: u32,
	/// right margin
	pub right: u32
}

impl From<DeserializableMargins> for Margins {
	fn from(src: DeserializableMargins) -> Self {
		Margins {
			top: src.top,
			bottom: src.bottom,
			left: src.left,
			right: src.right
		}
	}
}

/// Settings for producing a document.
///
/// Keys follow OpenManuscript's settings where it has one for the purpose,
/// so that an existing settings object can be used unchanged.
#[derive(Debug, Deserialize, Default)]
pub struct Settings {
	/// the typeface, e.g. `Courier`
	#[serde(default)]
	pub font: Option<String>,
	/// the font size in points
	#[serde(default, alias="fontsize")]
	pub font_size: Option<u32>,
	/// page margins in twips
	#[serde(default)]
	pub margins: Option<DeserializableMargins>,
	/// only include chapters with one of these tags; empty, or `all`, includes everything
	#[serde(default)]
	pub tags: Vec<String>,
	/// whether to keep footnotes; they are kept unless this is false
	#[serde(default)]
	pub footnotes: Option<bool>,
	/// flag to underline rather than embolden and italicise
	#[serde(default)]
	pub underline: bool,
	/// flag to include the synopsis
	#[serde(default)]
	pub synopsis: bool,
	/// flag to include the quote
	#[serde(default)]
	pub quote: bool,
	/// a particular file for the synopsis, relative to the scene directory
	#[serde(default)]
	pub synopsis_file: Option<PathBuf>,
	/// a particular file for the quote, relative to the scene directory
	#[serde(default)]
	pub quote_file: Option<PathBuf>,
	/// flag to separate scenes with their filenames rather than `###`
	#[serde(default, alias="filescenesep")]
	pub filename_scene_separators: bool,
	/// whether to separate the first scene of a chapter too;
	/// if not given, this follows `filename_scene_separators`
	#[serde(default)]
	pub separate_first_scene: Option<bool>,
	/// where to write the document
	#[serde(default, alias="outputfile")]
	pub output_file: Option<PathBuf>,
	/// the directory holding scene files
	#[serde(default, alias="scenedir")]
	pub scenes: Option<PathBuf>,
	/// flag to refuse to write a document with missing scenes
	#[serde(default)]
	pub strict: bool
}

impl From<&Settings> for DocumentStyle {
	fn from(src: &Settings) -> Self {
		let mut style = DocumentStyle::default();

		macro_rules! iftruethen {
			($flag:expr, $targetfunc:ident) => {
				if $flag {
					style.$targetfunc();
				}
			};
		}

		if let Some(ref font) = src.font {
			style.set_font_family(font.as_str());
		}
		if let Some(points) = src.font_size {
			style.set_font_size(points);
		}
		if let Some(margins) = src.margins {
			style.set_margins(margins.into());
		}
		style.set_tags(TagFilter::new(src.tags.iter()));

		iftruethen!(src.underline, underline);
		iftruethen!(src.footnotes == Some(false), remove_footnotes);
		iftruethen!(src.synopsis, include_synopsis);
		iftruethen!(src.quote, include_quote);
		iftruethen!(src.filename_scene_separators, use_filename_scene_separators);
		iftruethen!(src.separate_first_scene.unwrap_or(src.filename_scene_separators), separate_first_scene);
		iftruethen!(src.strict, strict);
		style
	}
}

impl Settings {
	/// Locate scenes within the configured directory, or `scenes` beside the project
	pub fn scene_locator(&self, base_dir: &Path) -> SceneLocator {
		let dir = match self.scenes {
			Some(ref dir) => base_dir.join(dir),
			None => base_dir.join(DEFAULT_SCENE_DIR)
		};
		let mut locator = SceneLocator::new(dir);
		if let Some(ref synopsis) = self.synopsis_file {
			locator.set_synopsis(synopsis);
		}
		if let Some(ref quote) = self.quote_file {
			locator.set_quote(quote);
		}
		locator
	}

	/// Where the document will be written
	pub fn output_path(&self, base_dir: &Path) -> PathBuf {
		match self.output_file {
			Some(ref p) => base_dir.join(p),
			None => base_dir.join(DEFAULT_OUTPUT_FILE)
		}
	}
}

/// A project: a manuscript together with the settings for producing it;
/// note that these are flattened when deserialized, so that keys for
/// both are at the same level in the same json object.
///
/// ```
/// # use rtfbinder::deserialization::DeserializableProject;
/// let json = r#"{"title": "Hello World", "chapters": [{"title": "One", "scenes": ["opening"]}], "filescenesep": true}"#;
/// let project: DeserializableProject = serde_json::from_str(json).unwrap();
/// assert!(project.settings.filename_scene_separators);
/// ```
#[derive(Debug, Deserialize)]
pub struct DeserializableProject {
	/// the manuscript
	#[serde(flatten)]
	pub manuscript: DeserializableManuscript,
	/// how to produce it
	#[serde(default, flatten)]
	pub settings: Settings
}

impl DeserializableProject {

	/// Parse a project from json
	pub fn new(src: &str) -> Result<Self, serde_json::Error> {
		let project: DeserializableProject = serde_json::from_str(src)?;
		Ok(project)
	}

	/// Read and parse a project file
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ProjectError> {
		let path = path.as_ref();
		let src = std::fs::read_to_string(path)
			.map_err(|source| ProjectError::Read {
				path: path.to_path_buf(),
				source
			})?;
		let project = DeserializableProject::new(&src)?;
		Ok(project)
	}

	/// Resolve this into a project ready to write, with relative paths taken relative to `base_dir`
	pub fn into_project<P: AsRef<Path>>(self, base_dir: P) -> Result<Project, ProjectError> {
		let base_dir = base_dir.as_ref();
		Project::try_from((self, base_dir))
	}
}

impl TryFrom<(DeserializableProject, &Path)> for Project {
	type Error = ProjectError;

	fn try_from((src, base_dir): (DeserializableProject, &Path)) -> Result<Self, Self::Error> {
		let scenes = src.settings.scene_locator(base_dir);
		if !scenes.scene_dir().is_dir() {
			return Err(ProjectError::MissingSceneDir(scenes.scene_dir().to_path_buf()));
		}
		let style = DocumentStyle::from(&src.settings);
		let output = src.settings.output_path(base_dir);
		let manuscript = Manuscript::from(src.manuscript);
		Ok(Project {
			manuscript,
			style,
			scenes,
			output
		})
	}
}
