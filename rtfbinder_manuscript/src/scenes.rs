use rtfbinder_common::GuessFileKind;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A reference to a unit of manuscript prose, or to a scanned image,
/// stored as a separate file
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Scene(String);

impl Scene {
	/// a scene with this reference
	pub fn new<S: Into<String>>(reference: S) -> Self {
		Scene(reference.into())
	}

	/// the reference as written in the manuscript
	pub fn reference(&self) -> &str {
		&self.0
	}

	/// Is this scene an embedded image rather than text?
	pub fn is_image(&self) -> bool {
		self.0.is_image()
	}
}

impl fmt::Display for Scene {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for Scene {
	fn from(reference: &str) -> Self {
		Scene::new(reference)
	}
}

impl From<String> for Scene {
	fn from(reference: String) -> Self {
		Scene(reference)
	}
}

/// Errors in reading scene text
#[derive(Debug, Error)]
pub enum SceneError {
	/// A scene's file does not exist
	#[error("can't find scene file: {}", .0.display())]
	MissingSceneFile(PathBuf),
	/// A scene's file exists but could not be read
	#[error("error reading scene file {}: {source}", .path.display())]
	Io {
		/// the scene file
		path: PathBuf,
		/// the underlying error
		#[source]
		source: std::io::Error
	}
}

/// The extension given to scene references which lack one
pub const DEFAULT_SCENE_EXTENSION: &str = "md";

/// Resolves scene references, and the synopsis and quote,
/// to files within a manuscript's scene directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SceneLocator {
	scene_dir: PathBuf,
	synopsis: Option<PathBuf>,
	quote: Option<PathBuf>,
}

impl SceneLocator {
	/// locate scenes within `scene_dir`
	pub fn new<P: Into<PathBuf>>(scene_dir: P) -> Self {
		SceneLocator {
			scene_dir: scene_dir.into(),
			..Default::default()
		}
	}

	/// the directory scenes are resolved against
	pub fn scene_dir(&self) -> &Path {
		&self.scene_dir
	}

	/// Use a particular file for the synopsis, rather than `synopsis.md`;
	/// relative paths are taken relative to the scene directory
	pub fn set_synopsis<P: Into<PathBuf>>(&mut self, synopsis: P) -> &mut Self {
		self.synopsis = Some(synopsis.into());
		self
	}

	/// Use a particular file for the quote, rather than `quote.md`;
	/// relative paths are taken relative to the scene directory
	pub fn set_quote<P: Into<PathBuf>>(&mut self, quote: P) -> &mut Self {
		self.quote = Some(quote.into());
		self
	}

	/// The file holding a scene; references without an extension
	/// are taken to be markdown
	pub fn resolve_scene_path(&self, scene: &Scene) -> PathBuf {
		let reference = Path::new(scene.reference());
		if reference.extension().is_some() {
			self.scene_dir.join(reference)
		} else {
			self.scene_dir.join(reference.with_extension(DEFAULT_SCENE_EXTENSION))
		}
	}

	/// The file holding the synopsis
	pub fn resolve_synopsis_path(&self) -> PathBuf {
		match self.synopsis {
			Some(ref p) => self.scene_dir.join(p),
			None => self.scene_dir.join("synopsis.md")
		}
	}

	/// The file holding the quote
	pub fn resolve_quote_path(&self) -> PathBuf {
		match self.quote {
			Some(ref p) => self.scene_dir.join(p),
			None => self.scene_dir.join("quote.md")
		}
	}

	/// Read the raw text of the file at `path`
	pub fn read(&self, path: &Path) -> Result<String, SceneError> {
		if !path.is_file() {
			return Err(SceneError::MissingSceneFile(path.to_path_buf()));
		}
		std::fs::read_to_string(path)
			.map_err(|source| SceneError::Io {
				path: path.to_path_buf(),
				source
			})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn scene_paths() {
		let locator = SceneLocator::new("project/scenes");
		assert_eq!(
			locator.resolve_scene_path(&Scene::new("opening")),
			Path::new("project/scenes/opening.md")
		);
		assert_eq!(
			locator.resolve_scene_path(&Scene::new("opening.txt")),
			Path::new("project/scenes/opening.txt")
		);
		assert_eq!(
			locator.resolve_scene_path(&Scene::new("scans/map.pdf")),
			Path::new("project/scenes/scans/map.pdf")
		);
	}

	#[test]
	fn synopsis_and_quote_paths() {
		let mut locator = SceneLocator::new("scenes");
		assert_eq!(locator.resolve_synopsis_path(), Path::new("scenes/synopsis.md"));
		assert_eq!(locator.resolve_quote_path(), Path::new("scenes/quote.md"));

		locator.set_synopsis("front/blurb.md")
			.set_quote("/abs/epigraph.md");
		assert_eq!(locator.resolve_synopsis_path(), Path::new("scenes/front/blurb.md"));
		assert_eq!(locator.resolve_quote_path(), Path::new("/abs/epigraph.md"));
	}

	#[test]
	fn image_scenes() {
		assert!(Scene::new("scan.pdf").is_image());
		assert!(Scene::new("map.PNG").is_image());
		assert!(!Scene::new("opening").is_image());
		assert!(!Scene::new("opening.md").is_image());
	}

	#[test]
	fn reading_scenes() {
		let dir = tempfile::tempdir().unwrap();
		std::fs::write(dir.path().join("present.md"), "Some text.").unwrap();
		let locator = SceneLocator::new(dir.path());

		let present = locator.resolve_scene_path(&Scene::new("present"));
		assert_eq!(locator.read(&present).unwrap(), "Some text.");

		let missing = locator.resolve_scene_path(&Scene::new("absent"));
		match locator.read(&missing) {
			Err(SceneError::MissingSceneFile(p)) => assert_eq!(p, missing),
			other => panic!("expected a missing scene, got {:?}", other)
		}
	}
}
