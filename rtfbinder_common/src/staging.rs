use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

/// Get the path a document is assembled at before it is moved into place.
///
/// The staging file sits in the same directory as the destination,
/// named from a hex hash of the destination path.
pub trait StagingPath {
	/// the staging path for a document which will be published at this path
	fn staging_path(&self) -> PathBuf;
}

impl <T> StagingPath for T where T: AsRef<Path> {
	fn staging_path(&self) -> PathBuf {
		let target = self.as_ref();
		let mut hasher = DefaultHasher::new();
		target.hash(&mut hasher);
		let filename = format!(".{:x}.rtfbinder-staging", hasher.finish());
		match target.parent() {
			Some(dir) => dir.join(filename),
			None => PathBuf::from(filename)
		}
	}
}
