use rtfbinder_common::StagingPath;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, info, warn};

/// Write `text` to `path`, by way of a staging file beside it.
///
/// If anything fails, neither the staging file nor any earlier file at `path` survives.
pub(crate) fn publish(path: &Path, text: &str) -> io::Result<()> {
	let staging = path.staging_path();
	match stage_and_rename(&staging, path, text) {
		Ok(()) => {
			info!(path = %path.display(), "wrote file");
			Ok(())
		},
		Err(e) => {
			discard(&staging);
			discard(path);
			Err(e)
		}
	}
}

fn stage_and_rename(staging: &Path, path: &Path, text: &str) -> io::Result<()> {
	{
		let mut file = File::create(staging)?;
		file.write_all(text.as_bytes())?;
		file.sync_all()?;
	}
	fs::rename(staging, path)
}

/// Remove the file at `path` if there is one
pub(crate) fn discard(path: &Path) {
	match fs::remove_file(path) {
		Ok(()) => debug!(path = %path.display(), "removed incomplete output"),
		Err(e) if e.kind() == io::ErrorKind::NotFound => {},
		Err(e) => warn!(path = %path.display(), error = %e, "could not remove file")
	}
}
