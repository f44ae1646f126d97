//! Whole-file reads and writes
//!
//! Every entry point loads the entire file, works on the buffer, and hands the finished buffer
//! back here. No file handle outlives a single call.

use crate::config::WriteOptions;
use crate::error::Result;

use std::fs::{File, FileTimes};
use std::io::Write;
use std::path::Path;
use std::time::SystemTime;

use tempfile::NamedTempFile;

pub(crate) fn read_file(path: &Path) -> Result<Vec<u8>> {
	let contents = std::fs::read(path)?;
	log::debug!("Read {} bytes from {}", contents.len(), path.display());

	Ok(contents)
}

/// Replace the contents of `path` with `contents`
///
/// The buffer must be complete before calling this, it is written in one go.
pub(crate) fn write_file(path: &Path, contents: &[u8], write_options: WriteOptions) -> Result<()> {
	let _timestamps = if write_options.preserve_timestamps {
		Some(PreservedTimestamps::capture(path)?)
	} else {
		None
	};

	if write_options.atomic_replace {
		replace_atomically(path, contents)?;
	} else {
		let mut file = File::options().write(true).truncate(true).open(path)?;
		file.write_all(contents)?;
		file.flush()?;
	}

	log::debug!("Wrote {} bytes to {}", contents.len(), path.display());
	Ok(())
}

// Symlinks are resolved first, the rename must land on the file they point to
fn replace_atomically(path: &Path, contents: &[u8]) -> Result<()> {
	let path = std::fs::canonicalize(path)?;

	let permissions = std::fs::metadata(&path)?.permissions();
	if permissions.readonly() {
		log::debug!("Refusing to replace read-only file {}", path.display());
		return Err(std::io::Error::new(
			std::io::ErrorKind::PermissionDenied,
			"the file is read-only",
		)
		.into());
	}

	let dir = match path.parent() {
		Some(parent) if !parent.as_os_str().is_empty() => parent,
		_ => Path::new("."),
	};

	let mut temp = NamedTempFile::new_in(dir)?;
	temp.write_all(contents)?;
	temp.as_file().sync_all()?;

	std::fs::set_permissions(temp.path(), permissions)?;

	temp.persist(&path)?;
	Ok(())
}

/// Restores a file's access and modification times when dropped
///
/// On Windows the creation time is restored as well, other platforms offer no way to set it.
///
/// Restoration is best effort. A failure is logged, the write it wraps has already happened.
pub(crate) struct PreservedTimestamps<'a> {
	path: &'a Path,
	accessed: SystemTime,
	modified: SystemTime,
	#[cfg(windows)]
	created: SystemTime,
}

impl<'a> PreservedTimestamps<'a> {
	pub(crate) fn capture(path: &'a Path) -> Result<Self> {
		let metadata = std::fs::metadata(path)?;

		Ok(Self {
			path,
			accessed: metadata.accessed()?,
			modified: metadata.modified()?,
			#[cfg(windows)]
			created: metadata.created()?,
		})
	}

	fn restore(&self) -> std::io::Result<()> {
		let times = FileTimes::new()
			.set_accessed(self.accessed)
			.set_modified(self.modified);

		#[cfg(windows)]
		let times = {
			use std::os::windows::fs::FileTimesExt;
			times.set_created(self.created)
		};

		File::options().write(true).open(self.path)?.set_times(times)
	}
}

impl Drop for PreservedTimestamps<'_> {
	fn drop(&mut self) {
		if let Err(e) = self.restore() {
			log::warn!(
				"Failed to restore timestamps of {}: {e}",
				self.path.display()
			);
		}
	}
}
