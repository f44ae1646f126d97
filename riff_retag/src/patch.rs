//! In-place identifier substitution
//!
//! A compatibility fallback for files that a generic tag library has already saved with its own
//! identifiers (`DIRC`, `IPRT`). Rather than rebuilding the file, every occurrence of a source
//! identifier from [`TRANSLATIONS`] is overwritten with its target.
//!
//! # Known limitation
//!
//! This does **not** parse the chunk structure. Any four bytes that happen to spell `DIRC` or
//! `IPRT`, including inside audio sample data, will be rewritten too. Prefer
//! [`rewrite_with_metadata`](crate::rewrite_with_metadata), which only ever touches the INFO list.
//! Matches found outside of any `LIST` chunk are logged as warnings.

use crate::config::WriteOptions;
use crate::error::Result;
use crate::riff::info::translate::TRANSLATIONS;
use crate::riff::{Chunks, verify_riff};
use crate::util::io::{read_file, write_file};

use std::ops::Range;
use std::path::Path;

/// Replace every source identifier in `data` with its target, returning the number replaced
///
/// See the [module documentation](self) for the caveats of this approach.
///
/// # Examples
///
/// ```rust
/// let mut data = *b"....DIRC\x05\x00\x00\x00Album";
///
/// assert_eq!(riff_retag::patch::patch_bytes(&mut data), 1);
/// assert_eq!(&data[4..8], b"IPRD");
/// ```
pub fn patch_bytes(data: &mut [u8]) -> usize {
	let list_ranges = list_ranges(data);
	let mut replaced = 0;

	for (source, target) in TRANSLATIONS {
		let mut pos = 0;
		while pos + 4 <= data.len() {
			if data[pos..pos + 4] != source {
				pos += 1;
				continue;
			}

			if !list_ranges.iter().any(|range| range.contains(&pos)) {
				log::warn!(
					"Replacing {:?} at offset {pos}, outside of any LIST chunk",
					String::from_utf8_lossy(&source)
				);
			}

			data[pos..pos + 4].copy_from_slice(&target);
			replaced += 1;
			pos += 1;
		}
	}

	replaced
}

// Payload ranges of every `LIST` chunk that can be walked to, only used for diagnostics
fn list_ranges(data: &[u8]) -> Vec<Range<usize>> {
	let Ok(chunks) = Chunks::new(data) else {
		return Vec::new();
	};

	chunks
		.map_while(std::result::Result::ok)
		.filter(|chunk| &chunk.fourcc == b"LIST")
		.map(|chunk| chunk.payload_range())
		.collect()
}

/// Convert the identifiers of the file at `path` to the target convention
///
/// See [`patch_file`]
///
/// # Errors
///
/// See [`patch_file`]
///
/// # Examples
///
/// ```rust,no_run
/// # fn main() -> riff_retag::error::Result<()> {
/// riff_retag::convert_identifiers_to_target_convention("foo.wav")?;
/// # Ok(()) }
/// ```
pub fn convert_identifiers_to_target_convention(path: impl AsRef<Path>) -> Result<()> {
	patch_file(path, WriteOptions::default()).map(|_| ())
}

/// Convert the identifiers of the file at `path` to the target convention, returning the number replaced
///
/// The file is only written if something was replaced. Running this twice is the same as running
/// it once.
///
/// # Errors
///
/// * The file can't be read or written
/// * The file is not a RIFF/WAVE file
pub fn patch_file(path: impl AsRef<Path>, write_options: WriteOptions) -> Result<usize> {
	let path = path.as_ref();

	let mut data = read_file(path)?;
	verify_riff(&data)?;

	let replaced = patch_bytes(&mut data);
	if replaced == 0 {
		log::debug!("No identifiers to convert in {}", path.display());
		return Ok(0);
	}

	log::debug!("Converted {replaced} identifiers in {}", path.display());
	write_file(path, &data, write_options)?;

	Ok(replaced)
}
