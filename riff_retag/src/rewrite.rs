//! Full reconstruction of a RIFF/WAVE file with a new INFO list
//!
//! Every chunk is copied verbatim, except `LIST`/`INFO` chunks which are dropped. A single,
//! freshly encoded INFO list takes the place of the first one dropped, or is appended if the
//! file had none. The RIFF size is then recomputed from the output.

use crate::config::WriteOptions;
use crate::error::Result;
use crate::macros::err;
use crate::metadata::{ABSENT_NUMBER, MetadataRecord};
use crate::riff::info::{InfoList, WRITE_ORDER};
use crate::riff::{Chunks, RIFF_CHUNK_HEADER_SIZE, RIFF_FILE_HEADER_SIZE};
use crate::util::io::{read_file, write_file};

use std::path::Path;

use byteorder::{ByteOrder, LittleEndian};

/// Rebuild `original` with an INFO list holding `metadata`
///
/// The INFO list contains `INAM, IPRD, IART, ICMT, ICRD, IGNR, ITRK`, in that order.
///
/// # Errors
///
/// * `original` is not a RIFF/WAVE file
/// * A chunk runs past the end of `original`
///
/// No output is produced in either case.
///
/// # Examples
///
/// ```rust
/// use riff_retag::MetadataRecord;
/// use riff_retag::riff::info::read_info_list;
///
/// # fn main() -> riff_retag::error::Result<()> {
/// let original = b"RIFF\x10\x00\x00\x00WAVEdata\x04\x00\x00\x00\x00\x00\x00\x00";
///
/// let metadata = MetadataRecord {
/// 	title: Some(String::from("X")),
/// 	..MetadataRecord::default()
/// };
///
/// let rewritten = riff_retag::rewrite::rewrite(original, &metadata)?;
///
/// let info = read_info_list(&rewritten, Default::default())?.unwrap();
/// assert_eq!(info.title(), Some("X"));
/// assert_eq!(info.get(b"ICRD"), Some("1"));
/// # Ok(()) }
/// ```
pub fn rewrite(original: &[u8], metadata: &MetadataRecord) -> Result<Vec<u8>> {
	rewrite_info_list(original, &metadata.to_info_list())
}

/// Rebuild `original` with an INFO list holding exactly the keys of [`WRITE_ORDER`]
///
/// Values are taken from `info`, which may use either identifier convention (`DIRC` is written
/// as `IPRD`, `IPRT` as `ITRK`). A missing year or track is written as `"1"`, any other missing
/// key as a single space.
///
/// # Errors
///
/// See [`rewrite`]
pub fn rewrite_info_list(original: &[u8], info: &InfoList) -> Result<Vec<u8>> {
	let mut info = info.clone();
	info.translate_to_target_convention();

	for key in [*b"ICRD", *b"ITRK"] {
		if info.get(&key).is_none_or(|value| value.trim().is_empty()) {
			info.insert(key, String::from(ABSENT_NUMBER));
		}
	}

	let list = info.encode_ordered(&WRITE_ORDER)?;
	replace_info_lists(original, &list)
}

/// Rebuild `original`, replacing all of its INFO lists with `list`
///
/// `list` must be a complete, padded `LIST` chunk.
fn replace_info_lists(original: &[u8], list: &[u8]) -> Result<Vec<u8>> {
	let chunks = Chunks::new(original)?;

	let mut out = Vec::with_capacity(original.len() + list.len());
	out.extend_from_slice(&original[..RIFF_FILE_HEADER_SIZE]);

	let mut list_written = false;
	let mut end_of_chunks = RIFF_FILE_HEADER_SIZE;
	for chunk in chunks {
		let chunk = chunk?;
		end_of_chunks = chunk.padded_end();

		if chunk.is_info_list(original) {
			log::debug!(
				"Dropping RIFF INFO list at offset {}, size: {} bytes",
				chunk.header_offset(),
				chunk.size
			);

			if !list_written {
				out.extend_from_slice(list);
				list_written = true;
			}

			continue;
		}

		let end = chunk.padded_end().min(original.len());
		out.extend_from_slice(&original[chunk.header_offset()..end]);

		// The final chunk of a file is sometimes missing its pad byte
		if end < chunk.padded_end() {
			log::warn!(
				"Chunk {:?} is missing its pad byte, adding one",
				String::from_utf8_lossy(&chunk.fourcc)
			);
			out.push(0);
		}
	}

	if !list_written {
		log::debug!("No RIFF INFO list found, appending one");
		out.extend_from_slice(list);
	}

	if end_of_chunks < original.len() {
		log::warn!(
			"Discarding {} trailing bytes that don't form a chunk",
			original.len() - end_of_chunks
		);
	}

	let Ok(riff_size) = u32::try_from(out.len() - RIFF_CHUNK_HEADER_SIZE) else {
		err!(TooMuchData);
	};

	LittleEndian::write_u32(&mut out[4..8], riff_size);

	log::debug!("Rebuilt RIFF file, size: {riff_size} bytes");
	Ok(out)
}

/// Replace the INFO list of the file at `path` with `metadata`
///
/// See [`rewrite_with_metadata_with_options`]
///
/// # Errors
///
/// See [`rewrite_with_metadata_with_options`]
///
/// # Examples
///
/// ```rust,no_run
/// use riff_retag::MetadataRecord;
///
/// # fn main() -> riff_retag::error::Result<()> {
/// let mut metadata = riff_retag::read_metadata("foo.wav")?;
/// metadata.title = Some(String::from("Foo title"));
///
/// riff_retag::rewrite_with_metadata("foo.wav", &metadata)?;
/// # Ok(()) }
/// ```
pub fn rewrite_with_metadata(path: impl AsRef<Path>, metadata: &MetadataRecord) -> Result<()> {
	rewrite_with_metadata_with_options(path, metadata, WriteOptions::default())
}

/// Replace the INFO list of the file at `path` with `metadata`
///
/// The whole file is read, rebuilt in memory with [`rewrite`], and only then written back.
///
/// # Errors
///
/// * The file can't be read or written
/// * See [`rewrite`]
///
/// The file is left untouched on error.
pub fn rewrite_with_metadata_with_options(
	path: impl AsRef<Path>,
	metadata: &MetadataRecord,
	write_options: WriteOptions,
) -> Result<()> {
	let path = path.as_ref();

	let original = read_file(path)?;
	let rewritten = rewrite(&original, metadata)?;

	write_file(path, &rewritten, write_options)
}
