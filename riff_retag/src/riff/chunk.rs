use super::cursor::ChunkCursor;
use crate::error::Result;
use crate::macros::err;

use std::io::SeekFrom;
use std::ops::Range;

use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};

/// The size of a chunk header (4 byte ID + 4 byte size)
pub const RIFF_CHUNK_HEADER_SIZE: usize = 8;

/// The size of the `RIFF <size> WAVE` file header
pub const RIFF_FILE_HEADER_SIZE: usize = 12;

/// A top-level chunk, located by its position in the buffer it was read from
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ChunkHeader {
	/// The chunk's four character code
	pub fourcc: [u8; 4],
	/// The payload size, excluding the header and any pad byte
	pub size: u32,
	/// The offset of the first payload byte
	pub payload_offset: usize,
}

impl ChunkHeader {
	/// The offset of the chunk header
	pub const fn header_offset(&self) -> usize {
		self.payload_offset - RIFF_CHUNK_HEADER_SIZE
	}

	/// The byte range of the payload
	pub const fn payload_range(&self) -> Range<usize> {
		self.payload_offset..self.payload_offset + self.size as usize
	}

	/// The offset immediately following the payload and its pad byte, where the next chunk starts
	pub const fn padded_end(&self) -> usize {
		self.payload_offset + self.size as usize + (self.size % 2) as usize
	}

	/// The payload of this chunk within `data`
	///
	/// `data` must be the buffer this header was read from.
	pub fn payload<'a>(&self, data: &'a [u8]) -> &'a [u8] {
		&data[self.payload_range()]
	}

	/// The list type of a `LIST` chunk, if this is one
	pub fn list_type(&self, data: &[u8]) -> Option<[u8; 4]> {
		if &self.fourcc != b"LIST" || self.size < 4 {
			return None;
		}

		let mut list_type = [0; 4];
		list_type.copy_from_slice(&self.payload(data)[..4]);
		Some(list_type)
	}

	/// Whether this is a `LIST` chunk with a list type of `INFO`
	pub fn is_info_list(&self, data: &[u8]) -> bool {
		self.list_type(data).is_some_and(|list_type| &list_type == b"INFO")
	}
}

/// Verifies that the buffer is a RIFF/WAVE file and returns the declared RIFF size
///
/// # Errors
///
/// The first 12 bytes are not `RIFF <size> WAVE`
pub fn verify_riff(data: &[u8]) -> Result<u32> {
	if data.len() < RIFF_FILE_HEADER_SIZE {
		log::debug!("Buffer too short to hold a RIFF header ({} bytes)", data.len());
		err!(NotARiffFile);
	}

	if &data[..4] != b"RIFF" {
		log::debug!("File doesn't start with a RIFF chunk");
		err!(NotARiffFile);
	}

	if &data[8..12] != b"WAVE" {
		log::debug!("Found RIFF file, format is not WAVE");
		err!(NotARiffFile);
	}

	let size = LittleEndian::read_u32(&data[4..8]);

	log::debug!("File verified to be RIFF/WAVE, declared size: {size} bytes");
	Ok(size)
}

/// An iterator over the top-level chunks of a RIFF/WAVE buffer
///
/// This never materializes chunk data, it only yields [`ChunkHeader`]s. `LIST` chunks are not
/// recursed into.
///
/// Iteration stops once fewer than 8 bytes remain. A chunk whose declared size runs past the end of
/// the buffer yields a single [`ErrorKind::TruncatedInput`](crate::error::ErrorKind::TruncatedInput),
/// after which the iterator is exhausted.
///
/// # Examples
///
/// ```rust
/// use riff_retag::riff::Chunks;
///
/// # fn main() -> riff_retag::error::Result<()> {
/// let data = b"RIFF\x10\x00\x00\x00WAVEdata\x03\x00\x00\x00\x01\x02\x03\x00";
///
/// let chunks = Chunks::new(data)?.collect::<Result<Vec<_>, _>>()?;
/// assert_eq!(chunks.len(), 1);
/// assert_eq!(&chunks[0].fourcc, b"data");
/// assert_eq!(chunks[0].payload(data), &[1, 2, 3]);
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct Chunks<'a> {
	cursor: ChunkCursor<'a>,
	riff_size: u32,
	done: bool,
}

impl<'a> Chunks<'a> {
	/// Verify the RIFF header of `data` and prepare to walk its chunks
	///
	/// # Errors
	///
	/// See [`verify_riff`]
	pub fn new(data: &'a [u8]) -> Result<Self> {
		let riff_size = verify_riff(data)?;

		let mut cursor = ChunkCursor::new(data);
		cursor.seek(SeekFrom::Start(RIFF_FILE_HEADER_SIZE as u64))?;

		Ok(Self {
			cursor,
			riff_size,
			done: false,
		})
	}

	/// The size declared in the RIFF header
	///
	/// This is not trusted for iteration, the walk always covers the whole buffer.
	pub fn riff_size(&self) -> u32 {
		self.riff_size
	}

	fn next_chunk(&mut self) -> Result<ChunkHeader> {
		let fourcc = self.cursor.read_id()?;
		let size = self.cursor.read_u32_le()?;
		let payload_offset = self.cursor.position();

		if size as usize > self.cursor.remaining() {
			log::warn!(
				"Chunk {:?} at offset {} declares {size} bytes, only {} remain",
				String::from_utf8_lossy(&fourcc),
				payload_offset - RIFF_CHUNK_HEADER_SIZE,
				self.cursor.remaining()
			);
			err!(TruncatedInput);
		}

		self.cursor.seek(SeekFrom::Current(i64::from(size)))?;
		self.cursor.align_to_even();

		Ok(ChunkHeader {
			fourcc,
			size,
			payload_offset,
		})
	}
}

impl Iterator for Chunks<'_> {
	type Item = Result<ChunkHeader>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done || self.cursor.remaining() < RIFF_CHUNK_HEADER_SIZE {
			return None;
		}

		let chunk = self.next_chunk();
		if chunk.is_err() {
			self.done = true;
		}

		Some(chunk)
	}
}

impl std::iter::FusedIterator for Chunks<'_> {}

/// Append a chunk (header, payload and pad byte) to `out`
///
/// # Errors
///
/// `payload` is too large to be described by a `u32`
pub fn write_chunk(out: &mut Vec<u8>, fourcc: [u8; 4], payload: &[u8]) -> Result<()> {
	let Ok(size) = u32::try_from(payload.len()) else {
		err!(TooMuchData);
	};

	out.extend_from_slice(&fourcc);
	out.write_u32::<LittleEndian>(size)?;
	out.extend_from_slice(payload);

	// This is NOT a null terminator, and it is NOT included in the chunk's size
	if size % 2 != 0 {
		out.push(0);
	}

	Ok(())
}
