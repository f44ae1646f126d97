use crate::error::Result;
use crate::macros::err;

use std::io::SeekFrom;

use byteorder::{ByteOrder, LittleEndian};

/// A sequential reader over an in-memory RIFF buffer
///
/// All reads are bounds checked, a read past the end of the buffer fails with
/// [`ErrorKind::TruncatedInput`](crate::error::ErrorKind::TruncatedInput) and leaves the
/// position untouched.
///
/// # Examples
///
/// ```rust
/// use riff_retag::riff::ChunkCursor;
///
/// # fn main() -> riff_retag::error::Result<()> {
/// let mut cursor = ChunkCursor::new(b"fmt \x03\x00\x00\x00abc\0");
///
/// assert_eq!(&cursor.read_id()?, b"fmt ");
/// assert_eq!(cursor.read_u32_le()?, 3);
/// assert_eq!(cursor.read_bytes(3)?, b"abc");
///
/// cursor.align_to_even();
/// assert_eq!(cursor.remaining(), 0);
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct ChunkCursor<'a> {
	data: &'a [u8],
	pos: usize,
}

impl<'a> ChunkCursor<'a> {
	/// Create a new cursor at the start of `data`
	pub const fn new(data: &'a [u8]) -> Self {
		Self { data, pos: 0 }
	}

	/// The current position
	pub const fn position(&self) -> usize {
		self.pos
	}

	/// The length of the underlying buffer
	pub const fn len(&self) -> usize {
		self.data.len()
	}

	/// The number of bytes left to read
	pub const fn remaining(&self) -> usize {
		self.data.len() - self.pos
	}

	/// Read a four character code
	///
	/// # Errors
	///
	/// Fewer than 4 bytes remain
	pub fn read_id(&mut self) -> Result<[u8; 4]> {
		let mut id = [0; 4];
		id.copy_from_slice(self.read_bytes(4)?);

		Ok(id)
	}

	/// Read a little-endian `u32`
	///
	/// # Errors
	///
	/// Fewer than 4 bytes remain
	pub fn read_u32_le(&mut self) -> Result<u32> {
		self.read_bytes(4).map(LittleEndian::read_u32)
	}

	/// Read `n` bytes, borrowed from the underlying buffer
	///
	/// # Errors
	///
	/// Fewer than `n` bytes remain
	pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
		if n > self.remaining() {
			err!(TruncatedInput);
		}

		let bytes = &self.data[self.pos..self.pos + n];
		self.pos += n;

		Ok(bytes)
	}

	/// Move the cursor, returning the new position
	///
	/// Seeking to exactly the end of the buffer is allowed.
	///
	/// # Errors
	///
	/// The target position is before the start or past the end of the buffer
	pub fn seek(&mut self, pos: SeekFrom) -> Result<usize> {
		let target = match pos {
			SeekFrom::Start(offset) => usize::try_from(offset).ok(),
			SeekFrom::End(offset) => offset_by(self.data.len(), offset),
			SeekFrom::Current(offset) => offset_by(self.pos, offset),
		};

		match target {
			Some(target) if target <= self.data.len() => {
				self.pos = target;
				Ok(target)
			},
			_ => err!(TruncatedInput),
		}
	}

	/// Skip a pad byte if the position is odd
	///
	/// Chunks are expected to start on even boundaries, and are padded with a 0 if necessary.
	/// A missing pad byte at the very end of the buffer is tolerated.
	pub fn align_to_even(&mut self) {
		if self.pos % 2 != 0 && self.pos < self.data.len() {
			self.pos += 1;
		}
	}
}

fn offset_by(base: usize, offset: i64) -> Option<usize> {
	let base = i64::try_from(base).ok()?;
	usize::try_from(base.checked_add(offset)?).ok()
}
