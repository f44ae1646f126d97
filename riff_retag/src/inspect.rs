//! Read-only chunk listing, for troubleshooting
//!
//! Inspection never fails part way through. Once the header is verified, any inconsistency
//! ends the listing and is recorded as a notice alongside everything read up to that point.

use crate::config::ParsingMode;
use crate::error::Result;
use crate::riff::info::read::InfoItems;
use crate::riff::{Chunks, RIFF_FILE_HEADER_SIZE};
use crate::util::io::read_file;

use std::fmt::{Display, Formatter};
use std::path::Path;

/// A single INFO subchunk
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfoEntry {
	/// The subchunk's four character code
	pub fourcc: [u8; 4],
	/// The size of the value, excluding any pad byte
	pub size: u32,
	/// The decoded value, with trailing nulls trimmed
	pub value: String,
}

/// What a chunk was recognized as
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChunkKind {
	/// Any chunk without special handling
	Plain,
	/// A `LIST` chunk of a type other than `INFO`
	List {
		/// The list type
		list_type: [u8; 4],
	},
	/// A `LIST`/`INFO` chunk
	Info {
		/// The subchunks, in order
		items: Vec<InfoEntry>,
		/// Set if the subchunks couldn't be read to the end
		notice: Option<String>,
	},
	/// An `id3 ` or `ID3 ` chunk
	Id3,
}

/// A top-level chunk
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChunkEntry {
	/// The chunk's four character code
	pub fourcc: [u8; 4],
	/// The payload size, excluding any pad byte
	pub size: u32,
	/// The offset of the chunk header
	pub offset: usize,
	/// What the chunk was recognized as
	pub kind: ChunkKind,
}

/// The layout of a RIFF/WAVE file
///
/// The [`Display`] implementation renders a human-readable listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChunkReport {
	/// The size declared in the RIFF header
	pub riff_size: u32,
	/// The actual size of the file
	pub file_size: usize,
	/// The chunks, in order
	pub chunks: Vec<ChunkEntry>,
	/// Set if the listing stopped early
	pub notice: Option<String>,
}

impl ChunkReport {
	/// Whether the whole file was listed
	pub fn is_complete(&self) -> bool {
		self.notice.is_none()
	}

	/// Whether the declared RIFF size matches the file size
	pub fn riff_size_matches(&self) -> bool {
		self.riff_size as usize + 8 == self.file_size
	}
}

/// List the chunks of a RIFF/WAVE buffer
///
/// # Errors
///
/// `data` is not a RIFF/WAVE file
///
/// # Examples
///
/// ```rust
/// # fn main() -> riff_retag::error::Result<()> {
/// let data = b"RIFF\x1A\x00\x00\x00WAVELIST\x0E\x00\x00\x00INFOINAM\x02\x00\x00\x00Hi";
///
/// let report = riff_retag::inspect::inspect(data)?;
/// assert!(report.is_complete());
/// assert!(report.to_string().contains("INAM = \"Hi\""));
/// # Ok(()) }
/// ```
pub fn inspect(data: &[u8]) -> Result<ChunkReport> {
	let chunks = Chunks::new(data)?;

	let mut report = ChunkReport {
		riff_size: chunks.riff_size(),
		file_size: data.len(),
		chunks: Vec::new(),
		notice: None,
	};

	let mut next_offset = RIFF_FILE_HEADER_SIZE;
	for chunk in chunks {
		let chunk = match chunk {
			Ok(chunk) => chunk,
			Err(e) => {
				report.notice = Some(format!("Stopped at offset {next_offset}: {e}"));
				break;
			},
		};

		next_offset = chunk.padded_end();

		let kind = match (&chunk.fourcc, chunk.list_type(data)) {
			(b"LIST", Some(list_type)) if &list_type == b"INFO" => {
				let (items, notice) = inspect_info(&chunk.payload(data)[4..]);
				ChunkKind::Info { items, notice }
			},
			(b"LIST", Some(list_type)) => ChunkKind::List { list_type },
			(b"id3 " | b"ID3 ", _) => ChunkKind::Id3,
			_ => ChunkKind::Plain,
		};

		report.chunks.push(ChunkEntry {
			fourcc: chunk.fourcc,
			size: chunk.size,
			offset: chunk.header_offset(),
			kind,
		});
	}

	Ok(report)
}

fn inspect_info(data: &[u8]) -> (Vec<InfoEntry>, Option<String>) {
	let mut entries = Vec::new();

	for item in InfoItems::new(data, ParsingMode::BestAttempt) {
		match item {
			Ok(item) => entries.push(InfoEntry {
				fourcc: item.fourcc,
				size: item.size,
				value: item.value,
			}),
			Err(e) => return (entries, Some(format!("Error reading subchunk: {e}"))),
		}
	}

	(entries, None)
}

/// List the chunks of the file at `path`
///
/// The file is never modified.
///
/// # Errors
///
/// * The file can't be read
/// * The file is not a RIFF/WAVE file
///
/// Problems past the header end the listing early, see [`ChunkReport::notice`].
///
/// # Examples
///
/// ```rust,no_run
/// # fn main() -> riff_retag::error::Result<()> {
/// let report = riff_retag::inspect_chunks("foo.wav")?;
/// println!("{report}");
/// # Ok(()) }
/// ```
pub fn inspect_chunks(path: impl AsRef<Path>) -> Result<ChunkReport> {
	let data = read_file(path.as_ref())?;
	inspect(&data)
}

struct FourCC<'a>(&'a [u8; 4]);

impl Display for FourCC<'_> {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		for b in self.0 {
			if b.is_ascii_graphic() || *b == b' ' {
				write!(f, "{}", char::from(*b))?;
			} else {
				write!(f, "\\x{b:02X}")?;
			}
		}

		Ok(())
	}
}

impl Display for ChunkReport {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(
			f,
			"RIFF size: {} (file is {} bytes",
			self.riff_size, self.file_size
		)?;
		if self.riff_size_matches() {
			writeln!(f, ")")?;
		} else {
			writeln!(f, ", expected {})", self.file_size.saturating_sub(8))?;
		}

		for chunk in &self.chunks {
			write!(
				f,
				"[{}] {} ({} bytes)",
				chunk.offset,
				FourCC(&chunk.fourcc),
				chunk.size
			)?;

			match &chunk.kind {
				ChunkKind::Plain => writeln!(f)?,
				ChunkKind::List { list_type } => writeln!(f, " list type {}", FourCC(list_type))?,
				ChunkKind::Id3 => writeln!(f, " embedded ID3 tag")?,
				ChunkKind::Info { items, notice } => {
					writeln!(f, " list type INFO")?;
					for item in items {
						writeln!(
							f,
							"    {} = {:?} ({} bytes)",
							FourCC(&item.fourcc),
							item.value,
							item.size
						)?;
					}

					if let Some(notice) = notice {
						writeln!(f, "    {notice}")?;
					}
				},
			}
		}

		if let Some(notice) = &self.notice {
			writeln!(f, "{notice}")?;
		}

		Ok(())
	}
}
