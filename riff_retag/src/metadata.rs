//! The editable metadata of a file
//!
//! A [`MetadataRecord`] is the shape a generic tag reader hands over, and the shape the
//! rewriter consumes. It maps 1:1 onto INFO items:
//!
//! | Field   | Written as | Also read from |
//! |---------|------------|----------------|
//! | title   | `INAM`     |                |
//! | album   | `IPRD`     | `DIRC`         |
//! | artist  | `IART`     |                |
//! | comment | `ICMT`     |                |
//! | year    | `ICRD`     |                |
//! | genre   | `IGNR`     |                |
//! | track   | `ITRK`     | `IPRT`         |

use crate::config::ParseOptions;
use crate::error::Result;
use crate::riff::info::{InfoList, read_info_list, translate};
use crate::util::io::read_file;

use std::path::Path;

/// Written for a year or track of `0`
///
/// Some file property inspectors hide the whole field when the subchunk is empty.
pub(crate) const ABSENT_NUMBER: &str = "1";

/// A file's editable metadata
///
/// Text fields of `None` (or only whitespace) are absent, as are `year` and `track` of `0`.
///
/// # Examples
///
/// ```rust
/// use riff_retag::MetadataRecord;
///
/// let metadata = MetadataRecord {
/// 	title: Some(String::from("Foo title")),
/// 	year: 2020,
/// 	..MetadataRecord::default()
/// };
///
/// let info = metadata.to_info_list();
/// assert_eq!(info.title(), Some("Foo title"));
/// assert_eq!(info.get(b"ICRD"), Some("2020"));
/// assert_eq!(info.get(b"ITRK"), Some("1"));
/// ```
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct MetadataRecord {
	/// The title
	pub title: Option<String>,
	/// The album
	pub album: Option<String>,
	/// The artist
	pub artist: Option<String>,
	/// The year, `0` if absent
	pub year: u32,
	/// The track number, `0` if absent
	pub track: u32,
	/// The comment
	pub comment: Option<String>,
	/// The genre
	pub genre: Option<String>,
}

impl MetadataRecord {
	/// Build the INFO list the rewriter writes for this record
	///
	/// The list always contains every key in [`WRITE_ORDER`](crate::riff::info::WRITE_ORDER).
	/// Absent text is left empty, to be encoded as a single space. An absent year or track is
	/// written as `"1"`.
	pub fn to_info_list(&self) -> InfoList {
		fn text(value: Option<&String>) -> String {
			match value {
				Some(value) if !value.trim().is_empty() => value.clone(),
				_ => String::new(),
			}
		}

		fn number(value: u32) -> String {
			match value {
				0 => String::from(ABSENT_NUMBER),
				_ => value.to_string(),
			}
		}

		let mut info = InfoList::new();
		info.insert(*b"INAM", text(self.title.as_ref()));
		info.insert(*b"IPRD", text(self.album.as_ref()));
		info.insert(*b"IART", text(self.artist.as_ref()));
		info.insert(*b"ICMT", text(self.comment.as_ref()));
		info.insert(*b"ICRD", number(self.year));
		info.insert(*b"IGNR", text(self.genre.as_ref()));
		info.insert(*b"ITRK", number(self.track));

		info
	}

	/// Extract a record from an INFO list
	///
	/// Both identifier conventions are accepted for the album and track, the target convention
	/// taking priority. Values that are only whitespace are treated as absent, any other value is
	/// kept as is. `ICRD` and the track only need to start with digits (`"2020-05-01"` is the year
	/// 2020, `"3/12"` is track 3).
	pub fn from_info_list(info: &InfoList) -> Self {
		let get = |key: [u8; 4]| {
			info.get(&key)
				.or_else(|| info.get(&translate::to_tag_library_convention(key)))
				.filter(|value| !value.trim().is_empty())
		};
		let number = |key: [u8; 4]| get(key).map_or(0, |value| leading_number(value.trim()));

		Self {
			title: get(*b"INAM").map(String::from),
			album: get(*b"IPRD").map(String::from),
			artist: get(*b"IART").map(String::from),
			year: number(*b"ICRD"),
			track: number(*b"ITRK"),
			comment: get(*b"ICMT").map(String::from),
			genre: get(*b"IGNR").map(String::from),
		}
	}
}

fn leading_number(value: &str) -> u32 {
	let end = value
		.find(|c: char| !c.is_ascii_digit())
		.unwrap_or(value.len());

	value[..end].parse().unwrap_or(0)
}

/// Read the metadata from the first INFO list of a RIFF/WAVE file
///
/// A file without an INFO list produces an empty record.
///
/// # Errors
///
/// See [`read_metadata_with_options`]
///
/// # Examples
///
/// ```rust,no_run
/// # fn main() -> riff_retag::error::Result<()> {
/// let metadata = riff_retag::read_metadata("foo.wav")?;
/// println!("Title: {:?}", metadata.title);
/// # Ok(()) }
/// ```
pub fn read_metadata(path: impl AsRef<Path>) -> Result<MetadataRecord> {
	read_metadata_with_options(path, ParseOptions::new())
}

/// Read the metadata from the first INFO list of a RIFF/WAVE file
///
/// # Errors
///
/// * The file can't be read
/// * The file is not a RIFF/WAVE file
/// * A chunk runs past the end of the file
/// * The INFO list is malformed, depending on the [`ParsingMode`](crate::config::ParsingMode)
pub fn read_metadata_with_options(
	path: impl AsRef<Path>,
	parse_options: ParseOptions,
) -> Result<MetadataRecord> {
	let data = read_file(path.as_ref())?;

	let Some(info) = read_info_list(&data, parse_options)? else {
		log::debug!("No RIFF INFO list found");
		return Ok(MetadataRecord::default());
	};

	Ok(MetadataRecord::from_info_list(&info))
}
