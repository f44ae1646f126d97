//! RIFF INFO lists
//!
//! An INFO list is a `LIST` chunk with a list type of `INFO`, holding text subchunks:
//!
//! ```text
//! LIST <size> INFO
//!     INAM <size> "Title" [pad]
//!     IART <size> "Artist" [pad]
//!     ...
//! ```

pub(crate) mod read;
pub mod translate;
pub(crate) mod write;

use crate::config::ParseOptions;
use crate::error::Result;
use crate::riff::chunk::Chunks;

macro_rules! impl_accessor {
	($($name:ident => $key:literal, $desc:literal;)+) => {
		paste::paste! {
			$(
				#[doc = "Get the " $desc]
				pub fn $name(&self) -> Option<&str> {
					self.get($key)
				}

				#[doc = "Set the " $desc]
				pub fn [<set_ $name>](&mut self, value: String) {
					self.insert(*$key, value)
				}

				#[doc = "Remove the " $desc]
				pub fn [<remove_ $name>](&mut self) {
					let _ = self.remove($key);
				}
			)+
		}
	}
}

/// The keys written by the rewriter, in order
///
/// These use the target convention, see [`translate`].
pub const WRITE_ORDER: [[u8; 4]; 7] = [
	*b"INAM", *b"IPRD", *b"IART", *b"ICMT", *b"ICRD", *b"IGNR", *b"ITRK",
];

/// The contents of a RIFF INFO list
///
/// Keys are case-sensitive four character codes, items keep the order they were inserted or
/// read in.
///
/// # Examples
///
/// ```rust
/// use riff_retag::riff::info::InfoList;
///
/// let mut info = InfoList::new();
/// info.set_title(String::from("Foo title"));
/// info.insert(*b"ISFT", String::from("Bar encoder"));
///
/// assert_eq!(info.title(), Some("Foo title"));
/// assert_eq!(info.get(b"ISFT"), Some("Bar encoder"));
/// ```
#[derive(Default, Debug, PartialEq, Eq, Clone)]
pub struct InfoList {
	/// A collection of chunk-value pairs
	pub(crate) items: Vec<([u8; 4], String)>,
}

impl InfoList {
	/// Create a new empty `InfoList`
	///
	/// # Examples
	///
	/// ```rust
	/// use riff_retag::riff::info::InfoList;
	///
	/// let info = InfoList::new();
	/// assert!(info.is_empty());
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	/// Get an item by key
	pub fn get(&self, key: &[u8; 4]) -> Option<&str> {
		self.items
			.iter()
			.find(|(k, _)| k == key)
			.map(|(_, v)| v.as_str())
	}

	/// Insert an item
	///
	/// NOTE: This will do nothing if `key` contains anything other than ASCII alphanumerics and spaces
	///
	/// An existing item with the same key keeps its position and has its value replaced.
	pub fn insert(&mut self, key: [u8; 4], value: String) {
		if !read::verify_key(&key) {
			log::warn!("Refusing to insert an invalid RIFF INFO key: {key:?}");
			return;
		}

		match self.items.iter_mut().find(|(k, _)| *k == key) {
			Some((_, existing)) => *existing = value,
			None => self.items.push((key, value)),
		}
	}

	/// Remove an item by key, returning it if it exists
	pub fn remove(&mut self, key: &[u8; 4]) -> Option<String> {
		let pos = self.items.iter().position(|(k, _)| k == key)?;
		Some(self.items.remove(pos).1)
	}

	/// Returns an iterator over the items
	pub fn iter(&self) -> impl Iterator<Item = ([u8; 4], &str)> {
		self.items.iter().map(|(k, v)| (*k, v.as_str()))
	}

	/// The number of items
	pub fn len(&self) -> usize {
		self.items.len()
	}

	/// Whether the list has no items
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	impl_accessor!(
		title   => b"INAM", "title (`INAM`)";
		album   => b"IPRD", "album (`IPRD`)";
		artist  => b"IART", "artist (`IART`)";
		comment => b"ICMT", "comment (`ICMT`)";
		genre   => b"IGNR", "genre (`IGNR`)";
	);

	/// Rename every item to the target identifier convention
	///
	/// If both conventions are present for the same field, the item already using the target
	/// identifier wins.
	///
	/// # Examples
	///
	/// ```rust
	/// use riff_retag::riff::info::InfoList;
	///
	/// let mut info = InfoList::new();
	/// info.insert(*b"DIRC", String::from("Foo album"));
	/// info.translate_to_target_convention();
	///
	/// assert_eq!(info.album(), Some("Foo album"));
	/// assert_eq!(info.get(b"DIRC"), None);
	/// ```
	pub fn translate_to_target_convention(&mut self) {
		let mut translated = Self::new();
		for (key, value) in &self.items {
			let target = translate::to_target_convention(*key);
			if target != *key && self.get(&target).is_some() {
				continue;
			}

			translated.insert(target, value.clone());
		}

		*self = translated;
	}

	/// Encode the list as a complete `LIST` chunk, items in their current order
	///
	/// Empty values are written as a single space.
	///
	/// # Errors
	///
	/// The encoded list doesn't fit in a chunk
	pub fn encode(&self) -> Result<Vec<u8>> {
		write::create_info_list(self.iter())
	}

	/// Encode the list as a complete `LIST` chunk, writing exactly `keys` in order
	///
	/// Keys that are missing or empty are written as a single space.
	///
	/// # Errors
	///
	/// The encoded list doesn't fit in a chunk
	pub fn encode_ordered(&self, keys: &[[u8; 4]]) -> Result<Vec<u8>> {
		write::create_info_list(
			keys.iter()
				.map(|key| (*key, self.get(key).unwrap_or_default())),
		)
	}
}

impl IntoIterator for InfoList {
	type Item = ([u8; 4], String);
	type IntoIter = std::vec::IntoIter<Self::Item>;

	fn into_iter(self) -> Self::IntoIter {
		self.items.into_iter()
	}
}

/// Read the first INFO list in a RIFF/WAVE buffer
///
/// Returns `None` if the file has no INFO list.
///
/// # Errors
///
/// * `data` is not a RIFF/WAVE file
/// * A chunk runs past the end of the data
/// * The INFO list is malformed, see [`ParsingMode`](crate::config::ParsingMode)
///
/// # Examples
///
/// ```rust
/// use riff_retag::config::ParseOptions;
/// use riff_retag::riff::info::read_info_list;
///
/// # fn main() -> riff_retag::error::Result<()> {
/// let data = b"RIFF\x1A\x00\x00\x00WAVELIST\x0E\x00\x00\x00INFOINAM\x02\x00\x00\x00Hi";
///
/// let info = read_info_list(data, ParseOptions::new())?.unwrap();
/// assert_eq!(info.title(), Some("Hi"));
/// # Ok(()) }
/// ```
pub fn read_info_list(data: &[u8], parse_options: ParseOptions) -> Result<Option<InfoList>> {
	for chunk in Chunks::new(data)? {
		let chunk = chunk?;
		if !chunk.is_info_list(data) {
			continue;
		}

		log::debug!("Found RIFF INFO list, size: {} bytes", chunk.size);

		let subchunks = &chunk.payload(data)[4..];
		let info = read::parse_info_list(subchunks, parse_options.parsing_mode)?;
		return Ok(Some(info));
	}

	Ok(None)
}
