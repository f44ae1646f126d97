use super::InfoList;
use crate::config::ParsingMode;
use crate::error::Result;
use crate::macros::{err, parse_mode_choice};
use crate::riff::chunk::RIFF_CHUNK_HEADER_SIZE;
use crate::riff::cursor::ChunkCursor;
use crate::util::text::utf8_decode;

/// A single decoded INFO subchunk
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct InfoItem {
	pub(crate) fourcc: [u8; 4],
	pub(crate) size: u32,
	pub(crate) value: String,
}

/// An iterator over the subchunks of an INFO list
///
/// `data` starts immediately after the `INFO` list type. Stops once fewer than 8 bytes remain,
/// a record running past the end yields a single error.
pub(crate) struct InfoItems<'a> {
	cursor: ChunkCursor<'a>,
	parse_mode: ParsingMode,
	done: bool,
}

impl<'a> InfoItems<'a> {
	pub(crate) fn new(data: &'a [u8], parse_mode: ParsingMode) -> Self {
		Self {
			cursor: ChunkCursor::new(data),
			parse_mode,
			done: false,
		}
	}

	fn next_item(&mut self) -> Result<InfoItem> {
		let fourcc = self.cursor.read_id()?;
		let size = self.cursor.read_u32_le()?;
		let content = self.cursor.read_bytes(size as usize)?;
		self.cursor.align_to_even();

		let value = utf8_decode(content, self.parse_mode)?;

		Ok(InfoItem {
			fourcc,
			size,
			value,
		})
	}
}

impl Iterator for InfoItems<'_> {
	type Item = Result<InfoItem>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done || self.cursor.remaining() < RIFF_CHUNK_HEADER_SIZE {
			return None;
		}

		let item = self.next_item();
		if item.is_err() {
			self.done = true;
		}

		Some(item)
	}
}

pub(crate) fn parse_info_list(data: &[u8], parse_mode: ParsingMode) -> Result<InfoList> {
	let mut tag = InfoList::default();

	for item in InfoItems::new(data, parse_mode) {
		let item = match item {
			Ok(item) => item,
			Err(e) => {
				parse_mode_choice!(
					parse_mode,
					RELAXED: {
						log::warn!("Stopping at a malformed RIFF INFO item: {e}");
						break;
					},
					DEFAULT: return Err(e)
				);
			},
		};

		if !verify_key(&item.fourcc) {
			parse_mode_choice!(
				parse_mode,
				STRICT: err!(TextDecode("RIFF INFO item key contains invalid characters")),
				DEFAULT: {
					log::warn!(
						"Skipping RIFF INFO item with an invalid key: {:?}",
						item.fourcc
					);
					continue;
				}
			);
		}

		if tag.get(&item.fourcc).is_some() {
			log::warn!(
				"Duplicate RIFF INFO item {:?}, keeping the first value",
				String::from_utf8_lossy(&item.fourcc)
			);
			continue;
		}

		tag.items.push((item.fourcc, item.value));
	}

	Ok(tag)
}

pub(super) fn verify_key(key: &[u8; 4]) -> bool {
	key.iter().all(|c| c.is_ascii_alphanumeric() || *c == b' ')
}
