use crate::error::Result;
use crate::riff::chunk::write_chunk;

/// Value written in place of an empty or absent text item
///
/// Some consumers treat a missing subchunk as "unsupported" rather than "blank".
pub(crate) const BLANK_VALUE: &str = " ";

/// Create a complete `LIST` chunk (header, `INFO` marker, subchunks and pad byte)
///
/// Values are written without a null terminator, each subchunk is padded to an even length.
pub(crate) fn create_info_list<'a, I>(items: I) -> Result<Vec<u8>>
where
	I: IntoIterator<Item = ([u8; 4], &'a str)>,
{
	let mut payload = Vec::new();
	payload.extend(b"INFO");

	for (fourcc, value) in items {
		let value = if value.is_empty() { BLANK_VALUE } else { value };
		write_chunk(&mut payload, fourcc, value.as_bytes())?;
	}

	log::debug!("Created RIFF INFO list, size: {} bytes", payload.len());

	let mut list = Vec::with_capacity(payload.len() + 8);
	write_chunk(&mut list, *b"LIST", &payload)?;

	Ok(list)
}
