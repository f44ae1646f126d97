use crate::config::ParsingMode;
use crate::error::Result;
use crate::macros::{err, parse_mode_choice};

use std::borrow::Cow;

/// Decode an INFO value, trimming any trailing null terminators
///
/// RIFF INFO values have no standard text encoding. Outside of [`ParsingMode::Strict`],
/// invalid sequences are replaced rather than failing the whole list.
pub(crate) fn utf8_decode(bytes: &[u8], parse_mode: ParsingMode) -> Result<String> {
	let text = match std::str::from_utf8(bytes) {
		Ok(text) => Cow::Borrowed(text),
		Err(e) => {
			parse_mode_choice!(
				parse_mode,
				STRICT: err!(TextDecode("RIFF INFO value is not valid UTF-8")),
				DEFAULT: {
					log::warn!(
						"RIFF INFO value is not valid UTF-8 (valid up to {}), decoding lossily",
						e.valid_up_to()
					);
					String::from_utf8_lossy(bytes)
				}
			)
		},
	};

	Ok(trim_end_nulls_str(&text).to_owned())
}

pub(crate) fn trim_end_nulls_str(text: &str) -> &str {
	text.trim_end_matches('\0')
}
