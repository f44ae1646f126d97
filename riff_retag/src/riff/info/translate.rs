//! Chunk identifier translation
//!
//! Generic tag libraries write some INFO fields under identifiers that file property inspectors
//! don't recognize. This table maps them onto the identifiers those consumers expect.
//!
//! | Field | Tag library | Target |
//! |-------|-------------|--------|
//! | Album | `DIRC`      | `IPRD` |
//! | Track | `IPRT`      | `ITRK` |
//!
//! Every other identifier passes through unchanged. Both the rewriter and the in-place patcher
//! consult [`TRANSLATIONS`], so they can never disagree.

/// `(tag library identifier, target identifier)` pairs
pub const TRANSLATIONS: [([u8; 4], [u8; 4]); 2] = [(*b"DIRC", *b"IPRD"), (*b"IPRT", *b"ITRK")];

/// Map a tag library identifier to the target convention
///
/// # Examples
///
/// ```rust
/// use riff_retag::riff::info::translate;
///
/// assert_eq!(translate::to_target_convention(*b"DIRC"), *b"IPRD");
/// assert_eq!(translate::to_target_convention(*b"INAM"), *b"INAM");
/// ```
pub fn to_target_convention(fourcc: [u8; 4]) -> [u8; 4] {
	TRANSLATIONS
		.iter()
		.find(|(source, _)| *source == fourcc)
		.map_or(fourcc, |(_, target)| *target)
}

/// Map a target identifier back to the tag library convention
///
/// # Examples
///
/// ```rust
/// use riff_retag::riff::info::translate;
///
/// assert_eq!(translate::to_tag_library_convention(*b"ITRK"), *b"IPRT");
/// assert_eq!(translate::to_tag_library_convention(*b"IART"), *b"IART");
/// ```
pub fn to_tag_library_convention(fourcc: [u8; 4]) -> [u8; 4] {
	TRANSLATIONS
		.iter()
		.find(|(_, target)| *target == fourcc)
		.map_or(fourcc, |(source, _)| *source)
}
