use crate::util::{info, pcm_wav, pcm_wav_with, temp_file};

use riff_retag::config::{ParseOptions, ParsingMode};
use riff_retag::error::ErrorKind;
use riff_retag::{
	MetadataRecord, read_metadata, read_metadata_with_options, rewrite_with_metadata,
};

#[test_log::test]
fn no_info_list() {
	let (_dir, path) = temp_file(&pcm_wav());
	assert_eq!(read_metadata(&path).unwrap(), MetadataRecord::default());
}

#[test_log::test]
fn first_list_wins() {
	let data = pcm_wav_with(
		&[(*b"LIST", info(&[(b"INAM", "First"), (b"ICRD", "2001-09-09")]))],
		&[(*b"LIST", info(&[(b"INAM", "Second"), (b"IART", "Someone")]))],
	);
	let (_dir, path) = temp_file(&data);

	let metadata = read_metadata(&path).unwrap();
	assert_eq!(metadata.title.as_deref(), Some("First"));
	assert_eq!(metadata.year, 2001);
	assert_eq!(metadata.artist, None);
}

#[test_log::test]
fn values_survive_a_save_unchanged() {
	let data = pcm_wav_with(
		&[(*b"LIST", info(&[(b"INAM", "  Intro "), (b"ICMT", "note\n")]))],
		&[],
	);
	let (_dir, path) = temp_file(&data);

	let metadata = read_metadata(&path).unwrap();
	assert_eq!(metadata.title.as_deref(), Some("  Intro "));
	assert_eq!(metadata.comment.as_deref(), Some("note\n"));

	rewrite_with_metadata(&path, &metadata).unwrap();
	assert_eq!(read_metadata(&path).unwrap(), metadata);
}

fn invalid_text_file() -> Vec<u8> {
	let mut payload = b"INFO".to_vec();
	riff_retag::riff::write_chunk(&mut payload, *b"INAM", b"Caf\xE9\0").unwrap();
	riff_retag::riff::write_chunk(&mut payload, *b"IART", b"Artist\0").unwrap();

	pcm_wav_with(&[], &[(*b"LIST", payload)])
}

#[test_log::test]
fn parsing_modes() {
	let (_dir, path) = temp_file(&invalid_text_file());

	let err = read_metadata_with_options(
		&path,
		ParseOptions::new().parsing_mode(ParsingMode::Strict),
	)
	.unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::TextDecode(_)));

	for mode in [ParsingMode::BestAttempt, ParsingMode::Relaxed] {
		let metadata =
			read_metadata_with_options(&path, ParseOptions::new().parsing_mode(mode)).unwrap();
		assert_eq!(metadata.title.as_deref(), Some("Caf\u{FFFD}"));
		assert_eq!(metadata.artist.as_deref(), Some("Artist"));
	}
}
