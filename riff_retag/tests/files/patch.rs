use crate::util::{SAMPLES, decode, info, pcm_wav, pcm_wav_with, set_old_times, temp_file};

use riff_retag::config::WriteOptions;
use riff_retag::convert_identifiers_to_target_convention;
use riff_retag::error::ErrorKind;
use riff_retag::patch::patch_file;
use riff_retag::riff::info::read_info_list;

fn tag_library_file() -> Vec<u8> {
	pcm_wav_with(
		&[],
		&[(
			*b"LIST",
			info(&[
				(b"INAM", "Song"),
				(b"DIRC", "Album"),
				(b"ICRD", "2020"),
				(b"IPRT", "5"),
			]),
		)],
	)
}

#[test_log::test]
fn converts_identifiers() {
	let original = tag_library_file();
	let (_dir, path) = temp_file(&original);

	convert_identifiers_to_target_convention(&path).unwrap();

	let patched = std::fs::read(&path).unwrap();
	assert_eq!(patched.len(), original.len());

	let info = read_info_list(&patched, Default::default())
		.unwrap()
		.unwrap();
	assert_eq!(
		info.iter().collect::<Vec<_>>(),
		[
			(*b"INAM", "Song"),
			(*b"IPRD", "Album"),
			(*b"ICRD", "2020"),
			(*b"ITRK", "5"),
		]
	);

	// Only the two identifiers differ
	let differing = original
		.iter()
		.zip(&patched)
		.filter(|(a, b)| a != b)
		.count();
	assert!(differing <= 8);
	assert_eq!(decode(&patched), SAMPLES);
}

#[test_log::test]
fn converting_twice_is_converting_once() {
	let (_dir, path) = temp_file(&tag_library_file());

	assert_eq!(patch_file(&path, WriteOptions::default()).unwrap(), 2);
	let once = std::fs::read(&path).unwrap();

	assert_eq!(patch_file(&path, WriteOptions::default()).unwrap(), 0);
	assert_eq!(std::fs::read(&path).unwrap(), once);
}

#[test_log::test]
fn nothing_to_convert() {
	let original = pcm_wav();
	let (_dir, path) = temp_file(&original);
	let old = set_old_times(&path);

	// A write would move the modification time forward
	let write_options = WriteOptions::new().preserve_timestamps(false);
	assert_eq!(patch_file(&path, write_options).unwrap(), 0);

	assert_eq!(std::fs::read(&path).unwrap(), original);
	let modified = std::fs::metadata(&path).unwrap().modified().unwrap();
	assert_eq!(modified, old);
}

#[test_log::test]
fn not_riff_is_untouched() {
	let original = b"ID3\x04\0\0\0\0\0\0DIRC".to_vec();
	let (_dir, path) = temp_file(&original);

	let err = convert_identifiers_to_target_convention(&path).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::NotARiffFile));
	assert_eq!(std::fs::read(&path).unwrap(), original);
}
