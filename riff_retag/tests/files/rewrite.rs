use crate::util::{
	SAMPLES, build, chunks_of, decode, info, info_lists, pcm_wav, pcm_wav_with, set_old_times,
	temp_file,
};

use riff_retag::config::WriteOptions;
use riff_retag::error::ErrorKind;
use riff_retag::riff::info::read_info_list;
use riff_retag::{MetadataRecord, read_metadata, rewrite_with_metadata};

fn metadata() -> MetadataRecord {
	MetadataRecord {
		title: Some(String::from("Foo title")),
		album: Some(String::from("Bar album")),
		artist: Some(String::from("Baz artist")),
		year: 1984,
		track: 3,
		comment: Some(String::from("Qux comment")),
		genre: Some(String::from("Classical")),
	}
}

#[test_log::test]
fn file_without_info() {
	let original = pcm_wav();
	let (_dir, path) = temp_file(&original);

	let metadata = MetadataRecord {
		title: Some(String::from("X")),
		year: 0,
		..MetadataRecord::default()
	};
	rewrite_with_metadata(&path, &metadata).unwrap();

	let rewritten = std::fs::read(&path).unwrap();
	assert_eq!(info_lists(&rewritten), 1);

	let info = read_info_list(&rewritten, Default::default())
		.unwrap()
		.unwrap();
	assert_eq!(info.title(), Some("X"));
	assert_eq!(info.get(b"ICRD"), Some("1"));

	// Everything before the new list is untouched, apart from the RIFF size
	assert_eq!(rewritten[8..original.len()], original[8..]);
	assert_eq!(decode(&rewritten), SAMPLES);
}

#[test_log::test]
fn metadata_survives() {
	let original = pcm_wav_with(
		&[],
		&[(
			*b"LIST",
			info(&[
				(b"INAM", "Old title"),
				(b"DIRC", "Old album"),
				(b"IPRT", "9"),
			]),
		)],
	);
	let (_dir, path) = temp_file(&original);

	let before = read_metadata(&path).unwrap();
	assert_eq!(before.album.as_deref(), Some("Old album"));
	assert_eq!(before.track, 9);

	rewrite_with_metadata(&path, &metadata()).unwrap();
	assert_eq!(read_metadata(&path).unwrap(), metadata());

	let rewritten = std::fs::read(&path).unwrap();
	let info = read_info_list(&rewritten, Default::default())
		.unwrap()
		.unwrap();
	assert_eq!(
		info.iter().map(|(key, _)| key).collect::<Vec<_>>(),
		[
			*b"INAM", *b"IPRD", *b"IART", *b"ICMT", *b"ICRD", *b"IGNR", *b"ITRK"
		]
	);
	assert_eq!(info.get(b"DIRC"), None);
	assert_eq!(info.get(b"IPRT"), None);
}

#[test_log::test]
fn other_chunks_are_preserved() {
	let original = pcm_wav_with(
		&[
			(*b"LIST", info(&[(b"INAM", "First")])),
			(*b"LIST", b"adtlnote".to_vec()),
		],
		&[
			(*b"LIST", info(&[(b"IART", "Second")])),
			(*b"odd ", vec![1, 2, 3]),
			(*b"id3 ", vec![b'I', b'D', b'3', 4, 0, 0, 0, 0, 0, 0]),
		],
	);
	let (_dir, path) = temp_file(&original);

	rewrite_with_metadata(&path, &metadata()).unwrap();
	let rewritten = std::fs::read(&path).unwrap();

	let riff_size = u32::from_le_bytes(rewritten[4..8].try_into().unwrap());
	assert_eq!(riff_size as usize, rewritten.len() - 8);
	assert_eq!(info_lists(&rewritten), 1);

	let kept = |data: &[u8]| {
		chunks_of(data)
			.into_iter()
			.filter(|(fourcc, payload)| !(fourcc == b"LIST" && payload.starts_with(b"INFO")))
			.collect::<Vec<_>>()
	};
	assert_eq!(kept(&rewritten), kept(&original));

	// The new list takes the place of the first one
	let ids = chunks_of(&rewritten)
		.into_iter()
		.map(|(fourcc, _)| fourcc)
		.collect::<Vec<_>>();
	assert_eq!(
		ids,
		[*b"fmt ", *b"LIST", *b"LIST", *b"data", *b"odd ", *b"id3 "]
	);

	assert_eq!(decode(&rewritten), SAMPLES);
}

#[test_log::test]
fn truncated_file_is_untouched() {
	let mut original = pcm_wav_with(&[], &[(*b"LIST", info(&[(b"INAM", "Song")]))]);
	original.truncate(original.len() - 3);
	let (_dir, path) = temp_file(&original);

	let err = rewrite_with_metadata(&path, &metadata()).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::TruncatedInput));
	assert_eq!(std::fs::read(&path).unwrap(), original);
}

#[test_log::test]
fn not_riff_is_untouched() {
	let original = b"fLaC\0\0\0\x22 not a wave file".to_vec();
	let (_dir, path) = temp_file(&original);

	let err = rewrite_with_metadata(&path, &metadata()).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::NotARiffFile));
	assert_eq!(std::fs::read(&path).unwrap(), original);
}

#[test_log::test]
fn missing_file() {
	let dir = tempfile::tempdir().unwrap();
	let err = rewrite_with_metadata(dir.path().join("missing.wav"), &metadata()).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::Io(_)));
}

#[test_log::test]
fn rewriting_twice_is_stable() {
	let (_dir, path) = temp_file(&pcm_wav());

	rewrite_with_metadata(&path, &metadata()).unwrap();
	let once = std::fs::read(&path).unwrap();

	rewrite_with_metadata(&path, &metadata()).unwrap();
	assert_eq!(std::fs::read(&path).unwrap(), once);
}

#[test_log::test]
fn timestamps_are_preserved() {
	for atomic_replace in [true, false] {
		let (_dir, path) = temp_file(&pcm_wav());
		let old = set_old_times(&path);

		riff_retag::rewrite_with_metadata_with_options(
			&path,
			&metadata(),
			WriteOptions::new().atomic_replace(atomic_replace),
		)
		.unwrap();

		let modified = std::fs::metadata(&path).unwrap().modified().unwrap();
		assert_eq!(modified, old);
		assert_eq!(read_metadata(&path).unwrap(), metadata());
	}
}

#[test_log::test]
fn timestamps_can_be_updated() {
	let (_dir, path) = temp_file(&pcm_wav());
	let old = set_old_times(&path);

	riff_retag::rewrite_with_metadata_with_options(
		&path,
		&metadata(),
		WriteOptions::new().preserve_timestamps(false),
	)
	.unwrap();

	let modified = std::fs::metadata(&path).unwrap().modified().unwrap();
	assert!(modified > old);
}

#[test_log::test]
fn built_files_decode() {
	// Sanity check for the helpers themselves
	let data = build(&chunks_of(&pcm_wav()));
	assert_eq!(data, pcm_wav());
	assert_eq!(decode(&data), SAMPLES);
}
