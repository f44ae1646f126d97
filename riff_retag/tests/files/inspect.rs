use crate::util::{info, pcm_wav_with, temp_file};

use riff_retag::inspect::ChunkKind;
use riff_retag::{MetadataRecord, inspect_chunks, rewrite_with_metadata};

#[test_log::test]
fn lists_a_real_file() {
	let data = pcm_wav_with(
		&[(*b"LIST", info(&[(b"INAM", "Song"), (b"DIRC", "Album")]))],
		&[(*b"id3 ", vec![0; 10])],
	);
	let (_dir, path) = temp_file(&data);

	let report = inspect_chunks(&path).unwrap();
	assert!(report.is_complete());
	assert!(report.riff_size_matches());
	assert_eq!(report.file_size, data.len());

	let ids = report
		.chunks
		.iter()
		.map(|chunk| chunk.fourcc)
		.collect::<Vec<_>>();
	assert_eq!(ids, [*b"fmt ", *b"LIST", *b"data", *b"id3 "]);
	assert_eq!(report.chunks[0].offset, 12);

	let ChunkKind::Info { items, notice } = &report.chunks[1].kind else {
		panic!("Expected an INFO list");
	};
	assert!(notice.is_none());
	assert_eq!(items[1].fourcc, *b"DIRC");
	assert_eq!(items[1].value, "Album");
	assert_eq!(items[1].size, 6);

	let text = report.to_string();
	assert!(text.contains("DIRC = \"Album\" (6 bytes)"));
	assert!(text.contains("embedded ID3 tag"));

	// Inspection never writes
	assert_eq!(std::fs::read(&path).unwrap(), data);
}

#[test_log::test]
fn truncated_file() {
	let mut data = pcm_wav_with(&[(*b"LIST", info(&[(b"INAM", "Song")]))], &[]);

	// Cut the file 3 bytes into the payload of the last chunk
	let data_offset = data.len() - 16 - 8;
	data.truncate(data_offset + 8 + 3);
	let (_dir, path) = temp_file(&data);

	let report = inspect_chunks(&path).unwrap();
	assert!(!report.is_complete());
	assert!(!report.riff_size_matches());
	assert_eq!(report.chunks.len(), 2);
	assert!(
		report
			.to_string()
			.contains(&format!("Stopped at offset {data_offset}"))
	);

	// The rewriter refuses the same file, and leaves it alone
	assert!(rewrite_with_metadata(&path, &MetadataRecord::default()).is_err());
	assert_eq!(std::fs::read(&path).unwrap(), data);
}

#[test_log::test]
fn not_riff() {
	let (_dir, path) = temp_file(b"OggS\0\x02\0\0\0\0\0\0");
	assert!(inspect_chunks(&path).is_err());
}
