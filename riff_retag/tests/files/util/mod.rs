use riff_retag::riff::{Chunks, write_chunk};

use std::fs::FileTimes;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tempfile::TempDir;

pub const SAMPLES: [i16; 8] = [0, 1000, -1000, i16::MAX, i16::MIN, 42, -42, 7];

// A 16-bit stereo PCM file, as hound writes it
pub fn pcm_wav() -> Vec<u8> {
	let spec = hound::WavSpec {
		channels: 2,
		sample_rate: 44100,
		bits_per_sample: 16,
		sample_format: hound::SampleFormat::Int,
	};

	let mut data = Vec::new();
	let mut writer = hound::WavWriter::new(Cursor::new(&mut data), spec).unwrap();
	for sample in SAMPLES {
		writer.write_sample(sample).unwrap();
	}
	writer.finalize().unwrap();

	data
}

pub fn decode(data: &[u8]) -> Vec<i16> {
	hound::WavReader::new(Cursor::new(data))
		.unwrap()
		.samples::<i16>()
		.collect::<Result<Vec<_>, _>>()
		.unwrap()
}

pub fn chunks_of(data: &[u8]) -> Vec<([u8; 4], Vec<u8>)> {
	Chunks::new(data)
		.unwrap()
		.map(|chunk| chunk.unwrap())
		.map(|chunk| (chunk.fourcc, chunk.payload(data).to_vec()))
		.collect()
}

pub fn build(chunks: &[([u8; 4], Vec<u8>)]) -> Vec<u8> {
	let mut body = Vec::new();
	for (fourcc, payload) in chunks {
		write_chunk(&mut body, *fourcc, payload).unwrap();
	}

	let mut data = Vec::new();
	data.extend(b"RIFF");
	data.extend(((body.len() + 4) as u32).to_le_bytes());
	data.extend(b"WAVE");
	data.extend(body);
	data
}

// A `LIST`/`INFO` payload, with values null terminated the way most writers do
pub fn info(items: &[(&[u8; 4], &str)]) -> Vec<u8> {
	let mut payload = b"INFO".to_vec();
	for (fourcc, value) in items {
		let mut value = value.as_bytes().to_vec();
		value.push(0);
		write_chunk(&mut payload, **fourcc, &value).unwrap();
	}

	payload
}

// `pcm_wav` with `extra` inserted before the `data` chunk, and `trailing` after it
pub fn pcm_wav_with(
	extra: &[([u8; 4], Vec<u8>)],
	trailing: &[([u8; 4], Vec<u8>)],
) -> Vec<u8> {
	let mut chunks = Vec::new();
	for chunk in chunks_of(&pcm_wav()) {
		if &chunk.0 == b"data" {
			chunks.extend_from_slice(extra);
		}

		chunks.push(chunk);
	}

	chunks.extend_from_slice(trailing);
	build(&chunks)
}

pub fn temp_file(contents: &[u8]) -> (TempDir, PathBuf) {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("test.wav");
	std::fs::write(&path, contents).unwrap();

	(dir, path)
}

pub fn info_lists(data: &[u8]) -> usize {
	Chunks::new(data)
		.unwrap()
		.map(|chunk| chunk.unwrap())
		.filter(|chunk| chunk.is_info_list(data))
		.count()
}

pub fn set_old_times(path: &Path) -> SystemTime {
	let old = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000_000);
	let file = std::fs::File::options().write(true).open(path).unwrap();
	file.set_times(FileTimes::new().set_accessed(old).set_modified(old))
		.unwrap();

	old
}
