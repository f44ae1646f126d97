#![no_main]

use riff_retag::MetadataRecord;
use riff_retag::riff::Chunks;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
	let metadata = MetadataRecord {
		title: Some(String::from("Foo title")),
		..MetadataRecord::default()
	};

	if let Ok(rewritten) = riff_retag::rewrite::rewrite(data, &metadata) {
		assert_eq!(
			u32::from_le_bytes([rewritten[4], rewritten[5], rewritten[6], rewritten[7]]) as usize,
			rewritten.len() - 8
		);

		let info_lists = Chunks::new(&rewritten)
			.unwrap()
			.map(Result::unwrap)
			.filter(|chunk| chunk.is_info_list(&rewritten))
			.count();
		assert_eq!(info_lists, 1);
	}
});
