#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
	let mut data = data.to_vec();
	let len = data.len();

	riff_retag::patch::patch_bytes(&mut data);
	assert_eq!(data.len(), len);
	assert_eq!(riff_retag::patch::patch_bytes(&mut data), 0);
});
