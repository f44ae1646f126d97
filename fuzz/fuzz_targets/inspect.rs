#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
	if let Ok(report) = riff_retag::inspect::inspect(data) {
		let _ = report.to_string();
	}
});
