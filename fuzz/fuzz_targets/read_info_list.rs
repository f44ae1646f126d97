#![no_main]

use riff_retag::config::{ParseOptions, ParsingMode};

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
	for mode in [ParsingMode::Strict, ParsingMode::BestAttempt, ParsingMode::Relaxed] {
		let _ = riff_retag::riff::info::read_info_list(data, ParseOptions::new().parsing_mode(mode));
	}
});
