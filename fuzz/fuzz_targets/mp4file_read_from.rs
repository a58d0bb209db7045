#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use mp4tag::config::ParseOptions;
use mp4tag::mp4::Mp4File;

fuzz_target!(|data: Vec<u8>| {
	let _ = Mp4File::read_from(&mut Cursor::new(data), ParseOptions::new());
});
