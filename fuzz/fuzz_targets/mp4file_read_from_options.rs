#![no_main]

use std::io::Cursor;

use libfuzzer_sys::fuzz_target;
use mp4tag::config::ParseOptions;
use mp4tag::mp4::Mp4File;

fuzz_target!(|data: Vec<u8>| {
	let Some((&flags, data)) = data.split_first() else {
		return;
	};

	let options = ParseOptions::new()
		.read_cover_art(flags & 1 != 0)
		.read_chapters(flags & 2 != 0)
		.max_depth(usize::from(flags >> 2));

	let _ = Mp4File::read_from(&mut Cursor::new(data), options);
});
