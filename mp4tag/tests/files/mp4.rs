use crate::util::{atom, freeform, item, m4a, mvhd, temp_file, temp_path};
use mp4tag::config::ParseOptions;
use mp4tag::error::ErrorKind;
use mp4tag::mp4::{AtomData, AtomIdent, ItemKey, Mp4File};
use mp4tag::picture::PictureFormat;

use std::io::Seek;
use std::time::Duration;

fn full_ilst() -> Vec<u8> {
	let mut png = PictureFormat::PNG_SIGNATURE.to_vec();
	png.extend_from_slice(&[0, 0, 0, 13]);
	png.extend_from_slice(b"IHDR");

	let mut chapters = b"Start".to_vec();
	chapters.extend_from_slice(&[0, 0, 0]);
	chapters.extend_from_slice(&[0x00, 0x01, 0x00, 0x00, 0x01, 0x05]);
	chapters.extend_from_slice(b"Middle");

	let mut ilst = item(b"\xa9nam", 1, b"Foo title");
	ilst.extend(item(b"\xa9ART", 1, b"Foo artist"));
	ilst.extend(item(b"\xa9alb", 1, b"Foo album"));
	ilst.extend(item(b"aART", 1, b"Foo album artist"));
	ilst.extend(item(b"\xa9wrt", 1, b"Foo composer"));
	ilst.extend(item(b"\xa9gen", 1, b"Classical"));
	ilst.extend(item(b"\xa9day", 1, b"1984-01-01"));
	ilst.extend(item(b"\xa9cmt", 1, b"Foo comment"));
	ilst.extend(item(b"trkn", 0, &[0, 0, 0, 1, 0, 12, 0, 0]));
	ilst.extend(item(b"disk", 0, &[0, 0, 0, 1, 0, 2]));
	ilst.extend(item(b"cpil", 21, &[1]));
	ilst.extend(item(b"covr", 0, &png));
	ilst.extend(item(b"chpl", 0, &chapters));
	ilst.extend(freeform("com.apple.iTunes", "ARTISTS", &["Foo", "Bar"]));
	ilst
}

#[test_log::test]
fn read() {
	let mut file = temp_file(&m4a(&mvhd(44100, 44100 * 215 + 300), &full_ilst()));
	let m4a_file = Mp4File::read_from(&mut file, ParseOptions::new()).unwrap();

	assert_eq!(m4a_file.duration(), Duration::from_secs(215));

	let ilst = m4a_file.ilst();
	assert_eq!(ilst.title(), Some("Foo title"));
	assert_eq!(ilst.artist(), Some("Foo artist"));
	assert_eq!(ilst.album(), Some("Foo album"));
	assert_eq!(ilst.album_artist(), Some("Foo album artist"));
	assert_eq!(ilst.composer(), Some("Foo composer"));
	assert_eq!(ilst.genre(), Some("Classical"));
	assert_eq!(ilst.comment(), Some("Foo comment"));
	assert_eq!(ilst.year(), Some(1984));
	assert_eq!(ilst.track(), (1, 12));
	assert_eq!(ilst.disc(), (1, 2));
	assert_eq!(
		ilst.get_by_key(ItemKey::Compilation),
		Some(&AtomData::Integer(1))
	);
	assert_eq!(ilst.custom("ARTISTS"), Some("Foo;Bar"));

	let picture = ilst.picture().unwrap();
	assert_eq!(picture.format(), PictureFormat::Png);
	assert_eq!(picture.mime_type(), "image/png");
	assert!(picture.data().starts_with(&PictureFormat::PNG_SIGNATURE));

	let chapters = ilst.chapters();
	assert_eq!(chapters.len(), 2);
	assert_eq!(chapters[0].title(), "Start");
	assert_eq!(chapters[0].start_time(), "0.000");
	// 0x0001_0000 * 256 / 10,000,000
	assert_eq!(chapters[0].end_time(), "1.678");
	assert_eq!(chapters[1].start_time(), "1.678");
	assert_eq!(chapters[1].end_time(), "");
	assert_eq!(chapters[1].title(), "Middle");
}

#[test_log::test]
fn read_path() {
	let file = temp_path(&m4a(&mvhd(1000, 61_999), &full_ilst()));
	let m4a_file = mp4tag::read_from_path(file.path()).unwrap();

	assert_eq!(m4a_file.duration(), Duration::from_secs(61));
	assert_eq!(m4a_file.ilst().title(), Some("Foo title"));
	assert_eq!(m4a_file.ilst().track(), (1, 12));
}

#[test_log::test]
fn read_path_missing_file() {
	let dir = tempfile::tempdir().unwrap();
	let err = mp4tag::read_from_path(dir.path().join("missing.m4a")).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::Io(_)));
}

#[test_log::test]
fn read_no_cover_art_or_chapters() {
	let mut file = temp_file(&m4a(&mvhd(1000, 1000), &full_ilst()));
	let m4a_file = Mp4File::read_from(
		&mut file,
		ParseOptions::new()
			.read_cover_art(false)
			.read_chapters(false),
	)
	.unwrap();

	let ilst = m4a_file.ilst();
	assert!(ilst.picture().is_none());
	assert!(ilst.chapters().is_empty());
	assert_eq!(ilst.title(), Some("Foo title"));
}

#[test_log::test]
fn raw_items() {
	let mut file = temp_file(&m4a(&mvhd(1000, 1000), &full_ilst()));
	let m4a_file = Mp4File::read_from(&mut file, ParseOptions::new()).unwrap();

	let ilst = m4a_file.into_ilst();
	// 13 four character atoms, 2 counts, and 1 freeform field
	assert_eq!(ilst.len(), 16);
	assert!(
		ilst.items()
			.any(|(ident, _)| *ident == AtomIdent::Count(*b"disk"))
	);
	assert!(
		ilst.items()
			.any(|(ident, _)| ident.to_string() == "trkn_count")
	);
}

#[test_log::test]
fn unrecognized_freeform_is_skipped() {
	let mut ilst = freeform("org.example", "FOO", &["bar"]);
	ilst.extend(item(b"\xa9nam", 1, b"Foo title"));

	let mut file = temp_file(&m4a(&mvhd(1000, 1000), &ilst));
	let m4a_file = Mp4File::read_from(&mut file, ParseOptions::new()).unwrap();

	assert_eq!(m4a_file.ilst().custom("FOO"), None);
	assert_eq!(m4a_file.ilst().title(), Some("Foo title"));
}

#[test_log::test]
fn repeated_atoms_last_wins() {
	let mut ilst = item(b"\xa9nam", 1, b"First");
	ilst.extend(item(b"\xa9nam", 1, b"Second"));

	let mut file = temp_file(&m4a(&mvhd(1000, 1000), &ilst));
	let m4a_file = Mp4File::read_from(&mut file, ParseOptions::new()).unwrap();
	assert_eq!(m4a_file.ilst().title(), Some("Second"));
}

#[test_log::test]
fn reading_is_repeatable() {
	let mut file = temp_file(&m4a(&mvhd(1000, 1000), &full_ilst()));

	let first = Mp4File::read_from(&mut file, ParseOptions::new()).unwrap();
	file.rewind().unwrap();
	let second = Mp4File::read_from(&mut file, ParseOptions::new()).unwrap();

	assert_eq!(first, second);
}

#[test_log::test]
fn no_metadata() {
	let mut data = atom(b"ftyp", b"M4A \0\0\x02\0");
	data.extend(atom(b"moov", &mvhd(600, 1200)));

	let mut file = temp_file(&data);
	let m4a_file = Mp4File::read_from(&mut file, ParseOptions::new()).unwrap();

	assert!(m4a_file.ilst().is_empty());
	assert_eq!(m4a_file.duration(), Duration::from_secs(2));
}

#[test_log::test]
fn freeform_shares_atom_keys() {
	let mut ilst = item(b"\xa9nam", 1, b"Foo title");
	ilst.extend(freeform("com.apple.iTunes", "\u{a9}nam", &["Not a title"]));
	ilst.extend(freeform("com.apple.iTunes", "MOOD", &["Calm"]));

	let mut file = temp_file(&m4a(&mvhd(1000, 1000), &ilst));
	let m4a_file = Mp4File::read_from(&mut file, ParseOptions::new()).unwrap();

	// `©` is 2 bytes in UTF-8, so this name is not `©nam`
	assert_eq!(m4a_file.ilst().title(), Some("Foo title"));
	assert_eq!(m4a_file.ilst().custom("\u{a9}nam"), Some("Not a title"));
	assert_eq!(
		m4a_file.ilst().get(&AtomIdent::Fourcc(*b"MOOD")),
		Some(&AtomData::Text(String::from("Calm")))
	);
}

#[test_log::test]
fn freeform_track_number_is_malformed() {
	let mut ilst = item(b"trkn", 0, &[0, 0, 0, 1, 0, 12, 0, 0]);
	ilst.extend(freeform("com.apple.iTunes", "trkn", &["1/10"]));

	let mut file = temp_file(&m4a(&mvhd(1000, 1000), &ilst));
	let err = Mp4File::read_from(&mut file, ParseOptions::new()).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::MalformedPayload(_)));
}
