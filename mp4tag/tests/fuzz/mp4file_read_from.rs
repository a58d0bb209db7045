use crate::{atom, oom_test, read};
use mp4tag::config::{GlobalOptions, apply_global_options};
use mp4tag::error::ErrorKind;

fn data_atom(class: u32, payload: &[u8]) -> Vec<u8> {
	let mut content = class.to_be_bytes().to_vec();
	content.extend_from_slice(&[0; 4]);
	content.extend_from_slice(payload);
	atom(b"data", &content)
}

fn sample_file() -> Vec<u8> {
	let mut freeform_content = atom(b"mean", b"\0\0\0\0com.apple.iTunes");
	freeform_content.extend(atom(b"name", b"\0\0\0\0MOOD"));
	freeform_content.extend(atom(b"data", b"\0\0\0\0Calm"));

	let mut chapters = b"Intro\0\0\0".to_vec();
	chapters.extend_from_slice(&[0x01, 0x02, 0x03, 0x04, 0x01, 0x05]);
	chapters.extend_from_slice(b"Verse");

	let mut ilst = atom(b"\xa9nam", &data_atom(1, b"Title"));
	ilst.extend(atom(b"trkn", &data_atom(0, &[0, 0, 0, 1, 0, 2, 0, 0])));
	ilst.extend(atom(b"chpl", &data_atom(0, &chapters)));
	ilst.extend(atom(b"----", &freeform_content));

	let mut meta = vec![0; 4];
	meta.extend(atom(b"ilst", &ilst));

	let mut mvhd = vec![0; 12];
	mvhd.extend_from_slice(&1000u32.to_be_bytes());
	mvhd.extend_from_slice(&5000u32.to_be_bytes());
	mvhd.extend_from_slice(&[0; 80]);

	let mut moov = atom(b"mvhd", &mvhd);
	moov.extend(atom(b"udta", &atom(b"meta", &meta)));

	atom(b"moov", &moov)
}

#[test_log::test]
fn sample_is_valid() {
	let file = read(sample_file()).unwrap();
	assert_eq!(file.ilst().title(), Some("Title"));
	assert_eq!(file.ilst().custom("MOOD"), Some("Calm"));
	assert_eq!(file.ilst().chapters().len(), 2);
	assert_eq!(file.duration().as_secs(), 5);
}

#[test_log::test]
fn every_truncation() {
	let data = sample_file();
	for len in 0..data.len() {
		let _ = read(data[..len].to_vec());
	}
}

#[test_log::test]
fn every_byte_flipped() {
	let data = sample_file();
	for i in 0..data.len() {
		for replacement in [0x00, 0x01, 0x7F, 0xFF] {
			let mut mutated = data.clone();
			mutated[i] = replacement;
			let _ = read(mutated);
		}
	}
}

#[test_log::test]
fn huge_declared_size() {
	let mut data = u32::MAX.to_be_bytes().to_vec();
	data.extend_from_slice(b"\xa9nam");
	data.extend_from_slice(&[0; 16]);

	let err = read(data).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::TooMuchData));
}

#[test_log::test]
fn huge_extended_size() {
	for ident in [b"mvhd", b"free", b"----", b"covr"] {
		let mut data = 1u32.to_be_bytes().to_vec();
		data.extend_from_slice(ident);
		data.extend_from_slice(&(u64::MAX - 3).to_be_bytes());
		data.extend_from_slice(&[0; 40]);

		oom_test(data);
	}
}

#[test_log::test]
fn endless_containers() {
	let data = (0..1000).fold(Vec::new(), |inner, _| atom(b"moov", &inner));

	let err = read(data).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::NestingTooDeep(16)));
}

#[test_log::test]
fn endless_sibling_containers() {
	let data = atom(b"moov", &[]).repeat(100_000);

	let file = read(data).unwrap();
	assert!(file.ilst().is_empty());
}

#[test_log::test]
fn freeform_sub_atom_overflow() {
	let mut content = 0xFFFF_FFF0_u32.to_be_bytes().to_vec();
	content.extend_from_slice(b"mean");
	content.extend_from_slice(&[0; 8]);

	let err = read(atom(b"----", &content)).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::SizeMismatch));
}

#[test_log::test]
fn garbage() {
	let mut state = 0x2545_F491_u32;
	for _ in 0..64 {
		let data = (0..256)
			.map(|_| {
				// xorshift
				state ^= state << 13;
				state ^= state >> 17;
				state ^= state << 5;
				state.to_be_bytes()[0]
			})
			.collect::<Vec<u8>>();

		oom_test(data);
	}
}

#[test_log::test]
fn allocation_limit() {
	// Global options are per-thread, this only affects the current test
	apply_global_options(GlobalOptions::new().allocation_limit(16));

	let err = read(sample_file()).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::TooMuchData));

	apply_global_options(GlobalOptions::default());
	assert!(read(sample_file()).is_ok());
}
