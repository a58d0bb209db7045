mod atom_reader;

use super::Mp4File;
use super::atom_info::AtomInfo;
use super::fourcc_display;
use super::ilst::Ilst;
use super::ilst::constants::ItemKey;
use super::ilst::freeform::parse_freeform;
use super::ilst::read::{decode_freeform, parse_atom_content};
use super::mvhd::parse_mvhd;
use crate::config::ParseOptions;
use crate::error::Result;
use crate::macros::err;

use std::io::{Read, Seek};
use std::time::Duration;

pub(in crate::mp4) use atom_reader::AtomReader;

/// Walks every atom in the stream, collecting metadata and the movie duration
///
/// Containers are not bounded by their declared size. Entering one simply continues the walk with
/// its children, so the walk ends when the stream does. The declared sizes are only used to track
/// which containers are still open, for the nesting limit.
pub(crate) fn read_from<R>(data: &mut R, parse_options: ParseOptions) -> Result<Mp4File>
where
	R: Read + Seek,
{
	let mut reader = AtomReader::new(data);

	let mut ilst = Ilst::default();
	let mut duration = Duration::ZERO;
	// The end offsets of every container the current atom is within
	let mut open_containers = Vec::new();

	while let Some(atom) = reader.next()? {
		open_containers.retain(|&end| end > atom.start);

		match &atom.ident {
			b"moov" | b"udta" | b"ilst" => {
				enter_container(&atom, &mut open_containers, parse_options.max_depth)?;
			},
			b"meta" => {
				let _next_item_id = reader.read_u32()?;
				enter_container(&atom, &mut open_containers, parse_options.max_depth)?;
			},
			b"mvhd" => {
				duration = Duration::from_secs(parse_mvhd(&mut reader, &atom)?);
			},
			b"----" => {
				if let Some(field) = parse_freeform(&mut reader, &atom)? {
					decode_freeform(&field, &mut ilst)?;
				}
			},
			fourcc if is_wanted(*fourcc, parse_options) => {
				parse_atom_content(&mut reader, &atom, &mut ilst)?;
			},
			_ => skip_atom(&mut reader, &atom)?,
		}
	}

	log::debug!(
		"Finished reading, found {} metadata item(s) and a duration of {}s",
		ilst.len(),
		duration.as_secs()
	);

	Ok(Mp4File { ilst, duration })
}

// Only registered metadata atoms are decoded, and cover art and chapters can be opted out of
fn is_wanted(fourcc: [u8; 4], parse_options: ParseOptions) -> bool {
	match &fourcc {
		b"covr" => parse_options.read_cover_art,
		b"chpl" => parse_options.read_chapters,
		_ => ItemKey::from_fourcc(fourcc).is_some(),
	}
}

// Siblings close each other, so only containers that are actually nested count towards the limit
fn enter_container(
	atom: &AtomInfo,
	open_containers: &mut Vec<u64>,
	max_depth: usize,
) -> Result<()> {
	open_containers.push(atom.start.saturating_add(atom.len));
	if open_containers.len() > max_depth {
		err!(NestingTooDeep(max_depth));
	}

	log::trace!(
		"Entering container \"{}\" (depth {})",
		fourcc_display(atom.ident),
		open_containers.len()
	);
	Ok(())
}

/// Seeks the reader to the end of the atom
///
/// This should be used immediately after [`AtomReader::next`] to skip an unwanted atom.
fn skip_atom<R>(reader: &mut AtomReader<R>, atom: &AtomInfo) -> Result<()>
where
	R: Read + Seek,
{
	log::trace!(
		"Skipping atom \"{}\" ({} bytes)",
		fourcc_display(atom.ident),
		atom.content_len()
	);

	let Ok(offset) = i64::try_from(atom.content_len()) else {
		err!(TooMuchData);
	};

	reader.skip(offset)
}
