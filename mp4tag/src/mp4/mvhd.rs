use super::atom_info::AtomInfo;
use super::read::AtomReader;
use crate::error::Result;
use crate::macros::err;

use std::io::{Read, Seek};

// Version (1) + flags (3) + creation/modification times (4 each) + timescale (4) + duration (4)
const V0_FIELDS_LEN: u64 = 20;
// Version (1) + flags (3) + creation/modification times (8 each) + timescale (4) + duration (8)
const V1_FIELDS_LEN: u64 = 32;

/// Reads an `mvhd` atom, returning the movie duration in whole seconds
///
/// The reader is expected to be directly after the atom header, and is left at the start of the
/// next atom, no matter how many of the declared bytes were actually interpreted.
pub(super) fn parse_mvhd<R>(reader: &mut AtomReader<R>, atom: &AtomInfo) -> Result<u64>
where
	R: Read + Seek,
{
	let version = reader.read_u8()?;
	let _flags = reader.read_u24()?;

	let (timescale, duration, fields_len) = if version == 0 {
		// We don't care about the creation and modification times
		reader.skip(8)?;

		let timescale = reader.read_u32()?;
		let duration = reader.read_u32()?;

		(timescale, u64::from(duration), V0_FIELDS_LEN)
	} else {
		// Anything else is assumed to use 64-bit times
		reader.skip(16)?;

		let timescale = reader.read_u32()?;
		let duration = reader.read_u64()?;

		(timescale, duration, V1_FIELDS_LEN)
	};

	let Some(remaining) = atom.content_len().checked_sub(fields_len) else {
		err!(SizeMismatch);
	};

	let seconds = if timescale == 0 {
		log::warn!("Found an \"mvhd\" atom with a timescale of 0, assuming no duration");
		0
	} else {
		(duration as f64 / f64::from(timescale)) as u64
	};

	log::debug!(
		"Movie header (version {version}): {duration} ticks at {timescale}/s, {seconds}s"
	);

	let Ok(remaining) = i64::try_from(remaining) else {
		err!(TooMuchData);
	};

	reader.skip(remaining)?;
	Ok(seconds)
}
