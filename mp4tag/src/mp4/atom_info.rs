use crate::error::Result;
use crate::macros::err;
use crate::mp4::fourcc_display;
use crate::util::io::SeekStreamLen;

use std::io::{ErrorKind, Read, Seek};

use byteorder::{BigEndian, ReadBytesExt};

pub(super) const SIZE_LEN: u64 = 4;
pub(super) const IDENTIFIER_LEN: u64 = 4;
pub(super) const ATOM_HEADER_LEN: u64 = SIZE_LEN + IDENTIFIER_LEN;

#[derive(Debug)]
pub(crate) struct AtomInfo {
	pub(crate) start: u64,
	pub(crate) len: u64,
	pub(crate) extended: bool,
	pub(crate) ident: [u8; 4],
}

impl AtomInfo {
	/// Reads an atom header, leaving the reader at the start of the atom's content
	///
	/// Returns `None` if the stream ends exactly where the header should begin.
	pub(crate) fn read<R>(data: &mut R) -> Result<Option<Self>>
	where
		R: Read + Seek,
	{
		let start = data.stream_position()?;

		let Some(len_raw) = read_len_or_eof(data)? else {
			return Ok(None);
		};

		let mut identifier = [0; IDENTIFIER_LEN as usize];
		data.read_exact(&mut identifier)?;

		let (len, extended) = match len_raw {
			// The atom extends to the end of the file
			0 => {
				let end = data.stream_len_hack()?;
				(end.saturating_sub(start), false)
			},
			// There's an extended length
			1 => (data.read_u64::<BigEndian>()?, true),
			_ => (u64::from(len_raw), false),
		};

		let atom = Self {
			start,
			len,
			extended,
			ident: identifier,
		};

		// `len` includes itself and the identifier
		if atom.len < atom.header_size() {
			err!(BadAtom("Found an invalid length (smaller than its header)"));
		}

		log::trace!(
			"Found atom \"{}\" at {}, length {}",
			fourcc_display(atom.ident),
			atom.start,
			atom.len
		);

		Ok(Some(atom))
	}

	pub(crate) fn header_size(&self) -> u64 {
		if !self.extended {
			return ATOM_HEADER_LEN;
		}

		ATOM_HEADER_LEN + 8
	}

	/// The length of the atom's content, excluding its header
	pub(crate) fn content_len(&self) -> u64 {
		self.len - self.header_size()
	}
}

// Running out of data before the first byte of the size is how the stream signals
// that there are no more atoms. Running out anywhere after that is a truncated header.
fn read_len_or_eof<R>(data: &mut R) -> Result<Option<u32>>
where
	R: Read,
{
	let mut len = [0; SIZE_LEN as usize];
	let mut filled = 0;

	while filled < len.len() {
		match data.read(&mut len[filled..]) {
			Ok(0) => break,
			Ok(n) => filled += n,
			Err(e) if e.kind() == ErrorKind::Interrupted => {},
			Err(e) => return Err(e.into()),
		}
	}

	match filled {
		0 => Ok(None),
		4 => Ok(Some(u32::from_be_bytes(len))),
		_ => err!(ShortRead),
	}
}
