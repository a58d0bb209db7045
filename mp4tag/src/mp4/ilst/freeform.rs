use crate::error::Result;
use crate::macros::err;
use crate::mp4::atom_info::AtomInfo;
use crate::mp4::fourcc_display;
use crate::mp4::read::AtomReader;

use std::io::{Read, Seek};

/// The only `mean` we accept for freeform atoms
pub(crate) const ITUNES_MEAN: &[u8] = b"com.apple.iTunes";

// Every `mean`, `name`, and `data` body starts with 4 bytes we don't care about
const SUB_ATOM_PREFIX_LEN: usize = 4;

/// A named, possibly multi-valued, field recovered from a `----` atom
///
/// The name is kept as raw bytes, see [`AtomIdent::from_name`](super::atom::AtomIdent::from_name).
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct FreeformField {
	pub(crate) name: Vec<u8>,
	pub(crate) values: Vec<String>,
}

/// Reads a `----` atom
///
/// The reader is expected to be directly after the atom header, and will be left at the end of the
/// atom on success.
///
/// Returns `None` if the atom is well-formed, but isn't an iTunes field with a name and at least one
/// value.
pub(crate) fn parse_freeform<R>(
	reader: &mut AtomReader<R>,
	atom: &AtomInfo,
) -> Result<Option<FreeformField>>
where
	R: Read + Seek,
{
	let mut mean = None;
	let mut name = None;
	let mut values = Vec::new();

	let mut remaining = atom.content_len();
	while remaining > 0 {
		let Some(sub_atom) = reader.next()? else {
			err!(ShortRead);
		};

		let Some(rest) = remaining.checked_sub(sub_atom.len) else {
			err!(SizeMismatch);
		};
		remaining = rest;

		let body = reader.read_bytes(sub_atom.content_len())?;
		let Some(value) = body.get(SUB_ATOM_PREFIX_LEN..) else {
			err!(MalformedPayload(
				"Freeform sub-atom is too short to hold its version and flags"
			));
		};

		match &sub_atom.ident {
			b"mean" => mean = Some(value.to_vec()),
			b"name" => name = Some(value.to_vec()),
			b"data" => values.push(String::from_utf8_lossy(value).into_owned()),
			other => log::trace!("Skipping freeform sub-atom \"{}\"", fourcc_display(*other)),
		}
	}

	if mean.as_deref() != Some(ITUNES_MEAN) {
		log::warn!(
			"Ignoring freeform atom with an unknown mean: {:?}",
			mean.as_deref().map(String::from_utf8_lossy)
		);
		return Ok(None);
	}

	match name {
		Some(name) if !name.is_empty() && !values.is_empty() => {
			Ok(Some(FreeformField { name, values }))
		},
		_ => {
			log::warn!("Ignoring freeform atom without a name or values");
			Ok(None)
		},
	}
}
