use super::Ilst;
use super::atom::{AtomData, AtomIdent};
use super::chapter::parse_chapters;
use super::constants::ItemKey;
use super::data_type::ContentClass;
use super::freeform::FreeformField;
use crate::error::Result;
use crate::macros::err;
use crate::mp4::atom_info::{ATOM_HEADER_LEN, AtomInfo};
use crate::mp4::read::AtomReader;
use crate::picture::{Picture, PictureFormat};

use std::io::{Read, Seek};

// The `data` atom's version (1) + flags/class (3) + locale (4)
const DATA_ATOM_PREAMBLE_LEN: usize = 8;

/// Reads the content of a registered metadata atom and stores the decoded value
///
/// The reader is expected to be directly after the atom header.
pub(in crate::mp4) fn parse_atom_content<R>(
	reader: &mut AtomReader<R>,
	atom: &AtomInfo,
	ilst: &mut Ilst,
) -> Result<()>
where
	R: Read + Seek,
{
	let content = reader.read_bytes(atom.content_len())?;
	decode_content(AtomIdent::Fourcc(atom.ident), Content::Atom(content), ilst)
}

/// Decodes and stores the values of a recognized freeform field
///
/// Multiple values are joined with `;`, and the result is treated as text. Freeform fields share
/// their keys with every other atom, so a field named `trkn` is subject to the same rules as the
/// `trkn` atom, and replaces it.
pub(in crate::mp4) fn decode_freeform(field: &FreeformField, ilst: &mut Ilst) -> Result<()> {
	let ident = AtomIdent::from_name(&field.name);
	log::debug!(
		"Found freeform field \"{ident}\" with {} value(s)",
		field.values.len()
	);

	decode_content(ident, Content::Resolved(field.values.join(";")), ilst)
}

enum Content {
	// An atom holding a `data` atom
	Atom(Vec<u8>),
	// Text that was already extracted from a freeform atom
	Resolved(String),
}

fn decode_content(ident: AtomIdent, content: Content, ilst: &mut Ilst) -> Result<()> {
	let (mut class, payload) = match content {
		Content::Atom(content) => unwrap_data_atom(content)?,
		Content::Resolved(text) => (ContentClass::Text, text.into_bytes()),
	};

	if let AtomIdent::Fourcc(fourcc) = ident {
		match &fourcc {
			b"trkn" | b"disk" => {
				let (Some(&number), Some(&total)) = (payload.get(3), payload.get(5)) else {
					err!(MalformedPayload(
						"Track/disc atom is too short to hold a number and total"
					));
				};

				ilst.insert(AtomIdent::Fourcc(fourcc), AtomData::Integer(u32::from(number)));
				ilst.insert(AtomIdent::Count(fourcc), AtomData::Integer(u32::from(total)));
				return Ok(());
			},
			b"chpl" => class = ContentClass::Chapter,
			b"covr" if class == ContentClass::Implicit => {
				if PictureFormat::sniff(&payload) == Some(PictureFormat::Png) {
					class = ContentClass::Png;
				}
			},
			_ => {},
		}
	}

	let value = match class {
		ContentClass::Implicit => {
			match ident {
				AtomIdent::Fourcc(fourcc) if ItemKey::from_fourcc(fourcc).is_some() => {
					err!(UnresolvedRequiredField(fourcc))
				},
				_ => log::debug!("Dropping \"{ident}\", its content class is implicit"),
			}

			return Ok(());
		},
		ContentClass::Text => AtomData::Text(String::from_utf8_lossy(&payload).into_owned()),
		ContentClass::Integer => match payload.first() {
			Some(&value) => AtomData::Integer(u32::from(value)),
			None => err!(MalformedPayload("Integer atom has no content")),
		},
		ContentClass::Jpeg => AtomData::Picture(Picture::new(PictureFormat::Jpeg, payload)),
		ContentClass::Png => AtomData::Picture(Picture::new(PictureFormat::Png, payload)),
		ContentClass::Chapter => AtomData::Chapters(parse_chapters(&payload)),
	};

	ilst.insert(ident, value);
	Ok(())
}

// Returns the content class and payload of the `data` atom held by a metadata atom
fn unwrap_data_atom(mut content: Vec<u8>) -> Result<(ContentClass, Vec<u8>)> {
	// The inner `data` atom's header is not validated, only skipped
	if content.len() < ATOM_HEADER_LEN as usize {
		err!(MalformedPayload(
			"Metadata atom is too short to hold a \"data\" atom"
		));
	}

	let Some(class_bytes) = content.get(9..12) else {
		err!(MalformedPayload(
			"\"data\" atom is too short to hold a content class"
		));
	};

	let code = u32::from_be_bytes([0, class_bytes[0], class_bytes[1], class_bytes[2]]);
	let Some(class) = ContentClass::from_code(code) else {
		err!(UnrecognizedContentClass(code));
	};

	let payload_start = ATOM_HEADER_LEN as usize + DATA_ATOM_PREAMBLE_LEN;
	if content.len() < payload_start {
		err!(MalformedPayload(
			"\"data\" atom is too short to hold its version, flags, and locale"
		));
	}

	Ok((class, content.split_off(payload_start)))
}
