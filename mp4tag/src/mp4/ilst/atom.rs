use super::chapter::Chapter;
use crate::mp4::fourcc_display;
use crate::picture::Picture;

use std::fmt::{Display, Formatter};

/// The key a decoded value is stored under in an [`Ilst`](super::Ilst)
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub enum AtomIdent {
	/// A four byte identifier
	///
	/// Many FOURCCs start with `0xA9` (©), and should be human-readable.
	Fourcc([u8; 4]),
	/// The total count paired with a `trkn` or `disk` number
	///
	/// Displayed as `<fourcc>_count`, for example `trkn_count`.
	Count([u8; 4]),
	/// The name of a freeform (`----`) atom
	///
	/// Only names that don't resolve to an atom identifier are stored this way, see
	/// [`Ilst::custom`](super::Ilst::custom).
	///
	/// # Example
	///
	/// ```text
	/// ----:com.apple.iTunes:SUBTITLE
	///                       ───┬────
	///                          ╰name
	/// ```
	Freeform(String),
}

impl AtomIdent {
	/// Resolve the name of a freeform field
	///
	/// Freeform names share a key space with every other atom. A four byte name is the atom with
	/// that identifier, and a four byte name followed by `_count` is its paired total. Anything else
	/// is [`AtomIdent::Freeform`].
	pub(crate) fn from_name(name: &[u8]) -> Self {
		if let Ok(fourcc) = <[u8; 4]>::try_from(name) {
			return Self::Fourcc(fourcc);
		}

		if let Some((fourcc, b"_count")) = name.split_first_chunk::<4>() {
			return Self::Count(*fourcc);
		}

		Self::Freeform(String::from_utf8_lossy(name).into_owned())
	}
}

impl Display for AtomIdent {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Fourcc(fourcc) => f.write_str(&fourcc_display(*fourcc)),
			Self::Count(fourcc) => write!(f, "{}_count", fourcc_display(*fourcc)),
			Self::Freeform(name) => f.write_str(name),
		}
	}
}

/// A decoded metadata value
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum AtomData {
	/// Text, including joined freeform values
	Text(String),
	/// A small integer, such as a track number
	Integer(u32),
	/// Cover art
	Picture(Picture),
	/// The entries of a `chpl` atom
	Chapters(Vec<Chapter>),
}

impl AtomData {
	/// Returns the text, if this is [`AtomData::Text`]
	pub fn as_text(&self) -> Option<&str> {
		match self {
			Self::Text(text) => Some(text.as_str()),
			_ => None,
		}
	}

	/// Returns the integer, if this is [`AtomData::Integer`]
	pub fn as_integer(&self) -> Option<u32> {
		match self {
			Self::Integer(value) => Some(*value),
			_ => None,
		}
	}

	/// Returns the picture, if this is [`AtomData::Picture`]
	pub fn as_picture(&self) -> Option<&Picture> {
		match self {
			Self::Picture(picture) => Some(picture),
			_ => None,
		}
	}

	/// Returns the chapters, if this is [`AtomData::Chapters`]
	pub fn as_chapters(&self) -> Option<&[Chapter]> {
		match self {
			Self::Chapters(chapters) => Some(chapters.as_slice()),
			_ => None,
		}
	}
}
