pub(super) mod atom;
pub(super) mod chapter;
pub(super) mod constants;
pub(super) mod data_type;
pub(super) mod freeform;
pub(super) mod read;

use atom::{AtomData, AtomIdent};
use chapter::Chapter;
use constants::ItemKey;
use crate::picture::Picture;

use std::collections::HashMap;

macro_rules! impl_text_accessors {
	($($name:ident => $key:ident),+ $(,)?) => {
		$(
			paste::paste! {
				#[doc = "Returns the " $name " text, if present"]
				///
				#[doc = "See [`ItemKey::" $key "`] for the atoms this is read from."]
				pub fn $name(&self) -> Option<&str> {
					self.get_by_key(ItemKey::$key).and_then(AtomData::as_text)
				}
			}
		)+
	};
}

macro_rules! impl_pair_accessors {
	($($name:ident => $fourcc:literal),+ $(,)?) => {
		$(
			paste::paste! {
				#[doc = "Returns the " $name " number and total as `(number, total)`"]
				///
				/// Either is `0` if not present.
				pub fn $name(&self) -> (u32, u32) {
					(
						self.[<$name _number>]().unwrap_or(0),
						self.[<$name _total>]().unwrap_or(0),
					)
				}

				fn [<$name _number>](&self) -> Option<u32> {
					self.get(&AtomIdent::Fourcc(*$fourcc)).and_then(AtomData::as_integer)
				}

				#[doc = "Returns the " $name " total, if present"]
				pub fn [<$name _total>](&self) -> Option<u32> {
					self.get(&AtomIdent::Count(*$fourcc)).and_then(AtomData::as_integer)
				}
			}
		)+
	};
}

/// The decoded metadata of an MP4 file
///
/// Every value is stored under the [`AtomIdent`] it was found with. If an atom appears more than
/// once, the last occurrence wins.
///
/// ## Pictures
///
/// Only a single `covr` picture is kept. Its format comes from the `data` atom's content class, or
/// from sniffing the PNG signature when the class is implicit.
#[derive(Default, PartialEq, Eq, Debug, Clone)]
pub struct Ilst {
	pub(crate) atoms: HashMap<AtomIdent, AtomData>,
}

impl Ilst {
	/// Get the value stored under an identifier
	///
	/// # Examples
	///
	/// ```rust
	/// use mp4tag::mp4::{AtomIdent, Ilst};
	///
	/// let ilst = Ilst::default();
	/// assert!(ilst.get(&AtomIdent::Fourcc(*b"\xa9nam")).is_none());
	/// ```
	pub fn get(&self, ident: &AtomIdent) -> Option<&AtomData> {
		self.atoms.get(ident)
	}

	/// Insert a value, replacing any existing value with the same identifier
	pub(crate) fn insert(&mut self, ident: AtomIdent, data: AtomData) {
		if let Some(previous) = self.atoms.insert(ident, data) {
			log::trace!("Replaced an existing value: {previous:?}");
		}
	}

	/// Returns the number of stored values
	pub fn len(&self) -> usize {
		self.atoms.len()
	}

	/// Whether there are no stored values
	pub fn is_empty(&self) -> bool {
		self.atoms.is_empty()
	}

	/// Returns an iterator over every stored identifier and value, in no particular order
	pub fn items(&self) -> impl Iterator<Item = (&AtomIdent, &AtomData)> {
		self.atoms.iter()
	}

	/// Get the value for an [`ItemKey`]
	///
	/// Each of the key's atoms is tried in order, the first one present wins.
	///
	/// # Examples
	///
	/// ```rust
	/// use mp4tag::mp4::{Ilst, ItemKey};
	///
	/// let ilst = Ilst::default();
	///
	/// // Checks `©art`, then `©ART`
	/// assert!(ilst.get_by_key(ItemKey::Artist).is_none());
	/// ```
	pub fn get_by_key(&self, key: ItemKey) -> Option<&AtomData> {
		key.atoms()
			.iter()
			.find_map(|fourcc| self.get(&AtomIdent::Fourcc(*fourcc)))
	}

	impl_text_accessors!(
		title        => Title,
		artist       => Artist,
		album        => Album,
		album_artist => AlbumArtist,
		composer     => Composer,
		genre        => Genre,
		comment      => Comment,
		lyrics       => Lyrics,
		copyright    => Copyright,
		encoder      => Encoder,
		grouping     => Grouping,
	);

	impl_pair_accessors!(
		track => b"trkn",
		disc  => b"disk",
	);

	/// Returns the year, taken from the first four characters of the `©day` atom
	///
	/// # Examples
	///
	/// An `©day` of `2004-05-01T07:00:00Z` is reported as `Some(2004)`.
	pub fn year(&self) -> Option<u32> {
		let date = self.get_by_key(ItemKey::Year).and_then(AtomData::as_text)?;
		date.get(..4)?.parse().ok()
	}

	/// Returns the cover art, if present
	pub fn picture(&self) -> Option<&Picture> {
		self.get_by_key(ItemKey::Picture)
			.and_then(AtomData::as_picture)
	}

	/// Returns the chapters from the `chpl` atom
	///
	/// This is empty if there is no chapter list.
	pub fn chapters(&self) -> &[Chapter] {
		self.get_by_key(ItemKey::Chapters)
			.and_then(AtomData::as_chapters)
			.unwrap_or_default()
	}

	/// Get the value of an iTunes freeform field
	///
	/// Fields with multiple values are joined with `;`. Freeform names share their keys with every
	/// other atom, so a four character name (such as `MOOD`) is looked up as an atom identifier, and
	/// a field named after a registered atom replaces it.
	///
	/// # Examples
	///
	/// ```rust
	/// use mp4tag::mp4::Ilst;
	///
	/// let ilst = Ilst::default();
	///
	/// // For `----:com.apple.iTunes:iTunNORM`
	/// assert!(ilst.custom("iTunNORM").is_none());
	/// ```
	pub fn custom(&self, name: &str) -> Option<&str> {
		self.get(&AtomIdent::from_name(name.as_bytes()))
			.and_then(AtomData::as_text)
	}
}
