use std::collections::HashMap;
use std::sync::LazyLock;

/// Semantic names for the metadata atoms mp4tag understands
///
/// Multiple atoms can map to the same key (for example, both `©art` and `©ART` are an [`ItemKey::Artist`]).
/// See [`ItemKey::atoms`] for the atoms behind a key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ItemKey {
	/// `©alb`
	Album,
	/// `©art` or `©ART`
	Artist,
	/// `aART`
	AlbumArtist,
	/// `©day`
	Year,
	/// `©nam`
	Title,
	/// `©gen`
	Genre,
	/// `trkn`
	Track,
	/// `©wrt`
	Composer,
	/// `©too`
	Encoder,
	/// `cprt`
	Copyright,
	/// `covr`
	Picture,
	/// `©grp`
	Grouping,
	/// `keyw`
	Keyword,
	/// `©lyr`
	Lyrics,
	/// `©cmt`
	Comment,
	/// `©mvn`
	Movement,
	/// `©mvc`
	MovementTotal,
	/// `©mvi`
	MovementIndex,
	/// `shwm`
	ShowMovement,
	/// `tmpo`
	Tempo,
	/// `cpil`
	Compilation,
	/// `disk`
	Disc,
	/// `chpl`
	Chapters,
	/// `catg`
	Category,
}

/// Every atom that is decoded as metadata, in lookup order
///
/// `----` is not listed, freeform atoms carry their own names.
pub(crate) const TAG_REGISTRY: [([u8; 4], ItemKey); 25] = [
	(*b"\xa9alb", ItemKey::Album),
	(*b"\xa9art", ItemKey::Artist),
	(*b"\xa9ART", ItemKey::Artist),
	(*b"aART", ItemKey::AlbumArtist),
	(*b"\xa9day", ItemKey::Year),
	(*b"\xa9nam", ItemKey::Title),
	(*b"\xa9gen", ItemKey::Genre),
	(*b"trkn", ItemKey::Track),
	(*b"\xa9wrt", ItemKey::Composer),
	(*b"\xa9too", ItemKey::Encoder),
	(*b"cprt", ItemKey::Copyright),
	(*b"covr", ItemKey::Picture),
	(*b"\xa9grp", ItemKey::Grouping),
	(*b"keyw", ItemKey::Keyword),
	(*b"\xa9lyr", ItemKey::Lyrics),
	(*b"\xa9cmt", ItemKey::Comment),
	(*b"\xa9mvn", ItemKey::Movement),
	(*b"\xa9mvc", ItemKey::MovementTotal),
	(*b"\xa9mvi", ItemKey::MovementIndex),
	(*b"shwm", ItemKey::ShowMovement),
	(*b"tmpo", ItemKey::Tempo),
	(*b"cpil", ItemKey::Compilation),
	(*b"disk", ItemKey::Disc),
	(*b"chpl", ItemKey::Chapters),
	(*b"catg", ItemKey::Category),
];

static REVERSE_REGISTRY: LazyLock<HashMap<ItemKey, Vec<[u8; 4]>>> = LazyLock::new(|| {
	let mut map: HashMap<ItemKey, Vec<[u8; 4]>> = HashMap::new();
	for (fourcc, key) in TAG_REGISTRY {
		map.entry(key).or_default().push(fourcc);
	}

	map
});

impl ItemKey {
	/// Look up the key for an atom identifier
	///
	/// # Examples
	///
	/// ```rust
	/// use mp4tag::mp4::ItemKey;
	///
	/// assert_eq!(ItemKey::from_fourcc(*b"\xa9ART"), Some(ItemKey::Artist));
	/// assert_eq!(ItemKey::from_fourcc(*b"mdat"), None);
	/// ```
	pub fn from_fourcc(fourcc: [u8; 4]) -> Option<Self> {
		TAG_REGISTRY
			.iter()
			.find(|(ident, _)| *ident == fourcc)
			.map(|(_, key)| *key)
	}

	/// The atoms that map to this key, in lookup order
	///
	/// # Examples
	///
	/// ```rust
	/// use mp4tag::mp4::ItemKey;
	///
	/// assert_eq!(ItemKey::Artist.atoms(), &[*b"\xa9art", *b"\xa9ART"]);
	/// ```
	pub fn atoms(self) -> &'static [[u8; 4]] {
		match REVERSE_REGISTRY.get(&self) {
			Some(atoms) => atoms,
			None => &[],
		}
	}

	/// A short name for the key
	///
	/// # Examples
	///
	/// ```rust
	/// use mp4tag::mp4::ItemKey;
	///
	/// assert_eq!(ItemKey::AlbumArtist.as_str(), "album_artist");
	/// ```
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Album => "album",
			Self::Artist => "artist",
			Self::AlbumArtist => "album_artist",
			Self::Year => "year",
			Self::Title => "title",
			Self::Genre => "genre",
			Self::Track => "track",
			Self::Composer => "composer",
			Self::Encoder => "encoder",
			Self::Copyright => "copyright",
			Self::Picture => "picture",
			Self::Grouping => "grouping",
			Self::Keyword => "keyword",
			Self::Lyrics => "lyrics",
			Self::Comment => "comment",
			Self::Movement => "movement",
			Self::MovementTotal => "total_mov",
			Self::MovementIndex => "mov_index",
			Self::ShowMovement => "showMovement",
			Self::Tempo => "tempo",
			Self::Compilation => "compilation",
			Self::Disc => "disc",
			Self::Chapters => "chapter",
			Self::Category => "catg",
		}
	}
}
