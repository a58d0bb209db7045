/// The content classes a `data` atom's payload can be interpreted as
///
/// Most are selected by the class code in the `data` atom's type indicator, see [`ContentClass::from_code`].
/// [`ContentClass::Chapter`] has no code, it is forced for `chpl` atoms.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) enum ContentClass {
	/// Reserved for use where no type needs to be indicated, the atom name determines the type
	Implicit,
	/// UTF-8 string without any count or NULL terminator
	Text,
	/// A JPEG in a JFIF wrapper
	Jpeg,
	/// A PNG in a PNG wrapper
	Png,
	/// A single unsigned byte
	Integer,
	/// A Nero chapter list
	Chapter,
}

// https://developer.apple.com/documentation/quicktime-file-format/well-known_types
//
// Only the classes we know how to decode are listed, anything else is rejected.
const CONTENT_CLASSES: [(u32, ContentClass); 5] = [
	(0, ContentClass::Implicit),
	(1, ContentClass::Text),
	(13, ContentClass::Jpeg),
	(14, ContentClass::Png),
	(21, ContentClass::Integer),
];

impl ContentClass {
	/// Look up a class from the 24-bit code of a `data` atom's type indicator
	pub(crate) fn from_code(code: u32) -> Option<Self> {
		CONTENT_CLASSES
			.iter()
			.find(|(class_code, _)| *class_code == code)
			.map(|(_, class)| *class)
	}
}
