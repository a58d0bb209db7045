//! MP4 specific items
//!
//! ## File notes
//!
//! Only the iTunes-style `moov.udta.meta.ilst` metadata atoms, the `----` freeform atoms,
//! the Nero `chpl` chapter list, and the `mvhd` movie header are interpreted. Everything else
//! is skipped without being read.
mod atom_info;
pub(crate) mod ilst;
mod mvhd;
mod read;

use crate::config::ParseOptions;
use crate::error::Result;

use std::io::{Read, Seek};
use std::time::Duration;

// Exports

pub use ilst::Ilst;
pub use ilst::atom::{AtomData, AtomIdent};
pub use ilst::chapter::Chapter;
pub use ilst::constants::ItemKey;

/// Renders a fourcc for display
///
/// Identifiers are treated as Latin-1, so `0xA9` is displayed as `©`.
pub(crate) fn fourcc_display(fourcc: [u8; 4]) -> String {
	fourcc.iter().copied().map(char::from).collect()
}

/// An MP4 file's metadata
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Mp4File {
	/// Every decoded metadata atom
	pub(crate) ilst: Ilst,
	/// The duration from the last `mvhd` atom, truncated to whole seconds
	pub(crate) duration: Duration,
}

impl Mp4File {
	/// Read an `Mp4File` from a reader
	///
	/// The reader is expected to be positioned at the start of the container. Its position
	/// is unspecified once this returns.
	///
	/// # Errors
	///
	/// Any structurally invalid atom aborts the read, see [`ErrorKind`](crate::error::ErrorKind).
	/// No partially read metadata is returned alongside an error.
	///
	/// # Examples
	///
	/// ```rust,no_run
	/// use mp4tag::config::ParseOptions;
	/// use mp4tag::mp4::Mp4File;
	///
	/// # fn main() -> mp4tag::error::Result<()> {
	/// let mut m4a_reader = std::fs::File::open("song.m4a")?;
	/// let m4a_file = Mp4File::read_from(&mut m4a_reader, ParseOptions::new())?;
	///
	/// println!("Duration: {}s", m4a_file.duration().as_secs());
	/// # Ok(()) }
	/// ```
	pub fn read_from<R>(reader: &mut R, parse_options: ParseOptions) -> Result<Self>
	where
		R: Read + Seek,
	{
		read::read_from(reader, parse_options)
	}

	/// Returns the decoded metadata atoms
	pub fn ilst(&self) -> &Ilst {
		&self.ilst
	}

	/// Consumes the file, returning the decoded metadata atoms
	pub fn into_ilst(self) -> Ilst {
		self.ilst
	}

	/// Returns the duration reported by the movie header
	///
	/// This is [`Duration::ZERO`] if no `mvhd` atom was found.
	pub fn duration(&self) -> Duration {
		self.duration
	}
}
