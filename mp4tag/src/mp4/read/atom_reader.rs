use crate::error::{ErrorKind, Mp4TagError, Result};
use crate::macros::try_vec;
use crate::mp4::atom_info::AtomInfo;

use std::io::{Read, Seek, SeekFrom};

use byteorder::{BigEndian, ReadBytesExt};

/// A reader for an MP4 file
///
/// This is a thin wrapper around a reader that provides:
///
/// * [`Self::next`] to read atom headers.
/// * `read_u*` methods to read integers without needing to specify the endianness.
/// * [`Self::read_bytes`], which respects the global allocation limit.
pub(crate) struct AtomReader<R>
where
	R: Read + Seek,
{
	reader: R,
}

impl<R> AtomReader<R>
where
	R: Read + Seek,
{
	/// Create a new `AtomReader`
	pub(crate) fn new(reader: R) -> Self {
		Self { reader }
	}

	pub(crate) fn read_u8(&mut self) -> std::io::Result<u8> {
		self.reader.read_u8()
	}

	pub(crate) fn read_u24(&mut self) -> std::io::Result<u32> {
		self.reader.read_u24::<BigEndian>()
	}

	pub(crate) fn read_u32(&mut self) -> std::io::Result<u32> {
		self.reader.read_u32::<BigEndian>()
	}

	pub(crate) fn read_u64(&mut self) -> std::io::Result<u64> {
		self.reader.read_u64::<BigEndian>()
	}

	/// Read exactly `len` bytes
	pub(crate) fn read_bytes(&mut self, len: u64) -> Result<Vec<u8>> {
		let len = usize::try_from(len).map_err(|_| Mp4TagError::new(ErrorKind::TooMuchData))?;

		let mut content = try_vec![0; len];
		self.reader.read_exact(&mut content)?;

		Ok(content)
	}

	/// Move the stream `offset` bytes relative to the current position
	pub(crate) fn skip(&mut self, offset: i64) -> Result<()> {
		self.reader.seek(SeekFrom::Current(offset))?;
		Ok(())
	}

	/// Read the next atom header
	///
	/// This will leave the reader at the beginning of the atom content, or return `None` if
	/// the stream has no more atoms.
	pub(crate) fn next(&mut self) -> Result<Option<AtomInfo>> {
		AtomInfo::read(&mut self.reader)
	}
}

impl<R> Seek for AtomReader<R>
where
	R: Read + Seek,
{
	fn seek(&mut self, pos: SeekFrom) -> std::io::Result<u64> {
		self.reader.seek(pos)
	}
}
