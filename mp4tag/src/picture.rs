//! Cover art found in `covr` atoms

use std::fmt::{Debug, Formatter};

/// The image formats a `covr` atom can be decoded into
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PictureFormat {
	/// JPEG image
	Jpeg,
	/// PNG image
	Png,
}

impl PictureFormat {
	/// The 8 byte signature every PNG file begins with
	pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

	/// Get the MIME type of the format
	///
	/// # Examples
	///
	/// ```rust
	/// use mp4tag::picture::PictureFormat;
	///
	/// assert_eq!(PictureFormat::Png.mime_type(), "image/png");
	/// ```
	pub fn mime_type(self) -> &'static str {
		match self {
			Self::Jpeg => "image/jpeg",
			Self::Png => "image/png",
		}
	}

	/// Get the usual file extension of the format, without a leading `.`
	///
	/// # Examples
	///
	/// ```rust
	/// use mp4tag::picture::PictureFormat;
	///
	/// assert_eq!(PictureFormat::Jpeg.extension(), "jpeg");
	/// ```
	pub fn extension(self) -> &'static str {
		match self {
			Self::Jpeg => "jpeg",
			Self::Png => "png",
		}
	}

	/// Attempt to identify a format from the start of the image data
	///
	/// Only PNG is recognized, JPEG data is not sniffed.
	pub(crate) fn sniff(data: &[u8]) -> Option<Self> {
		if data.starts_with(&Self::PNG_SIGNATURE) {
			return Some(Self::Png);
		}

		None
	}
}

/// A picture stored in a `covr` atom
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Picture {
	pub(crate) format: PictureFormat,
	pub(crate) data: Vec<u8>,
}

impl Debug for Picture {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Picture")
			.field("format", &self.format)
			.field("data", &format_args!("<{} bytes>", self.data.len()))
			.finish()
	}
}

impl Picture {
	/// Create a new `Picture`
	///
	/// # Examples
	///
	/// ```rust
	/// use mp4tag::picture::{Picture, PictureFormat};
	///
	/// let picture = Picture::new(PictureFormat::Jpeg, vec![0xFF, 0xD8, 0xFF]);
	/// assert_eq!(picture.mime_type(), "image/jpeg");
	/// ```
	pub fn new(format: PictureFormat, data: Vec<u8>) -> Self {
		Self { format, data }
	}

	/// Returns the [`PictureFormat`]
	pub fn format(&self) -> PictureFormat {
		self.format
	}

	/// Returns the MIME type, such as `image/png`
	pub fn mime_type(&self) -> &'static str {
		self.format.mime_type()
	}

	/// Returns the file extension, such as `png`
	pub fn extension(&self) -> &'static str {
		self.format.extension()
	}

	/// Returns the raw image data
	pub fn data(&self) -> &[u8] {
		&self.data
	}

	/// Consumes the `Picture`, returning the raw image data
	pub fn into_data(self) -> Vec<u8> {
		self.data
	}
}
