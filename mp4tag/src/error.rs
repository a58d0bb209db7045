//! Contains the errors that can arise within mp4tag
//!
//! The primary error is [`Mp4TagError`]. The type of error is determined by [`ErrorKind`],
//! which can be extended at any time.

use crate::mp4::fourcc_display;

use std::collections::TryReserveError;
use std::fmt::{Debug, Display, Formatter};

/// Alias for `Result<T, Mp4TagError>`
pub type Result<T> = std::result::Result<T, Mp4TagError>;

/// The types of errors that can occur
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
	// Stream related errors
	/// The stream ended before a complete field could be read
	///
	/// Running out of data exactly at an atom boundary is *not* an error, it simply ends the parse.
	ShortRead,
	/// Attempting to read an abnormally large amount of data
	///
	/// See [`GlobalOptions::allocation_limit`](crate::config::GlobalOptions::allocation_limit).
	TooMuchData,

	// Atom structure related errors
	/// Expected the data to be a different size than provided
	///
	/// This occurs when the declared size of a (sub-)atom does not fit within the bounds of its parent,
	/// or is too small to hold the fields it must contain.
	SizeMismatch,
	/// Arises when an atom header is invalid
	BadAtom(&'static str),
	/// Container atoms were nested deeper than [`ParseOptions::max_depth`](crate::config::ParseOptions::max_depth)
	NestingTooDeep(usize),

	// Atom content related errors
	/// A `data` atom declared a content class that isn't known
	UnrecognizedContentClass(u32),
	/// An atom's payload is shorter than its layout requires
	MalformedPayload(&'static str),
	/// A known atom used the implicit content class, and its type could not be determined
	UnresolvedRequiredField([u8; 4]),

	// Conversions for external errors
	/// Represents all cases of [`std::io::Error`] other than an unexpected EOF.
	Io(std::io::Error),
	/// Failure to allocate enough memory
	Alloc(TryReserveError),
}

/// Errors that could occur within mp4tag
pub struct Mp4TagError {
	pub(crate) kind: ErrorKind,
}

impl Mp4TagError {
	/// Create an `Mp4TagError` from an [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use mp4tag::error::{ErrorKind, Mp4TagError};
	///
	/// let short_read = Mp4TagError::new(ErrorKind::ShortRead);
	/// ```
	#[must_use]
	pub const fn new(kind: ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use mp4tag::error::{ErrorKind, Mp4TagError};
	///
	/// let short_read = Mp4TagError::new(ErrorKind::ShortRead);
	/// if let ErrorKind::ShortRead = short_read.kind() {
	/// 	println!("The stream was truncated!");
	/// }
	/// ```
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}
}

impl std::error::Error for Mp4TagError {}

impl Debug for Mp4TagError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.kind)
	}
}

impl From<std::io::Error> for Mp4TagError {
	fn from(input: std::io::Error) -> Self {
		// `read_exact` reports a truncated stream this way
		if input.kind() == std::io::ErrorKind::UnexpectedEof {
			return Self {
				kind: ErrorKind::ShortRead,
			};
		}

		Self {
			kind: ErrorKind::Io(input),
		}
	}
}

impl From<std::collections::TryReserveError> for Mp4TagError {
	fn from(input: TryReserveError) -> Self {
		Self {
			kind: ErrorKind::Alloc(input),
		}
	}
}

impl Display for Mp4TagError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.kind {
			// Conversions
			ErrorKind::Io(ref err) => write!(f, "{err}"),
			ErrorKind::Alloc(ref err) => write!(f, "{err}"),

			ErrorKind::ShortRead => write!(f, "Reached the end of the stream in the middle of a field"),
			ErrorKind::TooMuchData => write!(
				f,
				"Attempted to read an abnormally large amount of data"
			),
			ErrorKind::SizeMismatch => write!(
				f,
				"Encountered an invalid atom size, either too big or too small to be valid"
			),
			ErrorKind::BadAtom(message) => write!(f, "MP4 Atom: {message}"),
			ErrorKind::NestingTooDeep(depth) => write!(
				f,
				"MP4 Atom: Container atoms nested deeper than the limit of {depth}"
			),
			ErrorKind::UnrecognizedContentClass(class) => {
				write!(f, "MP4 Atom: Unrecognized content class {class}")
			},
			ErrorKind::MalformedPayload(message) => write!(f, "MP4 Atom: {message}"),
			ErrorKind::UnresolvedRequiredField(fourcc) => write!(
				f,
				"MP4 Atom: Unable to resolve the implicit content class of \"{}\"",
				fourcc_display(fourcc)
			),
		}
	}
}
