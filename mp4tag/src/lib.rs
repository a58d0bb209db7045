//! Read metadata from MP4 (M4A, M4B, M4V, ...) files.
//!
//! mp4tag walks the atom tree of a file, collecting:
//!
//! * The iTunes-style metadata atoms in `moov.udta.meta.ilst`
//! * Freeform `----:com.apple.iTunes:<name>` fields
//! * A Nero `chpl` chapter list
//! * The duration from the `mvhd` movie header
//!
//! Nothing is ever written.
//!
//! # Examples
//!
//! ## Using a path
//!
//! ```rust,no_run
//! # fn main() -> mp4tag::error::Result<()> {
//! let m4a_file = mp4tag::read_from_path("song.m4a")?;
//!
//! let ilst = m4a_file.ilst();
//! println!("Title: {:?}", ilst.title());
//! println!("Track: {:?}", ilst.track());
//! println!("Duration: {}s", m4a_file.duration().as_secs());
//! # Ok(()) }
//! ```
//!
//! ## Using an existing reader
//!
//! ```rust,no_run
//! # fn main() -> mp4tag::error::Result<()> {
//! use mp4tag::config::ParseOptions;
//! use mp4tag::mp4::Mp4File;
//!
//! use std::fs::File;
//!
//! let mut reader = File::open("song.m4a")?;
//!
//! // Cover art can be large, skip it
//! let parse_options = ParseOptions::new().read_cover_art(false);
//! let m4a_file = Mp4File::read_from(&mut reader, parse_options)?;
//! # Ok(()) }
//! ```
//!
//! ## Freeform fields
//!
//! ```rust,no_run
//! # fn main() -> mp4tag::error::Result<()> {
//! let m4a_file = mp4tag::read_from_path("song.m4a")?;
//!
//! // ----:com.apple.iTunes:iTunNORM
//! if let Some(normalization) = m4a_file.ilst().custom("iTunNORM") {
//! 	println!("Normalization: {normalization}");
//! }
//! # Ok(()) }
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod config;
pub mod error;
pub(crate) mod macros;
pub mod mp4;
pub mod picture;
mod util;

use crate::config::ParseOptions;
use crate::error::Result;
use crate::mp4::Mp4File;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Read an [`Mp4File`] from a [`File`], using the default [`ParseOptions`]
///
/// # Errors
///
/// See [`Mp4File::read_from`]
///
/// # Examples
///
/// ```rust,no_run
/// use mp4tag::read_from;
/// use std::fs::File;
///
/// # fn main() -> mp4tag::error::Result<()> {
/// # let path = "song.m4a";
/// let mut file = File::open(path)?;
///
/// let parsed_file = read_from(&mut file)?;
/// # Ok(()) }
/// ```
pub fn read_from(file: &mut File) -> Result<Mp4File> {
	Mp4File::read_from(&mut BufReader::new(file), ParseOptions::new())
}

/// Read an [`Mp4File`] from a path, using the default [`ParseOptions`]
///
/// # Errors
///
/// * The file could not be opened
/// * See [`Mp4File::read_from`]
///
/// # Examples
///
/// ```rust,no_run
/// # fn main() -> mp4tag::error::Result<()> {
/// let parsed_file = mp4tag::read_from_path("song.m4a")?;
/// # Ok(()) }
/// ```
pub fn read_from_path<P>(path: P) -> Result<Mp4File>
where
	P: AsRef<Path>,
{
	let mut file = File::open(path)?;
	read_from(&mut file)
}

/// Common imports
pub mod prelude {
	pub use crate::config::ParseOptions;
	pub use crate::mp4::{AtomData, AtomIdent, Ilst, ItemKey, Mp4File};
	pub use crate::picture::{Picture, PictureFormat};
}
