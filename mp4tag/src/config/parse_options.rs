/// Options to control how mp4tag parses a file
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct ParseOptions {
	pub(crate) read_cover_art: bool,
	pub(crate) read_chapters: bool,
	pub(crate) max_depth: usize,
}

impl Default for ParseOptions {
	/// The default implementation for `ParseOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// ParseOptions {
	/// 	read_cover_art: true,
	/// 	read_chapters: true,
	/// 	max_depth: 16,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}

impl ParseOptions {
	/// Default maximum container nesting depth
	pub const DEFAULT_MAX_DEPTH: usize = 16;

	/// Creates a new `ParseOptions`, alias for `Default` implementation
	///
	/// See also: [`ParseOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use mp4tag::config::ParseOptions;
	///
	/// let parsing_options = ParseOptions::new();
	/// ```
	#[must_use]
	pub const fn new() -> Self {
		Self {
			read_cover_art: true,
			read_chapters: true,
			max_depth: Self::DEFAULT_MAX_DEPTH,
		}
	}

	/// Whether or not to read cover art
	///
	/// When disabled, `covr` atoms are skipped without being read.
	///
	/// # Examples
	///
	/// ```rust
	/// use mp4tag::config::ParseOptions;
	///
	/// // Reading cover art is expensive, and I do not need it!
	/// let parsing_options = ParseOptions::new().read_cover_art(false);
	/// ```
	pub fn read_cover_art(&mut self, read_cover_art: bool) -> Self {
		self.read_cover_art = read_cover_art;
		*self
	}

	/// Whether or not to read the `chpl` chapter list
	///
	/// # Examples
	///
	/// ```rust
	/// use mp4tag::config::ParseOptions;
	///
	/// let parsing_options = ParseOptions::new().read_chapters(false);
	/// ```
	pub fn read_chapters(&mut self, read_chapters: bool) -> Self {
		self.read_chapters = read_chapters;
		*self
	}

	/// The maximum number of container atoms (`moov`, `udta`, `meta`, `ilst`) to descend into
	///
	/// Real files need no more than a handful. Exceeding the limit fails with
	/// [`ErrorKind::NestingTooDeep`](crate::error::ErrorKind::NestingTooDeep).
	///
	/// # Examples
	///
	/// ```rust
	/// use mp4tag::config::ParseOptions;
	///
	/// let parsing_options = ParseOptions::new().max_depth(8);
	/// ```
	pub fn max_depth(&mut self, max_depth: usize) -> Self {
		self.max_depth = max_depth;
		*self
	}
}
