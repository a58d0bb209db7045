/// A single entry of a `chpl` chapter list
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Chapter {
	pub(crate) index: u8,
	pub(crate) start_time: String,
	pub(crate) end_time: String,
	pub(crate) title: String,
}

impl Chapter {
	/// The position of the chapter's section within the chapter list
	pub fn index(&self) -> u8 {
		self.index
	}

	/// The start time in seconds, with three decimal places (e.g. `"12.345"`)
	pub fn start_time(&self) -> &str {
		&self.start_time
	}

	/// The end time in seconds, with three decimal places
	///
	/// This is empty for the final chapter, as it has no following boundary.
	pub fn end_time(&self) -> &str {
		&self.end_time
	}

	/// The chapter title
	pub fn title(&self) -> &str {
		&self.title
	}
}

const SECTION_SEPARATOR: [u8; 3] = [0, 0, 0];

// Offset of the title within every section but the first
const TITLE_OFFSET: usize = 6;

/// Splits a `chpl` payload into chapters
///
/// Sections are separated by three NULL bytes. The first section is a leading marker, its
/// chapter always starts at `0.000` and uses the whole section as its title. Every following
/// section starts with a 4 byte timestamp, and closes the chapter before it.
///
/// This never fails, malformed sections are skipped.
pub(crate) fn parse_chapters(data: &[u8]) -> Vec<Chapter> {
	let mut chapters: Vec<Chapter> = Vec::new();

	for (index, section) in split_sections(data).into_iter().enumerate() {
		if section.len() < 2 {
			continue;
		}

		let (start_time, title) = if index == 0 {
			(String::from("0.000"), String::from_utf8_lossy(section).into_owned())
		} else {
			let Some(ticks) = section.first_chunk::<4>() else {
				log::warn!("Skipping chapter section {index}, too short to hold a start time");
				continue;
			};

			let start_time = format_start_time(u32::from_be_bytes(*ticks));
			if let Some(previous) = chapters.last_mut() {
				previous.end_time.clone_from(&start_time);
			}

			let title = section.get(TITLE_OFFSET..).unwrap_or_default();
			(start_time, String::from_utf8_lossy(title).into_owned())
		};

		chapters.push(Chapter {
			index: index as u8,
			start_time,
			end_time: String::new(),
			title,
		});
	}

	chapters
}

// The timestamp is in units of 256 / 10,000,000 seconds
fn format_start_time(ticks: u32) -> String {
	let seconds = f64::from(ticks) * 256.0 / 10_000_000.0;
	format!("{seconds:.3}")
}

fn split_sections(data: &[u8]) -> Vec<&[u8]> {
	let mut sections = Vec::new();

	let mut section_start = 0;
	let mut pos = 0;
	while pos + SECTION_SEPARATOR.len() <= data.len() {
		if data[pos..pos + SECTION_SEPARATOR.len()] == SECTION_SEPARATOR {
			sections.push(&data[section_start..pos]);
			pos += SECTION_SEPARATOR.len();
			section_start = pos;
			continue;
		}

		pos += 1;
	}

	sections.push(&data[section_start..]);
	sections
}
