//! Record parser.
//!
//! Reads input files in order, classifies each line, and assigns logins to
//! valid records from a registry shared across every file in the run.

use crate::error::ReadError;
use crate::record::{parse_line, LineOutcome, OutputRecord};
use crate::registry::LoginRegistry;
use std::fs;
use std::path::{Path, PathBuf};

/// Lines dropped from a file, by reason.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SkipCounts {
	pub blank: usize,
	pub too_few_fields: usize,
	pub invalid_id: usize,
	pub missing_surname: usize,
}

impl SkipCounts {
	/// Skipped lines that were not blank.
	pub fn malformed(&self) -> usize {
		self.too_few_fields + self.invalid_id + self.missing_surname
	}

	pub fn add(&mut self, other: &SkipCounts) {
		self.blank += other.blank;
		self.too_few_fields += other.too_few_fields;
		self.invalid_id += other.invalid_id;
		self.missing_surname += other.missing_surname;
	}
}

/// Records produced from one successfully read file.
#[derive(Debug, Default)]
pub struct FileReport {
	pub path: PathBuf,
	pub records: Vec<OutputRecord>,
	pub skipped: SkipCounts,
}

/// Parse one file, assigning logins from `registry`.
///
/// The whole file is read before any line is processed, so a read failure
/// leaves `registry` untouched and yields no records.
pub fn parse_file(path: &Path, registry: &mut LoginRegistry) -> Result<FileReport, ReadError> {
	let content = fs::read_to_string(path).map_err(|e| ReadError::new(path, e))?;

	let mut report = FileReport {
		path: path.to_path_buf(),
		..FileReport::default()
	};

	for (idx, line) in split_lines(&content).into_iter().enumerate() {
		let line_no = idx + 1;
		match parse_line(line) {
			LineOutcome::Record(record) => {
				let login =
					registry.generate(&record.given_name, &record.middle_name, &record.surname);
				report.records.push(record.to_output(&login));
			}
			LineOutcome::Blank => report.skipped.blank += 1,
			LineOutcome::TooFewFields { count } => {
				tracing::debug!(
					"{}:{}: skipping line with {} fields",
					path.display(),
					line_no,
					count
				);
				report.skipped.too_few_fields += 1;
			}
			LineOutcome::InvalidId { id } => {
				tracing::warn!(
					"Invalid non-numeric ID '{}' in line: {}. Skipping...",
					id,
					line.trim()
				);
				report.skipped.invalid_id += 1;
			}
			LineOutcome::MissingSurname => {
				tracing::debug!(
					"{}:{}: skipping line without surname",
					path.display(),
					line_no
				);
				report.skipped.missing_surname += 1;
			}
		}
	}

	Ok(report)
}

/// Parse every file in order and collect one outcome per file.
pub fn parse_files<P: AsRef<Path>>(
	paths: &[P],
	registry: &mut LoginRegistry,
) -> Vec<Result<FileReport, ReadError>> {
	paths
		.iter()
		.map(|path| parse_file(path.as_ref(), registry))
		.collect()
}

/// Combined output of parsing a list of files.
#[derive(Debug, Default)]
pub struct Collected {
	pub records: Vec<OutputRecord>,
	pub skipped: SkipCounts,
	pub files_read: usize,
	pub files_failed: usize,
}

/// Parse every file in order, logging unreadable files and folding the
/// rest into one [`Collected`].
pub fn collect_records<P: AsRef<Path>>(paths: &[P], registry: &mut LoginRegistry) -> Collected {
	let mut collected = Collected::default();
	for outcome in parse_files(paths, registry) {
		match outcome {
			Ok(report) => {
				tracing::debug!(
					"{}: {} records, {} lines skipped",
					report.path.display(),
					report.records.len(),
					report.skipped.malformed()
				);
				collected.files_read += 1;
				collected.skipped.add(&report.skipped);
				collected.records.extend(report.records);
			}
			Err(err) => {
				tracing::error!("{}", err);
				collected.files_failed += 1;
			}
		}
	}
	collected
}

/// Parse every file in order and return the combined records.
///
/// Unreadable files are logged and contribute nothing.
pub fn parse<P: AsRef<Path>>(paths: &[P], registry: &mut LoginRegistry) -> Vec<OutputRecord> {
	collect_records(paths, registry).records
}

/// Split text into lines ending at `\n`, `\r\n` or a lone `\r`.
///
/// A trailing line ending does not produce an extra empty line.
fn split_lines(content: &str) -> Vec<&str> {
	let mut lines = Vec::new();
	let mut rest = content;
	while !rest.is_empty() {
		match rest.find(|c: char| c == '\n' || c == '\r') {
			Some(end) => {
				lines.push(&rest[..end]);
				let ending = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
				rest = &rest[end + ending..];
			}
			None => {
				lines.push(rest);
				break;
			}
		}
	}
	lines
}
