//! Login Name Generation Library
//!
//! Reads colon-delimited personnel records from one or more files, assigns
//! each person a unique short login, and writes the combined records.

pub mod error;
pub mod parser;
pub mod record;
pub mod registry;
pub mod writer;

use anyhow::{bail, Result};
use std::path::PathBuf;

use parser::{collect_records, SkipCounts};
use record::OutputRecord;
use registry::LoginRegistry;

/// Configuration for a generation run
#[derive(Debug, Clone, Default)]
pub struct Config {
	/// Input files, processed in this order
	pub input_files: Vec<PathBuf>,
	/// Destination for the combined record file
	pub output: PathBuf,
	/// Whether to skip writing the output file
	pub dry_run: bool,
}

impl Config {
	/// Reject configurations the run cannot start with.
	pub fn validate(&self) -> Result<()> {
		if self.output.as_os_str().is_empty() {
			bail!("No output file specified.\nUsage: login-gen -o <OUTPUT> <INPUT_FILES>...");
		}
		if self.input_files.is_empty() {
			bail!("No input files specified.\nUsage: login-gen -o <OUTPUT> <INPUT_FILES>...");
		}
		Ok(())
	}
}

/// Statistics about a generation run
#[derive(Debug, Default)]
pub struct Stats {
	pub files_read: usize,
	pub files_failed: usize,
	pub records: usize,
	pub skipped: SkipCounts,
}

impl Stats {
	pub fn total_files(&self) -> usize {
		self.files_read + self.files_failed
	}

	/// Lines dropped for being malformed (blank lines are not counted).
	pub fn lines_skipped(&self) -> usize {
		self.skipped.malformed()
	}
}

/// Main generation engine
pub struct Processor {
	config: Config,
	/// Records produced by the last run, in file then line order
	records: Vec<OutputRecord>,
}

impl Processor {
	pub fn new(config: Config) -> Self {
		Self {
			config,
			records: Vec::new(),
		}
	}

	/// Records produced by the last call to [`Processor::run`].
	pub fn records(&self) -> &[OutputRecord] {
		&self.records
	}

	/// Run the full process: parse every input, then write the output file.
	///
	/// Each run starts from an empty registry, so repeated runs over the
	/// same inputs produce identical logins.
	pub fn run(&mut self) -> Result<Stats> {
		self.config.validate()?;

		let mut registry = LoginRegistry::new();
		let collected = collect_records(&self.config.input_files, &mut registry);
		self.records = collected.records;

		let stats = Stats {
			files_read: collected.files_read,
			files_failed: collected.files_failed,
			records: self.records.len(),
			skipped: collected.skipped,
		};

		if !self.config.dry_run {
			writer::write_records(&self.config.output, &self.records)?;
		}

		Ok(stats)
	}
}
