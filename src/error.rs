//! Error types for reading input files.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// An input file could not be read; it contributes no records.
#[derive(Debug, Error)]
#[error("Unexpected error reading {}: {source}", .path.display())]
pub struct ReadError {
	pub path: PathBuf,
	#[source]
	pub source: io::Error,
}

impl ReadError {
	pub fn new(path: impl Into<PathBuf>, source: io::Error) -> Self {
		Self {
			path: path.into(),
			source,
		}
	}
}
