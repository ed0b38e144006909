//! Writer module for the combined record file.

use crate::record::OutputRecord;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Render records as file content, one newline-terminated line each (no I/O).
pub fn render_records(records: &[OutputRecord]) -> String {
	let mut content = String::with_capacity(records.iter().map(|r| r.as_str().len() + 1).sum());
	for record in records {
		content.push_str(record.as_str());
		content.push('\n');
	}
	content
}

/// Write records to `destination`, creating or truncating it.
pub fn write_records(destination: &Path, records: &[OutputRecord]) -> Result<()> {
	let content = render_records(records);
	fs::write(destination, content)
		.with_context(|| format!("Failed to write {}", destination.display()))?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::record::{parse_line, LineOutcome};
	use tempfile::tempdir;

	fn output(line: &str, login: &str) -> OutputRecord {
		match parse_line(line) {
			LineOutcome::Record(r) => r.to_output(login),
			other => panic!("unexpected {:?}", other),
		}
	}

	#[test]
	fn test_render_records() {
		let records = vec![
			output("1234:Jozef:Miloslav:Hurban:Legal", "jmhurban"),
			output("4567:Milan:Rastislav:Stefanik:Defence", "mrstefan"),
		];
		assert_eq!(
			render_records(&records),
			"1234:jmhurban:Jozef:Miloslav:Hurban:Legal\n\
			 4567:mrstefan:Milan:Rastislav:Stefanik:Defence\n"
		);
		assert_eq!(render_records(&[]), "");
	}

	#[test]
	fn test_write_records_truncates_existing_file() {
		let temp = tempdir().unwrap();
		let path = temp.path().join("out.txt");
		fs::write(&path, "stale content that is longer than the new one\n").unwrap();

		write_records(&path, &[output("1:Anna:Smith:IT", "asmith")]).unwrap();

		assert_eq!(fs::read_to_string(&path).unwrap(), "1:asmith:Anna::Smith:IT\n");
	}

	#[test]
	fn test_write_records_empty_creates_file() {
		let temp = tempdir().unwrap();
		let path = temp.path().join("empty.txt");

		write_records(&path, &[]).unwrap();

		assert!(path.exists());
		assert_eq!(fs::read_to_string(&path).unwrap(), "");
	}

	#[test]
	fn test_write_records_missing_dir_fails() {
		let temp = tempdir().unwrap();
		let path = temp.path().join("no_such_dir").join("out.txt");

		let err = write_records(&path, &[]).unwrap_err();
		assert!(err.to_string().starts_with("Failed to write"));
	}
}
