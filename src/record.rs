//! Line classification for personnel records.
//!
//! Input lines look like `ID:Given[:Middle]:Surname:Department[:...]`.
//! A line is split on every `:`, each field is trimmed, and the field count
//! decides which slots the middle name and surname come from.

use std::fmt;

/// Minimum number of colon-separated fields for a usable record.
pub const MIN_FIELDS: usize = 4;

/// A record parsed from one valid input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRecord {
	pub id: String,
	pub given_name: String,
	pub middle_name: String,
	pub surname: String,
	pub department: String,
}

impl ParsedRecord {
	/// Format the record with its assigned login.
	pub fn to_output(&self, login: &str) -> OutputRecord {
		OutputRecord(format!(
			"{}:{}:{}:{}:{}:{}",
			self.id, login, self.given_name, self.middle_name, self.surname, self.department
		))
	}
}

/// One formatted output line: `ID:login:given:middle:surname:department`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord(String);

impl OutputRecord {
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for OutputRecord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// What a single input line turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
	/// Empty or whitespace-only line
	Blank,
	/// Fewer than [`MIN_FIELDS`] fields
	TooFewFields { count: usize },
	/// First field is not all decimal digits
	InvalidId { id: String },
	/// Surname slot is empty
	MissingSurname,
	Record(ParsedRecord),
}

/// Classify one raw input line.
pub fn parse_line(raw: &str) -> LineOutcome {
	let line = raw.trim();
	if line.is_empty() {
		return LineOutcome::Blank;
	}

	let parts: Vec<&str> = line.split(':').map(str::trim).collect();
	if parts.len() < MIN_FIELDS {
		return LineOutcome::TooFewFields { count: parts.len() };
	}

	let id = parts[0];
	if !is_numeric_id(id) {
		return LineOutcome::InvalidId { id: id.to_string() };
	}

	let given_name = parts[1];
	let (middle_name, surname, department) = match parts.len() {
		4 => ("", parts[2], parts[3].to_string()),
		5 => (parts[2], parts[3], parts[4].to_string()),
		// Extra fields belong to the department
		_ => (parts[2], parts[3], parts[4..].join(":")),
	};

	if surname.is_empty() {
		return LineOutcome::MissingSurname;
	}

	LineOutcome::Record(ParsedRecord {
		id: id.to_string(),
		given_name: given_name.to_string(),
		middle_name: middle_name.to_string(),
		surname: surname.to_string(),
		department,
	})
}

// ASCII 0-9 only
fn is_numeric_id(id: &str) -> bool {
	!id.is_empty() && id.chars().all(|c| c.is_ascii_digit())
}
