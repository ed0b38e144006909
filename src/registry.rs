//! Login name generator.
//!
//! Derives short logins of the form `<initials><surname>`, at most
//! [`MAX_BASE_LEN`] characters, and resolves collisions by appending a
//! numeric suffix to the truncated base.

use std::collections::HashSet;

/// Maximum length of a login before any collision suffix is applied.
pub const MAX_BASE_LEN: usize = 8;

/// Set of logins already issued during a run.
#[derive(Debug, Default)]
pub struct LoginRegistry {
	used: HashSet<String>,
}

impl LoginRegistry {
	/// Create an empty registry.
	pub fn new() -> Self {
		Self {
			used: HashSet::new(),
		}
	}

	pub fn contains(&self, login: &str) -> bool {
		self.used.contains(login)
	}

	pub fn len(&self) -> usize {
		self.used.len()
	}

	pub fn is_empty(&self) -> bool {
		self.used.is_empty()
	}

	/// Allocate a unique login for the given name parts.
	///
	/// The base is tried first; on collision `base1`, `base2`, ... are tried
	/// in turn. The suffix goes after the full truncated base, so a suffixed
	/// login can be longer than [`MAX_BASE_LEN`].
	pub fn generate(&mut self, given_name: &str, middle_name: &str, surname: &str) -> String {
		let base = base_login(given_name, middle_name, surname);

		let mut login = base.clone();
		let mut counter: u64 = 1;
		while self.used.contains(&login) {
			login = format!("{}{}", base, counter);
			counter += 1;
		}

		self.used.insert(login.clone());
		login
	}
}

/// Build the unsuffixed login candidate for a name.
pub fn base_login(given_name: &str, middle_name: &str, surname: &str) -> String {
	let mut initials = String::new();
	if let Some(c) = given_name.chars().next() {
		initials.extend(c.to_lowercase());
	}
	if let Some(c) = middle_name.chars().next() {
		initials.extend(c.to_lowercase());
	}

	(initials + surname)
		.to_lowercase()
		.chars()
		.take(MAX_BASE_LEN)
		.collect()
}
