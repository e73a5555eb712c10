//! Gitignore-style exclusion of library collections

use std::path::Path;

use ignore::gitignore::{Gitignore, GitignoreBuilder};

use crate::core::LibraryEntry;
use crate::error::{RankError, RankResult};

/// Compiled collection patterns; a paper is excluded when any of its
/// collection paths is ignored.
#[derive(Debug, Clone)]
pub struct CollectionFilter {
	matcher: Gitignore,
}

impl CollectionFilter {
	/// Parse a gitignore body, one pattern per line.
	///
	/// Collections are matched as directories, so `Archive/` works and an
	/// ignored collection takes its sub-collections with it unless a later
	/// `!` line re-includes them.
	pub fn parse(text: &str) -> RankResult<Self> {
		let mut builder = GitignoreBuilder::new(".");
		for line in text.lines() {
			builder
				.add_line(None, line)
				.map_err(|e| RankError::InvalidIgnorePattern(e.to_string()))?;
		}
		let matcher = builder
			.build()
			.map_err(|e| RankError::InvalidIgnorePattern(e.to_string()))?;
		Ok(Self { matcher })
	}

	pub fn is_empty(&self) -> bool {
		self.matcher.is_empty()
	}

	/// Number of patterns, negations included
	pub fn len(&self) -> usize {
		self.matcher.len()
	}

	/// Whether a collection path (e.g. `ML/Vision/Detection`) is ignored
	pub fn matches(&self, path: &str) -> bool {
		let path = path.trim_start_matches('/');
		if path.is_empty() {
			return false;
		}
		self.matcher
			.matched_path_or_any_parents(Path::new(path), true)
			.is_ignore()
	}

	pub fn excludes(&self, entry: &LibraryEntry) -> bool {
		entry.collections.iter().any(|c| self.matches(c))
	}

	/// Drop excluded entries, returning how many were removed
	pub fn apply(&self, library: &mut Vec<LibraryEntry>) -> usize {
		if self.is_empty() {
			return 0;
		}
		let before = library.len();
		library.retain(|entry| !self.excludes(entry));
		before - library.len()
	}
}
