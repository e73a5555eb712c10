//! Papers from the reference library and the candidate feed

use serde::{Deserialize, Serialize};

use super::Embedding;

/// Identifier of a paper: an arXiv ID for candidates, a Zotero key for the library.
///
/// Ordering is plain byte order and is used as the ranking tie-break.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaperId(String);

impl PaperId {
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	/// Build an arXiv identifier with any trailing version suffix removed
	/// (`2401.01234v2` becomes `2401.01234`).
	pub fn arxiv(id: &str) -> Self {
		let id = id.trim();
		let stripped = match id.rfind('v') {
			Some(pos) if pos > 0 => {
				let version = &id[pos + 1..];
				if !version.is_empty() && version.bytes().all(|b| b.is_ascii_digit()) {
					&id[..pos]
				} else {
					id
				}
			}
			_ => id,
		};
		Self(stripped.to_string())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl std::fmt::Display for PaperId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// A paper with its precomputed abstract embedding
#[derive(Debug, Clone)]
pub struct Paper {
	pub id: PaperId,
	pub title: String,
	pub summary: String,
	pub authors: Vec<String>,
	/// Landing or PDF link, when the source provides one
	pub url: Option<String>,
	pub embedding: Embedding,
}

impl Paper {
	pub fn new(id: PaperId, embedding: Embedding) -> Self {
		Self {
			id,
			title: String::new(),
			summary: String::new(),
			authors: Vec::new(),
			url: None,
			embedding,
		}
	}

	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	/// Author line for display: at most `max` names, then ", ..."
	pub fn author_line(&self, max: usize) -> String {
		let mut line = self
			.authors
			.iter()
			.take(max)
			.map(String::as_str)
			.collect::<Vec<_>>()
			.join(", ");
		if self.authors.len() > max {
			line.push_str(", ...");
		}
		line
	}
}

/// A paper from the user's library with its tags and collection paths
#[derive(Debug, Clone)]
pub struct LibraryEntry {
	pub paper: Paper,
	pub tags: Vec<String>,
	/// Full collection paths, e.g. `ML/Transformers`
	pub collections: Vec<String>,
}

impl LibraryEntry {
	pub fn new(paper: Paper) -> Self {
		Self {
			paper,
			tags: Vec::new(),
			collections: Vec::new(),
		}
	}

	pub fn with_tags<I, S>(mut self, tags: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.tags = tags.into_iter().map(Into::into).collect();
		self
	}

	pub fn with_collections<I, S>(mut self, collections: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.collections = collections.into_iter().map(Into::into).collect();
		self
	}

	pub fn has_tag(&self, tag: &str) -> bool {
		self.tags.iter().any(|t| t == tag)
	}
}
