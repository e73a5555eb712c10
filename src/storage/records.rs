//! On-disk record formats written by the embedding job

use serde::{Deserialize, Serialize};

use crate::core::{Embedding, LibraryEntry, Paper, PaperId};

/// One library item with its precomputed abstract embedding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryRecord {
	/// Zotero item key
	pub key: String,
	#[serde(default)]
	pub title: String,
	#[serde(default, rename = "abstract")]
	pub summary: String,
	#[serde(default)]
	pub authors: Vec<String>,
	#[serde(default)]
	pub tags: Vec<String>,
	/// Full collection paths, parents joined with `/`
	#[serde(default)]
	pub collections: Vec<String>,
	#[serde(default)]
	pub url: Option<String>,
	pub embedding: Vec<f32>,
}

impl From<LibraryRecord> for LibraryEntry {
	fn from(r: LibraryRecord) -> Self {
		let paper = Paper {
			id: PaperId::new(r.key),
			title: r.title,
			summary: r.summary,
			authors: r.authors,
			url: r.url,
			embedding: Embedding::new(r.embedding),
		};
		LibraryEntry::new(paper)
			.with_tags(r.tags)
			.with_collections(r.collections)
	}
}

/// One newly announced arXiv paper with its abstract embedding
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateRecord {
	/// arXiv identifier, with or without version suffix
	pub id: String,
	#[serde(default)]
	pub title: String,
	#[serde(default, rename = "abstract")]
	pub summary: String,
	#[serde(default)]
	pub authors: Vec<String>,
	#[serde(default, alias = "pdf_url")]
	pub url: Option<String>,
	pub embedding: Vec<f32>,
}

impl From<CandidateRecord> for Paper {
	fn from(r: CandidateRecord) -> Self {
		Paper {
			id: PaperId::arxiv(&r.id),
			title: r.title,
			summary: r.summary,
			authors: r.authors,
			url: r.url,
			embedding: Embedding::new(r.embedding),
		}
	}
}
