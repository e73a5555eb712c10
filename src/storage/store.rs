//! Loading embedding files and writing digest exports

use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

use super::records::{CandidateRecord, LibraryRecord};
use crate::config::{JSON_EXT, MSGPACK_EXTS};
use crate::core::{LibraryEntry, Paper};
use crate::ui;

/// Encoding of an input file, picked from its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
	Json,
	MessagePack,
}

impl Format {
	pub fn detect(path: &Path) -> Result<Self> {
		let ext = path
			.extension()
			.and_then(|e| e.to_str())
			.unwrap_or_default();

		if ext.eq_ignore_ascii_case(JSON_EXT) {
			Ok(Format::Json)
		} else if MSGPACK_EXTS.iter().any(|e| e.eq_ignore_ascii_case(ext)) {
			Ok(Format::MessagePack)
		} else {
			bail!("Unsupported file type '{}': expected .json or .msgpack", path.display())
		}
	}
}

fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
	let format = Format::detect(path)?;
	let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;

	match format {
		Format::Json => serde_json::from_slice(&bytes)
			.with_context(|| format!("Failed to parse JSON from {}", path.display())),
		Format::MessagePack => rmp_serde::from_slice(&bytes)
			.with_context(|| format!("Failed to decode MessagePack from {}", path.display())),
	}
}

/// Load the reference library.
///
/// Items without an abstract are dropped: their embeddings describe nothing.
pub fn load_library(path: &Path) -> Result<Vec<LibraryEntry>> {
	let records: Vec<LibraryRecord> = read_records(path)?;
	let total = records.len();

	let entries: Vec<LibraryEntry> = records
		.into_iter()
		.filter(|r| !r.summary.trim().is_empty())
		.map(LibraryEntry::from)
		.collect();

	if entries.len() < total {
		ui::debug(&format!(
			"Dropped {} library items without an abstract",
			total - entries.len()
		));
	}

	Ok(entries)
}

/// Load candidate papers; arXiv ids lose their version suffix
pub fn load_candidates(path: &Path) -> Result<Vec<Paper>> {
	let records: Vec<CandidateRecord> = read_records(path)?;
	Ok(records.into_iter().map(Paper::from).collect())
}

/// Write pretty JSON to `path`, or to stdout for `-`
pub fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
	let json = serde_json::to_string_pretty(value).context("Failed to serialize digest")?;
	if path.to_str() == Some("-") || path.as_os_str().is_empty() {
		println!("{}", json);
		return Ok(());
	}

	if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
		fs::create_dir_all(parent).context("Failed to create output directory")?;
	}
	fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}
