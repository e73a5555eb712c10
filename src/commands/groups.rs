//! Groups command - show which tags can be ranked

use std::path::Path;

use anyhow::{Context, Result};
use colored::*;

use crate::config::MIN_GROUP_SIZE;
use crate::ranking::{tag_counts, CollectionFilter};
use crate::storage;
use crate::ui;

pub fn run(library_path: &Path, ignore: Option<&str>) -> Result<()> {
	let mut library = storage::load_library(library_path)?;

	if let Some(patterns) = ignore {
		let filter = CollectionFilter::parse(patterns).context("Invalid ZOTERO_IGNORE patterns")?;
		let removed = filter.apply(&mut library);
		if removed > 0 {
			ui::debug(&format!("Ignored {} papers by collection", removed));
		}
	}

	if library.is_empty() {
		ui::warn("Library is empty");
		return Ok(());
	}

	let counts = tag_counts(&library);
	let untagged = library.iter().filter(|e| e.tags.is_empty()).count();

	ui::header("Tags");
	for (tag, count) in &counts {
		let count_str = format!("{:>5}", count);
		let count_str = if *count < MIN_GROUP_SIZE {
			count_str.yellow()
		} else {
			count_str.bright_blue()
		};
		println!("  {} {}", count_str, tag.bright_white());
	}
	println!();

	ui::success(&format!(
		"{} papers, {} tags, {} untagged",
		library.len(),
		counts.len(),
		untagged
	));

	let too_small = counts.iter().filter(|(_, n)| *n < MIN_GROUP_SIZE).count();
	if too_small > 0 {
		ui::warn(&format!(
			"{} tags have fewer than {} papers and will be skipped",
			too_small, MIN_GROUP_SIZE
		));
	}

	Ok(())
}
