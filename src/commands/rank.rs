//! Rank command - score new papers against the library

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use colored::*;

use crate::config::{RankRequest, MAX_AUTHORS};
use crate::core::{GroupOutcome, GroupReport, Paper};
use crate::ranking::{self, CollectionFilter, Digest};
use crate::storage::{self, DigestExport};
use crate::ui;

/// Settings for one `rank` invocation
#[derive(Debug, Clone)]
pub struct RankOptions {
	pub library: PathBuf,
	pub candidates: PathBuf,
	pub min_score: f64,
	pub tags: Vec<String>,
	pub ignore: Option<String>,
	pub send_empty: bool,
	pub dim: Option<usize>,
	pub nu: f64,
	pub export: Option<PathBuf>,
}

pub fn run(opts: &RankOptions) -> Result<()> {
	let start = Instant::now();

	// An unset ZOTERO_TAGS may arrive as a single empty value
	let tags: Vec<String> = if opts.tags.iter().all(|t| t.trim().is_empty()) {
		Vec::new()
	} else {
		opts.tags.clone()
	};
	let request = RankRequest::from_raw(&tags, Some(opts.min_score), opts.nu, opts.dim)
		.context("Invalid configuration")?;

	ui::info(&format!("Loading library from {}", opts.library.display()));
	let mut library = storage::load_library(&opts.library)?;
	ui::success(&format!("Loaded {} library papers", library.len()));

	if let Some(patterns) = opts.ignore.as_deref() {
		let filter = CollectionFilter::parse(patterns).context("Invalid ZOTERO_IGNORE patterns")?;
		if !filter.is_empty() {
			ui::info(&format!("Ignoring collections matching {} patterns", filter.len()));
			let removed = filter.apply(&mut library);
			ui::info(&format!("Remaining {} papers after filtering ({} removed)", library.len(), removed));
		}
	}

	ui::info(&format!("Loading candidates from {}", opts.candidates.display()));
	let candidates = storage::load_candidates(&opts.candidates)?;
	ui::success(&format!("Loaded {} candidate papers", candidates.len()));

	if request.tags.is_empty() {
		ui::info("Ranking papers against the full library");
	} else {
		ui::info(&format!("Ranking papers for tags: {}", request.tags.join(", ")));
	}

	let digest = ranking::run(&library, &candidates, &request);

	if !digest.has_matches() && !opts.send_empty {
		ui::info(&format!(
			"No papers above threshold {} in any group (out of {} papers). Exit.",
			request.threshold, digest.candidates_considered
		));
		return Ok(());
	}

	match &opts.export {
		Some(path) => {
			let export = DigestExport::build(&digest, &candidates);
			storage::write_json(&export, path)?;
			if path.to_str() != Some("-") {
				ui::success(&format!("Exported digest to {}", path.display()));
			}
		}
		None => print_digest(&digest, &candidates),
	}

	ui::success(&format!(
		"{} unique papers recommended in {:.1}s",
		digest.unique_matches(),
		start.elapsed().as_secs_f32()
	));

	Ok(())
}

fn print_digest(digest: &Digest, candidates: &[Paper]) {
	if digest.candidates_considered == 0 {
		ui::header("Digest");
		println!("  {}", "No papers today. Take a rest!".bright_white().bold());
		println!();
		return;
	}

	for report in &digest.groups {
		print_section(report, candidates, digest.threshold.value());
	}
	println!();
}

fn print_section(report: &GroupReport, candidates: &[Paper], threshold: f64) {
	ui::header(&format!("{} ({} papers)", report.group, report.references));

	match &report.outcome {
		GroupOutcome::Skipped { reason } => {
			println!("  {} {}", "No reference data:".yellow(), reason.to_string().dimmed());
		}
		GroupOutcome::Ranked { result, .. } if result.is_empty() => {
			println!("  {}", format!("No papers scored above {}", threshold).dimmed());
		}
		GroupOutcome::Ranked { result, stats } => {
			let max = stats.map(|s| s.max).unwrap_or(threshold);
			for (i, entry) in result.iter().enumerate() {
				let Some(paper) = candidates.get(entry.candidate) else {
					continue;
				};
				let title = if paper.title.is_empty() { entry.id.as_str() } else { paper.title.as_str() };
				let title = match &paper.url {
					Some(url) => ui::hyperlink(title, url),
					None => title.to_string(),
				};

				println!(
					"{}. {} {} {}",
					format!("{:2}", i + 1).bright_blue().bold(),
					title.bright_white(),
					entry.id.as_str().dimmed(),
					ui::score_colored(entry.score, threshold, max)
				);
				if !paper.authors.is_empty() {
					println!("    {}", paper.author_line(MAX_AUTHORS).dimmed());
				}
			}
		}
	}
}
