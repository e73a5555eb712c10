//! JSON digest handed to the external mail renderer

use serde::Serialize;

use crate::config::MAX_AUTHORS;
use crate::core::{GroupOutcome, Paper, ScoreStats, SkipReason};
use crate::ranking::{Digest, Exclusion};

#[derive(Debug, Serialize)]
pub struct DigestExport {
	pub generated_at: String,
	pub threshold: f64,
	pub papers_considered: usize,
	pub unique_matches: usize,
	pub use_sections: bool,
	pub excluded: Vec<Exclusion>,
	pub sections: Vec<SectionExport>,
}

#[derive(Debug, Serialize)]
pub struct SectionExport {
	pub group: String,
	pub kind: &'static str,
	pub references: usize,
	/// `ranked` or `skipped`; a ranked section with no papers means nothing
	/// cleared the threshold
	pub status: &'static str,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub skip_reason: Option<SkipReason>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub stats: Option<ScoreStats>,
	pub papers: Vec<PaperExport>,
}

#[derive(Debug, Serialize)]
pub struct PaperExport {
	pub id: String,
	pub title: String,
	pub authors: String,
	#[serde(rename = "abstract")]
	pub summary: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub url: Option<String>,
	pub score: f64,
}

impl DigestExport {
	pub fn build(digest: &Digest, candidates: &[Paper]) -> Self {
		let sections = digest
			.groups
			.iter()
			.map(|report| {
				let (status, skip_reason, stats) = match &report.outcome {
					GroupOutcome::Ranked { stats, .. } => ("ranked", None, *stats),
					GroupOutcome::Skipped { reason } => ("skipped", Some(reason.clone()), None),
				};

				let papers = report
					.entries()
					.iter()
					.filter_map(|entry| {
						let paper = candidates.get(entry.candidate)?;
						Some(PaperExport {
							id: entry.id.to_string(),
							title: paper.title.clone(),
							authors: paper.author_line(MAX_AUTHORS),
							summary: paper.summary.clone(),
							url: paper.url.clone(),
							score: entry.score,
						})
					})
					.collect();

				SectionExport {
					group: report.group.label().to_string(),
					kind: if report.group.is_tag() { "tag" } else { "corpus" },
					references: report.references,
					status,
					skip_reason,
					stats,
					papers,
				}
			})
			.collect();

		Self {
			generated_at: digest.generated_at.clone(),
			threshold: digest.threshold.value(),
			papers_considered: digest.candidates_considered,
			unique_matches: digest.unique_matches(),
			use_sections: digest.uses_sections(),
			excluded: digest.excluded.clone(),
			sections,
		}
	}
}
