//! End-to-end ranking run: validate, partition, score, rank

use std::collections::HashSet;

use serde::Serialize;

use super::partition::partition_subset;
use super::ranker::rank;
use super::scorer::{score_groups, GroupJob};
use crate::config::RankRequest;
use crate::core::{
	Embedding, GroupKey, GroupOutcome, GroupReport, LibraryEntry, Paper, PaperId, RankedEntry,
	RankedResult, ScoreStats, SkipReason, Threshold,
};
use crate::error::RankError;
use crate::ui;

/// Which input a paper came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaperRole {
	Reference,
	Candidate,
}

/// A paper left out of the run and why
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Exclusion {
	pub id: PaperId,
	pub role: PaperRole,
	pub reason: String,
}

/// Result of one run: a report per group plus run-level bookkeeping
#[derive(Debug, Clone, Serialize)]
pub struct Digest {
	pub generated_at: String,
	pub threshold: Threshold,
	pub dimension: Option<usize>,
	pub references: usize,
	pub candidates_considered: usize,
	pub excluded: Vec<Exclusion>,
	pub groups: Vec<GroupReport>,
}

impl Digest {
	pub fn group(&self, key: &GroupKey) -> Option<&GroupReport> {
		self.groups.iter().find(|g| &g.group == key)
	}

	pub fn has_matches(&self) -> bool {
		self.groups.iter().any(GroupReport::has_matches)
	}

	/// Distinct candidates recommended by at least one group
	pub fn unique_matches(&self) -> usize {
		let ids: HashSet<&PaperId> = self
			.groups
			.iter()
			.flat_map(|g| g.entries().iter().map(|e| &e.id))
			.collect();
		ids.len()
	}

	/// Whether tag sections were requested (otherwise only "all" is shown)
	pub fn uses_sections(&self) -> bool {
		self.groups.iter().any(|g| g.group.is_tag())
	}
}

/// Rank `candidates` against `library` for every group in `request`.
///
/// Papers with a wrong-sized or non-finite embedding and repeated candidate
/// ids are excluded and logged; groups that cannot be fitted are reported as
/// skipped. Neither stops the run.
pub fn run(library: &[LibraryEntry], candidates: &[Paper], request: &RankRequest) -> Digest {
	let dim = request.dim.or_else(|| {
		common_dimension(library.iter().map(|e| &e.paper))
			.or_else(|| common_dimension(candidates.iter()))
	});

	let mut excluded = Vec::new();

	let eligible: Vec<usize> = library
		.iter()
		.enumerate()
		.filter_map(|(i, entry)| match check(&entry.paper, dim) {
			Ok(()) => Some(i),
			Err(e) => {
				ui::warn(&format!("Skipping library paper: {}", e));
				excluded.push(Exclusion {
					id: entry.paper.id.clone(),
					role: PaperRole::Reference,
					reason: e.to_string(),
				});
				None
			}
		})
		.collect();

	let mut seen: HashSet<&PaperId> = HashSet::new();
	let valid: Vec<usize> = candidates
		.iter()
		.enumerate()
		.filter_map(|(i, paper)| {
			let reason = match check(paper, dim) {
				Err(e) => e.to_string(),
				Ok(()) if !seen.insert(&paper.id) => "duplicate candidate id".to_string(),
				Ok(()) => return Some(i),
			};
			ui::warn(&format!("Skipping candidate {}: {}", paper.id, reason));
			excluded.push(Exclusion {
				id: paper.id.clone(),
				role: PaperRole::Candidate,
				reason,
			});
			None
		})
		.collect();

	let groups = partition_subset(library, eligible.iter().copied(), &request.tags);

	let candidate_ids: Vec<&PaperId> = valid.iter().map(|&i| &candidates[i].id).collect();
	let candidate_embs: Vec<&Embedding> = valid.iter().map(|&i| &candidates[i].embedding).collect();

	let mut reports: Vec<Option<GroupReport>> = Vec::with_capacity(groups.len());
	let mut jobs = Vec::new();
	for group in &groups {
		if group.is_empty() {
			ui::warn(&format!("No library papers in group {}, skipping", group.key));
			reports.push(Some(GroupReport {
				group: group.key.clone(),
				references: 0,
				outcome: GroupOutcome::Skipped {
					reason: SkipReason::NoReferencePapers,
				},
			}));
		} else {
			ui::debug(&format!("Group {}: {} reference papers", group.key, group.len()));
			reports.push(None);
			jobs.push(GroupJob {
				key: group.key.clone(),
				references: group.members.iter().map(|&i| &library[i].paper.embedding).collect(),
			});
		}
	}

	let mut scored = score_groups(jobs, &candidate_embs, dim.unwrap_or(0), &request.svm).into_iter();
	for slot in reports.iter_mut().filter(|r| r.is_none()) {
		let Some(group) = scored.next() else { break };
		*slot = Some(report(group.key, group.references, group.scores, &candidate_ids, &valid, request.threshold));
	}

	Digest {
		generated_at: chrono::Local::now().to_rfc3339(),
		threshold: request.threshold,
		dimension: dim,
		references: eligible.len(),
		candidates_considered: valid.len(),
		excluded,
		groups: reports.into_iter().flatten().collect(),
	}
}

/// Most frequent embedding length, ties going to the length seen first.
///
/// A few truncated rows cannot set the dimension for everyone else.
fn common_dimension<'a>(papers: impl Iterator<Item = &'a Paper>) -> Option<usize> {
	let mut counts: Vec<(usize, usize)> = Vec::new();
	for paper in papers {
		let dim = paper.embedding.dim();
		match counts.iter_mut().find(|(d, _)| *d == dim) {
			Some((_, n)) => *n += 1,
			None => counts.push((dim, 1)),
		}
	}

	let mut best: Option<(usize, usize)> = None;
	for (dim, n) in counts {
		if best.map_or(true, |(_, top)| n > top) {
			best = Some((dim, n));
		}
	}
	best.map(|(dim, _)| dim)
}

fn check(paper: &Paper, dim: Option<usize>) -> Result<(), RankError> {
	match dim {
		Some(dim) => paper.embedding.validate(paper.id.as_str(), dim),
		None => Ok(()),
	}
}

fn report(
	key: GroupKey,
	references: usize,
	scores: Result<Vec<f64>, RankError>,
	ids: &[&PaperId],
	positions: &[usize],
	threshold: Threshold,
) -> GroupReport {
	let outcome = match scores {
		Ok(scores) => {
			let stats = ScoreStats::from_scores(&scores);
			if let Some(stats) = stats {
				ui::debug(&format!("{}: scores in [{:.3}, {:.3}]", key, stats.min, stats.max));
			}

			let ranked = rank(ids, &scores, threshold);
			if ranked.is_empty() {
				ui::info(&format!("{}: no papers above threshold {}", key, threshold));
			} else {
				ui::info(&format!("{}: {} papers above threshold", key, ranked.len()));
			}

			let result = RankedResult::from_sorted(
				ranked
					.iter()
					.map(|e| RankedEntry {
						candidate: positions[e.candidate],
						..e.clone()
					})
					.collect(),
			);
			GroupOutcome::Ranked { result, stats }
		}
		Err(RankError::InsufficientData { found, required, .. }) => {
			ui::warn(&format!(
				"{}: only {} reference papers (need {}), skipping",
				key, found, required
			));
			GroupOutcome::Skipped {
				reason: SkipReason::InsufficientData { found, required },
			}
		}
		Err(e) => {
			ui::error(&format!("{}: {}", key, e));
			GroupOutcome::Skipped {
				reason: SkipReason::Failed { error: e.to_string() },
			}
		}
	};

	GroupReport {
		group: key,
		references,
		outcome,
	}
}
