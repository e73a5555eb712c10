//! Threshold filtering and ordering of scored candidates

use std::cmp::Ordering;

use crate::core::{PaperId, RankedEntry, RankedResult, Threshold};

/// Keep candidates scoring at least `threshold`, highest first.
///
/// `ids[i]` and `scores[i]` describe candidate `i`. Equal scores are ordered
/// by id ascending so repeated runs give the same order.
pub fn rank(ids: &[&PaperId], scores: &[f64], threshold: Threshold) -> RankedResult {
	let entries = ids
		.iter()
		.zip(scores)
		.enumerate()
		.filter(|&(_, (_, &score))| threshold.admits(score))
		.map(|(candidate, (id, &score))| RankedEntry {
			candidate,
			id: (*id).clone(),
			score,
		})
		.collect();
	sort_entries(entries)
}

/// Apply a threshold to an existing result. Re-filtering with the threshold
/// that produced `result` returns it unchanged.
pub fn refilter(result: &RankedResult, threshold: Threshold) -> RankedResult {
	let entries = result
		.iter()
		.filter(|e| threshold.admits(e.score))
		.cloned()
		.collect();
	sort_entries(entries)
}

fn sort_entries(mut entries: Vec<RankedEntry>) -> RankedResult {
	entries.sort_by(compare);
	RankedResult::from_sorted(entries)
}

fn compare(a: &RankedEntry, b: &RankedEntry) -> Ordering {
	b.score.total_cmp(&a.score).then_with(|| a.id.cmp(&b.id))
}
