// Ranking engine scenarios and properties

mod common;

use common::*;
use zotrank::config::RankRequest;
use zotrank::core::{GroupKey, GroupOutcome, RankedResult, SkipReason, Threshold};
use zotrank::ranking::{self, refilter, PaperRole};

fn request(tag_list: &[&str], threshold: f64) -> RankRequest {
	RankRequest::new(tags(tag_list), Threshold::new(threshold).unwrap())
}

fn ranked(digest: &ranking::Digest, key: &GroupKey) -> RankedResult {
	match &digest.group(key).expect("group present").outcome {
		GroupOutcome::Ranked { result, .. } => result.clone(),
		GroupOutcome::Skipped { reason } => panic!("group {} skipped: {}", key, reason),
	}
}

fn nlp() -> GroupKey {
	GroupKey::Tag("nlp".to_string())
}

#[test]
fn test_nlp_candidate_outranks_vision_candidate() {
	let library = scenario_library();
	let candidates = scenario_candidates();

	let digest = ranking::run(&library, &candidates, &request(&["nlp"], -1e9));

	let keys: Vec<&GroupKey> = digest.groups.iter().map(|g| &g.group).collect();
	assert_eq!(keys, vec![&GroupKey::All, &nlp()]);

	let result = ranked(&digest, &nlp());
	assert_eq!(result.len(), 2);
	assert_eq!(result.entries()[0].id.as_str(), "C1");
	assert_eq!(result.entries()[1].id.as_str(), "C2");
	assert!(result.entries()[0].score > result.entries()[1].score);
}

#[test]
fn test_scenario_threshold_filters_group() {
	let library = scenario_library();
	let candidates = scenario_candidates();

	let digest = ranking::run(&library, &candidates, &request(&["nlp"], 0.1));

	assert!(digest.group(&GroupKey::All).is_some());
	let result = ranked(&digest, &nlp());
	assert!(result.scores().all(|s| s >= 0.1));

	// C2 may be filtered, but never ahead of C1
	let ids: Vec<&str> = result.iter().map(|e| e.id.as_str()).collect();
	if let Some(c2) = ids.iter().position(|id| *id == "C2") {
		let c1 = ids.iter().position(|id| *id == "C1");
		assert!(c1.is_some_and(|c1| c1 < c2));
	}
}

#[test]
fn test_all_group_uses_every_reference() {
	let library = scenario_library();
	let digest = ranking::run(&library, &scenario_candidates(), &request(&["nlp"], 0.0));

	assert_eq!(digest.group(&GroupKey::All).unwrap().references, 8);
	assert_eq!(digest.group(&nlp()).unwrap().references, 5);
}

#[test]
fn test_unmatched_tag_is_skipped_not_fatal() {
	let library = scenario_library();
	let candidates = scenario_candidates();

	let digest = ranking::run(&library, &candidates, &request(&["robotics"], -1e9));

	let robotics = digest.group(&GroupKey::Tag("robotics".to_string())).unwrap();
	assert_eq!(robotics.references, 0);
	assert_eq!(
		robotics.outcome,
		GroupOutcome::Skipped {
			reason: SkipReason::NoReferencePapers
		}
	);
	assert!(robotics.entries().is_empty());

	let all = digest.group(&GroupKey::All).unwrap();
	assert_eq!(all.references, 8);
	assert_eq!(ranked(&digest, &GroupKey::All).len(), 2);
}

#[test]
fn test_threshold_above_every_score_empties_all_groups() {
	let library = scenario_library();
	let digest = ranking::run(&library, &scenario_candidates(), &request(&["nlp", "vision"], 1e6));

	assert_eq!(digest.groups.len(), 3);
	for report in &digest.groups {
		assert!(!report.is_skipped(), "{} should be ranked", report.group);
		assert!(report.entries().is_empty());
	}
	assert!(!digest.has_matches());
	assert_eq!(digest.unique_matches(), 0);
}

#[test]
fn test_single_paper_group_is_skipped() {
	let mut library = scenario_library();
	library.push(reference("LONE", &["quantum"], point(2, 42)));

	let digest = ranking::run(&library, &scenario_candidates(), &request(&["quantum", "nlp"], -1e9));

	let quantum = digest.group(&GroupKey::Tag("quantum".to_string())).unwrap();
	assert_eq!(
		quantum.outcome,
		GroupOutcome::Skipped {
			reason: SkipReason::InsufficientData { found: 1, required: 2 }
		}
	);
	assert_eq!(ranked(&digest, &nlp()).len(), 2);
}

#[test]
fn test_library_of_one_skips_all_group() {
	let library = vec![reference("ONLY", &[], point(NLP, 1))];
	let digest = ranking::run(&library, &scenario_candidates(), &request(&[], 0.0));

	assert_eq!(digest.groups.len(), 1);
	assert!(digest.groups[0].is_skipped());
}

#[test]
fn test_empty_tag_list_yields_only_all_group() {
	let digest = ranking::run(&scenario_library(), &scenario_candidates(), &request(&[], 0.0));
	assert_eq!(digest.groups.len(), 1);
	assert_eq!(digest.groups[0].group, GroupKey::All);
	assert!(!digest.uses_sections());
}

#[test]
fn test_scores_respect_threshold_and_order() {
	let library = scenario_library();
	let mut candidates = scenario_candidates();
	for seed in 0..6 {
		candidates.push(candidate(&format!("2401.0000{}", seed), point(if seed % 2 == 0 { NLP } else { VISION }, 300 + seed)));
	}

	for threshold in [-1.0, -0.1, 0.0, 0.05, 0.1, 0.5] {
		let digest = ranking::run(&library, &candidates, &request(&["nlp", "vision"], threshold));
		for report in &digest.groups {
			let entries = report.entries();
			assert!(entries.iter().all(|e| e.score >= threshold));
			for pair in entries.windows(2) {
				assert!(pair[0].score >= pair[1].score);
				if pair[0].score == pair[1].score {
					assert!(pair[0].id < pair[1].id);
				}
			}
		}
	}
}

#[test]
fn test_ties_break_by_id_ascending() {
	let library = scenario_library();
	let shared = point(NLP, 77);
	let candidates = vec![
		candidate("2401.00003", shared.clone()),
		candidate("2401.00001", shared.clone()),
		candidate("2401.00002", shared),
	];

	let digest = ranking::run(&library, &candidates, &request(&["nlp"], -1e9));
	let result = ranked(&digest, &nlp());
	let ids: Vec<&str> = result.iter().map(|e| e.id.as_str()).collect();
	assert_eq!(ids, vec!["2401.00001", "2401.00002", "2401.00003"]);

	let scores: Vec<f64> = result.scores().collect();
	assert_eq!(scores[0].to_bits(), scores[1].to_bits());
	assert_eq!(scores[1].to_bits(), scores[2].to_bits());
}

#[test]
fn test_repeated_runs_are_bit_identical() {
	let library = scenario_library();
	let candidates = scenario_candidates();
	let req = request(&["nlp", "vision"], -1e9);

	let first = ranking::run(&library, &candidates, &req);
	let second = ranking::run(&library, &candidates, &req);

	assert_eq!(first.groups, second.groups);
	for (a, b) in first.groups.iter().zip(&second.groups) {
		let a_bits: Vec<u64> = a.entries().iter().map(|e| e.score.to_bits()).collect();
		let b_bits: Vec<u64> = b.entries().iter().map(|e| e.score.to_bits()).collect();
		assert_eq!(a_bits, b_bits);
	}
}

#[test]
fn test_refilter_is_idempotent() {
	let library = scenario_library();
	let candidates = scenario_candidates();
	let threshold = Threshold::new(-0.5).unwrap();

	let digest = ranking::run(&library, &candidates, &RankRequest::new(tags(&["nlp"]), threshold));
	let result = ranked(&digest, &nlp());

	let again = refilter(&result, threshold);
	assert_eq!(again, result);
	assert_eq!(refilter(&again, threshold), again);

	let stricter = refilter(&result, Threshold::new(1e6).unwrap());
	assert!(stricter.is_empty());
}

#[test]
fn test_dimension_mismatch_excludes_only_that_paper() {
	let mut library = scenario_library();
	library.push(reference("SHORT", &["nlp"], vec![1.0; DIM - 1]));

	let mut candidates = scenario_candidates();
	candidates.push(candidate("BAD", vec![0.5; DIM + 2]));

	let digest = ranking::run(&library, &candidates, &request(&["nlp"], -1e9));

	assert_eq!(digest.dimension, Some(DIM));
	assert_eq!(digest.candidates_considered, 2);
	assert_eq!(digest.references, 8);
	assert_eq!(digest.group(&nlp()).unwrap().references, 5);

	let excluded: Vec<(&str, PaperRole)> = digest.excluded.iter().map(|e| (e.id.as_str(), e.role)).collect();
	assert_eq!(excluded, vec![("SHORT", PaperRole::Reference), ("BAD", PaperRole::Candidate)]);

	let result = ranked(&digest, &nlp());
	assert!(result.iter().all(|e| e.id.as_str() != "BAD"));
	assert_eq!(result.len(), 2);
}

#[test]
fn test_non_finite_candidate_is_excluded() {
	let mut bad = point(NLP, 5);
	bad[3] = f32::NAN;
	let mut candidates = scenario_candidates();
	candidates.push(candidate("NAN", bad));

	let digest = ranking::run(&scenario_library(), &candidates, &request(&[], -1e9));
	assert_eq!(digest.excluded.len(), 1);
	assert_eq!(digest.excluded[0].id.as_str(), "NAN");
	assert_eq!(ranked(&digest, &GroupKey::All).len(), 2);
}

#[test]
fn test_configured_dimension_overrides_library() {
	let digest = ranking::run(
		&scenario_library(),
		&scenario_candidates(),
		&request(&[], 0.0).with_dim(DIM + 1),
	);
	assert_eq!(digest.references, 0);
	assert_eq!(digest.candidates_considered, 0);
	assert_eq!(digest.excluded.len(), 10);
	assert!(digest.groups[0].is_skipped());
}

#[test]
fn test_duplicate_candidates_counted_once() {
	let mut candidates = scenario_candidates();
	candidates.push(candidate("2401.12345v1", point(NLP, 9)));
	candidates.push(candidate("2401.12345v2", point(NLP, 9)));

	let digest = ranking::run(&scenario_library(), &candidates, &request(&["nlp"], -1e9));

	assert_eq!(digest.candidates_considered, 3);
	assert_eq!(digest.excluded.len(), 1);
	assert_eq!(digest.excluded[0].reason, "duplicate candidate id");

	let result = ranked(&digest, &nlp());
	let hits = result.iter().filter(|e| e.id.as_str() == "2401.12345").count();
	assert_eq!(hits, 1);
	assert_eq!(digest.unique_matches(), 3);
}

#[test]
fn test_entries_point_back_to_candidate_table() {
	let mut candidates = vec![candidate("BROKEN", vec![0.0; 3])];
	candidates.extend(scenario_candidates());

	let digest = ranking::run(&scenario_library(), &candidates, &request(&[], -1e9));
	for entry in ranked(&digest, &GroupKey::All).iter() {
		assert_eq!(candidates[entry.candidate].id, entry.id);
	}
}

#[test]
fn test_no_candidates_gives_empty_ranked_groups() {
	let digest = ranking::run(&scenario_library(), &[], &request(&["nlp"], 0.0));
	for report in &digest.groups {
		assert!(!report.is_skipped());
		assert!(report.entries().is_empty());
	}
}

#[test]
fn test_truncated_first_library_paper_does_not_set_dimension() {
	let mut library = vec![reference("BROKEN", &["nlp"], vec![1.0; 3])];
	library.extend(scenario_library());

	let digest = ranking::run(&library, &scenario_candidates(), &request(&["nlp"], -1e9));

	assert_eq!(digest.dimension, Some(DIM));
	assert_eq!(digest.references, 8);
	assert_eq!(digest.candidates_considered, 2);
	assert_eq!(digest.excluded.len(), 1);
	assert_eq!(digest.excluded[0].id.as_str(), "BROKEN");

	assert_eq!(ranked(&digest, &GroupKey::All).len(), 2);
	let result = ranked(&digest, &nlp());
	assert_eq!(result.entries()[0].id.as_str(), "C1");
}

#[test]
fn test_dimension_tie_goes_to_first_length_seen() {
	let library = vec![
		reference("A", &[], point(NLP, 1)),
		reference("B", &[], vec![0.5; 4]),
		reference("C", &[], point(NLP, 2)),
		reference("D", &[], vec![0.25; 4]),
	];

	let digest = ranking::run(&library, &scenario_candidates(), &request(&[], -1e9));
	assert_eq!(digest.dimension, Some(DIM));
	let excluded: Vec<&str> = digest.excluded.iter().map(|e| e.id.as_str()).collect();
	assert_eq!(excluded, vec!["B", "D"]);
}

#[test]
fn test_empty_library_takes_dimension_from_candidates() {
	let digest = ranking::run(&[], &scenario_candidates(), &request(&["nlp"], 0.0));
	assert_eq!(digest.dimension, Some(DIM));
	assert_eq!(digest.candidates_considered, 2);
	assert!(digest.groups.iter().all(|g| g.is_skipped()));
}
