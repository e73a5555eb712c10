// Shared fixtures for integration tests

#![allow(dead_code)]

use zotrank::core::{Embedding, LibraryEntry, Paper, PaperId};

pub const DIM: usize = 8;

pub const NLP: usize = 0;
pub const VISION: usize = 4;

/// Point near a cluster whose two "hot" dimensions start at `center`.
/// Noise is a fixed function of `seed`, so fixtures never change.
pub fn point(center: usize, seed: usize) -> Vec<f32> {
	(0..DIM)
		.map(|j| {
			let base = if j == center || j == center + 1 { 3.0 } else { 0.0 };
			let noise = (((seed * 31 + j * 17) as f32) * 0.7).sin() * 0.3;
			base + noise
		})
		.collect()
}

pub fn reference(key: &str, tags: &[&str], embedding: Vec<f32>) -> LibraryEntry {
	let paper = Paper::new(PaperId::new(key), Embedding::new(embedding)).with_title(format!("Library {}", key));
	LibraryEntry::new(paper).with_tags(tags.iter().copied())
}

pub fn candidate(id: &str, embedding: Vec<f32>) -> Paper {
	Paper::new(PaperId::arxiv(id), Embedding::new(embedding)).with_title(format!("Candidate {}", id))
}

/// Five "nlp" papers and three "vision" papers, no overlap
pub fn scenario_library() -> Vec<LibraryEntry> {
	let mut library = Vec::new();
	for seed in 1..=5 {
		library.push(reference(&format!("NLP{}", seed), &["nlp"], point(NLP, seed)));
	}
	for seed in 6..=8 {
		library.push(reference(&format!("VIS{}", seed), &["vision"], point(VISION, seed)));
	}
	library
}

/// C1 sits in the nlp cluster, C2 in the vision cluster
pub fn scenario_candidates() -> Vec<Paper> {
	vec![candidate("C1", point(NLP, 100)), candidate("C2", point(VISION, 200))]
}

pub fn tags(list: &[&str]) -> Vec<String> {
	list.iter().map(|t| t.to_string()).collect()
}
