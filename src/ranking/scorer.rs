//! Fit a novelty model per group and score every candidate against it

use ndarray::Array2;
use rayon::prelude::*;

use super::scaler::StandardScaler;
use super::svm::OneClassSvm;
use crate::config::{SvmParams, MIN_GROUP_SIZE};
use crate::core::{Embedding, GroupKey};
use crate::error::{RankError, RankResult};

/// Standard scaler plus one-class SVM, both fitted on one group's references
#[derive(Debug, Clone)]
pub struct NoveltyModel {
	scaler: StandardScaler,
	svm: OneClassSvm,
	dim: usize,
}

impl NoveltyModel {
	/// Fit on reference embeddings that all have dimension `dim`.
	///
	/// Fails with `InsufficientData` for fewer than two references.
	pub fn fit(group: &GroupKey, references: &[&Embedding], dim: usize, params: &SvmParams) -> RankResult<Self> {
		if references.len() < MIN_GROUP_SIZE {
			return Err(RankError::InsufficientData {
				group: group.label().to_string(),
				found: references.len(),
				required: MIN_GROUP_SIZE,
			});
		}

		let x = to_matrix(references, dim);
		let (scaler, scaled) = StandardScaler::fit_transform(x.view());
		let svm = OneClassSvm::fit(scaled.view(), params)?;

		Ok(Self { scaler, svm, dim })
	}

	/// Decision value per candidate, in input order
	pub fn score(&self, candidates: &[&Embedding]) -> Vec<f64> {
		let x = to_matrix(candidates, self.dim);
		let scaled = self.scaler.transform(x.view());
		self.svm.decision_function(scaled.view())
	}

	pub fn svm(&self) -> &OneClassSvm {
		&self.svm
	}
}

/// Fit-and-score job for one group
pub struct GroupJob<'a> {
	pub key: GroupKey,
	pub references: Vec<&'a Embedding>,
}

/// Scores of one group, aligned with the candidate slice
pub struct GroupScores {
	pub key: GroupKey,
	pub references: usize,
	pub scores: RankResult<Vec<f64>>,
}

/// Score all candidates against every group.
///
/// Groups are independent, so they run in parallel; results come back in
/// job order and each group's arithmetic is sequential, keeping output
/// identical from run to run.
pub fn score_groups(jobs: Vec<GroupJob<'_>>, candidates: &[&Embedding], dim: usize, params: &SvmParams) -> Vec<GroupScores> {
	jobs.into_par_iter()
		.map(|job| {
			let scores = NoveltyModel::fit(&job.key, &job.references, dim, params).map(|model| {
				crate::ui::debug(&format!(
					"{}: {} support vectors, gamma {:.3e}, rho {:.4}",
					job.key,
					model.svm().n_support(),
					model.svm().gamma(),
					model.svm().rho()
				));
				model.score(candidates)
			});
			GroupScores {
				key: job.key,
				references: job.references.len(),
				scores,
			}
		})
		.collect()
}

fn to_matrix(rows: &[&Embedding], dim: usize) -> Array2<f64> {
	Array2::from_shape_fn((rows.len(), dim), |(i, j)| {
		rows[i].as_slice().get(j).copied().unwrap_or(0.0) as f64
	})
}
