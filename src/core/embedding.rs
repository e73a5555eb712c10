//! Dense embedding vectors supplied by the external embedding job

use serde::{Deserialize, Serialize};

use crate::error::{RankError, RankResult};

/// Raw embedding of a paper abstract.
///
/// Unlike search embeddings these are not normalized: the scorer standardizes
/// features per group, so the original magnitudes are kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Embedding(Vec<f32>);

impl Embedding {
	pub fn new(data: Vec<f32>) -> Self {
		Self(data)
	}

	pub fn as_slice(&self) -> &[f32] {
		&self.0
	}

	pub fn dim(&self) -> usize {
		self.0.len()
	}

	/// Check dimension and finiteness against the run's expected dimension
	pub fn validate(&self, id: &str, expected: usize) -> RankResult<()> {
		if self.0.len() != expected {
			return Err(RankError::DimensionMismatch {
				id: id.to_string(),
				expected,
				found: self.0.len(),
			});
		}
		if self.0.iter().any(|v| !v.is_finite()) {
			return Err(RankError::NonFinite { id: id.to_string() });
		}
		Ok(())
	}
}

impl From<Vec<f32>> for Embedding {
	fn from(data: Vec<f32>) -> Self {
		Self(data)
	}
}
