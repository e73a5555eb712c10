//! Error types for the ranking engine.
//!
//! Configuration errors are fatal and surface before any scoring starts.
//! Data errors are scoped to one group or one paper and never abort a run.

use thiserror::Error;

/// Errors produced while validating a run or ranking a group.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RankError {
	/// Threshold is missing, NaN or infinite
	#[error("invalid score threshold: {0}")]
	InvalidThreshold(String),

	/// Requested tag list contains an empty entry
	#[error("malformed tag list: {0}")]
	MalformedTags(String),

	/// One-class SVM `nu` outside (0, 1]
	#[error("invalid nu {0}: must be in (0, 1]")]
	InvalidNu(f64),

	/// Configured embedding dimension of zero
	#[error("invalid embedding dimension {0}: must be at least 1")]
	InvalidDimension(usize),

	/// Collection ignore pattern the gitignore parser rejects
	#[error("invalid ignore pattern: {0}")]
	InvalidIgnorePattern(String),

	/// Group has too few reference papers to fit a boundary
	#[error("group '{group}' has {found} reference papers, need at least {required}")]
	InsufficientData {
		group: String,
		found: usize,
		required: usize,
	},

	/// Embedding length differs from the run's dimension
	#[error("paper '{id}' has embedding dimension {found}, expected {expected}")]
	DimensionMismatch {
		id: String,
		expected: usize,
		found: usize,
	},

	/// Embedding contains NaN or infinite components
	#[error("paper '{id}' has a non-finite embedding value")]
	NonFinite { id: String },

	/// The one-class solver rejected its input
	#[error("one-class SVM fit failed: {0}")]
	Solver(String),
}

impl RankError {
	/// True for errors that must abort the run before scoring
	pub fn is_fatal(&self) -> bool {
		matches!(
			self,
			RankError::InvalidThreshold(_)
				| RankError::MalformedTags(_)
				| RankError::InvalidNu(_)
				| RankError::InvalidDimension(_)
				| RankError::InvalidIgnorePattern(_)
		)
	}
}

pub type RankResult<T> = Result<T, RankError>;
