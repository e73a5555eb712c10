//! Scores, thresholds and per-group ranking output

use serde::Serialize;

use super::{GroupKey, PaperId};
use crate::error::{RankError, RankResult};

/// Minimum score a candidate needs to appear in a group.
///
/// Always finite; NaN or infinite values are rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Threshold(f64);

impl Threshold {
	pub fn new(value: f64) -> RankResult<Self> {
		if value.is_finite() {
			Ok(Self(value))
		} else {
			Err(RankError::InvalidThreshold(value.to_string()))
		}
	}

	pub fn value(&self) -> f64 {
		self.0
	}

	pub fn admits(&self, score: f64) -> bool {
		score >= self.0
	}
}

impl std::str::FromStr for Threshold {
	type Err = RankError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let value: f64 = s
			.trim()
			.parse()
			.map_err(|_| RankError::InvalidThreshold(format!("'{}' is not a number", s)))?;
		Self::new(value)
	}
}

impl std::fmt::Display for Threshold {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// One candidate in a group's ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
	/// Position of the candidate in the run's candidate table
	#[serde(skip)]
	pub candidate: usize,
	pub id: PaperId,
	pub score: f64,
}

/// Candidates of one group, descending by score, ties by id ascending
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RankedResult(Vec<RankedEntry>);

impl RankedResult {
	/// Wrap entries that are already filtered and ordered
	pub(crate) fn from_sorted(entries: Vec<RankedEntry>) -> Self {
		Self(entries)
	}

	pub fn entries(&self) -> &[RankedEntry] {
		&self.0
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, RankedEntry> {
		self.0.iter()
	}

	pub fn scores(&self) -> impl Iterator<Item = f64> + '_ {
		self.0.iter().map(|e| e.score)
	}
}

/// Spread of raw scores for a group, before thresholding
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreStats {
	pub scored: usize,
	pub min: f64,
	pub max: f64,
}

impl ScoreStats {
	pub fn from_scores(scores: &[f64]) -> Option<Self> {
		if scores.is_empty() {
			return None;
		}
		let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
		let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
		Some(Self {
			scored: scores.len(),
			min,
			max,
		})
	}
}

/// Why a group produced no ranking at all
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
	/// No library paper carries the tag
	NoReferencePapers,
	/// Too few papers to fit a boundary
	InsufficientData { found: usize, required: usize },
	/// Fitting failed for another reason
	Failed { error: String },
}

impl std::fmt::Display for SkipReason {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			SkipReason::NoReferencePapers => write!(f, "no reference papers"),
			SkipReason::InsufficientData { found, required } => {
				write!(f, "{} reference papers, need at least {}", found, required)
			}
			SkipReason::Failed { error } => write!(f, "{}", error),
		}
	}
}

/// What happened to a group during the run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GroupOutcome {
	Ranked {
		result: RankedResult,
		stats: Option<ScoreStats>,
	},
	Skipped {
		#[serde(flatten)]
		reason: SkipReason,
	},
}

/// Per-group section of the digest
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupReport {
	pub group: GroupKey,
	pub references: usize,
	pub outcome: GroupOutcome,
}

impl GroupReport {
	/// Ranked candidates, empty for skipped groups
	pub fn entries(&self) -> &[RankedEntry] {
		match &self.outcome {
			GroupOutcome::Ranked { result, .. } => result.entries(),
			GroupOutcome::Skipped { .. } => &[],
		}
	}

	pub fn is_skipped(&self) -> bool {
		matches!(self.outcome, GroupOutcome::Skipped { .. })
	}

	pub fn has_matches(&self) -> bool {
		!self.entries().is_empty()
	}
}
