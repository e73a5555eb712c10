//! Application configuration and constants

use crate::core::Threshold;
use crate::error::{RankError, RankResult};

// === Groups ===
pub const ALL_GROUP: &str = "all";
pub const MIN_GROUP_SIZE: usize = 2;

// === One-class SVM ===
pub const DEFAULT_NU: f64 = 0.1;
pub const SOLVER_TOLERANCE: f64 = 1e-3;

// === Storage ===
pub const JSON_EXT: &str = "json";
pub const MSGPACK_EXTS: &[&str] = &["msgpack", "mp"];

// === Display ===
pub const MAX_AUTHORS: usize = 5;

// === Environment ===
pub const ENV_MIN_SCORE: &str = "MIN_SCORE";
pub const ENV_TAGS: &str = "ZOTERO_TAGS";
pub const ENV_IGNORE: &str = "ZOTERO_IGNORE";
pub const ENV_SEND_EMPTY: &str = "SEND_EMPTY";
pub const ENV_DIM: &str = "EMBEDDING_DIM";
pub const ENV_NU: &str = "NU";

/// Hyperparameters of the one-class boundary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvmParams {
	pub nu: f64,
	pub tolerance: f64,
}

impl SvmParams {
	pub fn new(nu: f64) -> RankResult<Self> {
		if !(nu > 0.0 && nu <= 1.0) {
			return Err(RankError::InvalidNu(nu));
		}
		Ok(Self {
			nu,
			tolerance: SOLVER_TOLERANCE,
		})
	}
}

impl Default for SvmParams {
	fn default() -> Self {
		Self {
			nu: DEFAULT_NU,
			tolerance: SOLVER_TOLERANCE,
		}
	}
}

/// Validated settings for one ranking run
#[derive(Debug, Clone)]
pub struct RankRequest {
	pub tags: Vec<String>,
	pub threshold: Threshold,
	pub svm: SvmParams,
	/// Embedding dimension; inferred from the library when unset
	pub dim: Option<usize>,
}

impl RankRequest {
	pub fn new(tags: Vec<String>, threshold: Threshold) -> Self {
		Self {
			tags,
			threshold,
			svm: SvmParams::default(),
			dim: None,
		}
	}

	/// Build a request from raw settings, failing before any scoring
	/// if the threshold, tag list or `nu` is unusable.
	pub fn from_raw(tags: &[String], threshold: Option<f64>, nu: f64, dim: Option<usize>) -> RankResult<Self> {
		let threshold = threshold
			.ok_or_else(|| RankError::InvalidThreshold("missing".to_string()))
			.and_then(Threshold::new)?;
		if dim == Some(0) {
			return Err(RankError::InvalidDimension(0));
		}
		Ok(Self {
			tags: normalize_tags(tags)?,
			threshold,
			svm: SvmParams::new(nu)?,
			dim,
		})
	}

	pub fn with_svm(mut self, svm: SvmParams) -> Self {
		self.svm = svm;
		self
	}

	pub fn with_dim(mut self, dim: usize) -> Self {
		self.dim = Some(dim);
		self
	}
}

/// Trim tags, drop repeats and reject empty entries (`"nlp,,cv"`).
///
/// A tag named like the whole-library group is rejected too, since both
/// sections would carry the same label.
pub fn normalize_tags(tags: &[String]) -> RankResult<Vec<String>> {
	let mut out: Vec<String> = Vec::with_capacity(tags.len());
	for raw in tags {
		let tag = raw.trim();
		if tag.is_empty() {
			return Err(RankError::MalformedTags(format!(
				"empty entry in [{}]",
				tags.join(",")
			)));
		}
		if tag == ALL_GROUP {
			return Err(RankError::MalformedTags(format!(
				"'{}' is reserved for the whole library",
				ALL_GROUP
			)));
		}
		if !out.iter().any(|t| t == tag) {
			out.push(tag.to_string());
		}
	}
	Ok(out)
}
