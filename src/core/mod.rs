//! Core domain types

pub mod embedding;
pub mod group;
pub mod paper;
pub mod score;

pub use embedding::Embedding;
pub use group::{Group, GroupKey};
pub use paper::{LibraryEntry, Paper, PaperId};
pub use score::{
	GroupOutcome, GroupReport, RankedEntry, RankedResult, ScoreStats, SkipReason, Threshold,
};
