//! # zotrank
//!
//! Ranks newly announced arXiv papers against a Zotero library.
//! Each group (the whole library, plus one per requested tag) gets a
//! one-class SVM fitted on its abstract embeddings; candidates are scored by
//! signed distance to that boundary, thresholded and ordered.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod ranking;
pub mod storage;
pub mod ui;

pub use config::{RankRequest, SvmParams};
pub use crate::core::{GroupKey, GroupOutcome, LibraryEntry, Paper, PaperId, RankedResult, Threshold};
pub use error::{RankError, RankResult};
pub use ranking::Digest;
