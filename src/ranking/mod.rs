//! # Ranking Engine
//!
//! Library partitioning, per-group novelty scoring and threshold ranking.

pub mod filter;
pub mod partition;
pub mod pipeline;
pub mod ranker;
pub mod scaler;
pub mod scorer;
pub mod svm;

pub use filter::CollectionFilter;
pub use partition::{partition, partition_subset, tag_counts};
pub use pipeline::{run, Digest, Exclusion, PaperRole};
pub use ranker::{rank, refilter};
pub use scorer::NoveltyModel;
pub use svm::OneClassSvm;
