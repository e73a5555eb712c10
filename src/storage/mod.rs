//! Embedding file storage

pub mod export;
pub mod records;
pub mod store;

pub use export::DigestExport;
pub use records::{CandidateRecord, LibraryRecord};
pub use store::{load_candidates, load_library, write_json, Format};
