//! # User Interface
//!
//! Timestamped, colored log lines on stderr and digest output on stdout.

pub mod log;

pub use log::{debug, error, header, hyperlink, info, score_colored, success, warn, Log};
