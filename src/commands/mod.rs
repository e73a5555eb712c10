//! # Command Implementations
//!
//! Each submodule handles one CLI command.

pub mod groups;
pub mod rank;
