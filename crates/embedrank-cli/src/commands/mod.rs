//! CLI command handlers.
//!
//! Each handler takes its parsed arguments plus the loaded configuration
//! and returns a process exit code.

pub mod recommend;
