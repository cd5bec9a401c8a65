//! Subcommand handlers for the tkb binary.

pub mod completions;
pub mod config;
pub mod extract;
