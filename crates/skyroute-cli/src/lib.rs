//! Skyroute CLI library.
//!
//! Subcommand handlers and output formatting live here so `main.rs` only
//! parses arguments and dispatches.

pub mod commands;
pub mod output;
