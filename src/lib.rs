//! Option parsing front end for FrPrep, the preprocessing stage that runs
//! before frame/word-sense assignment and semantic role assignment.
//!
//! The crate validates a flat flag/value command line, renders usage and
//! version text, and hands a [`config::ConfigData`] to the downstream
//! pipeline. It never terminates the process itself: [`cli::parser::parse`]
//! returns a tagged outcome and the binary in `main.rs` picks the exit code.

pub mod cli;
pub mod config;
pub mod exitcode;

/// Program name as used in usage text and diagnostics.
pub const PROGRAM_NAME: &str = "frprep";

/// Version string printed by `-v`/`--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
