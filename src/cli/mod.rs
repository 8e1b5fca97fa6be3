//! CLI layer: argument grammar, option parsing and error reporting

pub mod args;
pub mod error;
pub mod parser;

pub use args::Cli;
pub use error::{CliError, CliResult};
pub use parser::{parse, ParseOutcome};
