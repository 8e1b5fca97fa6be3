//! Core option parsing: raw argument list in, tagged outcome out.
//!
//! The parser never exits the process and never touches the real output
//! streams. Help and version text travel inside [`ParseOutcome`], diagnostics
//! inside [`CliError`]; the binary decides what to print where and which
//! exit code to use.

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::Parser;
use tracing::debug;

use crate::cli::args::Cli;
use crate::cli::error::{CliError, CliResult};
use crate::config::ConfigData;
use crate::{PROGRAM_NAME, VERSION};

/// What a finished parse asks the caller to do.
#[derive(Debug)]
pub enum ParseOutcome {
    /// All options recognized and valid; hand off to the pipeline.
    Config(ConfigData),
    /// Rendered usage banner, to be printed to stdout (exit 0).
    Help(String),
    /// Version string, to be printed to stdout (exit 0).
    Version(String),
}

/// Parse an argument list as handed over by the invoking process,
/// without the program name.
///
/// An empty list counts as a help request: the canonical `--help` token is
/// substituted before parsing.
pub fn parse<I, S>(args: I) -> CliResult<ParseOutcome>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut argv: Vec<String> = vec![PROGRAM_NAME.to_string()];
    argv.extend(args.into_iter().map(Into::into));
    debug!("cmd_args: {:?}", &argv[1..]);

    // If no options provided print the help.
    if argv.len() == 1 {
        argv.push("--help".to_string());
    }

    let cli = match Cli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(err) => return outcome_from_error(err),
    };

    if cli.version {
        return Ok(ParseOutcome::Version(VERSION.to_string()));
    }

    let config = ConfigData::new(cli.expfile.as_deref(), cli.language, cli.encoding)?;
    Ok(ParseOutcome::Config(config))
}

/// Map clap's failure taxonomy onto ours. Unknown option names and
/// unsupported option values get the toolchain's wording; everything else
/// stays a [`CliError::Parse`] so the cause reaches the caller unchanged.
fn outcome_from_error(err: clap::Error) -> CliResult<ParseOutcome> {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            Ok(ParseOutcome::Help(err.to_string()))
        }
        ErrorKind::UnknownArgument => match context_string(&err, ContextKind::InvalidArg) {
            Some(token) => Err(CliError::InvalidOption(token)),
            None => Err(CliError::Parse(err)),
        },
        ErrorKind::InvalidValue => match context_string(&err, ContextKind::InvalidValue) {
            Some(value) if !value.is_empty() => Err(CliError::UnsupportedValue(value)),
            // "-e" with no value at all: report clap's own message.
            _ => Err(CliError::Parse(err)),
        },
        _ => Err(CliError::Parse(err)),
    }
}

fn context_string(err: &clap::Error, kind: ContextKind) -> Option<String> {
    match err.get(kind) {
        Some(ContextValue::String(s)) => Some(s.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_outcome_carries_banner() {
        let outcome = parse(["--help"]).unwrap();
        match outcome {
            ParseOutcome::Help(text) => {
                assert!(text.contains("Usage:"));
                assert!(text.contains("frprep"));
            }
            other => panic!("expected help outcome, got {:?}", other),
        }
    }

    #[test]
    fn test_version_outcome_is_bare_version() {
        let outcome = parse(["-v"]).unwrap();
        match outcome {
            ParseOutcome::Version(text) => assert_eq!(text, VERSION),
            other => panic!("expected version outcome, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_option_names_the_token() {
        let err = parse(["--invalid-option"]).unwrap_err();
        match err {
            CliError::InvalidOption(token) => assert_eq!(token, "--invalid-option"),
            other => panic!("expected invalid option error, got {:?}", other),
        }
    }
}
