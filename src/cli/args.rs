//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::{Encoding, Language};

const BANNER: &str = "Fred and Rosy Preprocessor <FrPrep>. Preprocessing stage before Fred and Rosy\n\
                      for further frame/word sense assignment and semantic role assignment.";

/// Fixed option grammar of the launcher. No sub-commands, no config file
/// merging, no environment sources; a flat flag/value surface only.
#[derive(Parser, Debug)]
#[command(name = crate::PROGRAM_NAME)]
#[command(about = BANNER, long_about = None)]
#[command(override_usage = "frprep -h | -e FILENAME")]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Provide the path to an experiment file.
    ///
    /// FrPrep will preprocess data according to the specifications given in
    /// your experiment file. This option is required.
    #[arg(short, long, value_name = "FILENAME")]
    pub expfile: Option<PathBuf>,

    /// Language to be processed
    #[arg(short, long, value_enum, value_name = "LANGUAGE")]
    pub language: Option<Language>,

    /// Encoding of the input files
    #[arg(short = 'E', long, value_enum, value_name = "ENCODING")]
    pub encoding: Option<Encoding>,

    /// Show the program version
    #[arg(short = 'v', long, action = ArgAction::SetTrue)]
    pub version: bool,

    /// Raise log verbosity (-d, -d -d, ...)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,
}
