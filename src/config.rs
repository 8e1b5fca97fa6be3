//! Experiment configuration handed to the preprocessing pipeline.
//!
//! The parser's responsibility ends at validating flags and collecting the
//! option values; this module turns that mapping into a [`ConfigData`]. The
//! experiment file itself is interpreted downstream and is never read here.

use std::env;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use thiserror::Error;
use tracing::debug;

use crate::PROGRAM_NAME;

/// Corpus language handled by the preprocessor.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    De,
    En,
}

/// Input file encoding.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Encoding {
    #[default]
    Iso,
    Utf8,
    Hex,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(
        "You have to provide an experiment file.\nPlease start with <{} --help>.",
        PROGRAM_NAME
    )]
    MissingExpFile,

    #[error("Cannot resolve working directory: {0}")]
    WorkingDir(#[from] std::io::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Validated invocation settings for one preprocessing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigData {
    /// Absolute path to the experiment file
    pub exp_file: PathBuf,
    pub language: Language,
    pub encoding: Encoding,
}

impl ConfigData {
    /// Build the configuration from the validated option values.
    ///
    /// The experiment file path is expanded to an absolute path (tilde plus
    /// working-directory join); its existence is not checked because reading
    /// it belongs to the pipeline, not to option parsing.
    pub fn new(
        exp_file: Option<&Path>,
        language: Option<Language>,
        encoding: Option<Encoding>,
    ) -> ConfigResult<Self> {
        let exp_file = expand_path(exp_file.ok_or(ConfigError::MissingExpFile)?)?;
        debug!("exp_file: {:?}", exp_file);

        Ok(Self {
            exp_file,
            language: language.unwrap_or_default(),
            encoding: encoding.unwrap_or_default(),
        })
    }
}

fn expand_path(path: &Path) -> ConfigResult<PathBuf> {
    let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
    let expanded = PathBuf::from(expanded);
    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        Ok(env::current_dir()?.join(expanded))
    }
}
