use nwalign::core::io::fasta::FastaError;
use nwalign::engine::error::EngineError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] EngineError),

    #[error("Failed to parse configuration file '{path}': {source}", path = path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read sequence file '{path}': {source}", path = path.display())]
    SequenceFile {
        path: PathBuf,
        #[source]
        source: FastaError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
