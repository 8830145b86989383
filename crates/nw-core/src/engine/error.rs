use thiserror::Error;

use super::config::ConfigError;
use crate::core::models::sequence::SequenceError;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum EngineError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid {which} sequence: {source}")]
    Sequence {
        which: &'static str,
        #[source]
        source: SequenceError,
    },
}

impl EngineError {
    pub(crate) fn first(source: SequenceError) -> Self {
        Self::Sequence {
            which: "first",
            source,
        }
    }

    pub(crate) fn second(source: SequenceError) -> Self {
        Self::Sequence {
            which: "second",
            source,
        }
    }
}
