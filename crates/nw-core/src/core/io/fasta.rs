use crate::core::io::traits::SequenceFile;
use crate::core::models::sequence::{Sequence, SequenceError};
use std::io::{self, BufRead};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum FastaError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid sequence: {0}")]
    Sequence(#[from] SequenceError),
}

impl FastaError {
    /// The underlying sequence validation failure, if this is one.
    pub fn as_sequence_error(&self) -> Option<&SequenceError> {
        match self {
            FastaError::Sequence(e) => Some(e),
            FastaError::Io(_) => None,
        }
    }
}

/// Reader for single-record FASTA files (plain, headerless sequence text is accepted too).
///
/// `>` header lines and `;` comment lines are skipped, body lines are joined,
/// every non-letter is dropped and letters are upper-cased. Only the first
/// record is read.
pub struct FastaFile;

impl SequenceFile for FastaFile {
    type Error = FastaError;

    fn read_from(reader: &mut impl BufRead) -> Result<Sequence, Self::Error> {
        let mut body = Vec::new();
        let mut saw_content = false;
        let mut in_body = false;

        for (line_num, line_res) in reader.lines().enumerate() {
            let line = line_res?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            saw_content = true;

            if trimmed.starts_with('>') {
                if in_body {
                    warn!(
                        "Additional FASTA record found on line {}; only the first record is used.",
                        line_num + 1
                    );
                    break;
                }
                debug!("Skipping FASTA header: {}", trimmed);
                continue;
            }
            if trimmed.starts_with(';') {
                continue;
            }

            in_body = true;
            body.extend(
                trimmed
                    .bytes()
                    .filter(u8::is_ascii_alphabetic)
                    .map(|b| b.to_ascii_uppercase()),
            );
        }

        if !saw_content {
            return Err(SequenceError::Empty.into());
        }
        if body.is_empty() {
            return Err(SequenceError::NoBody.into());
        }

        debug!("Read sequence of length {}.", body.len());
        Ok(Sequence::new(body)?)
    }
}
