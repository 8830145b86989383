use crate::core::models::sequence::{Sequence, SequenceError};
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Defines the interface for reading a single sequence from a textual source.
///
/// Implementors handle format-specific framing (headers, comments, line wrapping)
/// and normalize the body into a validated [`Sequence`].
pub trait SequenceFile {
    /// The error type for read operations.
    type Error: Error + From<io::Error> + From<SequenceError>;

    /// Reads and normalizes one sequence from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if the source is empty, holds no sequence body, or an
    /// I/O operation fails.
    fn read_from(reader: &mut impl BufRead) -> Result<Sequence, Self::Error>;

    /// Reads one sequence and rejects it when it is longer than `max_len`.
    ///
    /// # Errors
    ///
    /// In addition to the errors of [`SequenceFile::read_from`], returns
    /// [`SequenceError::TooLong`] when the bound is exceeded.
    fn read_bounded(reader: &mut impl BufRead, max_len: usize) -> Result<Sequence, Self::Error> {
        let sequence = Self::read_from(reader)?;
        sequence.ensure_max_len(max_len)?;
        Ok(sequence)
    }

    /// Reads one sequence from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Sequence, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Reads one sequence from a file path, enforcing a maximum length.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened, parsing fails, or the
    /// sequence is longer than `max_len`.
    fn read_from_path_bounded<P: AsRef<Path>>(
        path: P,
        max_len: usize,
    ) -> Result<Sequence, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_bounded(&mut reader, max_len)
    }
}
