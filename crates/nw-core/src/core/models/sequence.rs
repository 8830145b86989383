use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SequenceError {
    #[error("Sequence is empty")]
    Empty,
    #[error("Sequence source contains no sequence body")]
    NoBody,
    #[error("Invalid symbol '{symbol}' at position {position} (expected an uppercase letter)")]
    InvalidSymbol { symbol: char, position: usize },
    #[error("Sequence length {length} exceeds the maximum of {max}")]
    TooLong { length: usize, max: usize },
}

/// An immutable run of uppercase ASCII symbols.
///
/// Positions are 1-indexed: position 0 is the sentinel standing for "before the
/// sequence" and never holds a symbol. A `Sequence` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence {
    symbols: Vec<u8>,
}

impl Sequence {
    pub fn new(symbols: impl Into<Vec<u8>>) -> Result<Self, SequenceError> {
        let symbols = symbols.into();
        if symbols.is_empty() {
            return Err(SequenceError::Empty);
        }
        if let Some(index) = symbols.iter().position(|s| !s.is_ascii_uppercase()) {
            return Err(SequenceError::InvalidSymbol {
                symbol: symbols[index] as char,
                position: index + 1,
            });
        }
        Ok(Self { symbols })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Returns the symbol at a 1-indexed position, or `None` for the sentinel
    /// position 0 and anything past the end.
    #[inline]
    pub fn get(&self, position: usize) -> Option<u8> {
        position
            .checked_sub(1)
            .and_then(|index| self.symbols.get(index).copied())
    }

    /// Returns the symbol at a 1-indexed position.
    ///
    /// # Panics
    ///
    /// Panics if `position` is 0 or greater than `len()`.
    #[inline]
    pub fn symbol(&self, position: usize) -> u8 {
        self.symbols[position - 1]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.symbols
    }

    pub fn ensure_max_len(&self, max: usize) -> Result<(), SequenceError> {
        if self.len() > max {
            return Err(SequenceError::TooLong {
                length: self.len(),
                max,
            });
        }
        Ok(())
    }
}

impl FromStr for Sequence {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.as_bytes())
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Symbols are validated ASCII.
        f.write_str(&String::from_utf8_lossy(&self.symbols))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_uppercase_letters() {
        let seq = Sequence::new("ACGT").unwrap();
        assert_eq!(seq.len(), 4);
        assert_eq!(seq.as_bytes(), b"ACGT");
        assert_eq!(seq.to_string(), "ACGT");
    }

    #[test]
    fn new_rejects_empty_input() {
        assert_eq!(Sequence::new(""), Err(SequenceError::Empty));
    }

    #[test]
    fn new_rejects_lowercase_and_non_letters() {
        assert_eq!(
            Sequence::new("ACgT"),
            Err(SequenceError::InvalidSymbol {
                symbol: 'g',
                position: 3
            })
        );
        assert!(matches!(
            Sequence::new("AC-T"),
            Err(SequenceError::InvalidSymbol { symbol: '-', .. })
        ));
    }

    #[test]
    fn positions_are_one_indexed_with_sentinel_at_zero() {
        let seq: Sequence = "ADC".parse().unwrap();
        assert_eq!(seq.get(0), None);
        assert_eq!(seq.get(1), Some(b'A'));
        assert_eq!(seq.get(3), Some(b'C'));
        assert_eq!(seq.get(4), None);
        assert_eq!(seq.symbol(2), b'D');
    }

    #[test]
    #[should_panic]
    fn symbol_panics_on_sentinel_position() {
        let seq: Sequence = "A".parse().unwrap();
        seq.symbol(0);
    }

    #[test]
    fn ensure_max_len_enforces_bound_inclusively() {
        let seq: Sequence = "ABCD".parse().unwrap();
        assert!(seq.ensure_max_len(4).is_ok());
        assert_eq!(
            seq.ensure_max_len(3),
            Err(SequenceError::TooLong { length: 4, max: 3 })
        );
    }
}
