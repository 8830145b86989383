use std::fmt;

/// Marker placed in an aligned row where the other row holds a symbol with no counterpart.
pub const GAP: u8 = b'_';

/// One optimal path through the score matrix rendered as two equal-length rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Alignment {
    first: Vec<u8>,
    second: Vec<u8>,
}

impl Alignment {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            first: Vec::with_capacity(capacity),
            second: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, first: u8, second: u8) {
        self.first.push(first);
        self.second.push(second);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.first.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.first.is_empty()
    }

    pub fn first(&self) -> &[u8] {
        &self.first
    }

    pub fn second(&self) -> &[u8] {
        &self.second
    }

    pub fn first_str(&self) -> String {
        String::from_utf8_lossy(&self.first).into_owned()
    }

    pub fn second_str(&self) -> String {
        String::from_utf8_lossy(&self.second).into_owned()
    }

    /// The first row with every gap marker removed.
    pub fn ungapped_first(&self) -> Vec<u8> {
        self.first.iter().copied().filter(|&s| s != GAP).collect()
    }

    /// The second row with every gap marker removed.
    pub fn ungapped_second(&self) -> Vec<u8> {
        self.second.iter().copied().filter(|&s| s != GAP).collect()
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.first_str())?;
        write!(f, "{}", self.second_str())
    }
}

/// An alignment paired with the optimal score shared by every alignment of its session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScoredAlignment {
    pub score: i64,
    pub alignment: Alignment,
}

impl From<ScoredAlignment> for (i64, Alignment) {
    fn from(s: ScoredAlignment) -> Self {
        (s.score, s.alignment)
    }
}
