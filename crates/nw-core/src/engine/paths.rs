use super::config::MismatchStyle;
use super::matrix::{AlignmentMatrix, Direction};
use crate::core::models::alignment::{Alignment, GAP, ScoredAlignment};
use std::borrow::Borrow;
use std::iter::FusedIterator;
use tracing::trace;

#[derive(Debug, Clone, Copy)]
struct Frame {
    row: usize,
    col: usize,
    /// Index into [`Direction::ORDER`] of the next move to try from this cell.
    cursor: usize,
}

/// Lazily enumerates the tied optimal alignments of a built [`AlignmentMatrix`].
///
/// The walk is a depth-first backtrack from the bottom-right cell to the origin
/// driven by an explicit heap stack, trying moves in the order `Up`, `Left`,
/// `Diag`. Each call to `next` resumes the suspended walk and stops at the next
/// arrival at the origin, so pulling `k` results costs `O(k * (n + m))` no
/// matter how many tied paths exist. At most `max_paths` results are produced.
///
/// `M` is either an owned matrix or a reference to one.
#[derive(Debug)]
pub struct PathEnumerator<M = AlignmentMatrix>
where
    M: Borrow<AlignmentMatrix>,
{
    matrix: M,
    frames: Vec<Frame>,
    /// `moves[k]` is the move chosen at `frames[k]`.
    moves: Vec<Direction>,
    max_paths: usize,
    emitted: usize,
}

impl<M> PathEnumerator<M>
where
    M: Borrow<AlignmentMatrix>,
{
    pub fn new(matrix: M, max_paths: usize) -> Self {
        let (rows, cols) = {
            let m: &AlignmentMatrix = matrix.borrow();
            (m.rows(), m.cols())
        };
        let depth = rows + cols - 1;

        let mut frames = Vec::with_capacity(depth);
        if max_paths > 0 {
            frames.push(Frame {
                row: rows - 1,
                col: cols - 1,
                cursor: 0,
            });
        }

        Self {
            matrix,
            frames,
            moves: Vec::with_capacity(depth),
            max_paths,
            emitted: 0,
        }
    }

    pub fn matrix(&self) -> &AlignmentMatrix {
        self.matrix.borrow()
    }

    /// The optimal score carried by every emitted alignment.
    pub fn score(&self) -> i64 {
        self.matrix().optimal_score()
    }

    pub fn emitted(&self) -> usize {
        self.emitted
    }

    pub fn max_paths(&self) -> usize {
        self.max_paths
    }

    /// Renders the moves on the stack, which currently reach the origin, as an alignment.
    fn render(&self) -> Alignment {
        let matrix = self.matrix();
        let (seq1, seq2) = (matrix.seq1(), matrix.seq2());
        let style = matrix.config().mismatch_style;

        let mut alignment = Alignment::with_capacity(self.moves.len());
        let chosen_at = &self.frames[..self.moves.len()];
        for (frame, &direction) in chosen_at.iter().zip(&self.moves).rev() {
            let (i, j) = (frame.row, frame.col);
            match direction {
                Direction::Up => alignment.push(seq1.symbol(i), GAP),
                Direction::Left => alignment.push(GAP, seq2.symbol(j)),
                Direction::Diag => {
                    let (a, b) = (seq1.symbol(i), seq2.symbol(j));
                    if a == b || style == MismatchStyle::Explicit {
                        alignment.push(a, b);
                    } else {
                        alignment.push(GAP, GAP);
                    }
                }
            }
        }
        alignment
    }
}

impl<M> Iterator for PathEnumerator<M>
where
    M: Borrow<AlignmentMatrix>,
{
    type Item = ScoredAlignment;

    fn next(&mut self) -> Option<Self::Item> {
        if self.emitted >= self.max_paths {
            self.frames.clear();
            self.moves.clear();
            return None;
        }

        loop {
            let Frame { row, col, cursor } = *self.frames.last()?;
            let predecessors = self.matrix().predecessors(row, col);

            if predecessors.is_empty() {
                // Reached the origin: the stack spells out one complete path.
                let alignment = self.render();
                self.frames.pop();
                self.moves.pop();
                self.emitted += 1;
                trace!(
                    "Emitting optimal alignment #{} ({} columns).",
                    self.emitted,
                    alignment.len()
                );
                return Some(ScoredAlignment {
                    score: self.score(),
                    alignment,
                });
            }

            match predecessors.next_from(cursor) {
                Some((direction, resume)) => {
                    if let Some(top) = self.frames.last_mut() {
                        top.cursor = resume;
                    }
                    let (row, col) = direction.source(row, col);
                    self.frames.push(Frame {
                        row,
                        col,
                        cursor: 0,
                    });
                    self.moves.push(direction);
                }
                None => {
                    self.frames.pop();
                    self.moves.pop();
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.frames.is_empty() {
            (0, Some(0))
        } else {
            (0, Some(self.max_paths - self.emitted))
        }
    }
}

impl<M> FusedIterator for PathEnumerator<M> where M: Borrow<AlignmentMatrix> {}

impl AlignmentMatrix {
    /// Enumerates tied optimal alignments, up to the configured `max_paths`.
    ///
    /// Each call starts a fresh walk over the same matrix.
    pub fn paths(&self) -> PathEnumerator<&AlignmentMatrix> {
        PathEnumerator::new(self, self.config().max_paths)
    }

    /// Like [`AlignmentMatrix::paths`], but the enumerator takes ownership of the matrix.
    pub fn into_paths(self) -> PathEnumerator<AlignmentMatrix> {
        let max_paths = self.config().max_paths;
        PathEnumerator::new(self, max_paths)
    }
}
