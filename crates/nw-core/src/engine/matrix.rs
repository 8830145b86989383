use super::config::ScoringConfig;
use super::progress::{Progress, ProgressReporter};
use crate::core::models::sequence::Sequence;
use std::fmt;
use tracing::debug;

/// A move into a cell from one of its three neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// From `(i-1, j)`: the first sequence's symbol is paired with a gap.
    Up,
    /// From `(i, j-1)`: the second sequence's symbol is paired with a gap.
    Left,
    /// From `(i-1, j-1)`: both symbols are consumed.
    Diag,
}

impl Direction {
    /// Backtracking order. Determines which tied alignment is produced first.
    pub const ORDER: [Direction; 3] = [Direction::Up, Direction::Left, Direction::Diag];

    #[inline]
    const fn bit(self) -> u8 {
        match self {
            Direction::Up => 0b001,
            Direction::Left => 0b010,
            Direction::Diag => 0b100,
        }
    }

    /// The cell this move comes from when it enters `(row, col)`.
    ///
    /// Callers must only ask for moves recorded as predecessors of `(row, col)`,
    /// which never leave the matrix.
    #[inline]
    pub fn source(self, row: usize, col: usize) -> (usize, usize) {
        match self {
            Direction::Up => (row - 1, col),
            Direction::Left => (row, col - 1),
            Direction::Diag => (row - 1, col - 1),
        }
    }
}

/// The set of moves attaining a cell's optimal score.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Predecessors(u8);

impl Predecessors {
    pub const NONE: Predecessors = Predecessors(0);

    #[inline]
    pub fn with(self, direction: Direction) -> Self {
        Self(self.0 | direction.bit())
    }

    #[inline]
    pub fn contains(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether more than one move attains the optimum.
    pub fn is_tie(self) -> bool {
        self.len() > 1
    }

    /// Recorded moves in backtracking order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ORDER
            .into_iter()
            .filter(move |&d| self.contains(d))
    }

    /// The first recorded move at or after `cursor` in [`Direction::ORDER`],
    /// together with the cursor value that resumes just past it.
    #[inline]
    pub(crate) fn next_from(self, cursor: usize) -> Option<(Direction, usize)> {
        Direction::ORDER
            .iter()
            .enumerate()
            .skip(cursor)
            .find(|&(_, &d)| self.contains(d))
            .map(|(i, &d)| (d, i + 1))
    }
}

impl fmt::Debug for Predecessors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// The filled Needleman-Wunsch score matrix of one sequence pair.
///
/// Row `i` corresponds to position `i` of the first sequence and column `j` to
/// position `j` of the second; row and column 0 are the sentinels. Every cell
/// records all predecessor moves whose candidate score equals the cell's value.
/// The matrix is immutable once built.
#[derive(Debug, Clone)]
pub struct AlignmentMatrix {
    seq1: Sequence,
    seq2: Sequence,
    config: ScoringConfig,
    rows: usize,
    cols: usize,
    scores: Vec<i64>,
    predecessors: Vec<Predecessors>,
}

impl AlignmentMatrix {
    pub fn build(seq1: &Sequence, seq2: &Sequence, config: &ScoringConfig) -> Self {
        Self::build_with_progress(seq1, seq2, config, &ProgressReporter::new())
    }

    /// Builds the matrix, reporting one task step per completed row.
    pub fn build_with_progress(
        seq1: &Sequence,
        seq2: &Sequence,
        config: &ScoringConfig,
        reporter: &ProgressReporter,
    ) -> Self {
        let rows = seq1.len() + 1;
        let cols = seq2.len() + 1;
        debug!("Building {}x{} score matrix.", rows, cols);

        let mut matrix = Self {
            seq1: seq1.clone(),
            seq2: seq2.clone(),
            config: *config,
            rows,
            cols,
            scores: vec![0; rows * cols],
            predecessors: vec![Predecessors::NONE; rows * cols],
        };

        reporter.report(Progress::TaskStart {
            total_steps: rows as u64,
        });
        for i in 0..rows {
            for j in 0..cols {
                let (score, preds) = matrix.evaluate(i, j);
                let idx = matrix.index(i, j);
                matrix.scores[idx] = score;
                matrix.predecessors[idx] = preds;
            }
            reporter.report(Progress::TaskIncrement);
        }
        reporter.report(Progress::TaskFinish);

        debug!("Optimal global score: {}", matrix.optimal_score());
        matrix
    }

    /// Computes the value of `(i, j)` from already-filled neighbours.
    ///
    /// Neighbours outside the matrix are absent rather than scored, so they can
    /// never tie with a real candidate. Scores are widened to `i64`: a path has at
    /// most `rows + cols` steps of any `i32` weight.
    fn evaluate(&self, i: usize, j: usize) -> (i64, Predecessors) {
        let gap = i64::from(self.config.gap_penalty);
        let candidates = [
            (Direction::Up, (i > 0).then(|| self.score(i - 1, j) + gap)),
            (Direction::Left, (j > 0).then(|| self.score(i, j - 1) + gap)),
            (
                Direction::Diag,
                (i > 0 && j > 0).then(|| {
                    let (a, b) = (self.seq1.symbol(i), self.seq2.symbol(j));
                    self.score(i - 1, j - 1) + i64::from(self.config.substitution(a, b))
                }),
            ),
        ];

        let Some(best) = candidates.iter().filter_map(|&(_, c)| c).max() else {
            return (0, Predecessors::NONE);
        };

        let preds = candidates
            .iter()
            .filter(|&&(_, c)| c == Some(best))
            .fold(Predecessors::NONE, |acc, &(d, _)| acc.with(d));
        (best, preds)
    }

    #[inline]
    fn index(&self, i: usize, j: usize) -> usize {
        i * self.cols + j
    }

    /// Score of cell `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows()` or `j >= cols()`.
    #[inline]
    pub fn score(&self, i: usize, j: usize) -> i64 {
        assert!(i < self.rows && j < self.cols, "cell ({i}, {j}) out of bounds");
        self.scores[self.index(i, j)]
    }

    /// Moves attaining the optimum of cell `(i, j)`; empty only at the origin.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows()` or `j >= cols()`.
    #[inline]
    pub fn predecessors(&self, i: usize, j: usize) -> Predecessors {
        assert!(i < self.rows && j < self.cols, "cell ({i}, {j}) out of bounds");
        self.predecessors[self.index(i, j)]
    }

    /// The global optimum, found in the bottom-right cell.
    pub fn optimal_score(&self) -> i64 {
        self.score(self.rows - 1, self.cols - 1)
    }

    /// Number of rows, including the sentinel row.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, including the sentinel column.
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn seq1(&self) -> &Sequence {
        &self.seq1
    }

    pub fn seq2(&self) -> &Sequence {
        &self.seq2
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Number of distinct optimal alignments, saturating at `u64::MAX`.
    ///
    /// Runs a counting pass over the recorded predecessors without enumerating
    /// any path.
    pub fn optimal_path_count(&self) -> u64 {
        let mut counts = vec![0u64; self.rows * self.cols];
        counts[0] = 1;
        for i in 0..self.rows {
            for j in 0..self.cols {
                let idx = self.index(i, j);
                for direction in self.predecessors[idx].iter() {
                    let (si, sj) = direction.source(i, j);
                    counts[idx] = counts[idx].saturating_add(counts[self.index(si, sj)]);
                }
            }
        }
        counts[self.rows * self.cols - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::ScoringConfigBuilder;
    use std::sync::atomic::{AtomicU64, Ordering};

    fn config(gap: i32, matching: i32, mismatch: i32) -> ScoringConfig {
        ScoringConfigBuilder::new()
            .gap_penalty(gap)
            .match_reward(matching)
            .mismatch_penalty(mismatch)
            .max_sequence_length(100)
            .max_paths(10)
            .build()
            .unwrap()
    }

    fn build(a: &str, b: &str, config: &ScoringConfig) -> AlignmentMatrix {
        AlignmentMatrix::build(&a.parse().unwrap(), &b.parse().unwrap(), config)
    }

    #[test]
    fn dimensions_include_sentinel_row_and_column() {
        let m = build("ABC", "AD", &config(-2, 2, -3));
        assert_eq!(m.rows(), 4);
        assert_eq!(m.cols(), 3);
    }

    #[test]
    fn edges_are_multiples_of_gap_penalty() {
        let m = build("ACGTAC", "GTA", &config(-3, 1, -1));
        for i in 0..m.rows() {
            assert_eq!(m.score(i, 0), i as i64 * -3);
        }
        for j in 0..m.cols() {
            assert_eq!(m.score(0, j), j as i64 * -3);
        }
    }

    #[test]
    fn edge_cells_have_exactly_one_predecessor_and_origin_none() {
        let m = build("ABC", "ADC", &config(-2, 2, -3));
        assert!(m.predecessors(0, 0).is_empty());
        for i in 1..m.rows() {
            let p = m.predecessors(i, 0);
            assert_eq!(p.len(), 1);
            assert!(p.contains(Direction::Up));
        }
        for j in 1..m.cols() {
            let p = m.predecessors(0, j);
            assert_eq!(p.len(), 1);
            assert!(p.contains(Direction::Left));
        }
    }

    #[test]
    fn interior_cells_follow_the_recurrence() {
        let cfg = config(-2, 2, -3);
        let m = build("GATTACA", "GCATGCT", &cfg);
        for i in 1..m.rows() {
            for j in 1..m.cols() {
                let (a, b) = (m.seq1().symbol(i), m.seq2().symbol(j));
                let gap = i64::from(cfg.gap_penalty);
                let up = m.score(i - 1, j) + gap;
                let left = m.score(i, j - 1) + gap;
                let diag = m.score(i - 1, j - 1) + i64::from(cfg.substitution(a, b));
                let best = up.max(left).max(diag);
                assert_eq!(m.score(i, j), best);

                let preds = m.predecessors(i, j);
                assert!(!preds.is_empty());
                assert_eq!(preds.contains(Direction::Up), up == best);
                assert_eq!(preds.contains(Direction::Left), left == best);
                assert_eq!(preds.contains(Direction::Diag), diag == best);
            }
        }
    }

    #[test]
    fn records_ties_between_up_and_left() {
        let m = build("AB", "AD", &config(-2, 2, -5));
        assert_eq!(m.optimal_score(), -2);
        let p = m.predecessors(2, 2);
        assert!(p.is_tie());
        assert!(p.contains(Direction::Up));
        assert!(p.contains(Direction::Left));
        assert!(!p.contains(Direction::Diag));
    }

    #[test]
    fn extreme_weights_do_not_overflow() {
        let cfg = config(i32::MIN, i32::MAX, i32::MIN);
        let m = build("AAAAACCCCC", "AAAAAGGGGG", &cfg);
        assert_eq!(m.score(m.rows() - 1, 0), 10 * i64::from(i32::MIN));
        assert_eq!(m.score(0, m.cols() - 1), 10 * i64::from(i32::MIN));
        // Five matching columns, five mismatching ones.
        assert_eq!(
            m.optimal_score(),
            5 * i64::from(i32::MAX) + 5 * i64::from(i32::MIN)
        );
    }

    #[test]
    fn identical_sequences_score_length_times_match_reward() {
        let m = build("ACGTACGT", "ACGTACGT", &config(-2, 3, -1));
        assert_eq!(m.optimal_score(), 8 * 3);
    }

    #[test]
    fn absent_neighbours_never_tie_even_with_zero_penalties() {
        let m = build("A", "C", &config(0, 0, 0));
        assert_eq!(m.score(0, 1), 0);
        assert_eq!(m.predecessors(0, 1), Predecessors::NONE.with(Direction::Left));
        assert_eq!(m.predecessors(1, 0), Predecessors::NONE.with(Direction::Up));
        assert_eq!(m.predecessors(1, 1).len(), 3);
    }

    #[test]
    fn build_with_progress_reports_one_step_per_row() {
        let increments = AtomicU64::new(0);
        let total = AtomicU64::new(0);
        let reporter = ProgressReporter::with_callback(Box::new(|event| match event {
            Progress::TaskStart { total_steps } => total.store(total_steps, Ordering::SeqCst),
            Progress::TaskIncrement => {
                increments.fetch_add(1, Ordering::SeqCst);
            }
            _ => {}
        }));

        let cfg = config(-1, 1, -1);
        AlignmentMatrix::build_with_progress(
            &"ACGT".parse().unwrap(),
            &"AC".parse().unwrap(),
            &cfg,
            &reporter,
        );
        assert_eq!(total.load(Ordering::SeqCst), 5);
        assert_eq!(increments.load(Ordering::SeqCst), 5);
    }

    #[test]
    fn predecessors_iterate_in_backtracking_order() {
        let all = Predecessors::NONE
            .with(Direction::Diag)
            .with(Direction::Up)
            .with(Direction::Left);
        assert_eq!(
            all.iter().collect::<Vec<_>>(),
            vec![Direction::Up, Direction::Left, Direction::Diag]
        );
        assert_eq!(all.next_from(0), Some((Direction::Up, 1)));
        assert_eq!(all.next_from(1), Some((Direction::Left, 2)));
        assert_eq!(all.next_from(2), Some((Direction::Diag, 3)));
        assert_eq!(all.next_from(3), None);

        let diag_only = Predecessors::NONE.with(Direction::Diag);
        assert_eq!(diag_only.next_from(0), Some((Direction::Diag, 3)));
    }

    #[test]
    fn optimal_path_count_counts_tied_paths() {
        assert_eq!(build("ABC", "ADC", &config(-2, 2, -3)).optimal_path_count(), 1);
        assert_eq!(build("AB", "AD", &config(-2, 2, -5)).optimal_path_count(), 2);
        // All-gap and all-mismatch moves cost the same, so every monotone path ties.
        assert_eq!(build("AA", "BB", &config(-1, 1, -2)).optimal_path_count(), 13);
    }

    #[test]
    #[should_panic]
    fn score_panics_outside_matrix() {
        let m = build("A", "A", &config(-1, 1, -1));
        m.score(2, 0);
    }
}
