use crate::core::models::sequence::Sequence;
use crate::engine::config::ScoringConfig;
use crate::engine::error::EngineError;
use crate::engine::matrix::AlignmentMatrix;
use crate::engine::paths::PathEnumerator;
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::{Level, debug, enabled, info, instrument};

/// Aligns two sequences and returns a lazy stream of their tied optimal alignments.
///
/// Both sequences are checked against `config.max_sequence_length` before any
/// work is done. The returned enumerator owns the score matrix; dropping it ends
/// the session.
///
/// # Errors
///
/// Returns [`EngineError::Sequence`] with [`SequenceError::TooLong`](crate::core::models::sequence::SequenceError::TooLong)
/// when either sequence exceeds the configured bound.
pub fn align(
    seq1: &Sequence,
    seq2: &Sequence,
    config: &ScoringConfig,
) -> Result<PathEnumerator, EngineError> {
    align_with_progress(seq1, seq2, config, &ProgressReporter::new())
}

/// Same as [`align`], reporting matrix construction progress to `reporter`.
#[instrument(skip_all, name = "alignment_workflow")]
pub fn align_with_progress(
    seq1: &Sequence,
    seq2: &Sequence,
    config: &ScoringConfig,
    reporter: &ProgressReporter,
) -> Result<PathEnumerator, EngineError> {
    seq1.ensure_max_len(config.max_sequence_length)
        .map_err(EngineError::first)?;
    seq2.ensure_max_len(config.max_sequence_length)
        .map_err(EngineError::second)?;

    info!(
        "Aligning sequences of length {} and {} (max paths: {}).",
        seq1.len(),
        seq2.len(),
        config.max_paths
    );
    debug!("Scoring configuration: {:?}", config);

    reporter.report(Progress::PhaseStart {
        name: "Building score matrix",
    });
    let matrix = AlignmentMatrix::build_with_progress(seq1, seq2, config, reporter);
    reporter.report(Progress::PhaseFinish);

    let summary = format!(
        "Optimal score {} over a {}x{} matrix",
        matrix.optimal_score(),
        matrix.rows(),
        matrix.cols()
    );
    info!("{}", summary);
    reporter.report(Progress::Message(summary));

    if enabled!(Level::DEBUG) {
        debug!(
            "{} tied optimal alignment(s) exist.",
            matrix.optimal_path_count()
        );
    }

    Ok(matrix.into_paths())
}

/// Parses raw symbol strings into sequences and aligns them.
///
/// # Errors
///
/// Returns [`EngineError::Sequence`] when either input is empty, contains a
/// symbol other than an uppercase letter, or exceeds the configured bound.
pub fn align_symbols(
    seq1: &str,
    seq2: &str,
    config: &ScoringConfig,
) -> Result<PathEnumerator, EngineError> {
    let seq1: Sequence = seq1.parse().map_err(EngineError::first)?;
    let seq2: Sequence = seq2.parse().map_err(EngineError::second)?;
    align(&seq1, &seq2, config)
}
