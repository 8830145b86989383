//! Data structures describing the inputs and outputs of an alignment session.
//!
//! A [`sequence::Sequence`] is an immutable, validated run of uppercase symbols
//! addressed from position 1, with position 0 reserved for the sentinel that
//! precedes the first symbol. An [`alignment::Alignment`] is the pair of
//! gapped rows produced for one optimal path through the score matrix.

pub mod alignment;
pub mod sequence;
