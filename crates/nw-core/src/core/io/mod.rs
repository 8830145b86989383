//! Provides input/output functionality for sequence files and alignment reports.
//!
//! Sequence sources are read through the [`traits::SequenceFile`] interface, which
//! normalizes raw text into a validated [`Sequence`](crate::core::models::sequence::Sequence).
//! Alignment streams are written in emission order by [`report::AlignmentReport`].

pub mod fasta;
pub mod report;
pub mod traits;
