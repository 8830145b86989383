//! # nwalign Core Library
//!
//! Global pairwise sequence alignment based on the Needleman-Wunsch dynamic-programming
//! algorithm, with lazy enumeration of every tied optimal alignment.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture so that each concern can be tested
//! on its own.
//!
//! - **[`core`]: The Foundation.** Immutable data models (`Sequence`, `Alignment`),
//!   sequence file I/O, and the genetic-code lookup tables.
//!
//! - **[`engine`]: The Logic Core.** Scoring configuration, the dynamic-programming
//!   `AlignmentMatrix` with per-cell tie records, and the `PathEnumerator` that walks
//!   those ties back to the origin on demand.
//!
//! - **[`workflows`]: The Public API.** Validates inputs against the configuration and
//!   hands back a lazy stream of `(score, alignment)` pairs.

pub mod core;
pub mod engine;
pub mod workflows;
