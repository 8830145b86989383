//! # Workflows Module
//!
//! High-level entry points that run a complete alignment session: input validation,
//! score-matrix construction and the hand-off to lazy path enumeration.
//!
//! - **Alignment Workflow** ([`align`]) - Global alignment of one sequence pair

pub mod align;
