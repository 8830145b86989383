//! # Engine Module
//!
//! The dynamic-programming engine behind global pairwise alignment.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Scoring parameters and input bounds
//! - **Score Matrix** ([`matrix`]) - The filled Needleman-Wunsch matrix and, per cell,
//!   every predecessor move that attains the cell's optimum
//! - **Path Enumeration** ([`paths`]) - A lazy, stack-driven walk from the final cell
//!   back to the origin that yields one tied optimal alignment per pull
//! - **Progress Monitoring** ([`progress`]) - Optional callbacks for long matrix builds
//! - **Error Handling** ([`error`]) - Input-validation failures raised before any matrix is built
//!
//! Matrix construction and enumeration are total over validated inputs; every failure
//! mode is an input problem detected up front.

pub mod config;
pub mod error;
pub mod matrix;
pub mod paths;
pub mod progress;
