//! # Core Module
//!
//! Fundamental building blocks shared by the alignment engine and its callers.
//!
//! - **Data Models** ([`models`]) - Validated symbol sequences and aligned sequence pairs
//! - **File I/O** ([`io`]) - Reading sequence files and writing alignment reports
//! - **Genetic Code** ([`genetic_code`]) - DNA to mRNA transcription and codon translation

pub mod genetic_code;
pub mod io;
pub mod models;
