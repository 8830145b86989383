use crate::cli::TranslateArgs;
use crate::error::{CliError, Result};
use nwalign::core::genetic_code;
use std::fmt;
use std::path::Path;
use tracing::{debug, info};

/// Rendered output of the `translate` subcommand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub codons: String,
    pub amino_acids: String,
    pub gc_counts: Vec<usize>,
}

impl fmt::Display for Translation {
    /// GC counts first, then the labelled codon and amino-acid lines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:?}", self.gc_counts)?;
        writeln!(f, "mRNA: {}", self.codons)?;
        write!(f, "Amino acids: {}", self.amino_acids)
    }
}

pub fn translate(dna: &str, gc_window: usize) -> Result<Translation> {
    if gc_window == 0 {
        return Err(CliError::Argument(
            "GC window size must be at least 1".to_string(),
        ));
    }

    let mrna = genetic_code::dna_to_mrna(dna);
    if mrna.is_empty() {
        return Err(CliError::Argument(
            "Input contains no nucleotides".to_string(),
        ));
    }
    debug!("Transcribed {} nucleotide(s).", mrna.len());

    Ok(Translation {
        codons: genetic_code::codons(&mrna).join("-"),
        amino_acids: genetic_code::translate_mrna(&mrna).join("-"),
        gc_counts: genetic_code::gc_counts(dna, gc_window),
    })
}

/// Reads a DNA file, dropping FASTA header and comment lines.
pub fn read_dna(path: &Path) -> Result<String> {
    info!("Reading DNA from {:?}", path);
    let content = std::fs::read_to_string(path)?;
    Ok(content
        .lines()
        .filter(|line| !line.starts_with('>') && !line.starts_with(';'))
        .collect())
}

pub fn run(args: TranslateArgs) -> Result<()> {
    let dna = read_dna(&args.input)?;
    let translation = translate(&dna, args.gc_window)?;
    println!("{}", translation);
    Ok(())
}
