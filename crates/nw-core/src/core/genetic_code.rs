use phf::{Map, phf_map};

/// Marker for a nucleotide with no complement.
pub const UNKNOWN_NUCLEOTIDE: char = '?';
/// Marker for an incomplete or unrecognized codon.
pub const UNKNOWN_CODON: &str = "???";
/// Amino-acid symbol for stop codons.
pub const STOP: &str = "_";

static DNA_TO_MRNA: Map<char, char> = phf_map! {
    'T' => 'A', 'A' => 'U', 'C' => 'G', 'G' => 'C',
};

static CODON_TO_AMINO_ACID: Map<&'static str, &'static str> = phf_map! {
    "AAA" => "K", "AAC" => "N", "AAG" => "K", "AAU" => "N",
    "ACA" => "T", "ACC" => "T", "ACG" => "T", "ACU" => "T",
    "AGA" => "R", "AGC" => "S", "AGG" => "R", "AGU" => "S",
    "AUA" => "I", "AUC" => "I", "AUG" => "M", "AUU" => "I",

    "CAA" => "Q", "CAC" => "H", "CAG" => "Q", "CAU" => "H",
    "CCA" => "P", "CCC" => "P", "CCG" => "P", "CCU" => "P",
    "CGA" => "R", "CGC" => "R", "CGG" => "R", "CGU" => "R",
    "CUA" => "L", "CUC" => "L", "CUG" => "L", "CUU" => "L",

    "GAA" => "E", "GAC" => "D", "GAG" => "E", "GAU" => "D",
    "GCA" => "A", "GCC" => "A", "GCG" => "A", "GCU" => "A",
    "GGA" => "G", "GGC" => "G", "GGG" => "G", "GGU" => "G",
    "GUA" => "V", "GUC" => "V", "GUG" => "V", "GUU" => "V",

    "UAA" => "_", "UAC" => "Y", "UAG" => "_", "UAU" => "Y",
    "UCA" => "S", "UCC" => "S", "UCG" => "S", "UCU" => "S",
    "UGA" => "_", "UGC" => "C", "UGG" => "W", "UGU" => "C",
    "UUA" => "L", "UUC" => "F", "UUG" => "L", "UUU" => "F",
};

fn normalize(sequence: &str) -> impl Iterator<Item = char> + '_ {
    sequence
        .chars()
        .map(|c| c.to_ascii_uppercase())
        .filter(char::is_ascii_uppercase)
}

/// Transcribes a DNA template strand into mRNA by base complement.
///
/// Input is upper-cased and stripped of everything but letters first; letters
/// other than `A`, `C`, `G`, `T` become [`UNKNOWN_NUCLEOTIDE`].
pub fn dna_to_mrna(dna: &str) -> String {
    normalize(dna)
        .map(|n| DNA_TO_MRNA.get(&n).copied().unwrap_or(UNKNOWN_NUCLEOTIDE))
        .collect()
}

/// Splits a sequence into consecutive triplets; the last one may be shorter.
///
/// Whitespace is dropped but [`UNKNOWN_NUCLEOTIDE`] markers are kept in frame.
pub fn codons(mrna: &str) -> Vec<String> {
    let symbols: Vec<char> = mrna
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect();
    symbols.chunks(3).map(|c| c.iter().collect()).collect()
}

/// Translates mRNA codon by codon using the standard genetic code.
pub fn translate_mrna(mrna: &str) -> Vec<&'static str> {
    codons(mrna)
        .iter()
        .map(|codon| {
            CODON_TO_AMINO_ACID
                .get(codon.as_str())
                .copied()
                .unwrap_or(UNKNOWN_CODON)
        })
        .collect()
}

/// Counts `G` and `C` symbols in each complete, non-overlapping window.
pub fn gc_counts(sequence: &str, window: usize) -> Vec<usize> {
    if window == 0 {
        return Vec::new();
    }
    let symbols: Vec<char> = normalize(sequence).collect();
    symbols
        .chunks_exact(window)
        .map(|w| w.iter().filter(|&&c| c == 'G' || c == 'C').count())
        .collect()
}
