use clap::{Args, Parser, Subcommand, ValueEnum};
use nwalign::engine::config::MismatchStyle;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "nwalign - global pairwise sequence alignment (Needleman-Wunsch) with enumeration of all tied optimal alignments.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output and progress bars except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Globally align two sequences and write every tied optimal alignment.
    Align(AlignArgs),
    /// Transcribe a DNA sequence to mRNA and translate it to amino acids.
    Translate(TranslateArgs),
}

/// Arguments for the `align` subcommand.
#[derive(Args, Debug)]
pub struct AlignArgs {
    // --- Core Arguments ---
    /// Path to the first sequence file (FASTA or plain text).
    #[arg(short = 'a', long = "seq1", required = true, value_name = "PATH")]
    pub seq1: PathBuf,

    /// Path to the second sequence file (FASTA or plain text).
    #[arg(short = 'b', long = "seq2", required = true, value_name = "PATH")]
    pub seq2: PathBuf,

    /// Path to the scoring configuration file in TOML format (JSON is not accepted).
    /// Keys: gap-penalty, match-reward, mismatch-penalty, max-sequence-length, max-paths,
    /// mismatch-style; the short names GP, SAME, DIFF, MAX_SEQ_LENGTH, MAX_PATHS also work.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub config: PathBuf,

    /// Path for the output file. Alignments are written to stdout when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    // --- Overrides ---
    /// Override the maximum number of alignments to write.
    #[arg(short = 'n', long, value_name = "INT")]
    pub max_paths: Option<usize>,

    /// Override how mismatched symbols are rendered in alignments.
    #[arg(long, value_enum, value_name = "STYLE")]
    pub mismatch_style: Option<MismatchStyleArg>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S gap-penalty=-1
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MismatchStyleArg {
    /// Render a mismatched pair as a gap in both rows.
    Masked,
    /// Keep both mismatched symbols.
    Explicit,
}

impl From<MismatchStyleArg> for MismatchStyle {
    fn from(arg: MismatchStyleArg) -> Self {
        match arg {
            MismatchStyleArg::Masked => MismatchStyle::Masked,
            MismatchStyleArg::Explicit => MismatchStyle::Explicit,
        }
    }
}

/// Arguments for the `translate` subcommand.
#[derive(Args, Debug)]
pub struct TranslateArgs {
    /// Path to a file holding the DNA template strand.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Window size for the GC-content profile.
    #[arg(long, default_value_t = 50, value_name = "INT")]
    pub gc_window: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn align_accepts_short_flags() {
        let cli = Cli::parse_from([
            "nwalign", "align", "-a", "a.fa", "-b", "b.fa", "-c", "cfg.toml", "-o", "out.txt",
        ]);
        let Commands::Align(args) = cli.command else {
            panic!("Expected 'align' subcommand");
        };
        assert_eq!(args.seq1, PathBuf::from("a.fa"));
        assert_eq!(args.seq2, PathBuf::from("b.fa"));
        assert_eq!(args.config, PathBuf::from("cfg.toml"));
        assert_eq!(args.output, Some(PathBuf::from("out.txt")));
        assert!(args.max_paths.is_none());
        assert!(args.set_values.is_empty());
    }

    #[test]
    fn align_requires_both_sequences_and_config() {
        let result = Cli::try_parse_from(["nwalign", "align", "-a", "a.fa", "-c", "cfg.toml"]);
        assert!(result.is_err());
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli = Cli::parse_from([
            "nwalign",
            "align",
            "-a",
            "a",
            "-b",
            "b",
            "-c",
            "c",
            "-vv",
            "--mismatch-style",
            "explicit",
            "-n",
            "3",
        ]);
        assert_eq!(cli.verbose, 2);
        let Commands::Align(args) = cli.command else {
            panic!("Expected 'align' subcommand");
        };
        assert_eq!(args.mismatch_style, Some(MismatchStyleArg::Explicit));
        assert_eq!(args.max_paths, Some(3));
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["nwalign", "-q", "-v", "translate", "-i", "dna.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn translate_uses_default_gc_window() {
        let cli = Cli::parse_from(["nwalign", "translate", "-i", "dna.txt"]);
        let Commands::Translate(args) = cli.command else {
            panic!("Expected 'translate' subcommand");
        };
        assert_eq!(args.gc_window, 50);
    }
}
