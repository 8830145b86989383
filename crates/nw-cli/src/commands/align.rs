use crate::cli::AlignArgs;
use crate::config::PartialScoringConfig;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use nwalign::{
    core::io::{fasta::FastaFile, report::AlignmentReport, traits::SequenceFile},
    core::models::sequence::Sequence,
    engine::progress::ProgressReporter,
    workflows,
};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::{info, warn};

pub fn run(args: AlignArgs, quiet: bool) -> Result<()> {
    let partial_config = PartialScoringConfig::from_file(&args.config)?;
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_with_cli(&args)?;

    let seq1 = load_sequence(&args.seq1, config.max_sequence_length)?;
    let seq2 = load_sequence(&args.seq2, config.max_sequence_length)?;

    let progress_handler = if quiet {
        CliProgressHandler::hidden()
    } else {
        CliProgressHandler::new()
    };
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!("Invoking the alignment workflow...");
    let paths = workflows::align::align_with_progress(&seq1, &seq2, &config, &reporter)?;
    let score = paths.score();

    let written = match &args.output {
        Some(path) => {
            info!("Writing alignments to {:?}", path);
            let file = File::create(path)?;
            write_report(BufWriter::new(file), paths)?
        }
        None => write_report(io::stdout().lock(), paths)?,
    };

    info!("Wrote {} alignment(s) with score {}.", written, score);
    if written == config.max_paths {
        warn!(
            "Output stopped at the configured limit of {} alignment(s); more may exist.",
            config.max_paths
        );
    }
    if !quiet {
        match &args.output {
            Some(path) => eprintln!(
                "✓ {} optimal alignment(s) (score {}) written to: {}",
                written,
                score,
                path.display()
            ),
            None => eprintln!("✓ {} optimal alignment(s) (score {})", written, score),
        }
    }

    Ok(())
}

fn load_sequence(path: &Path, max_len: usize) -> Result<Sequence> {
    info!("Loading sequence from {:?}", path);
    FastaFile::read_from_path_bounded(path, max_len).map_err(|e| CliError::SequenceFile {
        path: path.to_path_buf(),
        source: e,
    })
}

fn write_report<W, I>(writer: W, alignments: I) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator<Item = nwalign::core::models::alignment::ScoredAlignment>,
{
    let mut report = AlignmentReport::new(writer);
    let written = report.write_all(alignments)?;
    report.finish()?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use nwalign::core::models::sequence::SequenceError;
    use nwalign::engine::config::ConfigError;
    use nwalign::engine::error::EngineError;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const CONFIG: &str = r#"
gap-penalty = -2
match-reward = 2
mismatch-penalty = -5
max-sequence-length = 10
max-paths = 5
"#;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    fn args(seq1: &Path, seq2: &Path, config: &Path, output: &Path, extra: &[&str]) -> AlignArgs {
        let mut argv = vec!["nwalign".to_string(), "align".to_string()];
        for (flag, path) in [("-a", seq1), ("-b", seq2), ("-c", config), ("-o", output)] {
            argv.push(flag.to_string());
            argv.push(path.to_string_lossy().into_owned());
        }
        argv.extend(extra.iter().map(|s| s.to_string()));
        match Cli::parse_from(argv).command {
            Commands::Align(args) => args,
            _ => panic!("Expected 'align' subcommand"),
        }
    }

    #[test]
    fn writes_all_tied_alignments_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let seq1 = write(&dir, "a.fa", ">first\nAB\n");
        let seq2 = write(&dir, "b.fa", ">second\nAD\n");
        let config = write(&dir, "cfg.toml", CONFIG);
        let output = dir.path().join("out.txt");

        run(args(&seq1, &seq2, &config, &output, &[]), true).unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        assert_eq!(content, "-2\nA_B\nAD_\n-2\nAB_\nA_D\n");
    }

    #[test]
    fn max_paths_override_limits_output() {
        let dir = tempfile::tempdir().unwrap();
        let seq1 = write(&dir, "a.fa", "AB");
        let seq2 = write(&dir, "b.fa", "AD");
        let config = write(&dir, "cfg.toml", CONFIG);
        let output = dir.path().join("out.txt");

        run(
            args(&seq1, &seq2, &config, &output, &["--max-paths", "1"]),
            true,
        )
        .unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        assert_eq!(content, "-2\nA_B\nAD_\n");
    }

    #[test]
    fn explicit_mismatch_style_keeps_symbols() {
        let dir = tempfile::tempdir().unwrap();
        let seq1 = write(&dir, "a.fa", "ABC");
        let seq2 = write(&dir, "b.fa", "ADC");
        let config = write(&dir, "cfg.toml", CONFIG);
        let masked = dir.path().join("masked.txt");
        let explicit = dir.path().join("explicit.txt");

        run(
            args(
                &seq1,
                &seq2,
                &config,
                &masked,
                &["-S", "mismatch-penalty=-3"],
            ),
            true,
        )
        .unwrap();
        run(
            args(
                &seq1,
                &seq2,
                &config,
                &explicit,
                &["-S", "mismatch-penalty=-3", "--mismatch-style", "explicit"],
            ),
            true,
        )
        .unwrap();

        assert_eq!(std::fs::read_to_string(&masked).unwrap(), "1\nA_C\nA_C\n");
        assert_eq!(std::fs::read_to_string(&explicit).unwrap(), "1\nABC\nADC\n");
    }

    #[test]
    fn too_long_sequence_is_rejected_without_creating_output() {
        let dir = tempfile::tempdir().unwrap();
        let seq1 = write(&dir, "a.fa", "ACGTACGTACGT");
        let seq2 = write(&dir, "b.fa", "ACGT");
        let config = write(&dir, "cfg.toml", CONFIG);
        let output = dir.path().join("out.txt");

        let result = run(args(&seq1, &seq2, &config, &output, &[]), true);

        match result {
            Err(CliError::SequenceFile { path, source }) => {
                assert_eq!(path, seq1);
                assert!(matches!(
                    source.as_sequence_error(),
                    Some(SequenceError::TooLong {
                        length: 12,
                        max: 10
                    })
                ));
            }
            other => panic!("Expected a sequence file error, got {:?}", other),
        }
        assert!(!output.exists());
    }

    #[test]
    fn header_only_sequence_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let seq1 = write(&dir, "a.fa", "ACGT");
        let seq2 = write(&dir, "b.fa", ">only a header\n");
        let config = write(&dir, "cfg.toml", CONFIG);
        let output = dir.path().join("out.txt");

        let result = run(args(&seq1, &seq2, &config, &output, &[]), true);

        assert!(matches!(
            result,
            Err(CliError::SequenceFile { ref source, .. })
                if source.as_sequence_error() == Some(&SequenceError::NoBody)
        ));
        assert!(!output.exists());
    }

    #[test]
    fn missing_config_field_is_rejected_without_creating_output() {
        let dir = tempfile::tempdir().unwrap();
        let seq1 = write(&dir, "a.fa", "ACGT");
        let seq2 = write(&dir, "b.fa", "ACGT");
        let config = write(&dir, "cfg.toml", "gap-penalty = -1\n");
        let output = dir.path().join("out.txt");

        let result = run(args(&seq1, &seq2, &config, &output, &[]), true);

        assert!(matches!(
            result,
            Err(CliError::Core(EngineError::Config(
                ConfigError::MissingParameter(_)
            )))
        ));
        assert!(!output.exists());
    }

    #[test]
    fn missing_sequence_file_is_reported_with_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let seq1 = dir.path().join("absent.fa");
        let seq2 = write(&dir, "b.fa", "ACGT");
        let config = write(&dir, "cfg.toml", CONFIG);
        let output = dir.path().join("out.txt");

        let result = run(args(&seq1, &seq2, &config, &output, &[]), true);

        assert!(matches!(result, Err(CliError::SequenceFile { path, .. }) if path == seq1));
        assert!(!output.exists());
    }
}
