use crate::cli::AlignArgs;
use crate::error::{CliError, Result};
use nwalign::engine::config::{MismatchStyle, ScoringConfig, ScoringConfigBuilder};
use nwalign::engine::error::EngineError;
use serde::Deserialize;
use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Scoring parameters as they appear in a configuration file; every key is optional
/// until merged with the command line.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct PartialScoringConfig {
    #[serde(alias = "GP")]
    pub gap_penalty: Option<i32>,
    #[serde(alias = "SAME")]
    pub match_reward: Option<i32>,
    #[serde(alias = "DIFF")]
    pub mismatch_penalty: Option<i32>,
    #[serde(alias = "MAX_SEQ_LENGTH")]
    pub max_sequence_length: Option<usize>,
    #[serde(alias = "MAX_PATHS")]
    pub max_paths: Option<usize>,
    pub mismatch_style: Option<String>,
}

impl PartialScoringConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        if path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
        {
            return Err(CliError::ConfigParse {
                path: path.to_path_buf(),
                source: anyhow::anyhow!(
                    "JSON configuration files are not supported; write the same keys as TOML \
                     (for example `GP = -2`)"
                ),
            });
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::ConfigParse {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    pub fn merge_with_cli(mut self, args: &AlignArgs) -> Result<ScoringConfig> {
        self.apply_set_values(&args.set_values)?;

        if let Some(max_paths) = args.max_paths {
            self.max_paths = Some(max_paths);
        }
        if let Some(style) = args.mismatch_style {
            self.mismatch_style = Some(MismatchStyle::from(style).to_string());
        }

        let mut builder = ScoringConfigBuilder::new();
        if let Some(v) = self.gap_penalty {
            builder = builder.gap_penalty(v);
        }
        if let Some(v) = self.match_reward {
            builder = builder.match_reward(v);
        }
        if let Some(v) = self.mismatch_penalty {
            builder = builder.mismatch_penalty(v);
        }
        if let Some(v) = self.max_sequence_length {
            builder = builder.max_sequence_length(v);
        }
        if let Some(v) = self.max_paths {
            builder = builder.max_paths(v);
        }
        if let Some(style) = &self.mismatch_style {
            let style: MismatchStyle = style.parse().map_err(EngineError::from)?;
            builder = builder.mismatch_style(style);
        }

        let config = builder.build().map_err(EngineError::from)?;
        debug!("Resolved scoring configuration: {:?}", config);
        Ok(config)
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let Some((key, value_str)) = kv_pair.split_once('=') else {
                return Err(CliError::Config(format!(
                    "Invalid --set format: '{}'. Expected KEY=VALUE.",
                    kv_pair
                )));
            };
            let key = key.trim();
            let value_str = value_str.trim();

            match key {
                "gap-penalty" => self.gap_penalty = Some(parse_value(key, value_str)?),
                "match-reward" => self.match_reward = Some(parse_value(key, value_str)?),
                "mismatch-penalty" => self.mismatch_penalty = Some(parse_value(key, value_str)?),
                "max-sequence-length" => {
                    self.max_sequence_length = Some(parse_value(key, value_str)?)
                }
                "max-paths" => self.max_paths = Some(parse_value(key, value_str)?),
                "mismatch-style" => self.mismatch_style = Some(value_str.to_string()),
                _ => {
                    return Err(CliError::Config(format!(
                        "Unknown configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}

fn parse_value<T>(key: &str, value_str: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    value_str.parse().map_err(|e| {
        CliError::Config(format!("Invalid value for {}: '{}' ({})", key, value_str, e))
    })
}
