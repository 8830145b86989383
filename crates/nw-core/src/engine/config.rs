use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Unknown mismatch style '{0}'. Expected 'masked' or 'explicit'.")]
    UnknownMismatchStyle(String),
}

/// How a diagonal move between two different symbols is rendered in an alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MismatchStyle {
    /// Both rows receive a gap marker at the mismatched position.
    #[default]
    Masked,
    /// Both rows keep their own symbol at the mismatched position.
    Explicit,
}

impl FromStr for MismatchStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "masked" => Ok(Self::Masked),
            "explicit" => Ok(Self::Explicit),
            _ => Err(ConfigError::UnknownMismatchStyle(s.to_string())),
        }
    }
}

impl fmt::Display for MismatchStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Masked => f.write_str("masked"),
            Self::Explicit => f.write_str("explicit"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringConfig {
    pub gap_penalty: i32,
    pub match_reward: i32,
    pub mismatch_penalty: i32,
    pub max_sequence_length: usize,
    pub max_paths: usize,
    pub mismatch_style: MismatchStyle,
}

impl ScoringConfig {
    /// Score contributed by a diagonal move pairing `a` with `b`.
    #[inline]
    pub fn substitution(&self, a: u8, b: u8) -> i32 {
        if a == b {
            self.match_reward
        } else {
            self.mismatch_penalty
        }
    }
}

#[derive(Default)]
pub struct ScoringConfigBuilder {
    gap_penalty: Option<i32>,
    match_reward: Option<i32>,
    mismatch_penalty: Option<i32>,
    max_sequence_length: Option<usize>,
    max_paths: Option<usize>,
    mismatch_style: Option<MismatchStyle>,
}

impl ScoringConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gap_penalty(mut self, penalty: i32) -> Self {
        self.gap_penalty = Some(penalty);
        self
    }
    pub fn match_reward(mut self, reward: i32) -> Self {
        self.match_reward = Some(reward);
        self
    }
    pub fn mismatch_penalty(mut self, penalty: i32) -> Self {
        self.mismatch_penalty = Some(penalty);
        self
    }
    pub fn max_sequence_length(mut self, length: usize) -> Self {
        self.max_sequence_length = Some(length);
        self
    }
    pub fn max_paths(mut self, n: usize) -> Self {
        self.max_paths = Some(n);
        self
    }
    pub fn mismatch_style(mut self, style: MismatchStyle) -> Self {
        self.mismatch_style = Some(style);
        self
    }

    pub fn build(self) -> Result<ScoringConfig, ConfigError> {
        Ok(ScoringConfig {
            gap_penalty: self
                .gap_penalty
                .ok_or(ConfigError::MissingParameter("gap_penalty"))?,
            match_reward: self
                .match_reward
                .ok_or(ConfigError::MissingParameter("match_reward"))?,
            mismatch_penalty: self
                .mismatch_penalty
                .ok_or(ConfigError::MissingParameter("mismatch_penalty"))?,
            max_sequence_length: self
                .max_sequence_length
                .ok_or(ConfigError::MissingParameter("max_sequence_length"))?,
            max_paths: self
                .max_paths
                .ok_or(ConfigError::MissingParameter("max_paths"))?,
            mismatch_style: self.mismatch_style.unwrap_or_default(),
        })
    }
}
