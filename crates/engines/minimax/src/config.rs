//! Search configuration, loadable from TOML.
//!
//! ```toml
//! depth = 4
//! parallel = true
//! max_parallel_ply = 2
//! min_parallel_moves = 2
//! threads = 8
//! tie_break = "lexicographic"   # or "first-found"
//! move_time_ms = 5000
//! ```

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use chess_core::SearchLimits;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Deepest search the configuration accepts.
pub const MAX_DEPTH: u8 = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// How the root picks among moves with the same score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// Smallest (from.row, from.col, to.row, to.col) wins. Reproducible
    /// regardless of thread scheduling.
    #[default]
    Lexicographic,
    /// Whichever top-scoring move reaches the shared accumulator first.
    /// Not reproducible under parallel search.
    FirstFound,
}

impl FromStr for TieBreak {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lexicographic" => Ok(TieBreak::Lexicographic),
            "first-found" | "firstfound" | "first_found" => Ok(TieBreak::FirstFound),
            other => Err(ConfigError::Invalid(format!("unknown tie break '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Plies searched by default
    pub depth: u8,
    /// Fan out across sibling moves at all
    pub parallel: bool,
    /// Nodes at this ply or deeper iterate their moves sequentially
    pub max_parallel_ply: u8,
    /// Move lists shorter than this are iterated sequentially
    pub min_parallel_moves: usize,
    /// Size of a dedicated thread pool (None = rayon's global pool)
    pub threads: Option<usize>,
    pub tie_break: TieBreak,
    /// Optional deadline per move
    pub move_time_ms: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            parallel: true,
            max_parallel_ply: 2,
            min_parallel_moves: 2,
            threads: None,
            tie_break: TieBreak::Lexicographic,
            move_time_ms: None,
        }
    }
}

impl SearchConfig {
    /// Fully sequential search, same results as the parallel default when
    /// the tie break is lexicographic.
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 || self.depth > MAX_DEPTH {
            return Err(ConfigError::Invalid(format!(
                "depth must be between 1 and {MAX_DEPTH}, got {}",
                self.depth
            )));
        }
        if self.threads == Some(0) {
            return Err(ConfigError::Invalid("threads must be at least 1".into()));
        }
        Ok(())
    }

    /// Whether a node at `ply` with `moves` candidates fans out.
    #[inline]
    pub fn forks_at(&self, ply: u8, moves: usize) -> bool {
        self.parallel && ply < self.max_parallel_ply && moves >= self.min_parallel_moves
    }

    /// Search limits for one move under this configuration.
    pub fn limits(&self) -> SearchLimits {
        match self.move_time_ms {
            Some(ms) => SearchLimits::depth_and_time(self.depth, Duration::from_millis(ms)),
            None => SearchLimits::depth(self.depth),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
