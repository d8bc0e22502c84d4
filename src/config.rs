//! Batch and search configuration

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Threshold search implementation to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// Two-pointer for non-negative integer input, naive scan otherwise
    #[default]
    Auto,
    /// Two-pointer only; negative or float input is an error
    TwoPointer,
    /// Restart-per-start scan, valid for any input
    Naive,
}

impl FromStr for SearchStrategy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(SearchStrategy::Auto),
            "two_pointer" | "two-pointer" => Ok(SearchStrategy::TwoPointer),
            "naive" => Ok(SearchStrategy::Naive),
            other => Err(format!("Unknown search strategy: {}", other)),
        }
    }
}

/// Batch execution configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Run queries on the rayon thread pool (default: true)
    pub parallel: bool,
    /// Smallest batch worth spreading across threads (default: 4)
    pub min_parallel_queries: usize,
    /// Threshold search implementation (default: Auto)
    pub strategy: SearchStrategy,
}

impl Default for BatchConfig {
    fn default() -> Self {
        BatchConfig {
            parallel: true,
            min_parallel_queries: 4,
            strategy: SearchStrategy::Auto,
        }
    }
}

impl BatchConfig {
    /// Creates a new batch configuration
    pub fn new(parallel: bool, min_parallel_queries: usize, strategy: SearchStrategy) -> Self {
        BatchConfig {
            parallel,
            min_parallel_queries,
            strategy,
        }
    }

    /// Sequential execution with the default strategy.
    pub fn sequential() -> Self {
        BatchConfig {
            parallel: false,
            ..BatchConfig::default()
        }
    }

    /// Builds a configuration from environment variables, keeping defaults
    /// for anything unset or unparsable:
    /// - `WINDOW_BATCH_PARALLEL` (`true`/`false`)
    /// - `WINDOW_BATCH_MIN_PARALLEL` (count)
    /// - `WINDOW_SEARCH_STRATEGY` (`auto`, `two_pointer`, `naive`)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = BatchConfig::default();
        BatchConfig {
            parallel: lookup("WINDOW_BATCH_PARALLEL")
                .and_then(|value| value.trim().parse::<bool>().ok())
                .unwrap_or(defaults.parallel),
            min_parallel_queries: lookup("WINDOW_BATCH_MIN_PARALLEL")
                .and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(defaults.min_parallel_queries),
            strategy: lookup("WINDOW_SEARCH_STRATEGY")
                .and_then(|value| value.parse::<SearchStrategy>().ok())
                .unwrap_or(defaults.strategy),
        }
    }
}
