//! Startup configuration read from the process environment.

use crate::tools::dispatch::DEFAULT_MAX_ITERATIONS;
use std::env;

pub const SEED_ENV: &str = "EXPERIMENT_MCP_SEED";
pub const LOG_ENV: &str = "EXPERIMENT_MCP_LOG";
pub const MAX_ITERATIONS_ENV: &str = "EXPERIMENT_MCP_MAX_ITERATIONS";

const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Seed for the benchmark jitter; `None` draws from the thread RNG.
    pub seed: Option<u64>,
    pub log_filter: String,
    pub max_iterations: u64,
    /// Problems found while reading the environment. Logged once the logger is up.
    pub warnings: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            warnings: Vec::new(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(raw) = read(SEED_ENV) {
            match raw.parse::<u64>() {
                Ok(seed) => config.seed = Some(seed),
                Err(err) => config
                    .warnings
                    .push(format!("ignoring {SEED_ENV}={raw:?}: {err}")),
            }
        }

        if let Some(filter) = read(LOG_ENV) {
            config.log_filter = filter;
        }

        if let Some(raw) = read(MAX_ITERATIONS_ENV) {
            match raw.parse::<u64>() {
                Ok(0) => config
                    .warnings
                    .push(format!("ignoring {MAX_ITERATIONS_ENV}=0: must be positive")),
                Ok(max) => config.max_iterations = max,
                Err(err) => config
                    .warnings
                    .push(format!("ignoring {MAX_ITERATIONS_ENV}={raw:?}: {err}")),
            }
        }

        config
    }
}
