use std::env;

use serde::{Deserialize, Serialize};

use self::network::NetworkConfig;

pub mod network;

/// Number of rows the launcher can show at once
pub const DEFAULT_MAX_RESULTS: usize = 9;

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub network: NetworkConfig,
    /// Display capacity, records past this are dropped
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Config {
    /// Build config from process environment
    pub fn new() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build config from an arbitrary variable lookup
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let max_results = var("JISHO_MAX_RESULTS")
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_MAX_RESULTS);

        Config {
            network: NetworkConfig::from_vars(&var),
            max_results,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: NetworkConfig::default(),
            max_results: default_max_results(),
        }
    }
}
