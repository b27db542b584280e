//! Configuration management for the community lab

use serde::{Deserialize, Serialize};

use crate::error::{LabError, Result};

/// How the brute-force search treats candidates already covered by accepted communities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SearchMode {
    /// Skip a dense candidate that is contained in a community accepted earlier,
    /// then keep only maximal communities
    #[default]
    Incremental,

    /// Accept every dense candidate, then keep only maximal communities
    CollectThenFilter,
}

/// Default configuration for the community lab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// A subset counts as a community when its internal density is strictly above this
    pub density_threshold: f64,

    /// Largest graph the brute-force search accepts
    pub max_brute_force_nodes: usize,

    /// Girvan–Newman partitions with more parts than this are not reported
    pub max_girvan_newman_partitions: usize,

    /// Subsumption policy for the brute-force search
    pub search_mode: SearchMode,

    /// Number of top-ranked nodes listed per centrality measure
    pub top_k: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            density_threshold: 0.5,
            max_brute_force_nodes: 16,
            max_girvan_newman_partitions: 10,
            search_mode: SearchMode::Incremental,
            top_k: 5,
        }
    }
}

impl Config {
    /// Create a new configuration with custom values
    pub fn new(
        density_threshold: f64,
        max_brute_force_nodes: usize,
        max_girvan_newman_partitions: usize,
        search_mode: SearchMode,
        top_k: usize,
    ) -> Self {
        Self {
            density_threshold,
            max_brute_force_nodes,
            max_girvan_newman_partitions,
            search_mode,
            top_k,
        }
    }

    /// Reject settings no analysis can run with
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.density_threshold) {
            return Err(LabError::InvalidParameter {
                name: "density_threshold",
                message: format!("must lie in [0, 1], got {}", self.density_threshold),
            });
        }
        if self.max_girvan_newman_partitions == 0 {
            return Err(LabError::InvalidParameter {
                name: "max_girvan_newman_partitions",
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_lab_settings() {
        let config = Config::default();
        assert_eq!(config.density_threshold, 0.5);
        assert_eq!(config.max_girvan_newman_partitions, 10);
        assert_eq!(config.search_mode, SearchMode::Incremental);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn threshold_outside_unit_interval_is_rejected() {
        let config = Config {
            density_threshold: 1.5,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(LabError::InvalidParameter { name: "density_threshold", .. })
        ));
    }
}
