use serde::{Deserialize, Serialize};
use std::fs;
use anyhow::Result;

/// Planner tuning knobs relevant to tablet pruning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Upper bound on the number of distribution-value combinations the
    /// pruner will enumerate before falling back to scanning every tablet.
    pub max_pruning_combinations: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_pruning_combinations: 100,
        }
    }
}

impl PlannerConfig {
    pub fn load() -> Result<Self> {
        // Try to load from config file, otherwise use defaults
        let mut config = match fs::read_to_string("planner_config.json") {
            Ok(content) => {
                let config: PlannerConfig = serde_json::from_str(&content)?;
                config
            }
            Err(_) => PlannerConfig::default(),
        };

        // Override with environment variables if present
        if let Ok(ceiling) = std::env::var("MAX_PRUNING_COMBINATIONS") {
            if let Ok(value) = ceiling.parse::<usize>() {
                config.max_pruning_combinations = value;
            }
        }

        Ok(config)
    }
}
