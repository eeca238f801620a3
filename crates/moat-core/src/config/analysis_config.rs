//! Inference engine configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_BASE_RATE;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Prior probability of Quality before any evidence. Default: 0.10.
    pub base_rate: Option<f64>,
}

impl AnalysisConfig {
    /// Returns the effective base rate, defaulting to 0.10.
    pub fn effective_base_rate(&self) -> f64 {
        self.base_rate.unwrap_or(DEFAULT_BASE_RATE)
    }
}
