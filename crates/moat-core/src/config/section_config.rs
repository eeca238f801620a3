//! Names of the source-report sections each metric is read from.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DIVIDEND_SECTION, DEFAULT_GROWTH_SECTION, DEFAULT_PROFITABILITY_SECTION,
    DEFAULT_VALUATION_SECTION,
};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SectionConfig {
    pub growth: Option<String>,
    pub profitability: Option<String>,
    pub valuation: Option<String>,
    pub dividend: Option<String>,
}

impl SectionConfig {
    pub fn effective_growth(&self) -> &str {
        self.growth.as_deref().unwrap_or(DEFAULT_GROWTH_SECTION)
    }

    pub fn effective_profitability(&self) -> &str {
        self.profitability
            .as_deref()
            .unwrap_or(DEFAULT_PROFITABILITY_SECTION)
    }

    pub fn effective_valuation(&self) -> &str {
        self.valuation.as_deref().unwrap_or(DEFAULT_VALUATION_SECTION)
    }

    pub fn effective_dividend(&self) -> &str {
        self.dividend.as_deref().unwrap_or(DEFAULT_DIVIDEND_SECTION)
    }
}
