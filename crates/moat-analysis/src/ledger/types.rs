//! Evidence log types.

use std::fmt;

use serde::{Deserialize, Serialize};

use moat_core::constants::{IMPACT_THRESHOLD, LIKELIHOOD_RATIO_SENTINEL};

/// Direction in which one update moved the probability of Quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impact {
    /// Posterior rose by more than one percentage point.
    Positive,
    /// Posterior fell by more than one percentage point.
    Negative,
    /// Moved by at most one percentage point either way.
    Neutral,
}

impl Impact {
    pub fn classify(prior: f64, posterior: f64) -> Self {
        let change = posterior - prior;
        if change > IMPACT_THRESHOLD {
            Self::Positive
        } else if change < -IMPACT_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    /// Marker shown next to the transition in the rendered trace.
    pub fn marker(&self) -> &'static str {
        match self {
            Self::Positive => "🔺",
            Self::Negative => "🔻",
            Self::Neutral => "🔸",
        }
    }

    pub fn from_marker(marker: &str) -> Option<Self> {
        [Self::Positive, Self::Negative, Self::Neutral]
            .into_iter()
            .find(|impact| impact.marker() == marker)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Impact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// P(E | Quality) / P(E | Average), for display only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum LikelihoodRatio {
    Finite(f64),
    /// P(E | Average) is zero: the evidence is exclusive to Quality.
    Unbounded,
}

impl LikelihoodRatio {
    pub fn from_likelihoods(given_quality: f64, given_average: f64) -> Self {
        if given_average > 0.0 {
            Self::Finite(given_quality / given_average)
        } else {
            Self::Unbounded
        }
    }

    /// Numeric display value; `Unbounded` shows as the fixed sentinel.
    pub fn display_value(&self) -> f64 {
        match self {
            Self::Finite(ratio) => *ratio,
            Self::Unbounded => LIKELIHOOD_RATIO_SENTINEL,
        }
    }
}

impl fmt::Display for LikelihoodRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}x", self.display_value())
    }
}

/// One audited update. Created once by the ledger and never changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceRecord {
    pub factor: String,
    /// Observed value, already formatted for display.
    pub observed_value: String,
    pub prior_before: f64,
    pub posterior_after: f64,
    pub impact: Impact,
    pub likelihood_ratio: LikelihoodRatio,
}
