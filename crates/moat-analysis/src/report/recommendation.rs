//! Recommendation buckets over the final probability.

use std::fmt;

use serde::{Deserialize, Serialize};

use moat_core::constants::{BUY_ABOVE_PCT, SELL_BELOW_PCT, STRONG_BUY_ABOVE_PCT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    /// Above 90%.
    StrongBuy,
    /// Above 75%.
    Buy,
    Hold,
    /// Below 30%.
    Sell,
}

impl Recommendation {
    /// Bucket a probability in `[0, 1]`. Boundaries are exclusive.
    pub fn from_probability(probability: f64) -> Self {
        let pct = probability * 100.0;
        if pct > STRONG_BUY_ABOVE_PCT {
            Self::StrongBuy
        } else if pct > BUY_ABOVE_PCT {
            Self::Buy
        } else if pct < SELL_BELOW_PCT {
            Self::Sell
        } else {
            Self::Hold
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::StrongBuy => "Strong Buy",
            Self::Buy => "Buy",
            Self::Hold => "Hold",
            Self::Sell => "Sell",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buckets() {
        assert_eq!(Recommendation::from_probability(0.95), Recommendation::StrongBuy);
        assert_eq!(Recommendation::from_probability(0.80), Recommendation::Buy);
        assert_eq!(Recommendation::from_probability(0.50), Recommendation::Hold);
        assert_eq!(Recommendation::from_probability(0.10), Recommendation::Sell);
    }

    #[test]
    fn test_boundaries_are_exclusive() {
        assert_eq!(Recommendation::from_probability(0.90), Recommendation::Buy);
        assert_eq!(Recommendation::from_probability(0.75), Recommendation::Hold);
        assert_eq!(Recommendation::from_probability(0.30), Recommendation::Hold);
    }
}
