//! The fixed, ordered evidence rule table.
//!
//! Each rule reads the metrics snapshot and yields zero or more evidence
//! items with rule-authored likelihood pairs. The table order is the order
//! in which the ledger sees the evidence.

use super::metrics::MetricsSnapshot;

/// One item of evidence a rule wants folded into the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct Evidence {
    pub factor: &'static str,
    pub observed_value: String,
    /// P(observation | Quality)
    pub given_quality: f64,
    /// P(observation | Average)
    pub given_average: f64,
}

impl Evidence {
    fn new(
        factor: &'static str,
        observed_value: impl Into<String>,
        given_quality: f64,
        given_average: f64,
    ) -> Self {
        Self {
            factor,
            observed_value: observed_value.into(),
            given_quality,
            given_average,
        }
    }
}

#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub evaluate: fn(&MetricsSnapshot) -> Vec<Evidence>,
}

/// Evaluation order is part of the result: each update's prior is the
/// previous update's posterior.
pub const RULES: [Rule; 5] = [
    Rule {
        name: "growth",
        evaluate: growth_rule,
    },
    Rule {
        name: "return_on_equity",
        evaluate: roe_rule,
    },
    Rule {
        name: "relative_valuation",
        evaluate: valuation_rule,
    },
    Rule {
        name: "peg",
        evaluate: peg_rule,
    },
    Rule {
        name: "dividend",
        evaluate: dividend_rule,
    },
];

fn growth_rule(m: &MetricsSnapshot) -> Vec<Evidence> {
    let Some(growth) = m.growth_3y else {
        return Vec::new();
    };
    let mut evidence = Vec::new();

    if growth > 15.0 {
        evidence.push(Evidence::new("High Growth (>15%)", format!("{growth}%"), 0.8, 0.2));
    } else if growth < 5.0 {
        evidence.push(Evidence::new("Low Growth (<5%)", format!("{growth}%"), 0.1, 0.6));
    }

    if let Some(benchmark) = m.growth_benchmark {
        if growth > benchmark {
            evidence.push(Evidence::new(
                "Outperformed Peers",
                format!("vs {benchmark}%"),
                0.75,
                0.3,
            ));
        }
    }
    evidence
}

fn roe_rule(m: &MetricsSnapshot) -> Vec<Evidence> {
    let Some(roe) = m.roe else {
        return Vec::new();
    };
    let observed = format!("{roe}%");
    let evidence = if roe > 25.0 {
        Evidence::new("Exceptional ROE (>25%)", observed, 0.9, 0.05)
    } else if roe > 15.0 {
        Evidence::new("Strong ROE (>15%)", observed, 0.7, 0.2)
    } else if roe < 8.0 {
        Evidence::new("Weak ROE (<8%)", observed, 0.05, 0.5)
    } else {
        return Vec::new();
    };
    vec![evidence]
}

fn valuation_rule(m: &MetricsSnapshot) -> Vec<Evidence> {
    let (Some(pe), Some(median)) = (m.pe, m.peer_median_pe) else {
        return Vec::new();
    };
    if median <= 0.0 {
        return Vec::new();
    }
    let relative = pe / median;
    let observed = format!("PE {pe} vs {median}");
    if relative < 0.8 {
        vec![Evidence::new("Undervalued vs Peers", observed, 0.7, 0.3)]
    } else if relative > 1.5 {
        vec![Evidence::new("Overvalued vs Peers", observed, 0.2, 0.6)]
    } else {
        Vec::new()
    }
}

fn peg_rule(m: &MetricsSnapshot) -> Vec<Evidence> {
    match m.peg {
        Some(peg) if peg > 0.0 && peg < 1.0 => {
            vec![Evidence::new("Undervalued Growth (PEG<1)", peg.to_string(), 0.7, 0.3)]
        }
        _ => Vec::new(),
    }
}

/// High yield is positive on its own, but high yield on shrinking earnings
/// is the classic value trap and is penalised hard. Reads the growth metric
/// captured for the growth rule.
fn dividend_rule(m: &MetricsSnapshot) -> Vec<Evidence> {
    let Some(dividend_yield) = m.dividend_yield else {
        return Vec::new();
    };
    if dividend_yield <= 3.0 {
        return Vec::new();
    }

    let mut evidence = vec![Evidence::new(
        "High Dividend Yield",
        format!("{dividend_yield}%"),
        0.6,
        0.3,
    )];
    if m.growth_3y.is_some_and(|growth| growth < 0.0) {
        evidence.push(Evidence::new(
            "Value Trap Warning",
            "Yield >3% & Neg Growth",
            0.01,
            0.40,
        ));
    }
    evidence
}
