//! Recover the evidence chain from a rendered markdown report.
//!
//! Uses the same table parser as extraction. Values come back at display
//! precision (one decimal place of percent).

use crate::ledger::Impact;
use crate::tables::{parse_table, safe_number};

use super::markdown::{BASE_RATE_FACTOR, TRANSITION_ARROW};

/// One evidence row read back from a report.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceRow {
    pub factor: String,
    pub observed_value: String,
    pub likelihood_ratio: Option<f64>,
    pub prior_pct: f64,
    pub posterior_pct: f64,
    pub impact: Option<Impact>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedTrace {
    pub base_rate_pct: Option<f64>,
    pub steps: Vec<TraceRow>,
}

/// Parse the evidence table of a report produced by `render_markdown`.
/// Rows that do not look like evidence steps are skipped.
pub fn parse_trace(report: &str) -> ParsedTrace {
    let table = parse_table(report);
    let mut trace = ParsedTrace::default();

    for row in &table.rows {
        let [factor, observed, ratio, transition] = row.as_slice() else {
            tracing::debug!(cells = row.len(), "skipping non-trace row");
            continue;
        };

        if factor == BASE_RATE_FACTOR {
            trace.base_rate_pct = safe_number(transition);
            continue;
        }

        let Some((prior_pct, posterior_pct, impact)) = parse_transition(transition) else {
            tracing::debug!(%factor, %transition, "unreadable transition cell");
            continue;
        };
        trace.steps.push(TraceRow {
            factor: factor.clone(),
            observed_value: observed.clone(),
            likelihood_ratio: ratio.strip_suffix('x').and_then(safe_number),
            prior_pct,
            posterior_pct,
            impact,
        });
    }

    trace
}

/// `"10.0% -> **64.3%** 🔺"` → `(10.0, 64.3, Some(Positive))`.
fn parse_transition(cell: &str) -> Option<(f64, f64, Option<Impact>)> {
    let (prior, rest) = cell.split_once(TRANSITION_ARROW)?;
    let (posterior, marker) = rest.trim().strip_prefix("**")?.split_once("**")?;
    Some((
        safe_number(prior)?,
        safe_number(posterior)?,
        Impact::from_marker(marker.trim()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: &str = "\
# Bayesian Quality Analysis: 贵州茅台 (600519)

> **Confidence of Quality: 88.6%**

## Bayesian Inference Trace

| Evidence | Value | L-Ratio | Prob Change |
| --- | --- | --- | --- |
| **Base Rate** | Market prior | - | 10.0% |
| Exceptional ROE (>25%) | 30% | 18.0x | 10.0% -> **64.3%** 🔺 |
| Undervalued Growth (PEG<1) | 0.8 | 2.3x | 64.3% -> **80.8%** 🔺 |
| Weird row | x | 1.0x | garbage |

---
> **Disclaimer**: ...
";

    #[test]
    fn test_parse_trace() {
        let trace = parse_trace(REPORT);
        assert_eq!(trace.base_rate_pct, Some(10.0));
        assert_eq!(trace.steps.len(), 2);

        let first = &trace.steps[0];
        assert_eq!(first.factor, "Exceptional ROE (>25%)");
        assert_eq!(first.observed_value, "30%");
        assert_eq!(first.likelihood_ratio, Some(18.0));
        assert_eq!((first.prior_pct, first.posterior_pct), (10.0, 64.3));
        assert_eq!(first.impact, Some(Impact::Positive));

        assert_eq!(trace.steps[1].prior_pct, 64.3);
        assert_eq!(trace.steps[1].posterior_pct, 80.8);
    }

    #[test]
    fn test_parse_transition_variants() {
        assert_eq!(
            parse_transition("12.5% -> **3.0%** 🔻"),
            Some((12.5, 3.0, Some(Impact::Negative)))
        );
        assert_eq!(parse_transition("12.5% -> 3.0%"), None);
        assert_eq!(parse_transition("12.5%"), None);
    }

    #[test]
    fn test_no_table() {
        assert_eq!(parse_trace("# nothing here\n"), ParsedTrace::default());
    }
}
