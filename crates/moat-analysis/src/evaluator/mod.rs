//! Maps extracted metrics onto likelihood pairs and feeds the ledger.

pub mod metrics;
pub mod rules;

pub use metrics::{extract_metrics, ColumnSpec, MetricsSnapshot};
pub use rules::{Evidence, Rule, RULES};

use moat_core::errors::LedgerError;

use crate::ledger::BayesianLedger;

/// Applies the rule table to a metrics snapshot.
pub struct MetricEvaluator;

impl MetricEvaluator {
    /// Run every rule in table order, folding each evidence item into
    /// `ledger`. Rejected updates are returned, never raised.
    pub fn evaluate(metrics: &MetricsSnapshot, ledger: &mut BayesianLedger) -> Vec<LedgerError> {
        let mut rejected = Vec::new();
        for rule in RULES.iter() {
            let evidence = (rule.evaluate)(metrics);
            if evidence.is_empty() {
                tracing::trace!(rule = rule.name, "no evidence");
                continue;
            }
            for item in evidence {
                if let Err(e) = ledger.try_update(
                    item.factor,
                    item.observed_value,
                    item.given_quality,
                    item.given_average,
                ) {
                    rejected.push(e);
                }
            }
        }
        rejected
    }
}
