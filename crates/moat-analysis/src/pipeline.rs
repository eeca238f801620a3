//! One analysis run: extract → evaluate → ledger → finished [`Analysis`].
//!
//! Every run owns its ledger. Batch runs share only the immutable source
//! text, so they parallelize without coordination.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use moat_core::config::{MoatConfig, SectionConfig};
use moat_core::constants::DEFAULT_BASE_RATE;
use moat_core::errors::AnalysisResult;
use moat_core::Target;

use crate::evaluator::{extract_metrics, MetricEvaluator, MetricsSnapshot};
use crate::ledger::{BayesianLedger, EvidenceRecord};
use crate::report::Recommendation;

/// Per-run settings resolved from configuration.
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    pub base_rate: f64,
    pub sections: SectionConfig,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            base_rate: DEFAULT_BASE_RATE,
            sections: SectionConfig::default(),
        }
    }
}

impl AnalysisOptions {
    pub fn from_config(config: &MoatConfig) -> Self {
        Self {
            base_rate: config.analysis.effective_base_rate(),
            sections: config.sections.clone(),
        }
    }
}

/// Final state of one run, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub target: Target,
    pub base_rate: f64,
    pub final_probability: f64,
    pub recommendation: Recommendation,
    pub evidence: Vec<EvidenceRecord>,
    pub metrics: MetricsSnapshot,
}

impl Analysis {
    pub fn from_ledger(target: Target, ledger: BayesianLedger, metrics: MetricsSnapshot) -> Self {
        let base_rate = ledger.base_rate();
        let (final_probability, evidence) = ledger.into_parts();
        Self {
            target,
            base_rate,
            final_probability,
            recommendation: Recommendation::from_probability(final_probability),
            evidence,
            metrics,
        }
    }
}

/// Analyze one target in `text`. Always produces an analysis; extraction
/// gaps and rejected updates come back as non-fatal errors.
pub fn analyze(text: &str, target: &Target, options: &AnalysisOptions) -> AnalysisResult<Analysis> {
    let span = tracing::info_span!("analyze", target_code = %target.code);
    let _guard = span.enter();

    let AnalysisResult {
        data: metrics,
        mut errors,
    } = extract_metrics(text, target, &options.sections);

    let mut ledger = BayesianLedger::new(options.base_rate);
    errors.extend(
        MetricEvaluator::evaluate(&metrics, &mut ledger)
            .into_iter()
            .map(Into::into),
    );

    let analysis = Analysis::from_ledger(target.clone(), ledger, metrics);
    tracing::info!(
        final_probability = analysis.final_probability,
        evidence_count = analysis.evidence.len(),
        diagnostic_count = errors.len(),
        recommendation = %analysis.recommendation,
        "analysis complete"
    );
    for error in &errors {
        tracing::debug!(%error, "evidence gap");
    }

    AnalysisResult {
        data: analysis,
        errors,
    }
}

/// Analyze several targets over the same text in parallel. Results keep
/// the order of `targets`.
///
/// Values read from sections without per-target rows are shared by every
/// target: the dividend yield always comes from the first row of the
/// dividend table, and the peer medians are computed over the whole table.
pub fn analyze_batch(
    text: &str,
    targets: &[Target],
    options: &AnalysisOptions,
) -> Vec<AnalysisResult<Analysis>> {
    targets
        .par_iter()
        .map(|target| analyze(text, target, options))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_uninformative() {
        let target = Target::new("600519", "贵州茅台");
        let result = analyze("", &target, &AnalysisOptions::default());
        assert_eq!(result.data.final_probability, DEFAULT_BASE_RATE);
        assert!(result.data.evidence.is_empty());
        assert_eq!(result.data.recommendation, Recommendation::Sell);
        assert_eq!(result.error_count(), 4);
    }

    #[test]
    fn test_options_from_config() {
        let config = MoatConfig::from_toml("[analysis]\nbase_rate = 0.25\n").unwrap();
        let options = AnalysisOptions::from_config(&config);
        assert_eq!(options.base_rate, 0.25);
        let result = analyze("", &config.target(), &options);
        assert_eq!(result.data.base_rate, 0.25);
    }
}
