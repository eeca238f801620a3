//! The running probability of Quality and its audit log.

use moat_core::constants::DEFAULT_BASE_RATE;
use moat_core::errors::LedgerError;

use super::types::{EvidenceRecord, Impact, LikelihoodRatio};

/// Owned by exactly one analysis run; created at run start, dropped after rendering.
#[derive(Debug, Clone)]
pub struct BayesianLedger {
    base_rate: f64,
    current_probability: f64,
    evidence_log: Vec<EvidenceRecord>,
}

impl Default for BayesianLedger {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_RATE)
    }
}

impl BayesianLedger {
    /// Start a ledger at `base_rate`.
    ///
    /// A non-finite base rate falls back to the default; an out-of-range one
    /// is clamped into `[0, 1]`.
    pub fn new(base_rate: f64) -> Self {
        let base_rate = if base_rate.is_finite() {
            base_rate.clamp(0.0, 1.0)
        } else {
            tracing::warn!(base_rate, "non-finite base rate, using default");
            DEFAULT_BASE_RATE
        };
        Self {
            base_rate,
            current_probability: base_rate,
            evidence_log: Vec::new(),
        }
    }

    /// Fold one evidence item into the running probability.
    ///
    /// Returns the posterior, or `None` when the update was skipped. A
    /// skipped update leaves both the probability and the log untouched.
    pub fn update(
        &mut self,
        factor: impl Into<String>,
        observed_value: impl Into<String>,
        given_quality: f64,
        given_average: f64,
    ) -> Option<f64> {
        self.try_update(factor, observed_value, given_quality, given_average)
            .ok()
    }

    /// Like [`update`](Self::update), but reports why an update was skipped.
    pub fn try_update(
        &mut self,
        factor: impl Into<String>,
        observed_value: impl Into<String>,
        given_quality: f64,
        given_average: f64,
    ) -> Result<f64, LedgerError> {
        let factor = factor.into();

        if !is_probability(given_quality) || !is_probability(given_average) {
            tracing::warn!(
                %factor,
                given_quality,
                given_average,
                "likelihood out of range, update skipped"
            );
            return Err(LedgerError::InvalidLikelihood {
                factor,
                given_quality,
                given_average,
            });
        }

        let prior = self.current_probability;
        let p_evidence = given_quality * prior + given_average * (1.0 - prior);
        if p_evidence == 0.0 {
            tracing::warn!(%factor, prior, "marginal P(E) is zero, update skipped");
            return Err(LedgerError::DegenerateLikelihood { factor });
        }

        let posterior = given_quality * prior / p_evidence;
        let impact = Impact::classify(prior, posterior);

        tracing::debug!(%factor, prior, posterior, %impact, "evidence applied");

        self.evidence_log.push(EvidenceRecord {
            factor,
            observed_value: observed_value.into(),
            prior_before: prior,
            posterior_after: posterior,
            impact,
            likelihood_ratio: LikelihoodRatio::from_likelihoods(given_quality, given_average),
        });
        self.current_probability = posterior;

        Ok(posterior)
    }

    pub fn probability(&self) -> f64 {
        self.current_probability
    }

    pub fn base_rate(&self) -> f64 {
        self.base_rate
    }

    /// Evidence records in the order they were applied.
    pub fn evidence(&self) -> &[EvidenceRecord] {
        &self.evidence_log
    }

    pub fn len(&self) -> usize {
        self.evidence_log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.evidence_log.is_empty()
    }

    /// Consume the ledger, yielding the final probability and the log.
    pub fn into_parts(self) -> (f64, Vec<EvidenceRecord>) {
        (self.current_probability, self.evidence_log)
    }
}

fn is_probability(p: f64) -> bool {
    (0.0..=1.0).contains(&p)
}
