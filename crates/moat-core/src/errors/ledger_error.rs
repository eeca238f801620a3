//! Evidence ledger errors. Reported, never raised: a rejected update is a no-op.

use super::error_code::{self, MoatErrorCode};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LedgerError {
    #[error("Degenerate likelihoods for {factor}: marginal P(E) is zero")]
    DegenerateLikelihood { factor: String },

    #[error("Invalid likelihoods for {factor}: ({given_quality}, {given_average}) not in [0, 1]")]
    InvalidLikelihood {
        factor: String,
        given_quality: f64,
        given_average: f64,
    },
}

impl MoatErrorCode for LedgerError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::DegenerateLikelihood { .. } => error_code::DEGENERATE_LIKELIHOOD,
            Self::InvalidLikelihood { .. } => error_code::INVALID_LIKELIHOOD,
        }
    }
}
