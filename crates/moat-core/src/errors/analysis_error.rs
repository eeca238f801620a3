//! Analysis-run errors and non-fatal error collection.

use super::{ExtractionError, LedgerError, MoatErrorCode};

/// Non-fatal problems encountered during one analysis run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    #[error("Extraction: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Ledger: {0}")]
    Ledger(#[from] LedgerError),
}

impl MoatErrorCode for AnalysisError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Extraction(e) => e.error_code(),
            Self::Ledger(e) => e.error_code(),
        }
    }
}

/// Result of an analysis run that accumulates non-fatal errors.
/// The data is always present; the errors explain a short evidence log.
#[derive(Debug, Default)]
pub struct AnalysisResult<T = ()> {
    /// The result data.
    pub data: T,
    /// Non-fatal errors collected during the run, in encounter order.
    pub errors: Vec<AnalysisError>,
}

impl<T> AnalysisResult<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            errors: Vec::new(),
        }
    }

    /// Add a non-fatal error to the result.
    pub fn add_error(&mut self, error: impl Into<AnalysisError>) {
        self.errors.push(error.into());
    }

    /// Returns true if there are no non-fatal errors.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}
