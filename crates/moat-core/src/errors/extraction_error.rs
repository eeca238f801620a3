//! Table extraction errors.
//!
//! None of these abort a run. They are collected as diagnostics explaining
//! why a rule contributed no evidence.

use super::error_code::{self, MoatErrorCode};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExtractionError {
    #[error("Section not found or has no table: {section}")]
    SectionNotFound { section: String },

    #[error("No row in {section} matches key {key:?}")]
    RowNotFound { section: String, key: String },

    #[error("No column in {section} matches {keywords:?}")]
    ColumnNotFound {
        section: String,
        keywords: Vec<String>,
    },

    #[error("Missing value for {metric} in {section}")]
    MissingValue { section: String, metric: String },

    #[error("Unparseable value for {metric} in {section}: {raw:?}")]
    UnparseableValue {
        section: String,
        metric: String,
        raw: String,
    },
}

impl MoatErrorCode for ExtractionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnparseableValue { .. } => error_code::UNPARSEABLE_VALUE,
            _ => error_code::MISSING_DATA,
        }
    }
}
