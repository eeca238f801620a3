//! Errors at the text-in/text-out boundary.

use super::error_code::{self, MoatErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Failed to read source {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write report {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Report serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl MoatErrorCode for ReportError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Read { .. } | Self::Write { .. } => error_code::REPORT_IO_ERROR,
            Self::Serialization(_) => error_code::REPORT_SERIALIZATION_ERROR,
        }
    }
}
