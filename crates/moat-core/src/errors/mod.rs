//! Error handling for Moat.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod analysis_error;
pub mod config_error;
pub mod error_code;
pub mod extraction_error;
pub mod ledger_error;
pub mod report_error;

pub use analysis_error::{AnalysisError, AnalysisResult};
pub use config_error::ConfigError;
pub use error_code::MoatErrorCode;
pub use extraction_error::ExtractionError;
pub use ledger_error::LedgerError;
pub use report_error::ReportError;
