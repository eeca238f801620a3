//! MoatErrorCode trait for structured error codes.

/// Every error enum implements this to expose a stable code string
/// for machine consumers (JSON output, exit diagnostics).
pub trait MoatErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const MISSING_DATA: &str = "MISSING_DATA";
pub const UNPARSEABLE_VALUE: &str = "UNPARSEABLE_VALUE";
pub const DEGENERATE_LIKELIHOOD: &str = "DEGENERATE_LIKELIHOOD";
pub const INVALID_LIKELIHOOD: &str = "INVALID_LIKELIHOOD";
pub const REPORT_IO_ERROR: &str = "REPORT_IO_ERROR";
pub const REPORT_SERIALIZATION_ERROR: &str = "REPORT_SERIALIZATION_ERROR";
