//! Value types shared across crates.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::SECURITY_CODE_LEN;

/// The security one analysis run is about.
///
/// Passed explicitly into every run; there is no process-wide default target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Target {
    /// 6-digit exchange code, used to select the target row.
    pub code: String,
    /// Display name for the report header.
    pub name: String,
}

impl Target {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }

    /// Whether `code` has the shape of an exchange security code.
    pub fn is_valid_code(code: &str) -> bool {
        code.len() == SECURITY_CODE_LEN && code.bytes().all(|b| b.is_ascii_digit())
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_shape() {
        assert!(Target::is_valid_code("600519"));
        assert!(!Target::is_valid_code("60051"));
        assert!(!Target::is_valid_code("60051a"));
        assert!(!Target::is_valid_code("６００５１９"));
    }

    #[test]
    fn test_display() {
        let t = Target::new("000858", "五粮液");
        assert_eq!(t.to_string(), "五粮液 (000858)");
    }
}
