//! Target security configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_TARGET_CODE, DEFAULT_TARGET_NAME};
use crate::types::Target;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TargetConfig {
    /// 6-digit security code. Default: 600519.
    pub code: Option<String>,
    /// Display name for the report header.
    pub name: Option<String>,
}

impl TargetConfig {
    pub fn effective_code(&self) -> &str {
        self.code.as_deref().unwrap_or(DEFAULT_TARGET_CODE)
    }

    /// A configured code without a configured name is labelled with the code itself,
    /// so a custom code never inherits the default security's name.
    pub fn effective_name(&self) -> &str {
        match (&self.name, &self.code) {
            (Some(name), _) => name.as_str(),
            (None, Some(code)) => code.as_str(),
            (None, None) => DEFAULT_TARGET_NAME,
        }
    }

    /// Resolve into the explicit target handed to one analysis run.
    pub fn to_target(&self) -> Target {
        Target::new(self.effective_code(), self.effective_name())
    }
}
