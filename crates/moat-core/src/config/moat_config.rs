//! Top-level Moat configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{AnalysisConfig, ReportConfig, SectionConfig, TargetConfig};
use crate::errors::ConfigError;
use crate::types::Target;

/// Project config file name, looked up in the working root.
pub const PROJECT_CONFIG_FILE: &str = "moat.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`MOAT_*`)
/// 3. Project config (`moat.toml` in project root)
/// 4. User config (`~/.moat/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MoatConfig {
    pub analysis: AnalysisConfig,
    pub target: TargetConfig,
    pub sections: SectionConfig,
    pub report: ReportConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub base_rate: Option<f64>,
    pub target_code: Option<String>,
    pub target_name: Option<String>,
    pub report_format: Option<String>,
}

impl MoatConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &MoatConfig) -> Result<(), ConfigError> {
        if let Some(rate) = config.analysis.base_rate {
            if !(0.0..=1.0).contains(&rate) {
                return Err(ConfigError::ValidationFailed {
                    field: "analysis.base_rate".to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        if let Some(ref code) = config.target.code {
            if !Target::is_valid_code(code) {
                return Err(ConfigError::ValidationFailed {
                    field: "target.code".to_string(),
                    message: format!("{code:?} is not a 6-digit security code"),
                });
            }
        }
        config.report.effective_format()?;
        Ok(())
    }

    /// The explicit target for a run resolved from this config.
    pub fn target(&self) -> Target {
        self.target.to_target()
    }

    /// Returns the user config path: `~/.moat/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".moat").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut MoatConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: MoatConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a `Some` value.
    fn merge(base: &mut MoatConfig, other: &MoatConfig) {
        if other.analysis.base_rate.is_some() {
            base.analysis.base_rate = other.analysis.base_rate;
        }

        if other.target.code.is_some() {
            base.target.code = other.target.code.clone();
        }
        if other.target.name.is_some() {
            base.target.name = other.target.name.clone();
        }

        if other.sections.growth.is_some() {
            base.sections.growth = other.sections.growth.clone();
        }
        if other.sections.profitability.is_some() {
            base.sections.profitability = other.sections.profitability.clone();
        }
        if other.sections.valuation.is_some() {
            base.sections.valuation = other.sections.valuation.clone();
        }
        if other.sections.dividend.is_some() {
            base.sections.dividend = other.sections.dividend.clone();
        }

        if other.report.format.is_some() {
            base.report.format = other.report.format.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `MOAT_BASE_RATE`, `MOAT_TARGET_CODE`, etc.
    fn apply_env_overrides(config: &mut MoatConfig) {
        if let Ok(val) = std::env::var("MOAT_BASE_RATE") {
            if let Ok(v) = val.parse::<f64>() {
                config.analysis.base_rate = Some(v);
            }
        }
        if let Ok(val) = std::env::var("MOAT_TARGET_CODE") {
            config.target.code = Some(val);
        }
        if let Ok(val) = std::env::var("MOAT_TARGET_NAME") {
            config.target.name = Some(val);
        }
        if let Ok(val) = std::env::var("MOAT_REPORT_FORMAT") {
            config.report.format = Some(val);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut MoatConfig, cli: &CliOverrides) {
        if let Some(v) = cli.base_rate {
            config.analysis.base_rate = Some(v);
        }
        if let Some(ref v) = cli.target_code {
            config.target.code = Some(v.clone());
        }
        if let Some(ref v) = cli.target_name {
            config.target.name = Some(v.clone());
        }
        if let Some(ref v) = cli.report_format {
            config.report.format = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
