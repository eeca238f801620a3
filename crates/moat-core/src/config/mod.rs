//! Configuration system for Moat.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod analysis_config;
pub mod moat_config;
pub mod report_config;
pub mod section_config;
pub mod target_config;

pub use analysis_config::AnalysisConfig;
pub use moat_config::{CliOverrides, MoatConfig};
pub use report_config::{ReportConfig, ReportFormat};
pub use section_config::SectionConfig;
pub use target_config::TargetConfig;
