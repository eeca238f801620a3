//! Shared constants for the Moat inference engine.

/// Moat version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Population base rate of "quality" securities, used as the initial prior.
pub const DEFAULT_BASE_RATE: f64 = 0.10;

/// A posterior must move by more than this to count as positive/negative evidence.
pub const IMPACT_THRESHOLD: f64 = 0.01;

/// Displayed likelihood ratio when P(E | Average) is zero.
pub const LIKELIHOOD_RATIO_SENTINEL: f64 = 999.0;

/// Recommendation bucket boundaries, in percent.
pub const STRONG_BUY_ABOVE_PCT: f64 = 90.0;
pub const BUY_ABOVE_PCT: f64 = 75.0;
pub const SELL_BELOW_PCT: f64 = 30.0;

/// Default target security.
pub const DEFAULT_TARGET_CODE: &str = "600519";
pub const DEFAULT_TARGET_NAME: &str = "贵州茅台";

/// Default section names in the merged source report.
pub const DEFAULT_GROWTH_SECTION: &str = "成长性_czxbj";
pub const DEFAULT_PROFITABILITY_SECTION: &str = "杜邦分析_dbfxbj";
pub const DEFAULT_VALUATION_SECTION: &str = "估值比较_gzbj";
pub const DEFAULT_DIVIDEND_SECTION: &str = "分红_fhrzgl";

/// Default report output format.
pub const DEFAULT_REPORT_FORMAT: &str = "markdown";

/// Length of an exchange security code.
pub const SECURITY_CODE_LEN: usize = 6;
