//! Markdown trace rendering.

use crate::pipeline::Analysis;

/// Factor label of the first trace row, which shows the base rate.
pub(crate) const BASE_RATE_FACTOR: &str = "**Base Rate**";

/// Separator between prior and posterior in the transition cell.
pub(crate) const TRANSITION_ARROW: &str = " -> ";

const DISCLAIMER: &str = "The probability only measures how closely historical figures match \
quality traits. It is not a promise of future returns.";

/// Render the analysis as a markdown report. Evidence rows appear in
/// the order the ledger applied them.
pub fn render_markdown(analysis: &Analysis) -> String {
    let final_pct = analysis.final_probability * 100.0;
    let mut out = String::new();

    out.push_str(&format!(
        "# Bayesian Quality Analysis: {} ({})\n\n",
        analysis.target.name, analysis.target.code
    ));
    out.push_str(&format!("> **Confidence of Quality: {final_pct:.1}%**\n\n"));
    out.push_str(&format!("## Recommendation: {}\n\n", analysis.recommendation));

    out.push_str("## Bayesian Inference Trace\n\n");
    out.push_str("| Evidence | Value | L-Ratio | Prob Change |\n");
    out.push_str("| --- | --- | --- | --- |\n");
    out.push_str(&format!(
        "| {BASE_RATE_FACTOR} | Market prior | - | {:.1}% |\n",
        analysis.base_rate * 100.0
    ));
    for record in &analysis.evidence {
        out.push_str(&format!(
            "| {} | {} | {} | {:.1}%{TRANSITION_ARROW}**{:.1}%** {} |\n",
            record.factor,
            record.observed_value,
            record.likelihood_ratio,
            record.prior_before * 100.0,
            record.posterior_after * 100.0,
            record.impact.marker(),
        ));
    }

    out.push_str("\n## Investment View\n\n");
    out.push_str(&format!(
        "- **Valuation**: PE {} (peer median {})\n",
        display_metric(analysis.metrics.pe),
        display_metric(analysis.metrics.peer_median_pe),
    ));
    if final_pct > moat_core::constants::STRONG_BUY_ABOVE_PCT {
        out.push_str(&format!(
            "- **Rationale**: Very high confidence ({final_pct:.1}%) reflects a rare combination \
             of quality traits (high ROE, strong growth, reasonable valuation).\n"
        ));
    }

    out.push_str(&format!("\n---\n> **Disclaimer**: {DISCLAIMER}\n"));
    out
}

fn display_metric(value: Option<f64>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| v.to_string())
}
