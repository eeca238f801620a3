//! JSON rendering of a finished analysis.

use moat_core::errors::ReportError;

use crate::pipeline::Analysis;

pub fn render_json(analysis: &Analysis) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(analysis)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::MetricsSnapshot;
    use crate::ledger::BayesianLedger;
    use moat_core::Target;

    #[test]
    fn test_json_shape() {
        let mut ledger = BayesianLedger::new(0.10);
        ledger.update("Exceptional ROE (>25%)", "30%", 0.9, 0.05);
        let metrics = MetricsSnapshot {
            roe: Some(30.0),
            ..Default::default()
        };
        let target = Target::new("600519", "贵州茅台");
        let analysis = Analysis::from_ledger(target, ledger, metrics);

        let rendered = render_json(&analysis).unwrap();
        let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(json["target"]["code"], "600519");
        assert_eq!(json["recommendation"], "hold");
        assert_eq!(json["evidence"][0]["impact"], "positive");
        assert_eq!(json["evidence"][0]["likelihood_ratio"]["kind"], "finite");
        assert_eq!(json["metrics"]["roe"], 30.0);
        assert!(json["metrics"]["pe"].is_null());

        let back: Analysis = serde_json::from_str(&rendered).unwrap();
        assert_eq!(back.evidence.len(), 1);
        assert_eq!(back.evidence[0].factor, analysis.evidence[0].factor);
        assert!((back.final_probability - analysis.final_probability).abs() < 1e-12);
    }
}
