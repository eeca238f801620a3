//! Property-based tests for ledger invariants.
//!
//! Uses proptest to fuzz-verify:
//!   - the probability stays in [0, 1] after every update
//!   - the evidence log forms an unbroken prior → posterior chain
//!   - equal, zero, and degenerate likelihoods behave as documented

use proptest::prelude::*;

use moat_analysis::evaluator::{MetricEvaluator, MetricsSnapshot};
use moat_analysis::{BayesianLedger, Impact};

fn likelihood() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), Just(1.0), 0.0f64..=1.0]
}

fn update_sequence() -> impl Strategy<Value = Vec<(f64, f64)>> {
    prop::collection::vec((likelihood(), likelihood()), 0..40)
}

proptest! {
    #[test]
    fn prop_probability_bounded(base in 0.0f64..=1.0, updates in update_sequence()) {
        let mut ledger = BayesianLedger::new(base);
        for (i, (q, a)) in updates.iter().enumerate() {
            ledger.update(format!("e{i}"), "-", *q, *a);
            let p = ledger.probability();
            prop_assert!((0.0..=1.0).contains(&p), "probability {} escaped [0, 1]", p);
        }
    }

    #[test]
    fn prop_log_is_a_chain(base in 0.0f64..=1.0, updates in update_sequence()) {
        let mut ledger = BayesianLedger::new(base);
        for (i, (q, a)) in updates.iter().enumerate() {
            ledger.update(format!("e{i}"), "-", *q, *a);
        }
        let log = ledger.evidence();
        if let Some(first) = log.first() {
            prop_assert_eq!(first.prior_before, ledger.base_rate());
        }
        for pair in log.windows(2) {
            prop_assert_eq!(pair[1].prior_before, pair[0].posterior_after);
        }
        let last = log.last().map_or(ledger.base_rate(), |r| r.posterior_after);
        prop_assert_eq!(last, ledger.probability());
    }

    #[test]
    fn prop_equal_likelihoods_neutral(base in 0.0f64..=1.0, l in 0.001f64..=1.0) {
        let mut ledger = BayesianLedger::new(base);
        let posterior = ledger.update("equal", "-", l, l).unwrap();
        prop_assert!((posterior - base).abs() < 1e-9);
        prop_assert_eq!(ledger.evidence()[0].impact, Impact::Neutral);
    }

    #[test]
    fn prop_quality_exclusive_evidence_gives_certainty(
        base in 0.001f64..=1.0,
        q in 0.001f64..=1.0,
    ) {
        let mut ledger = BayesianLedger::new(base);
        prop_assert_eq!(ledger.update("exclusive", "-", q, 0.0), Some(1.0));
    }

    #[test]
    fn prop_average_exclusive_evidence_gives_zero(base in 0.0f64..0.999, a in 0.001f64..=1.0) {
        let mut ledger = BayesianLedger::new(base);
        prop_assert_eq!(ledger.update("disqualifying", "-", 0.0, a), Some(0.0));
    }

    #[test]
    fn prop_double_zero_is_noop(base in 0.0f64..=1.0, updates in update_sequence()) {
        let mut ledger = BayesianLedger::new(base);
        for (i, (q, a)) in updates.iter().enumerate() {
            ledger.update(format!("e{i}"), "-", *q, *a);
        }
        let (len, p) = (ledger.len(), ledger.probability());
        prop_assert!(ledger.update("both zero", "-", 0.0, 0.0).is_none());
        prop_assert_eq!(ledger.len(), len);
        prop_assert_eq!(ledger.probability(), p);
    }

    #[test]
    fn prop_rules_keep_probability_bounded(
        growth in prop::option::of(-50.0f64..80.0),
        benchmark in prop::option::of(-10.0f64..40.0),
        roe in prop::option::of(-20.0f64..60.0),
        pe in prop::option::of(-10.0f64..120.0),
        median in prop::option::of(-5.0f64..60.0),
        peg in prop::option::of(-2.0f64..5.0),
        dividend_yield in prop::option::of(0.0f64..10.0),
    ) {
        let metrics = MetricsSnapshot {
            growth_3y: growth,
            growth_benchmark: benchmark,
            roe,
            pe,
            peer_median_pe: median,
            peg,
            dividend_yield,
        };
        let mut ledger = BayesianLedger::new(0.10);
        let rejected = MetricEvaluator::evaluate(&metrics, &mut ledger);
        prop_assert!(rejected.is_empty(), "authored rules never degenerate: {:?}", rejected);
        prop_assert!((0.0..=1.0).contains(&ledger.probability()));
        prop_assert!(ledger.len() <= 7);
    }
}
