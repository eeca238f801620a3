//! Moat analysis engine.
//!
//! Data flows one way: source text → [`tables`] → [`evaluator`] →
//! [`ledger::BayesianLedger::update`] (once per evidence item, in rule order)
//! → [`report`]. [`pipeline`] wires the stages together for one target.

pub mod evaluator;
pub mod io;
pub mod ledger;
pub mod pipeline;
pub mod report;
pub mod tables;

pub use evaluator::MetricsSnapshot;
pub use ledger::{BayesianLedger, EvidenceRecord, Impact, LikelihoodRatio};
pub use pipeline::{analyze, analyze_batch, Analysis, AnalysisOptions};
pub use report::{parse_trace, render_json, render_markdown, Recommendation, TraceRow};
