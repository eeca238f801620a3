//! Sequential Bayesian evidence ledger.
//!
//! Each evidence item is folded in with a full Bayes update whose prior is
//! the previous posterior. This treats evidence items as conditionally
//! independent given the hypothesis; rule order is therefore part of the
//! observable result and must not be changed.

pub mod bayes;
pub mod types;

pub use bayes::BayesianLedger;
pub use types::{EvidenceRecord, Impact, LikelihoodRatio};
