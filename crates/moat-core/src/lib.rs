//! Core types, errors, config, tracing, and constants for Moat.
//!
//! Moat turns markdown financial tables into a single "confidence this
//! security is a quality investment" probability plus an evidentiary trace.
//! This crate holds everything the analysis engine shares with its callers.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

pub use types::Target;
