//! Report rendering: a pure, order-preserving view of a finished analysis.

pub mod json;
pub mod markdown;
pub mod recommendation;
pub mod trace;

pub use json::render_json;
pub use markdown::render_markdown;
pub use recommendation::Recommendation;
pub use trace::{parse_trace, ParsedTrace, TraceRow};
