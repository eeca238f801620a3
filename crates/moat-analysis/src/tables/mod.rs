//! Markdown table extraction.
//!
//! Locates a `# <name>` section, parses its pipe-delimited table, and
//! resolves rows and columns by substring match. Every lookup fails soft:
//! a missing section, row, column or number is `None`, never an error.

pub mod lookup;
pub mod number;
pub mod parse;

pub use lookup::{find_column, find_row, peer_median};
pub use number::safe_number;
pub use parse::{extract_table, locate_section, parse_table, ExtractedTable};
