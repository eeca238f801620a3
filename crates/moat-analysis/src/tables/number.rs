//! Lenient numeric cell parsing.

/// Parse a table cell as a number.
///
/// Trims whitespace, treats empty and `--` as missing, strips one trailing
/// `%` and any thousands-separator commas. Anything that still fails to
/// parse, or parses to a non-finite value, is missing.
pub fn safe_number(cell: &str) -> Option<f64> {
    let cell = cell.trim();
    if cell.is_empty() || cell == "--" {
        return None;
    }
    let cell = cell.strip_suffix('%').unwrap_or(cell);
    let cleaned: String = cell.chars().filter(|&c| c != ',').collect();
    cleaned
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}
