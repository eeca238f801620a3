//! Row and column resolution over parsed tables.

use moat_core::Target;

use super::number::safe_number;

/// Index of the first header (left to right) containing any of `keywords`,
/// compared case-insensitively, skipping headers that contain any of
/// `exclude`.
///
/// `find_column(&["PEG", "PE"], &["PE"], &["PEG"])` is `Some(1)`.
pub fn find_column<S: AsRef<str>>(
    headers: &[S],
    keywords: &[&str],
    exclude: &[&str],
) -> Option<usize> {
    let keywords: Vec<String> = keywords.iter().map(|k| k.to_uppercase()).collect();
    let exclude: Vec<String> = exclude.iter().map(|e| e.to_uppercase()).collect();

    headers.iter().position(|header| {
        let header = header.as_ref().to_uppercase();
        keywords.iter().any(|k| header.contains(k.as_str()))
            && !exclude.iter().any(|e| header.contains(e.as_str()))
    })
}

/// First row whose cell at `key_column` contains `key`. Rows too short to
/// have that cell are skipped.
pub fn find_row<'a>(rows: &'a [Vec<String>], key_column: usize, key: &str) -> Option<&'a [String]> {
    rows.iter()
        .find(|row| row.get(key_column).is_some_and(|cell| cell.contains(key)))
        .map(Vec::as_slice)
}

/// Median of `value_column` across rows that describe individual securities,
/// i.e. whose second cell is a 6-digit code. Unparseable values are skipped.
pub fn peer_median(rows: &[Vec<String>], value_column: usize) -> Option<f64> {
    let mut values: Vec<f64> = rows
        .iter()
        .filter(|row| row.get(1).is_some_and(|code| Target::is_valid_code(code)))
        .filter_map(|row| row.get(value_column).and_then(|cell| safe_number(cell)))
        .collect();

    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);

    let n = values.len();
    if n % 2 == 0 {
        Some((values[n / 2 - 1] + values[n / 2]) / 2.0)
    } else {
        Some(values[n / 2])
    }
}
