//! Section location and pipe-table parsing.

/// Header labels and data rows of one section's table.
///
/// Transient: built per section, dropped once metrics are pulled out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ExtractedTable {
    /// True when the section had no table at all (no header line).
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }
}

/// Find the body of the section headed by a line that is exactly `# <section_name>`.
///
/// The body runs to the next line starting with `# ` or to end of text.
/// Deeper headings (`## ...`) do not end a section.
pub fn locate_section<'a>(text: &'a str, section_name: &str) -> Option<&'a str> {
    let heading = format!("# {section_name}");
    let mut offset = 0;
    let mut body_start = None;

    for line in text.split_inclusive('\n') {
        match body_start {
            None if line.trim_end() == heading => body_start = Some(offset + line.len()),
            Some(start) if line.starts_with("# ") => return Some(&text[start..offset]),
            _ => {}
        }
        offset += line.len();
    }

    body_start.map(|start| &text[start..])
}

/// Parse the pipe-delimited table inside a section body.
///
/// The first `|` line is the header; later lines containing `---` are
/// separators. Data rows have the empty edge cells produced by leading and
/// trailing pipes stripped, and are kept only if more than two cells remain.
pub fn parse_table(section_text: &str) -> ExtractedTable {
    let mut table_lines = section_text
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with('|'));

    let Some(header_line) = table_lines.next() else {
        return ExtractedTable::default();
    };

    let headers = header_line
        .split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(String::from)
        .collect();

    let rows = table_lines
        .filter(|line| !line.contains("---"))
        .filter_map(split_row)
        .collect();

    ExtractedTable { headers, rows }
}

/// Convenience: locate + parse. A missing section yields an empty table.
pub fn extract_table(text: &str, section_name: &str) -> ExtractedTable {
    match locate_section(text, section_name) {
        Some(body) => parse_table(body),
        None => {
            tracing::debug!(section = section_name, "section not found");
            ExtractedTable::default()
        }
    }
}

fn split_row(line: &str) -> Option<Vec<String>> {
    let cells: Vec<&str> = line.split('|').map(str::trim).collect();

    let mut cells = &cells[..];
    if line.starts_with('|') {
        cells = &cells[1..];
    }
    if line.ends_with('|') && !cells.is_empty() {
        cells = &cells[..cells.len() - 1];
    }

    if cells.len() <= 2 {
        return None;
    }
    Some(cells.iter().map(|c| c.to_string()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: &str = "\
# 成长性_czxbj
some prose
| 排名 | 代码 | 简称 | 3年复合 |
| --- | --- | --- | --- |
| 1 | 600519 | 贵州茅台 | 18.5% |
| 2 | 000858 | 五粮液 | 12.1% |

## notes inside the section
# 杜邦分析_dbfxbj
| 排名 | 代码 | ROE |
| 1 | 600519 | 30.2 |
";

    #[test]
    fn test_locate_section_stops_at_next_top_level_heading() {
        let body = locate_section(REPORT, "成长性_czxbj").unwrap();
        assert!(body.contains("贵州茅台"));
        assert!(body.contains("## notes inside the section"));
        assert!(!body.contains("ROE"));
    }

    #[test]
    fn test_locate_last_section_runs_to_end() {
        let body = locate_section(REPORT, "杜邦分析_dbfxbj").unwrap();
        assert!(body.contains("30.2"));
    }

    #[test]
    fn test_locate_requires_exact_heading() {
        assert!(locate_section(REPORT, "成长性").is_none());
        assert!(locate_section(REPORT, "notes inside the section").is_none());
    }

    #[test]
    fn test_parse_table_headers_and_rows() {
        let table = extract_table(REPORT, "成长性_czxbj");
        assert_eq!(table.headers, vec!["排名", "代码", "简称", "3年复合"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0], vec!["1", "600519", "贵州茅台", "18.5%"]);
    }

    #[test]
    fn test_table_without_separator() {
        let table = extract_table(REPORT, "杜邦分析_dbfxbj");
        assert_eq!(table.headers, vec!["排名", "代码", "ROE"]);
        assert_eq!(table.rows, vec![vec!["1", "600519", "30.2"]]);
    }

    #[test]
    fn test_missing_section_is_empty_table() {
        let table = extract_table(REPORT, "分红_fhrzgl");
        assert!(table.is_empty());
    }

    #[test]
    fn test_section_without_table() {
        let table = parse_table("just text\nno pipes here\n");
        assert!(table.is_empty());
    }

    #[test]
    fn test_empty_cells_preserved_inside_row() {
        let table = parse_table("| a | b | c |\n| x |  | z |\n");
        assert_eq!(table.rows, vec![vec!["x", "", "z"]]);
    }

    #[test]
    fn test_narrow_rows_dropped() {
        let table = parse_table("| a | b | c |\n| lonely |\n| x | y |\n| 1 | 2 | 3 |\n");
        assert_eq!(table.rows, vec![vec!["1", "2", "3"]]);
    }
}
