//! Pulls the target's metrics out of the source sections.

use serde::{Deserialize, Serialize};

use moat_core::config::SectionConfig;
use moat_core::errors::{AnalysisResult, ExtractionError};
use moat_core::Target;

use crate::tables::{extract_table, find_column, find_row, peer_median, safe_number, ExtractedTable};

/// Metrics captured for one target. `None` means the value could not be
/// extracted; rules reading it contribute no evidence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// 3-year compound growth rate, percent.
    pub growth_3y: Option<f64>,
    /// Peer median growth, or the industry-average row when no peers qualify.
    pub growth_benchmark: Option<f64>,
    /// Return on equity, percent.
    pub roe: Option<f64>,
    pub pe: Option<f64>,
    pub peer_median_pe: Option<f64>,
    pub peg: Option<f64>,
    /// Dividend yield, percent.
    pub dividend_yield: Option<f64>,
}

/// How to resolve one metric's column: keywords in priority order, headers
/// to skip, and the index used when no header matches.
#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    pub metric: &'static str,
    pub keywords: &'static [&'static str],
    pub exclude: &'static [&'static str],
    pub fallback: usize,
}

pub const GROWTH_COLUMN: ColumnSpec = ColumnSpec {
    metric: "growth_3y",
    keywords: &["3年复合", "基本每股收益"],
    exclude: &[],
    fallback: 3,
};

pub const ROE_COLUMN: ColumnSpec = ColumnSpec {
    metric: "roe",
    keywords: &["ROE", "净资产收益率"],
    exclude: &[],
    fallback: 3,
};

pub const PE_COLUMN: ColumnSpec = ColumnSpec {
    metric: "pe",
    keywords: &["市盈率", "PE"],
    exclude: &["PEG"],
    fallback: 4,
};

pub const PEG_COLUMN: ColumnSpec = ColumnSpec {
    metric: "peg",
    keywords: &["PEG"],
    exclude: &[],
    fallback: 3,
};

pub const DIVIDEND_YIELD_COLUMN: ColumnSpec = ColumnSpec {
    metric: "dividend_yield",
    keywords: &["股息率"],
    exclude: &[],
    fallback: 0,
};

/// Column holding the security code in per-security tables.
const CODE_COLUMN: usize = 1;

/// First-cell label of the industry-average aggregate row.
const INDUSTRY_AVERAGE_LABEL: &str = "行业平均";

/// Extract every metric for `target`. Never fails; each gap is recorded as
/// a non-fatal error and leaves the metric `None`.
pub fn extract_metrics(
    text: &str,
    target: &Target,
    sections: &SectionConfig,
) -> AnalysisResult<MetricsSnapshot> {
    let mut result = AnalysisResult::new(MetricsSnapshot::default());
    let mut reader = Reader { result: &mut result };

    if let Some(table) = reader.open(text, sections.effective_growth()) {
        let name = sections.effective_growth();
        if let Some(col) = reader.column(name, &table, &GROWTH_COLUMN) {
            if let Some(row) = reader.target_row(name, &table, target) {
                let growth = reader.value(name, row, col, GROWTH_COLUMN.metric);
                reader.result.data.growth_3y = growth;
            }
            let benchmark = peer_median(&table.rows, col).or_else(|| {
                find_row(&table.rows, 0, INDUSTRY_AVERAGE_LABEL)
                    .and_then(|row| row.get(col))
                    .and_then(|cell| safe_number(cell))
            });
            reader.result.data.growth_benchmark = benchmark;
        }
    }

    if let Some(table) = reader.open(text, sections.effective_profitability()) {
        let name = sections.effective_profitability();
        if let Some(col) = reader.column(name, &table, &ROE_COLUMN) {
            if let Some(row) = reader.target_row(name, &table, target) {
                let roe = reader.value(name, row, col, ROE_COLUMN.metric);
                reader.result.data.roe = roe;
            }
        }
    }

    if let Some(table) = reader.open(text, sections.effective_valuation()) {
        let name = sections.effective_valuation();
        let pe_col = reader.column(name, &table, &PE_COLUMN);
        let peg_col = reader.column(name, &table, &PEG_COLUMN);

        if let Some(col) = pe_col {
            reader.result.data.peer_median_pe = peer_median(&table.rows, col);
        }
        if let Some(row) = reader.target_row(name, &table, target) {
            if let Some(col) = pe_col {
                let pe = reader.value(name, row, col, PE_COLUMN.metric);
                reader.result.data.pe = pe;
            }
            if let Some(col) = peg_col {
                let peg = reader.value(name, row, col, PEG_COLUMN.metric);
                reader.result.data.peg = peg;
            }
        }
    }

    if let Some(table) = reader.open(text, sections.effective_dividend()) {
        let name = sections.effective_dividend();
        if let Some(col) = reader.column(name, &table, &DIVIDEND_YIELD_COLUMN) {
            // The dividend section describes the target alone; its first row is current.
            match table.rows.first() {
                Some(row) => {
                    let dividend_yield = reader.value(name, row, col, DIVIDEND_YIELD_COLUMN.metric);
                    reader.result.data.dividend_yield = dividend_yield;
                }
                None => reader.missing(name, DIVIDEND_YIELD_COLUMN.metric),
            }
        }
    }

    result
}

/// Records extraction gaps while walking the sections.
struct Reader<'r> {
    result: &'r mut AnalysisResult<MetricsSnapshot>,
}

impl Reader<'_> {
    fn open(&mut self, text: &str, section: &str) -> Option<ExtractedTable> {
        let table = extract_table(text, section);
        if table.is_empty() {
            self.result.add_error(ExtractionError::SectionNotFound {
                section: section.to_string(),
            });
            return None;
        }
        Some(table)
    }

    fn column(
        &mut self,
        section: &str,
        table: &ExtractedTable,
        spec: &ColumnSpec,
    ) -> Option<usize> {
        if let Some(col) = find_column(&table.headers, spec.keywords, spec.exclude) {
            return Some(col);
        }
        if spec.fallback < table.headers.len() {
            tracing::debug!(
                section,
                metric = spec.metric,
                fallback = spec.fallback,
                "column keyword miss, using fallback index"
            );
            return Some(spec.fallback);
        }
        self.result.add_error(ExtractionError::ColumnNotFound {
            section: section.to_string(),
            keywords: spec.keywords.iter().map(|k| k.to_string()).collect(),
        });
        None
    }

    fn target_row<'t>(
        &mut self,
        section: &str,
        table: &'t ExtractedTable,
        target: &Target,
    ) -> Option<&'t [String]> {
        let row = find_row(&table.rows, CODE_COLUMN, &target.code);
        if row.is_none() {
            self.result.add_error(ExtractionError::RowNotFound {
                section: section.to_string(),
                key: target.code.clone(),
            });
        }
        row
    }

    fn value(&mut self, section: &str, row: &[String], col: usize, metric: &str) -> Option<f64> {
        let Some(raw) = row.get(col) else {
            self.missing(section, metric);
            return None;
        };
        let value = safe_number(raw);
        if value.is_none() {
            let raw = raw.trim();
            if raw.is_empty() || raw == "--" {
                self.missing(section, metric);
            } else {
                self.result.add_error(ExtractionError::UnparseableValue {
                    section: section.to_string(),
                    metric: metric.to_string(),
                    raw: raw.to_string(),
                });
            }
        }
        value
    }

    fn missing(&mut self, section: &str, metric: &str) {
        self.result.add_error(ExtractionError::MissingValue {
            section: section.to_string(),
            metric: metric.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moat_core::errors::AnalysisError;

    const SOURCE: &str = "\
# 成长性_czxbj
| 排名 | 代码 | 简称 | 基本每股收益3年复合 | 营收3年复合 |
| --- | --- | --- | --- | --- |
| 行业平均 | | | 9.0% | 8% |
| 1 | 600519 | 贵州茅台 | 18.5% | 16% |
| 2 | 000858 | 五粮液 | 10.0% | 12% |
| 3 | 000568 | 泸州老窖 | 6.0% | 11% |

# 杜邦分析_dbfxbj
| 排名 | 代码 | 简称 | ROE(%) |
| --- | --- | --- | --- |
| 1 | 600519 | 贵州茅台 | 31.2 |

# 估值比较_gzbj
| 排名 | 代码 | 简称 | PEG | 市盈率TTM |
| --- | --- | --- | --- | --- |
| 1 | 600519 | 贵州茅台 | 1.8 | 22.0 |
| 2 | 000858 | 五粮液 | 0.9 | 15.0 |
| 3 | 000568 | 泸州老窖 | -- | 18.0 |

# 分红_fhrzgl
| 股息率 | 分红总额 | 方案 |
| --- | --- | --- |
| 3.4% | 3,300,000 | 10派308 |
| 2.1% | 2,900,000 | 10派259 |
";

    fn target() -> Target {
        Target::new("600519", "贵州茅台")
    }

    #[test]
    fn test_extracts_all_metrics() {
        let result = extract_metrics(SOURCE, &target(), &SectionConfig::default());
        let m = &result.data;
        assert_eq!(m.growth_3y, Some(18.5));
        // Peers 6, 10, 18.5; the industry-average row is not a peer.
        assert_eq!(m.growth_benchmark, Some(10.0));
        assert_eq!(m.roe, Some(31.2));
        assert_eq!(m.pe, Some(22.0));
        assert_eq!(m.peg, Some(1.8));
        assert_eq!(m.peer_median_pe, Some(18.0));
        assert_eq!(m.dividend_yield, Some(3.4));
        assert!(result.is_clean(), "unexpected errors: {:?}", result.errors);
    }

    #[test]
    fn test_missing_target_row_recorded() {
        let target = Target::new("601318", "中国平安");
        let result = extract_metrics(SOURCE, &target, &SectionConfig::default());
        assert_eq!(result.data.growth_3y, None);
        assert_eq!(result.data.roe, None);
        // Table-level values survive without a target row.
        assert_eq!(result.data.peer_median_pe, Some(18.0));
        assert_eq!(result.data.dividend_yield, Some(3.4));
        let row_misses = result
            .errors
            .iter()
            .filter(|e| {
                matches!(e, AnalysisError::Extraction(ExtractionError::RowNotFound { .. }))
            })
            .count();
        assert_eq!(row_misses, 3);
    }

    #[test]
    fn test_missing_value_vs_unparseable() {
        let target = Target::new("000568", "泸州老窖");
        let result = extract_metrics(SOURCE, &target, &SectionConfig::default());
        assert_eq!(result.data.peg, None);
        assert!(result.errors.contains(&AnalysisError::Extraction(ExtractionError::MissingValue {
            section: "估值比较_gzbj".to_string(),
            metric: "peg".to_string(),
        })));

        let source = SOURCE.replace("| 31.2 |", "| n/a |");
        let result = extract_metrics(&source, &self::target(), &SectionConfig::default());
        assert_eq!(result.data.roe, None);
        assert!(result.errors.iter().any(|e| matches!(
            e,
            AnalysisError::Extraction(ExtractionError::UnparseableValue { raw, .. }) if raw == "n/a"
        )));
    }

    #[test]
    fn test_industry_average_fallback_benchmark() {
        let source = "\
# 成长性_czxbj
| 排名 | 代码 | 简称 | 3年复合 |
| 行业平均 | -- | -- | 7.5 |
| 1 | SH600519 | 贵州茅台 | 18.5 |
";
        let result = extract_metrics(source, &target(), &SectionConfig::default());
        assert_eq!(result.data.growth_3y, Some(18.5));
        assert_eq!(result.data.growth_benchmark, Some(7.5));
    }

    #[test]
    fn test_fallback_column_index() {
        let source = "\
# 杜邦分析_dbfxbj
| rank | code | name | return |
| 1 | 600519 | 贵州茅台 | 27 |
";
        let result = extract_metrics(source, &target(), &SectionConfig::default());
        assert_eq!(result.data.roe, Some(27.0));
    }

    #[test]
    fn test_missing_sections_recorded() {
        let result = extract_metrics("no sections at all", &target(), &SectionConfig::default());
        assert_eq!(result.data, MetricsSnapshot::default());
        assert_eq!(result.error_count(), 4);
        assert!(result
            .errors
            .iter()
            .all(|e| matches!(
                e,
                AnalysisError::Extraction(ExtractionError::SectionNotFound { .. })
            )));
    }

    #[test]
    fn test_custom_section_names() {
        let sections = SectionConfig {
            profitability: Some("profitability".to_string()),
            ..Default::default()
        };
        let source = "\
# profitability
| rank | code | name | ROE |
| 1 | 600519 | 贵州茅台 | 12 |
";
        let result = extract_metrics(source, &target(), &sections);
        assert_eq!(result.data.roe, Some(12.0));
    }
}
