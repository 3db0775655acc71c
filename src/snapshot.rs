//! The one-time capture of the benchmarks page.
//!
//! A [`BenchmarkSnapshot`] is built once at startup and only ever read
//! afterwards; every query borrows it.

use crate::metric::MetricRegistry;
use crate::selector::TableSelector;
use chrono::{DateTime, Utc};
use select::document::Document;
use select::predicate::Name;
use serde::Serialize;

/// A data row: column 0 is the industry label, column 1 the raw figure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub label: String,
    pub raw_value: String,
}

impl TableRow {
    pub fn new(label: impl Into<String>, raw_value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            raw_value: raw_value.into(),
        }
    }

    /// Builds a row from trimmed cell texts. Rows with fewer than two cells
    /// carry no figure and yield `None`; cells past the second are ignored.
    pub fn from_cells(cells: &[String]) -> Option<Self> {
        match cells {
            [label, raw_value, ..] => Some(Self::new(label.trim(), raw_value.trim())),
            _ => None,
        }
    }
}

/// One table section of the page. The header row is kept apart from the
/// data rows.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MetricTable {
    pub header: Vec<String>,
    pub rows: Vec<TableRow>,
    pub skipped_rows: usize,
}

impl MetricTable {
    pub fn new(header: Vec<String>, rows: Vec<TableRow>) -> Self {
        Self {
            header,
            rows,
            skipped_rows: 0,
        }
    }

    /// Splits raw cell rows into header and data. The first row is always
    /// the header, whatever its shape.
    pub fn from_cell_rows(cell_rows: Vec<Vec<String>>) -> Self {
        let mut iter = cell_rows.into_iter();
        let header = iter.next().unwrap_or_default();

        let mut rows = Vec::new();
        let mut skipped_rows = 0;
        for cells in iter {
            match TableRow::from_cells(&cells) {
                Some(row) => rows.push(row),
                None => {
                    log::warn!("Skipping malformed row with {} cell(s): {:?}", cells.len(), cells);
                    skipped_rows += 1;
                }
            }
        }

        Self {
            header,
            rows,
            skipped_rows,
        }
    }

    /// Number of rows the section had on the page, header included.
    pub fn row_count(&self) -> usize {
        self.rows.len() + self.skipped_rows + 1
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkSnapshot {
    tables: Vec<MetricTable>,
    pub source: String,
    pub fetched_at: DateTime<Utc>,
}

impl BenchmarkSnapshot {
    pub fn new(tables: Vec<MetricTable>, source: impl Into<String>) -> Self {
        Self {
            tables,
            source: source.into(),
            fetched_at: Utc::now(),
        }
    }

    /// Snapshot without a real origin, for building synthetic data.
    pub fn from_tables(tables: Vec<MetricTable>) -> Self {
        Self::new(tables, "memory")
    }

    pub fn tables(&self) -> &[MetricTable] {
        &self.tables
    }

    pub fn table(&self, index: usize) -> Option<&MetricTable> {
        self.tables.get(index)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Whether every registered metric kind has a table to read from.
    pub fn covers_registry(&self) -> bool {
        self.tables.len() >= MetricRegistry::table_count()
    }
}

/// Parses a benchmarks page into a snapshot: every element matching
/// `selector` becomes one table, in document order, and each of its `tr`
/// rows a list of trimmed `td` texts.
pub fn parse_snapshot(html: &str, selector: &TableSelector, source: &str) -> BenchmarkSnapshot {
    let document = Document::from(html);

    let tables: Vec<MetricTable> = document
        .find(selector)
        .map(|section| {
            let cell_rows = section
                .find(Name("tr"))
                .map(|row| {
                    row.find(Name("td"))
                        .map(|cell| cell.text().trim().to_string())
                        .collect::<Vec<_>>()
                })
                .collect::<Vec<_>>();
            MetricTable::from_cell_rows(cell_rows)
        })
        .collect();

    log::debug!("Selector '{}' matched {} table(s) in {}", selector, tables.len(), source);
    for (index, table) in tables.iter().enumerate() {
        log::debug!("Table {}: {} data row(s)", index, table.rows.len());
    }

    let snapshot = BenchmarkSnapshot::new(tables, source);
    if !snapshot.covers_registry() {
        log::warn!(
            "Snapshot from {} has {} table(s), expected at least {}",
            source,
            snapshot.len(),
            MetricRegistry::table_count()
        );
    }
    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <table><tbody>
            <tr><td>Industry</td><td>Google Ads CPC</td></tr>
            <tr><td> Retail </td><td> $2.50 </td></tr>
            <tr><td>Legal</td><td>$6.10</td></tr>
          </tbody></table>
          <table><tbody>
            <tr><th>Industry</th><th>Clicks</th></tr>
            <tr><td>Retail</td></tr>
            <tr><td>Retail</td><td>1.2K</td><td>ignored</td></tr>
          </tbody></table>
        </body></html>
    "#;

    #[test]
    fn parses_sections_in_document_order() {
        let snapshot = parse_snapshot(PAGE, &TableSelector::default(), "test");
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.source, "test");

        let first = snapshot.table(0).unwrap();
        assert_eq!(first.header, vec!["Industry", "Google Ads CPC"]);
        assert_eq!(
            first.rows,
            vec![TableRow::new("Retail", "$2.50"), TableRow::new("Legal", "$6.10")]
        );
        assert_eq!(first.row_count(), 3);
    }

    #[test]
    fn header_without_td_cells_is_still_the_header() {
        let snapshot = parse_snapshot(PAGE, &TableSelector::default(), "test");
        let second = snapshot.table(1).unwrap();

        assert!(second.header.is_empty());
        assert_eq!(second.skipped_rows, 1);
        assert_eq!(second.rows, vec![TableRow::new("Retail", "1.2K")]);
        assert_eq!(second.row_count(), 3);
    }

    #[test]
    fn short_page_does_not_cover_registry() {
        let snapshot = parse_snapshot(PAGE, &TableSelector::default(), "test");
        assert!(!snapshot.covers_registry());
        assert!(parse_snapshot("<p>nothing</p>", &TableSelector::default(), "test").is_empty());
    }

    const LAYOUT_PAGE: &str = r#"
        <html><body>
          <table><tr><td>nav</td><td>menu</td></tr></table>
          <div id="benchmarks">
            <table><tbody>
              <tr><td>Industry</td><td>Google Ads impressions</td></tr>
              <tr><td>Retail</td><td>1.2M</td></tr>
            </tbody></table>
          </div>
        </body></html>
    "#;

    #[test]
    fn table_without_tbody_still_yields_a_section() {
        let snapshot = parse_snapshot(LAYOUT_PAGE, &TableSelector::default(), "test");
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.table(0).unwrap().header, vec!["nav", "menu"]);
        assert_eq!(snapshot.table(1).unwrap().rows, vec![TableRow::new("Retail", "1.2M")]);
    }

    #[test]
    fn scoped_selector_skips_layout_tables() {
        let selector = TableSelector::default().within("benchmarks");
        let snapshot = parse_snapshot(LAYOUT_PAGE, &selector, "test");
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.table(0).unwrap().rows, vec![TableRow::new("Retail", "1.2M")]);
    }

    #[test]
    fn empty_section_has_no_rows() {
        let table = MetricTable::from_cell_rows(Vec::new());
        assert!(table.header.is_empty());
        assert!(table.rows.is_empty());
    }
}
