use crate::metric::{MetricKind, MetricRegistry};
use crate::snapshot::{BenchmarkSnapshot, MetricTable, TableRow};

/// Twelve-table snapshot, empty except for the given (kind, label, raw) rows.
pub fn snapshot_with(rows: &[(MetricKind, &str, &str)]) -> BenchmarkSnapshot {
    let mut tables: Vec<MetricTable> = MetricRegistry::KINDS
        .iter()
        .map(|kind| MetricTable::new(vec!["Industry".into(), kind.to_string()], Vec::new()))
        .collect();

    for (kind, label, raw) in rows {
        tables[kind.table_index()].rows.push(TableRow::new(*label, *raw));
    }
    BenchmarkSnapshot::from_tables(tables)
}

/// Retail figures: Google and Facebook CPC plus Google and Facebook clicks.
pub fn retail_snapshot() -> BenchmarkSnapshot {
    snapshot_with(&[
        (MetricKind::GoogleAdsCpc, "Retail", "$2.50"),
        (MetricKind::FacebookAdsCpc, "Retail", "$1.00"),
        (MetricKind::GoogleAdsClicks, "Retail", "100"),
        (MetricKind::FacebookAdsClicks, "Retail", "50"),
    ])
}
