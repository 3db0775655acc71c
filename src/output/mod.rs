use crate::error::Result;
use crate::extract::extract_kind;
use crate::metric::MetricKind;
use crate::snapshot::BenchmarkSnapshot;
use async_trait::async_trait;
use serde_json::{json, Value};

pub mod console;
pub mod json;

/// Destination for exported benchmark records.
#[async_trait]
pub trait OutputHandler: Send + Sync {
    async fn write(&mut self, record: Value) -> Result<()>;
    async fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Writes one record per (kind, industry) pair and closes the handler.
/// Returns the number of records written.
pub async fn export_metrics(
    snapshot: &BenchmarkSnapshot,
    kinds: &[MetricKind],
    handler: &mut dyn OutputHandler,
) -> Result<usize> {
    let mut written = 0;
    for kind in kinds {
        let metrics = extract_kind(snapshot, *kind)?;
        log::debug!("Exporting {} row(s) of {}", metrics.len(), kind);

        for (industry, value) in metrics.iter() {
            handler
                .write(json!({
                    "metric": kind,
                    "table": kind.table_index(),
                    "industry": industry,
                    "value": value,
                }))
                .await?;
            written += 1;
        }
    }
    handler.close().await?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::retail_snapshot;

    #[derive(Default)]
    struct Collect {
        records: Vec<Value>,
        closed: bool,
    }

    #[async_trait]
    impl OutputHandler for Collect {
        async fn write(&mut self, record: Value) -> Result<()> {
            self.records.push(record);
            Ok(())
        }

        async fn close(&mut self) -> Result<()> {
            self.closed = true;
            Ok(())
        }
    }

    #[tokio::test]
    async fn exports_requested_kinds() {
        let mut sink = Collect::default();
        let written = export_metrics(
            &retail_snapshot(),
            &[MetricKind::GoogleAdsCpc, MetricKind::LinkedinAdsCpc],
            &mut sink,
        )
        .await
        .unwrap();

        assert_eq!(written, 1);
        assert!(sink.closed);
        assert_eq!(
            sink.records[0],
            json!({"metric": "google-ads-cpc", "table": 9, "industry": "Retail", "value": 2.5})
        );
    }

    #[tokio::test]
    async fn short_snapshot_fails_export() {
        let mut sink = Collect::default();
        let empty = BenchmarkSnapshot::from_tables(Vec::new());
        assert!(export_metrics(&empty, &[MetricKind::GoogleAdsImpressions], &mut sink).await.is_err());
        assert!(!sink.closed);
    }
}
