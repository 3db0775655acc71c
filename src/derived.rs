use crate::error::Result;
use crate::extract::extract_kind;
use crate::metric::{MetricKind, MetricRegistry};
use crate::snapshot::BenchmarkSnapshot;

/// Sum of `industry`'s figures across `kinds`; tables without the industry
/// add nothing.
pub fn channel_sum(snapshot: &BenchmarkSnapshot, kinds: &[MetricKind], industry: &str) -> Result<f64> {
    let mut total = 0.0;
    for kind in kinds {
        total += extract_kind(snapshot, *kind)?.get_or_zero(industry);
    }
    Ok(total)
}

/// Composite cost to click: CPC summed over all channels times clicks summed
/// over all channels.
pub fn total_cost_to_click(snapshot: &BenchmarkSnapshot, industry: &str) -> Result<f64> {
    let cpc = channel_sum(snapshot, &MetricRegistry::CPC, industry)?;
    let clicks = channel_sum(snapshot, &MetricRegistry::CLICKS, industry)?;
    log::debug!("{}: CPC sum {}, clicks sum {}", industry, cpc, clicks);
    Ok(cpc * clicks)
}
