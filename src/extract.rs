use crate::error::{Error, Result};
use crate::metric::MetricKind;
use crate::normalizer::normalize;
use crate::snapshot::BenchmarkSnapshot;
use serde::Serialize;
use std::collections::BTreeMap;

/// Normalized figures of one table, keyed by industry label as scraped.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct IndustryMetrics {
    values: BTreeMap<String, f64>,
}

impl IndustryMetrics {
    pub fn get(&self, industry: &str) -> Option<f64> {
        self.values.get(industry).copied()
    }

    /// Value for `industry`, with a missing label counting as zero.
    pub fn get_or_zero(&self, industry: &str) -> f64 {
        self.get(industry).unwrap_or(0.0)
    }

    pub fn contains(&self, industry: &str) -> bool {
        self.values.contains_key(industry)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl FromIterator<(String, f64)> for IndustryMetrics {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Reads table `index` of the snapshot into normalized figures.
///
/// `index` is signed so that callers passing through raw positions get an
/// [`Error::OutOfRange`] rather than a wrap-around. A label seen twice keeps
/// its last value.
pub fn extract(snapshot: &BenchmarkSnapshot, index: isize) -> Result<IndustryMetrics> {
    let max = snapshot.len() as isize - 1;
    let table = usize::try_from(index)
        .ok()
        .and_then(|i| snapshot.table(i))
        .ok_or(Error::OutOfRange { index, max })?;

    let mut values = BTreeMap::new();
    for row in &table.rows {
        values.insert(row.label.clone(), normalize(&row.raw_value)?);
    }
    Ok(IndustryMetrics { values })
}

pub fn extract_kind(snapshot: &BenchmarkSnapshot, kind: MetricKind) -> Result<IndustryMetrics> {
    extract(snapshot, kind.table_index() as isize)
}
