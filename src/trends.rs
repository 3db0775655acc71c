use crate::derived::total_cost_to_click;
use crate::error::Result;
use crate::extract::extract_kind;
use crate::metric::MetricKind;
use crate::snapshot::BenchmarkSnapshot;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ReportResult {
    /// `cpc` is the Google Ads figure alone; `ctc` spans all channels.
    Found { industry: String, cpc: f64, ctc: f64 },
    NotFound { industry: String },
    Unavailable,
}

impl fmt::Display for ReportResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportResult::Found { industry, cpc, ctc } => {
                writeln!(f, "Trends for {}:", industry)?;
                writeln!(f, "CPC: {:.2}", cpc)?;
                write!(f, "CTC: {:.2}", ctc)
            }
            ReportResult::NotFound { industry } => {
                write!(f, "No specific trends found for the industry '{}'.", industry)
            }
            ReportResult::Unavailable => {
                write!(f, "Unable to fetch trends at this time. Please try again later.")
            }
        }
    }
}

/// Presence is decided by the Google Ads CPC table only. The cost to click
/// is computed first, so a broken table fails every query alike.
pub fn report(snapshot: &BenchmarkSnapshot, industry: &str) -> Result<ReportResult> {
    let ctc = total_cost_to_click(snapshot, industry)?;
    let Some(cpc) = extract_kind(snapshot, MetricKind::GoogleAdsCpc)?.get(industry) else {
        return Ok(ReportResult::NotFound {
            industry: industry.to_string(),
        });
    };

    Ok(ReportResult::Found {
        industry: industry.to_string(),
        cpc,
        ctc,
    })
}

/// Answers trend queries from the startup snapshot, if there is one.
///
/// Failures never reach the caller: a missing snapshot or a broken table
/// both come back as [`ReportResult::Unavailable`].
#[derive(Debug, Clone)]
pub struct TrendsReporter {
    snapshot: Option<Arc<BenchmarkSnapshot>>,
}

impl TrendsReporter {
    pub fn new(snapshot: Arc<BenchmarkSnapshot>) -> Self {
        Self {
            snapshot: Some(snapshot),
        }
    }

    /// Reporter for a process whose startup fetch failed.
    pub fn unavailable() -> Self {
        Self { snapshot: None }
    }

    pub fn snapshot(&self) -> Option<&BenchmarkSnapshot> {
        self.snapshot.as_deref()
    }

    pub fn report(&self, industry: &str) -> ReportResult {
        let Some(snapshot) = self.snapshot.as_deref() else {
            log::error!("Trends requested for '{}' but no snapshot is loaded", industry);
            return ReportResult::Unavailable;
        };

        match report(snapshot, industry) {
            Ok(result) => result,
            Err(e) => {
                log::error!("Error fetching trends for '{}': {}", industry, e);
                ReportResult::Unavailable
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{retail_snapshot, snapshot_with};

    #[test]
    fn found_reports_google_cpc_and_total_ctc() {
        let result = report(&retail_snapshot(), "Retail").unwrap();
        assert_eq!(
            result,
            ReportResult::Found {
                industry: "Retail".into(),
                cpc: 2.5,
                ctc: 525.0
            }
        );
        assert_eq!(result.to_string(), "Trends for Retail:\nCPC: 2.50\nCTC: 525.00");
    }

    #[test]
    fn unknown_industry_is_not_found() {
        let result = report(&retail_snapshot(), "Unknown").unwrap();
        assert_eq!(result, ReportResult::NotFound { industry: "Unknown".into() });
        assert_eq!(
            result.to_string(),
            "No specific trends found for the industry 'Unknown'."
        );
    }

    #[test]
    fn presence_only_checks_google_cpc() {
        let snapshot = snapshot_with(&[
            (MetricKind::FacebookAdsCpc, "Legal", "$3.00"),
            (MetricKind::GoogleAdsClicks, "Legal", "10"),
        ]);
        assert_eq!(
            report(&snapshot, "Legal").unwrap(),
            ReportResult::NotFound { industry: "Legal".into() }
        );
    }

    #[test]
    fn broken_table_fails_present_and_absent_industries() {
        let snapshot = snapshot_with(&[
            (MetricKind::GoogleAdsCpc, "Retail", "$2.50"),
            (MetricKind::GoogleAdsClicks, "Retail", "1.2.3"),
        ]);
        assert!(report(&snapshot, "Retail").is_err());
        assert!(report(&snapshot, "Unknown").is_err());

        let reporter = TrendsReporter::new(Arc::new(snapshot));
        assert_eq!(reporter.report("Retail"), ReportResult::Unavailable);
        assert_eq!(reporter.report("Unknown"), ReportResult::Unavailable);
    }

    #[test]
    fn reporter_without_snapshot_is_unavailable() {
        let reporter = TrendsReporter::unavailable();
        assert_eq!(reporter.report("Retail"), ReportResult::Unavailable);
        assert_eq!(
            reporter.report("Retail").to_string(),
            "Unable to fetch trends at this time. Please try again later."
        );
    }

    #[test]
    fn reporter_swallows_extraction_errors() {
        let short = TrendsReporter::new(Arc::new(BenchmarkSnapshot::from_tables(Vec::new())));
        assert_eq!(short.report("Retail"), ReportResult::Unavailable);

        let broken = snapshot_with(&[(MetricKind::GoogleAdsCpc, "Retail", "1.2.3")]);
        let reporter = TrendsReporter::new(Arc::new(broken));
        assert_eq!(reporter.report("Retail"), ReportResult::Unavailable);
    }

    #[test]
    fn reporter_delegates_to_snapshot() {
        let reporter = TrendsReporter::new(Arc::new(retail_snapshot()));
        assert!(matches!(reporter.report("Retail"), ReportResult::Found { .. }));
        assert!(reporter.snapshot().is_some());
    }
}
