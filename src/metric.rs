use serde::{Deserialize, Serialize};
use std::fmt;

/// Advertising channel a benchmark table reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Channel {
    GoogleAds,
    Facebook,
    Linkedin,
}

/// What a benchmark table measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Measure {
    Impressions,
    Clicks,
    Ctr,
    Cpc,
}

/// One of the twelve (channel, measure) tables on the benchmarks page.
///
/// The page lists them grouped by measure, one table per channel, so the
/// declaration order here is also the table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum MetricKind {
    GoogleAdsImpressions,
    FacebookImpressions,
    LinkedinImpressions,
    GoogleAdsClicks,
    FacebookAdsClicks,
    LinkedinAdsClicks,
    GoogleAdsCtr,
    FacebookAdsCtr,
    LinkedinAdsCtr,
    GoogleAdsCpc,
    FacebookAdsCpc,
    LinkedinAdsCpc,
}

impl MetricKind {
    pub fn channel(self) -> Channel {
        use MetricKind::*;
        match self {
            GoogleAdsImpressions | GoogleAdsClicks | GoogleAdsCtr | GoogleAdsCpc => {
                Channel::GoogleAds
            }
            FacebookImpressions | FacebookAdsClicks | FacebookAdsCtr | FacebookAdsCpc => {
                Channel::Facebook
            }
            LinkedinImpressions | LinkedinAdsClicks | LinkedinAdsCtr | LinkedinAdsCpc => {
                Channel::Linkedin
            }
        }
    }

    pub fn measure(self) -> Measure {
        use MetricKind::*;
        match self {
            GoogleAdsImpressions | FacebookImpressions | LinkedinImpressions => {
                Measure::Impressions
            }
            GoogleAdsClicks | FacebookAdsClicks | LinkedinAdsClicks => Measure::Clicks,
            GoogleAdsCtr | FacebookAdsCtr | LinkedinAdsCtr => Measure::Ctr,
            GoogleAdsCpc | FacebookAdsCpc | LinkedinAdsCpc => Measure::Cpc,
        }
    }

    pub fn table_index(self) -> usize {
        MetricRegistry::index_of(self)
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let channel = match self.channel() {
            Channel::GoogleAds => "Google Ads",
            Channel::Facebook => "Facebook",
            Channel::Linkedin => "LinkedIn",
        };
        let measure = match self.measure() {
            Measure::Impressions => "impressions",
            Measure::Clicks => "clicks",
            Measure::Ctr => "CTR",
            Measure::Cpc => "CPC",
        };
        write!(f, "{} {}", channel, measure)
    }
}

/// Fixed binding of every [`MetricKind`] to its table index in a snapshot.
pub struct MetricRegistry;

impl MetricRegistry {
    /// All kinds, position `i` holding the kind bound to table `i`.
    pub const KINDS: [MetricKind; 12] = [
        MetricKind::GoogleAdsImpressions,
        MetricKind::FacebookImpressions,
        MetricKind::LinkedinImpressions,
        MetricKind::GoogleAdsClicks,
        MetricKind::FacebookAdsClicks,
        MetricKind::LinkedinAdsClicks,
        MetricKind::GoogleAdsCtr,
        MetricKind::FacebookAdsCtr,
        MetricKind::LinkedinAdsCtr,
        MetricKind::GoogleAdsCpc,
        MetricKind::FacebookAdsCpc,
        MetricKind::LinkedinAdsCpc,
    ];

    pub const CLICKS: [MetricKind; 3] = [
        MetricKind::GoogleAdsClicks,
        MetricKind::FacebookAdsClicks,
        MetricKind::LinkedinAdsClicks,
    ];

    pub const CPC: [MetricKind; 3] = [
        MetricKind::GoogleAdsCpc,
        MetricKind::FacebookAdsCpc,
        MetricKind::LinkedinAdsCpc,
    ];

    pub fn index_of(kind: MetricKind) -> usize {
        use MetricKind::*;
        match kind {
            GoogleAdsImpressions => 0,
            FacebookImpressions => 1,
            LinkedinImpressions => 2,
            GoogleAdsClicks => 3,
            FacebookAdsClicks => 4,
            LinkedinAdsClicks => 5,
            GoogleAdsCtr => 6,
            FacebookAdsCtr => 7,
            LinkedinAdsCtr => 8,
            GoogleAdsCpc => 9,
            FacebookAdsCpc => 10,
            LinkedinAdsCpc => 11,
        }
    }

    pub fn kind_at(index: usize) -> Option<MetricKind> {
        Self::KINDS.get(index).copied()
    }

    /// Number of tables a snapshot needs for every kind to resolve.
    pub fn table_count() -> usize {
        Self::KINDS.len()
    }
}
