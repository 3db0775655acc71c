pub mod bot;
pub mod config;
pub mod derived;
pub mod error;
pub mod extract;
pub mod faq;
pub mod intake;
pub mod keywords;
pub mod metric;
pub mod normalizer;
pub mod output;
pub mod selector;
pub mod snapshot;
pub mod source;
pub mod trends;

#[cfg(test)]
mod fixtures;

pub use bot::{BotSession, Command};
pub use derived::total_cost_to_click;
pub use error::{Error, Result};
pub use extract::{extract, extract_kind, IndustryMetrics};
pub use faq::{AnswerProvider, FaqResponder, GeminiProvider};
pub use metric::{MetricKind, MetricRegistry};
pub use normalizer::normalize;
pub use snapshot::{BenchmarkSnapshot, MetricTable, TableRow};
pub use source::{HtmlFileSource, HttpSnapshotSource, SnapshotSource};
pub use trends::{ReportResult, TrendsReporter};
