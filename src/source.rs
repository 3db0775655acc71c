use crate::config::BotConfig;
use crate::error::{Error, Result};
use crate::selector::TableSelector;
use crate::snapshot::{parse_snapshot, BenchmarkSnapshot};
use async_trait::async_trait;
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;

/// Produces the benchmark snapshot. Called once per process.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    fn describe(&self) -> String;
    async fn fetch(&self) -> Result<BenchmarkSnapshot>;
}

/// Single best-effort GET of the live benchmarks page.
pub struct HttpSnapshotSource {
    url: String,
    selector: TableSelector,
    client: Client,
}

impl HttpSnapshotSource {
    pub fn new(url: impl Into<String>, selector: TableSelector, timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            url: url.into(),
            selector,
            client,
        })
    }

    pub fn from_config(config: &BotConfig) -> Result<Self> {
        Self::new(
            config.source_url.clone(),
            config.table_selector.clone(),
            Duration::from_secs(config.timeout_secs),
            &config.user_agent,
        )
    }
}

#[async_trait]
impl SnapshotSource for HttpSnapshotSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<BenchmarkSnapshot> {
        log::info!("Fetching benchmarks: {}", self.url);

        let res = self.client.get(&self.url).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(Error::Fetch(format!("{} returned HTTP {}", self.url, status)));
        }

        let html = res.text().await?;
        log::debug!("HTML length: {} bytes", html.len());

        let snapshot = parse_snapshot(&html, &self.selector, &self.url);
        log::info!("Loaded {} benchmark table(s) from {}", snapshot.len(), self.url);
        Ok(snapshot)
    }
}

/// Reads a saved copy of the benchmarks page from disk.
pub struct HtmlFileSource {
    path: PathBuf,
    selector: TableSelector,
}

impl HtmlFileSource {
    pub fn new(path: impl Into<PathBuf>, selector: TableSelector) -> Self {
        Self {
            path: path.into(),
            selector,
        }
    }
}

#[async_trait]
impl SnapshotSource for HtmlFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<BenchmarkSnapshot> {
        let html = tokio::fs::read_to_string(&self.path).await?;
        let source = self.describe();
        let snapshot = parse_snapshot(&html, &self.selector, &source);
        log::info!("Loaded {} benchmark table(s) from {}", snapshot.len(), source);
        Ok(snapshot)
    }
}
