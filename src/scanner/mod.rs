//! Probe trait, vulnerability probes, and the scan orchestrator

pub mod sqli;
pub mod xss;

use crate::crawler::Crawler;
use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{Finding, ScanConfig};
use async_trait::async_trait;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use tracing::info;

/// Trait that all vulnerability probes must implement
#[async_trait]
pub trait Probe: Send + Sync {
    /// Returns the probe name
    fn name(&self) -> &str;

    /// Returns a description of what this probe checks
    fn description(&self) -> &str;

    /// Probes a single URL and returns any findings
    async fn probe(&self, client: &HttpClient, url: &str) -> Vec<Finding>;
}

/// Orchestrates the crawl-then-probe pipeline
pub struct ScanEngine {
    probes: Vec<Arc<dyn Probe>>,
}

impl ScanEngine {
    /// Creates a new ScanEngine with no registered probes
    pub fn new() -> Self {
        Self { probes: Vec::new() }
    }

    /// Creates a ScanEngine with the default probes registered
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.register(Arc::new(xss::XssProbe));
        engine.register(Arc::new(sqli::SqliProbe));
        engine
    }

    /// Registers a new probe
    pub fn register(&mut self, probe: Arc<dyn Probe>) {
        self.probes.push(probe);
    }

    /// Returns information about all registered probes
    pub fn list_probes(&self) -> Vec<(&str, &str)> {
        self.probes
            .iter()
            .map(|p| (p.name(), p.description()))
            .collect()
    }

    /// Runs a full scan: crawl from the target, then probe every visited URL.
    ///
    /// Crawling completes entirely before probing begins; probes run one URL
    /// and one payload at a time. Network failures inside the crawler and the
    /// probes are swallowed locally, so a scan either returns the accumulated
    /// findings or fails hard on a non-network error (client construction).
    /// An unreachable target yields an empty findings list, indistinguishable
    /// from a clean one.
    pub async fn scan(&self, config: &ScanConfig) -> Result<Vec<Finding>> {
        let client = HttpClient::from_config(config)?;

        info!("Starting crawl on {}", config.target);
        let crawler = Crawler::new(&client, config);
        let visited = crawler.crawl(&config.target).await;

        let pb = ProgressBar::new(visited.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("  {spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );

        let mut findings = Vec::new();
        for url in &visited {
            pb.set_message(format!("Probing {url}"));
            for probe in &self.probes {
                findings.extend(probe.probe(&client, url).await);
            }
            pb.inc(1);
        }
        pb.finish_and_clear();

        info!(
            "Scan complete: {} findings across {} URLs ({} requests)",
            findings.len(),
            visited.len(),
            client.request_count()
        );

        Ok(findings)
    }
}

impl Default for ScanEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}
