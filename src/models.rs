//! Core data models for VulnX

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of vulnerability a probe can report
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum VulnKind {
    #[serde(rename = "XSS")]
    Xss,
    #[serde(rename = "SQL Injection")]
    SqlInjection,
}

impl fmt::Display for VulnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VulnKind::Xss => write!(f, "XSS"),
            VulnKind::SqlInjection => write!(f, "SQL Injection"),
        }
    }
}

/// One reported potential vulnerability, tagged by kind and associated URL.
///
/// For XSS the URL is the probed base URL; for SQL injection it is the full
/// test URL including the payload that triggered the match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Finding {
    #[serde(rename = "type")]
    pub kind: VulnKind,
    pub url: String,
}

impl Finding {
    pub fn new(kind: VulnKind, url: impl Into<String>) -> Self {
        Self {
            kind,
            url: url.into(),
        }
    }
}

/// Configuration for a scan session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Target URL: crawl seed and same-origin prefix filter
    pub target: String,
    /// Maximum crawl depth (0 = seed page only)
    pub max_depth: u32,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            target: String::new(),
            max_depth: 1,
            timeout_secs: 5,
            user_agent: "VulnX-Scanner/0.1.0".to_string(),
        }
    }
}

/// A persisted scan history row
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ScanRecord {
    pub id: String,
    /// Target URL the scan was run against
    pub url: String,
    /// Scan mode (currently always "basic")
    pub mode: String,
    /// Completion time, RFC 3339
    pub ts: DateTime<Utc>,
    /// Findings serialized as a JSON array
    pub result_json: String,
}
