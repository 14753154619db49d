//! SQL injection probe

use crate::http::HttpClient;
use crate::models::{Finding, VulnKind};
use async_trait::async_trait;
use tracing::debug;

/// Payloads tried in order. The DROP TABLE entry is a text probe like the
/// others; nothing is ever executed server-side by this tool.
pub const SQLI_PAYLOADS: &[&str] = &["' OR '1'='1", "\" OR \"1\"=\"1", "'; DROP TABLE users; --"];

/// Substrings searched for in the lowercased response body
pub const ERROR_SIGNATURES: &[&str] = &["sql", "mysql", "database", "syntax error"];

/// Checks whether tautology payloads surface database error text.
///
/// First-match-wins per URL: the first payload whose response contains a
/// signature substring produces the finding and ends the loop, so only one
/// payload variant is ever reported even if several would trigger.
pub struct SqliProbe;

#[async_trait]
impl super::Probe for SqliProbe {
    fn name(&self) -> &str {
        "sqli"
    }

    fn description(&self) -> &str {
        "Error-based SQL injection check using tautology payloads"
    }

    async fn probe(&self, client: &HttpClient, url: &str) -> Vec<Finding> {
        for payload in SQLI_PAYLOADS {
            let separator = if url.contains('?') { '&' } else { '?' };
            let test_url = format!("{url}{separator}id={payload}");

            let body = match client.get(&test_url).await {
                Ok(response) => match response.text().await {
                    Ok(body) => body,
                    Err(e) => {
                        debug!("SQLi probe failed to read body of {test_url}: {e}");
                        continue;
                    }
                },
                Err(e) => {
                    debug!("SQLi probe failed for {test_url}: {e}");
                    continue;
                }
            };

            let lowered = body.to_lowercase();
            if ERROR_SIGNATURES.iter().any(|sig| lowered.contains(sig)) {
                // The finding carries the raw test URL, payload included
                return vec![Finding::new(VulnKind::SqlInjection, test_url)];
            }
        }

        Vec::new()
    }
}
