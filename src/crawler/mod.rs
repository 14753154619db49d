//! Same-origin web crawler for URL discovery
//!
//! Worklist BFS bounded by `max_depth`, with a visited set for
//! deduplication and cycle breaking. Link discovery is anchor-only.

use crate::http::HttpClient;
use crate::models::ScanConfig;
use scraper::{Html, Selector};
use std::collections::{HashSet, VecDeque};
use tracing::{debug, info};
use url::Url;

/// Depth-bounded same-origin crawler.
///
/// The same-origin test is a literal string prefix match against the target
/// URL, not a scheme/host/port comparison. That means sibling paths sharing
/// the prefix are accepted and equivalent origins spelled differently (other
/// scheme, trailing slash) are rejected. Documented behavior, kept as is.
pub struct Crawler<'a> {
    client: &'a HttpClient,
    target: String,
    max_depth: u32,
}

impl<'a> Crawler<'a> {
    pub fn new(client: &'a HttpClient, config: &ScanConfig) -> Self {
        Self {
            client,
            target: config.target.clone(),
            max_depth: config.max_depth,
        }
    }

    /// Crawls from the seed URL and returns the set of visited URLs.
    ///
    /// Fetch failures are swallowed: the URL stays marked visited,
    /// contributes no outgoing links, and traversal continues.
    pub async fn crawl(&self, seed: &str) -> HashSet<String> {
        let mut visited: HashSet<String> = HashSet::new();
        let mut queue: VecDeque<(String, u32)> = VecDeque::new();
        queue.push_back((seed.to_string(), 0));

        while let Some((url, depth)) = queue.pop_front() {
            if depth > self.max_depth || visited.contains(&url) {
                continue;
            }
            visited.insert(url.clone());

            let body = match self.fetch_body(&url).await {
                Some(b) => b,
                None => continue,
            };

            let page_url = match Url::parse(&url) {
                Ok(u) => u,
                Err(e) => {
                    debug!("Skipping links of unparseable URL {url}: {e}");
                    continue;
                }
            };

            for link in extract_links(&page_url, &body) {
                if link.starts_with(&self.target) {
                    queue.push_back((link, depth + 1));
                }
            }
        }

        info!("Crawl finished: {} URLs visited", visited.len());
        visited
    }

    async fn fetch_body(&self, url: &str) -> Option<String> {
        match self.client.get(url).await {
            Ok(response) => match response.text().await {
                Ok(body) => Some(body),
                Err(e) => {
                    debug!("Failed to read body of {url}: {e}");
                    None
                }
            },
            Err(e) => {
                debug!("Failed to fetch {url}: {e}");
                None
            }
        }
    }
}

/// Extracts anchor hrefs from HTML and resolves them against the page URL
fn extract_links(page_url: &Url, html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut links = Vec::new();

    if let Ok(selector) = Selector::parse("a[href]") {
        for element in document.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                if let Ok(resolved) = page_url.join(href) {
                    links.push(resolved.to_string());
                }
            }
        }
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_links_resolves_relative() {
        let page = Url::parse("https://example.test/dir/page").expect("valid url");
        let html = r#"
            <html><body>
                <a href="/a">Absolute path</a>
                <a href="b">Relative</a>
                <a href="https://other.test/c">Cross origin</a>
            </body></html>
        "#;

        let links = extract_links(&page, html);
        assert!(links.contains(&"https://example.test/a".to_string()));
        assert!(links.contains(&"https://example.test/dir/b".to_string()));
        assert!(links.contains(&"https://other.test/c".to_string()));
    }

    #[test]
    fn test_extract_links_ignores_anchors_without_href() {
        let page = Url::parse("https://example.test").expect("valid url");
        let html = "<html><body><a name=\"top\">No href</a></body></html>";
        assert!(extract_links(&page, html).is_empty());
    }
}
