//! VulnX - Minimal Web Vulnerability Scanner
//!
//! Crawls same-origin pages up to a shallow depth, then probes each
//! discovered URL for reflected XSS and SQL injection indicators using
//! fixed payloads and substring matching. Usable as a CLI or behind a
//! thin HTTP API.

pub mod config;
pub mod crawler;
pub mod error;
pub mod http;
pub mod models;
pub mod scanner;
pub mod server;
pub mod storage;
