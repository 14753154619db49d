//! HTTP client module for VulnX

pub mod client;
pub use client::HttpClient;
