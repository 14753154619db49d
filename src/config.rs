//! Configuration management for VulnX

use crate::error::{Result, VulnxError};
use crate::models::ScanConfig;
use serde::Deserialize;
use std::path::Path;

/// Server-side settings: bind address and history database
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub database_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:5000".to_string(),
            database_url: "sqlite:vulnx.sqlite3?mode=rwc".to_string(),
        }
    }
}

/// File-based configuration structure
#[derive(Debug, Deserialize)]
struct FileConfig {
    scan: Option<ScanSection>,
    server: Option<ServerSection>,
}

#[derive(Debug, Deserialize)]
struct ScanSection {
    max_depth: Option<u32>,
    timeout_secs: Option<u64>,
    user_agent: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ServerSection {
    bind_addr: Option<String>,
    database_url: Option<String>,
}

/// Loads configuration from a TOML file and merges with defaults.
/// Environment overrides are applied last.
pub fn load_config(path: &Path) -> Result<(ScanConfig, ServerConfig)> {
    let content = std::fs::read_to_string(path).map_err(VulnxError::IoError)?;
    let (scan, mut server) = parse_config(&content)?;
    apply_env_overrides(&mut server);
    Ok((scan, server))
}

fn parse_config(content: &str) -> Result<(ScanConfig, ServerConfig)> {
    let file_config: FileConfig = toml::from_str(content)?;

    let mut scan = ScanConfig::default();
    let mut server = ServerConfig::default();

    if let Some(section) = file_config.scan {
        if let Some(depth) = section.max_depth {
            scan.max_depth = depth;
        }
        if let Some(timeout) = section.timeout_secs {
            scan.timeout_secs = timeout;
        }
        if let Some(ua) = section.user_agent {
            scan.user_agent = ua;
        }
    }

    if let Some(section) = file_config.server {
        if let Some(bind) = section.bind_addr {
            server.bind_addr = bind;
        }
        if let Some(db) = section.database_url {
            server.database_url = db;
        }
    }

    Ok((scan, server))
}

/// Applies environment overrides: VULNX_DB_PATH points at the SQLite file
pub fn apply_env_overrides(server: &mut ServerConfig) {
    if let Ok(path) = std::env::var("VULNX_DB_PATH") {
        server.database_url = format!("sqlite:{path}?mode=rwc");
    }
}
