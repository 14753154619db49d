//! VulnX - Minimal Web Vulnerability Scanner CLI

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use vulnx::config::{self, ServerConfig};
use vulnx::models::ScanConfig;
use vulnx::scanner::ScanEngine;
use vulnx::server::{self, AppState};
use vulnx::storage::Store;

/// VulnX - Minimal Web Vulnerability Scanner
#[derive(Parser)]
#[command(name = "vulnx", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scan against a target and print findings
    Scan {
        /// Target URL (https:// is assumed when no scheme is given)
        #[arg(short, long)]
        target: String,

        /// Maximum crawl depth
        #[arg(long, default_value_t = 1)]
        depth: u32,

        /// Per-request timeout in seconds
        #[arg(long, default_value_t = 5)]
        timeout: u64,

        /// Print findings as JSON instead of a summary
        #[arg(long)]
        json: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// List available probes
    Probes,

    /// Start the HTTP API server
    Serve {
        /// Address to bind
        #[arg(short, long)]
        bind: Option<String>,

        /// SQLite database URL for scan history
        #[arg(long)]
        database: Option<String>,

        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "vulnx=debug" } else { "vulnx=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan {
            target,
            depth,
            timeout,
            json,
            verbose,
        } => {
            init_tracing(verbose);

            let scan_config = ScanConfig {
                target: server::normalize_target(&target),
                max_depth: depth,
                timeout_secs: timeout,
                ..ScanConfig::default()
            };

            println!("  {} {}", "Target:".bold(), scan_config.target.green());
            println!("  {} {}\n", "Depth:".bold(), depth.to_string().cyan());

            let engine = ScanEngine::with_defaults();
            let findings = engine.scan(&scan_config).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&findings)?);
            } else if findings.is_empty() {
                println!("\n  {}", "No vulnerabilities found.".green());
            } else {
                println!(
                    "\n  {}",
                    format!("{} potential vulnerabilities found:", findings.len())
                        .red()
                        .bold()
                );
                for finding in &findings {
                    println!(
                        "    {} {}",
                        format!("[{}]", finding.kind).yellow().bold(),
                        finding.url
                    );
                }
            }

            if !findings.is_empty() {
                std::process::exit(1);
            }
        }

        Commands::Probes => {
            let engine = ScanEngine::with_defaults();
            println!("  {}\n", "Available probes:".bold());
            for (name, description) in engine.list_probes() {
                println!("    {} {}", format!("{name:8}").cyan().bold(), description);
            }
            println!();
        }

        Commands::Serve {
            bind,
            database,
            config: config_path,
            verbose,
        } => {
            init_tracing(verbose);

            let (scan_config, mut server_config) = if let Some(ref path) = config_path {
                config::load_config(path)?
            } else {
                let mut server_config = ServerConfig::default();
                config::apply_env_overrides(&mut server_config);
                (ScanConfig::default(), server_config)
            };

            if let Some(bind) = bind {
                server_config.bind_addr = bind;
            }
            if let Some(database) = database {
                server_config.database_url = database;
            }

            let store = Store::connect(&server_config.database_url).await?;
            let state = Arc::new(AppState {
                engine: ScanEngine::with_defaults(),
                scan_config,
                store,
            });

            server::serve(state, &server_config.bind_addr).await?;
        }
    }

    Ok(())
}
