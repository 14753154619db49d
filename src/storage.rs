//! SQLite-backed scan history store

use crate::error::Result;
use crate::models::{Finding, ScanRecord};
use chrono::Utc;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Scan history store. One row per completed scan, findings serialized
/// as a JSON array.
#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Opens (and creates if needed) the history database
    pub async fn connect(database_url: &str) -> Result<Self> {
        // A single connection is plenty for an append-mostly history log,
        // and keeps in-memory databases coherent across queries
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(database_url)
            .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS scans (
                id TEXT PRIMARY KEY,
                url TEXT NOT NULL,
                mode TEXT NOT NULL,
                ts TEXT NOT NULL,
                result_json TEXT NOT NULL
            )",
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }

    /// Records a completed scan and returns the stored row
    pub async fn record_scan(
        &self,
        url: &str,
        mode: &str,
        findings: &[Finding],
    ) -> Result<ScanRecord> {
        let record = ScanRecord {
            id: Uuid::new_v4().to_string(),
            url: url.to_string(),
            mode: mode.to_string(),
            ts: Utc::now(),
            result_json: serde_json::to_string(findings)?,
        };

        sqlx::query("INSERT INTO scans (id, url, mode, ts, result_json) VALUES (?, ?, ?, ?, ?)")
            .bind(&record.id)
            .bind(&record.url)
            .bind(&record.mode)
            .bind(record.ts)
            .bind(&record.result_json)
            .execute(&self.pool)
            .await?;

        Ok(record)
    }

    /// Returns the most recent scans, newest first
    pub async fn recent_scans(&self, limit: i64) -> Result<Vec<ScanRecord>> {
        let records = sqlx::query_as::<_, ScanRecord>(
            "SELECT id, url, mode, ts, result_json FROM scans ORDER BY ts DESC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }
}
