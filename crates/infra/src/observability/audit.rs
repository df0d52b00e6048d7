//! Request audit log
//!
//! Every inbound request (except CORS preflights) is appended to a dated
//! file under the configured root:
//!
//! ```text
//! {root}/2025/04/10/requests.log
//!
//! [2025-04-10 09:15:02]
//! {
//!   "method": "GET",
//!   "uri": "/?endpoint=dashboard&year=2024",
//!   "query": {
//!     "endpoint": "dashboard",
//!     "year": "2024"
//!   }
//! }
//!
//! ```
//!
//! Timestamps use the configured report timezone.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDateTime;
use chrono_tz::Tz;
use dealboard_core::Clock;
use dealboard_domain::Result;
use serde::Serialize;
use tokio::io::AsyncWriteExt;

use crate::errors::InfraError;

/// What gets written for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditEntry {
    pub method: String,
    pub uri: String,
    pub query: BTreeMap<String, String>,
}

/// Appends [`AuditEntry`] records to `{root}/YYYY/MM/DD/requests.log`.
///
/// Concurrent requests append independently; entries from parallel requests
/// may interleave at entry granularity.
pub struct RequestAuditLog {
    root: PathBuf,
    clock: Arc<dyn Clock>,
    timezone: Tz,
}

impl RequestAuditLog {
    pub fn new(root: impl Into<PathBuf>, clock: Arc<dyn Clock>, timezone: Tz) -> Self {
        Self { root: root.into(), clock, timezone }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Log file for the given local time.
    pub fn path_for(&self, at: NaiveDateTime) -> PathBuf {
        self.root.join(at.format("%Y/%m/%d").to_string()).join("requests.log")
    }

    /// Append `entry`, creating the dated directory when needed.
    ///
    /// # Errors
    ///
    /// Returns `DealboardError::Cache` (I/O) or `DealboardError::Serialization`
    /// if the entry cannot be written.
    pub async fn record(&self, entry: &AuditEntry) -> Result<PathBuf> {
        let now = self.clock.now().with_timezone(&self.timezone).naive_local();
        let path = self.path_for(now);

        if let Some(dir) = path.parent() {
            tokio::fs::create_dir_all(dir).await.map_err(InfraError::from)?;
        }

        let body = serde_json::to_string_pretty(entry).map_err(InfraError::from)?;
        let text = format!("{}\n{body}\n\n", now.format("[%Y-%m-%d %H:%M:%S]"));

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await
            .map_err(InfraError::from)?;
        file.write_all(text.as_bytes()).await.map_err(InfraError::from)?;
        file.flush().await.map_err(InfraError::from)?;

        Ok(path)
    }
}
