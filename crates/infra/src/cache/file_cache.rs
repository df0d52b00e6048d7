//! File-backed report cache
//!
//! One file per key: `{dir}/{namespace}_{blake3(key)}.cache`, holding a JSON
//! envelope with the write time and the cached value. Entries older than
//! `expiry_seconds` are misses. Writes go to a temp file first and are
//! renamed into place so readers never see a torn file.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use dealboard_core::{Clock, ReportCache};
use dealboard_domain::{CacheConfig, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, instrument, warn};

use crate::errors::InfraError;

#[derive(Debug, Serialize, Deserialize)]
struct CacheEnvelope {
    /// UNIX seconds at write time.
    stored_at: i64,
    value: Value,
}

pub struct FileReportCache {
    directory: PathBuf,
    namespace: String,
    expiry_seconds: u64,
    clock: Arc<dyn Clock>,
    write_seq: AtomicU64,
}

impl FileReportCache {
    /// Cache rooted at `config.directory`, or the system temp dir when unset.
    pub fn new(config: &CacheConfig, clock: Arc<dyn Clock>) -> Self {
        let directory = config.directory.clone().unwrap_or_else(std::env::temp_dir);
        Self {
            directory,
            namespace: config.namespace.clone(),
            expiry_seconds: config.expiry_seconds,
            clock,
            write_seq: AtomicU64::new(0),
        }
    }

    /// File backing `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        let digest = blake3::hash(key.as_bytes());
        self.directory.join(format!("{}_{}.cache", self.namespace, digest.to_hex()))
    }

    /// Entries stamped in the future are treated as expired.
    fn is_fresh(&self, stored_at: i64) -> bool {
        let age = self.clock.unix_seconds().saturating_sub(stored_at);
        u64::try_from(age).is_ok_and(|age| age < self.expiry_seconds)
    }
}

#[async_trait]
impl ReportCache for FileReportCache {
    #[instrument(skip(self))]
    async fn get(&self, key: &str) -> Option<Value> {
        let path = self.path_for(key);
        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    warn!(path = %path.display(), error = %err, "cache read failed");
                }
                return None;
            }
        };

        let envelope: CacheEnvelope = match serde_json::from_slice(&bytes) {
            Ok(envelope) => envelope,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "discarding unreadable cache entry");
                return None;
            }
        };

        if self.is_fresh(envelope.stored_at) {
            debug!("cache hit");
            Some(envelope.value)
        } else {
            debug!(stored_at = envelope.stored_at, "cache entry expired");
            None
        }
    }

    #[instrument(skip(self, value))]
    async fn set(&self, key: &str, value: &Value) -> Result<()> {
        let path = self.path_for(key);
        let envelope = CacheEnvelope { stored_at: self.clock.unix_seconds(), value: value.clone() };
        let data = serde_json::to_vec(&envelope).map_err(InfraError::from)?;

        fs::create_dir_all(&self.directory).await.map_err(InfraError::from)?;

        let seq = self.write_seq.fetch_add(1, Ordering::Relaxed);
        let temp_path = path.with_extension(format!("{}.{seq}.tmp", std::process::id()));

        let mut file = fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .await
            .map_err(InfraError::from)?;
        file.write_all(&data).await.map_err(InfraError::from)?;
        file.sync_all().await.map_err(InfraError::from)?;
        drop(file);

        if let Err(err) = fs::rename(&temp_path, &path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(InfraError::from(err).into());
        }

        debug!(path = %path.display(), bytes = data.len(), "cache entry written");
        Ok(())
    }
}
