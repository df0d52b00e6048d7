//! Port for the report cache.
//!
//! A cache entry is a JSON blob under a string key with a fixed time to
//! live. There is no invalidation beyond expiry and no locking: concurrent
//! writers race and the last write wins.

use async_trait::async_trait;
use dealboard_domain::Result;
use serde_json::Value;

#[async_trait]
pub trait ReportCache: Send + Sync {
    /// Cached value for `key`, or `None` when missing, expired or unreadable.
    async fn get(&self, key: &str) -> Option<Value>;

    /// Store `value` under `key`, replacing any previous entry.
    async fn set(&self, key: &str, value: &Value) -> Result<()>;
}
