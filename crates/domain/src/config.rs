//! Configuration structures
//!
//! Every section has serde defaults so a config file only needs the Bitrix
//! webhook and the sales department ids. Loading lives in
//! `dealboard-infra::config`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BIND_ADDRESS, DEFAULT_CACHE_EXPIRY_SECS, DEFAULT_CACHE_NAMESPACE,
    DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_OVERALL_DEALS_LIMIT, DEFAULT_RANKING_TOP_N,
    DEFAULT_REQUEST_LOG_DIR, DEFAULT_TIMEZONE,
};
use crate::{DealboardError, Result};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub bitrix: BitrixConfig,
    pub sales: SalesConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub reports: ReportsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Minimal configuration with defaults for every optional section.
    pub fn new(webhook_url: impl Into<String>, department_ids: Vec<u64>) -> Self {
        Self {
            bitrix: BitrixConfig::new(webhook_url),
            sales: SalesConfig { department_ids },
            cache: CacheConfig::default(),
            server: ServerConfig::default(),
            reports: ReportsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    /// Check invariants serde cannot express.
    ///
    /// # Errors
    /// Returns `DealboardError::Config` describing the first violation.
    pub fn validate(&self) -> Result<()> {
        if self.bitrix.webhook_url.trim().is_empty() {
            return Err(DealboardError::Config("bitrix.webhook_url must not be empty".into()));
        }
        if self.sales.department_ids.is_empty() {
            return Err(DealboardError::Config(
                "sales.department_ids must list at least one department".into(),
            ));
        }
        if self.cache.expiry_seconds == 0 {
            return Err(DealboardError::Config("cache.expiry_seconds must be positive".into()));
        }
        if self.bitrix.timeout_seconds == 0 {
            return Err(DealboardError::Config("bitrix.timeout_seconds must be positive".into()));
        }
        Ok(())
    }
}

/// Bitrix24 REST connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitrixConfig {
    /// Inbound webhook base, e.g. `https://portal.bitrix24.com/rest/1/abc123`.
    pub webhook_url: String,
    /// Optional bearer token for portals fronted by OAuth.
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default = "default_http_timeout")]
    pub timeout_seconds: u64,
}

impl BitrixConfig {
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            access_token: None,
            timeout_seconds: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

/// Which departments count as "sales"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesConfig {
    pub department_ids: Vec<u64>,
}

/// On-disk report cache settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// When false, cached entries are never served (they are still written).
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_cache_expiry")]
    pub expiry_seconds: u64,
    /// Defaults to the system temp directory.
    #[serde(default)]
    pub directory: Option<PathBuf>,
    #[serde(default = "default_cache_namespace")]
    pub namespace: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            expiry_seconds: DEFAULT_CACHE_EXPIRY_SECS,
            directory: None,
            namespace: DEFAULT_CACHE_NAMESPACE.to_string(),
        }
    }
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// IANA timezone that defines "today" for cache keys and reports.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// `max-age` advertised on cacheable responses.
    #[serde(default = "default_cache_expiry")]
    pub http_max_age_seconds: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            timezone: DEFAULT_TIMEZONE.to_string(),
            http_max_age_seconds: DEFAULT_CACHE_EXPIRY_SECS,
        }
    }
}

/// Report shaping knobs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportsConfig {
    #[serde(default = "default_ranking_top_n")]
    pub ranking_top_n: usize,
    #[serde(default = "default_overall_deals_limit")]
    pub overall_deals_limit: usize,
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            ranking_top_n: DEFAULT_RANKING_TOP_N,
            overall_deals_limit: DEFAULT_OVERALL_DEALS_LIMIT,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
    /// Root of the dated request audit log tree.
    #[serde(default = "default_request_log_dir")]
    pub request_log_dir: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), json: false, request_log_dir: default_request_log_dir() }
    }
}

const fn default_true() -> bool {
    true
}

const fn default_http_timeout() -> u64 {
    DEFAULT_HTTP_TIMEOUT_SECS
}

const fn default_cache_expiry() -> u64 {
    DEFAULT_CACHE_EXPIRY_SECS
}

fn default_cache_namespace() -> String {
    DEFAULT_CACHE_NAMESPACE.to_string()
}

fn default_bind_address() -> String {
    DEFAULT_BIND_ADDRESS.to_string()
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

const fn default_ranking_top_n() -> usize {
    DEFAULT_RANKING_TOP_N
}

const fn default_overall_deals_limit() -> usize {
    DEFAULT_OVERALL_DEALS_LIMIT
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_request_log_dir() -> PathBuf {
    PathBuf::from(DEFAULT_REQUEST_LOG_DIR)
}
