//! Application context - dependency injection container

use std::sync::Arc;

use chrono_tz::Tz;
use dealboard_core::{Clock, CrmSource, ReportCache, ReportService, ReportSettings};
use dealboard_domain::{Config, Result};
use dealboard_infra::{BitrixClient, FileReportCache, RequestAuditLog, SystemClock};
use tracing::info;

use crate::response::ResponseEmitter;

/// Everything a request handler needs, shared behind an `Arc`.
pub struct AppContext {
    pub reports: ReportService,
    pub audit: RequestAuditLog,
    pub responses: ResponseEmitter,
}

impl AppContext {
    /// Wire the production adapters from `config`.
    ///
    /// # Errors
    ///
    /// Returns `DealboardError::Config` for an unknown timezone and
    /// propagates HTTP client construction failures.
    pub fn new(config: &Config) -> Result<Self> {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let crm: Arc<dyn CrmSource> = Arc::new(BitrixClient::new(&config.bitrix)?);
        let cache: Arc<dyn ReportCache> =
            Arc::new(FileReportCache::new(&config.cache, Arc::clone(&clock)));

        let context = Self::from_parts(config, crm, cache, clock)?;
        info!(
            departments = ?config.sales.department_ids,
            timezone = %context.reports.settings().timezone,
            cache_reads = config.cache.enabled,
            "Application context initialized"
        );
        Ok(context)
    }

    /// Build a context around caller-supplied ports.
    ///
    /// # Errors
    ///
    /// Returns `DealboardError::Config` for an unknown timezone.
    pub fn from_parts(
        config: &Config,
        crm: Arc<dyn CrmSource>,
        cache: Arc<dyn ReportCache>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        let settings = ReportSettings::from_config(config)?;
        let timezone: Tz = settings.timezone;
        let audit =
            RequestAuditLog::new(config.logging.request_log_dir.clone(), Arc::clone(&clock), timezone);
        let reports = ReportService::new(crm, cache, clock, settings);

        Ok(Self {
            reports,
            audit,
            responses: ResponseEmitter::new(config.server.http_max_age_seconds),
        })
    }
}
