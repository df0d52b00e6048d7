//! Report service - cache lookup, CRM fetch, build, cache write

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use chrono_tz::Tz;
use dealboard_domain::constants::fields;
use dealboard_domain::{
    Config, DealboardError, Deal, Department, Employee, Fetched, ListQuery, ReportKind, Result,
    SortDirection,
};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::{
    build_agent_rankings, build_dashboard, build_last_transactions, build_overall_deals,
    build_sales_teams,
};
use crate::cache_ports::ReportCache;
use crate::clock_ports::Clock;
use crate::crm_ports::CrmSource;

/// Settings the service needs, resolved once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSettings {
    pub timezone: Tz,
    pub sales_department_ids: Vec<u64>,
    /// When false, cached entries are ignored but fresh results still get
    /// written.
    pub cache_reads: bool,
    pub ranking_top_n: usize,
    pub overall_deals_limit: usize,
}

impl ReportSettings {
    /// Resolve settings from the application config.
    ///
    /// # Errors
    ///
    /// Returns [`DealboardError::Config`] when the timezone is not a valid
    /// IANA name.
    pub fn from_config(config: &Config) -> Result<Self> {
        let timezone = config.server.timezone.parse::<Tz>().map_err(|err| {
            DealboardError::Config(format!(
                "invalid timezone '{}': {err}",
                config.server.timezone
            ))
        })?;

        Ok(Self {
            timezone,
            sales_department_ids: config.sales.department_ids.clone(),
            cache_reads: config.cache.enabled,
            ranking_top_n: config.reports.ranking_top_n,
            overall_deals_limit: config.reports.overall_deals_limit,
        })
    }
}

/// Per-request parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportParams {
    /// Dashboard year; defaults to the current year.
    pub year: Option<i32>,
}

/// A report ready to be written to the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedReport {
    pub body: Value,
    pub from_cache: bool,
    /// False when at least one CRM fetch stopped early.
    pub complete: bool,
}

/// Produces reports, serving from cache when possible.
pub struct ReportService {
    crm: Arc<dyn CrmSource>,
    cache: Arc<dyn ReportCache>,
    clock: Arc<dyn Clock>,
    settings: ReportSettings,
}

impl ReportService {
    pub fn new(
        crm: Arc<dyn CrmSource>,
        cache: Arc<dyn ReportCache>,
        clock: Arc<dyn Clock>,
        settings: ReportSettings,
    ) -> Self {
        Self { crm, cache, clock, settings }
    }

    pub const fn settings(&self) -> &ReportSettings {
        &self.settings
    }

    /// Today's date in the configured timezone.
    pub fn today(&self) -> NaiveDate {
        self.clock.now().with_timezone(&self.settings.timezone).date_naive()
    }

    /// Cache key for `kind` on `today`.
    pub fn cache_key(kind: ReportKind, params: ReportParams, today: NaiveDate) -> String {
        let date = today.format("%Y-%m-%d");
        match kind {
            ReportKind::Dashboard => {
                let year = params.year.unwrap_or_else(|| today.year());
                format!("{kind}_{year}_{date}")
            }
            _ => format!("{kind}_{date}"),
        }
    }

    /// Render `kind`, from cache when a fresh entry exists.
    ///
    /// # Errors
    ///
    /// Propagates errors from the CRM source, serialization and the cache
    /// write. Upstream anomalies during pagination are not errors; they show
    /// up as `complete == false`.
    pub async fn render(&self, kind: ReportKind, params: ReportParams) -> Result<RenderedReport> {
        let today = self.today();
        let key = Self::cache_key(kind, params, today);

        if self.settings.cache_reads {
            if let Some(body) = self.cache.get(&key).await {
                debug!(report = %kind, key = %key, "Serving report from cache");
                return Ok(RenderedReport { body, from_cache: true, complete: true });
            }
        }

        let (body, complete) = match kind {
            ReportKind::AgentRankings => self.agent_rankings(today).await?,
            ReportKind::Dashboard => {
                self.dashboard(params.year.unwrap_or_else(|| today.year())).await?
            }
            ReportKind::LastTransactions => self.last_transactions(today).await?,
            ReportKind::OverallDeals => self.overall_deals().await?,
            ReportKind::SalesTeams => self.sales_teams().await?,
        };

        if complete {
            info!(report = %kind, key = %key, "Report built");
        } else {
            warn!(report = %kind, key = %key, "Report built from partial CRM data");
        }

        self.cache.set(&key, &body).await?;
        Ok(RenderedReport { body, from_cache: false, complete })
    }

    async fn agent_rankings(&self, today: NaiveDate) -> Result<(Value, bool)> {
        let employees = self.sales_employees(false).await?;
        let query = year_bounds(ListQuery::new(), today.year())
            .not_null(fields::RANKING_COMMISSION)
            .eq(fields::CLOSED, "Y")
            .select([
                fields::ID,
                fields::ASSIGNED_BY_ID,
                fields::RANKING_COMMISSION,
                fields::DATE_CREATE,
            ])
            .order(fields::DATE_CREATE, SortDirection::Desc);
        let deals = self.deals_for(&employees.items, query).await?;

        let report = build_agent_rankings(
            &deals.items,
            &employees.items,
            today,
            self.settings.ranking_top_n,
        );
        Ok((to_body(&report)?, employees.complete && deals.complete))
    }

    async fn dashboard(&self, year: i32) -> Result<(Value, bool)> {
        let query = year_bounds(ListQuery::new(), year)
            .not_null(fields::OPPORTUNITY)
            .select([
                fields::ID,
                fields::CLOSED,
                fields::OPPORTUNITY,
                fields::DATE_CREATE,
                fields::DEAL_TYPE,
                fields::DEVELOPER,
                fields::TOTAL_COMMISSION,
                fields::AGENT_COMMISSION,
            ])
            .order(fields::ID, SortDirection::Desc);
        let deals = self.crm.list_deals(&query).await?;

        let report = build_dashboard(&deals.items, year);
        Ok((to_body(&report)?, deals.complete))
    }

    async fn last_transactions(&self, today: NaiveDate) -> Result<(Value, bool)> {
        let employees = self.sales_employees(true).await?;
        let query = ListQuery::new().not_eq_null(fields::OPPORTUNITY).select([
            fields::ID,
            fields::ASSIGNED_BY_ID,
            fields::CLOSE_DATE,
            fields::OPPORTUNITY,
            fields::PROJECT,
            fields::COMMISSION_PERCENT,
        ]);
        let deals = self.deals_for(&employees.items, query).await?;

        let report = build_last_transactions(&deals.items, &employees.items, today);
        Ok((to_body(&report)?, employees.complete && deals.complete))
    }

    async fn overall_deals(&self) -> Result<(Value, bool)> {
        let employees = self.sales_employees(true).await?;
        let limit = self.settings.overall_deals_limit;
        let query = ListQuery::new()
            .not_eq_null(fields::PROJECT)
            .select([
                fields::ID,
                fields::TITLE,
                fields::STAGE_ID,
                fields::DATE_CREATE,
                fields::OPPORTUNITY,
                fields::ASSIGNED_BY_ID,
                fields::CLIENT_NAME,
                fields::UNIT_NO,
                fields::PROPERTY_PRICE,
                fields::PROPERTY_TYPE,
                fields::DEVELOPER,
                fields::BEDROOMS,
                fields::PROJECT,
                fields::DEAL_TYPE,
                fields::TEAM,
                fields::SOURCE_ID,
                fields::AGENT_COMMISSION,
                fields::TOTAL_COMMISSION,
                fields::VAT,
            ])
            .order(fields::ID, SortDirection::Desc)
            .limit(limit);
        let deals = self.deals_for(&employees.items, query).await?;

        let report = build_overall_deals(&deals.items, &employees.items, limit);
        Ok((to_body(&report)?, employees.complete && deals.complete))
    }

    async fn sales_teams(&self) -> Result<(Value, bool)> {
        let allow_list = &self.settings.sales_department_ids;
        let query = ListQuery::new()
            .eq(fields::ID, allow_list.clone())
            .select([fields::ID, fields::NAME, fields::HEAD]);
        let departments: Fetched<Department> =
            self.crm.list_departments(&query, allow_list).await?;
        let employees = self.sales_employees(false).await?;

        let report = build_sales_teams(&departments.items, &employees.items);
        Ok((to_body(&report)?, departments.complete && employees.complete))
    }

    /// Employees of the sales departments.
    async fn sales_employees(&self, with_employment_date: bool) -> Result<Fetched<Employee>> {
        let mut select = vec![
            fields::ID,
            fields::NAME,
            fields::LAST_NAME,
            fields::WORK_POSITION,
            fields::DEPARTMENT,
        ];
        if with_employment_date {
            select.push(fields::EMPLOYMENT_DATE);
        }

        let query = ListQuery::new()
            .eq(fields::DEPARTMENT, self.settings.sales_department_ids.clone())
            .select(select);
        self.crm.list_users(&query).await
    }

    /// Deals assigned to `employees`. With no employees there is nothing to
    /// ask for, and an empty `@ASSIGNED_BY_ID` would match every deal.
    async fn deals_for(&self, employees: &[Employee], query: ListQuery) -> Result<Fetched<Deal>> {
        if employees.is_empty() {
            debug!("No sales employees; skipping deal fetch");
            return Ok(Fetched::complete(Vec::new()));
        }

        let query = query.in_set(fields::ASSIGNED_BY_ID, employees.iter().map(|e| e.id));
        self.crm.list_deals(&query).await
    }
}

/// Deals created within calendar `year`.
fn year_bounds(query: ListQuery, year: i32) -> ListQuery {
    query
        .gte(fields::DATE_CREATE, format!("{year}-01-01"))
        .lte(fields::DATE_CREATE, format!("{year}-12-31"))
}

fn to_body<T: Serialize>(report: &T) -> Result<Value> {
    serde_json::to_value(report).map_err(|err| DealboardError::Serialization(err.to_string()))
}
