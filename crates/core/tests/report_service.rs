//! ReportService behaviour against in-memory ports

mod support;

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use dealboard_core::clock_ports::FixedClock;
use dealboard_core::{ReportParams, ReportService, ReportSettings};
use dealboard_domain::{Config, DealboardError, Deal, Department, Employee, ReportKind};
use serde_json::{json, Value};
use support::fakes::{FakeCrmSource, MemoryCache, Resource};

fn settings(cache_reads: bool) -> ReportSettings {
    let mut config = Config::new("https://example.bitrix24.com/rest/1/abc", vec![7, 9]);
    config.cache.enabled = cache_reads;
    ReportSettings::from_config(&config).unwrap()
}

/// 10 April 2025, 09:00 in Dubai.
fn clock() -> Arc<FixedClock> {
    Arc::new(FixedClock(Utc.with_ymd_and_hms(2025, 4, 10, 5, 0, 0).unwrap()))
}

fn service(crm: &FakeCrmSource, cache: &MemoryCache, cache_reads: bool) -> ReportService {
    ReportService::new(
        Arc::new(crm.clone()),
        Arc::new(cache.clone()),
        clock(),
        settings(cache_reads),
    )
}

fn agent(id: u64, name: &str, last_name: &str, department: u64) -> Employee {
    Employee {
        id,
        name: Some(name.into()),
        last_name: Some(last_name.into()),
        work_position: Some("Agent".into()),
        departments: vec![department],
        ..Employee::default()
    }
}

fn ranking_deal(id: u64, assignee: u64, created: &str, commission: f64) -> Deal {
    Deal {
        id,
        assigned_by_id: Some(assignee),
        closed: Some("Y".into()),
        date_create: Some(created.into()),
        ranking_commission: Some(commission),
        ..Deal::default()
    }
}

#[tokio::test]
async fn builds_rankings_and_caches_them() {
    let crm = FakeCrmSource::new()
        .with_users(vec![agent(1, "Agent", "A", 7), agent(2, "Agent", "B", 9)])
        .with_deals(vec![
            ranking_deal(10, 1, "2025-03-02T10:00:00+04:00", 100.0),
            ranking_deal(11, 1, "2025-03-03T10:00:00+04:00", 200.0),
            ranking_deal(12, 1, "2025-03-04T10:00:00+04:00", 50.0),
            ranking_deal(13, 2, "2025-03-05T10:00:00+04:00", 500.0),
        ]);
    let cache = MemoryCache::new();

    let rendered = service(&crm, &cache, true)
        .render(ReportKind::AgentRankings, ReportParams::default())
        .await
        .unwrap();

    assert!(!rendered.from_cache);
    assert!(rendered.complete);
    assert_eq!(
        rendered.body["mar"],
        json!({
            "1": { "agent": "Agent B", "gross_commission": 500.0 },
            "2": { "agent": "Agent A", "gross_commission": 350.0 }
        })
    );
    assert_eq!(rendered.body["apr"], json!({}));
    assert!(rendered.body.get("may").is_none());
    assert_eq!(cache.entry("agent_rankings_2025-04-10"), Some(rendered.body));
}

#[tokio::test]
async fn rankings_query_filters_on_sales_staff_and_year() {
    let crm = FakeCrmSource::new().with_users(vec![agent(1, "A", "", 7), agent(2, "B", "", 9)]);
    let cache = MemoryCache::new();

    service(&crm, &cache, true).render(ReportKind::AgentRankings, ReportParams::default()).await.unwrap();

    let users = crm.calls_to(Resource::Users);
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].filter["UF_DEPARTMENT"], json!([7, 9]));

    let deals = crm.calls_to(Resource::Deals);
    assert_eq!(deals.len(), 1);
    let filter = &deals[0].filter;
    assert_eq!(filter["@ASSIGNED_BY_ID"], json!([1, 2]));
    assert_eq!(filter["!UF_CRM_6800C17742B22"], Value::Null);
    assert_eq!(filter["CLOSED"], json!("Y"));
    assert_eq!(filter[">=DATE_CREATE"], json!("2025-01-01"));
    assert_eq!(filter["<=DATE_CREATE"], json!("2025-12-31"));
}

#[tokio::test]
async fn serves_fresh_cache_entry_without_fetching() {
    let crm = FakeCrmSource::new();
    let cached = json!([{ "teamName": "Cached" }]);
    let cache = MemoryCache::new().with_entry("sales_teams_2025-04-10", cached.clone());

    let rendered = service(&crm, &cache, true)
        .render(ReportKind::SalesTeams, ReportParams::default())
        .await
        .unwrap();

    assert!(rendered.from_cache);
    assert_eq!(rendered.body, cached);
    assert!(crm.calls().is_empty());
}

#[tokio::test]
async fn disabled_cache_reads_still_write() {
    let crm = FakeCrmSource::new()
        .with_departments(vec![Department { id: 7, name: Some("Alpha".into()), head_id: Some(1) }])
        .with_users(vec![agent(1, "Omar", "", 7)]);
    let cache = MemoryCache::new().with_entry("sales_teams_2025-04-10", json!("stale"));

    let rendered = service(&crm, &cache, false)
        .render(ReportKind::SalesTeams, ReportParams::default())
        .await
        .unwrap();

    assert!(!rendered.from_cache);
    assert_eq!(rendered.body[0]["head"], "Omar");
    assert_eq!(cache.entry("sales_teams_2025-04-10"), Some(rendered.body));
}

#[tokio::test]
async fn dashboard_honours_requested_year() {
    let crm = FakeCrmSource::new().with_deals(vec![Deal {
        id: 1,
        closed: Some("Y".into()),
        date_create: Some("2023-06-01T10:00:00+04:00".into()),
        developer: Some("88".into()),
        opportunity: Some(1_000.0),
        deal_type: Some("4695".into()),
        ..Deal::default()
    }]);
    let cache = MemoryCache::new();

    let rendered = service(&crm, &cache, true)
        .render(ReportKind::Dashboard, ReportParams { year: Some(2023) })
        .await
        .unwrap();

    assert_eq!(rendered.body["deal_type_distribution"]["Secondary"], 1);
    assert_eq!(rendered.body["developer_stats"][0]["month"], "June");
    assert_eq!(rendered.body["developer_property_price_distribution"][0]["percentage"], 100.0);
    assert_eq!(cache.keys(), ["dashboard_2023_2025-04-10"]);

    let deals = crm.calls_to(Resource::Deals);
    assert_eq!(deals[0].filter[">=DATE_CREATE"], json!("2023-01-01"));
    assert!(crm.calls_to(Resource::Users).is_empty());
}

#[tokio::test]
async fn overall_deals_are_limited_and_ordered_by_id() {
    let deals: Vec<Deal> = (1..=25)
        .map(|id| Deal { id, assigned_by_id: Some(1), project: Some("4315".into()), ..Deal::default() })
        .collect();
    let crm = FakeCrmSource::new().with_users(vec![agent(1, "Sara", "Khan", 7)]).with_deals(deals);
    let cache = MemoryCache::new();

    let rendered = service(&crm, &cache, true)
        .render(ReportKind::OverallDeals, ReportParams::default())
        .await
        .unwrap();

    let rows = rendered.body.as_array().unwrap();
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0]["agentName"], "Sara Khan");

    let query = &crm.calls_to(Resource::Deals)[0];
    assert_eq!(query.limit, Some(10));
    assert_eq!(serde_json::to_value(&query.order).unwrap(), json!({ "ID": "DESC" }));
    assert_eq!(query.filter["!=UF_CRM_67FF84E2C8AB6"], Value::Null);
}

#[tokio::test]
async fn no_sales_staff_skips_deal_fetch() {
    let crm = FakeCrmSource::new().with_deals(vec![ranking_deal(1, 1, "2025-01-01", 1.0)]);
    let cache = MemoryCache::new();

    let rendered = service(&crm, &cache, true)
        .render(ReportKind::LastTransactions, ReportParams::default())
        .await
        .unwrap();

    assert_eq!(rendered.body, json!([]));
    assert!(crm.calls_to(Resource::Deals).is_empty());
}

#[tokio::test]
async fn partial_fetch_is_reported_and_still_cached() {
    let crm = FakeCrmSource::new().with_users(vec![agent(1, "A", "", 7)]).partial();
    let cache = MemoryCache::new();

    let rendered = service(&crm, &cache, true)
        .render(ReportKind::LastTransactions, ReportParams::default())
        .await
        .unwrap();

    assert!(!rendered.complete);
    assert_eq!(cache.keys(), ["last_transactions_2025-04-10"]);
}

#[tokio::test]
async fn source_errors_propagate_and_nothing_is_cached() {
    let crm = FakeCrmSource::new().with_users(vec![agent(1, "A", "", 7)]).failing_deals();
    let cache = MemoryCache::new();

    let err = service(&crm, &cache, true)
        .render(ReportKind::OverallDeals, ReportParams::default())
        .await
        .unwrap_err();

    assert!(matches!(err, DealboardError::Network(_)));
    assert!(cache.keys().is_empty());
}

#[tokio::test]
async fn cache_write_failure_is_an_error() {
    let crm = FakeCrmSource::new();
    let cache = MemoryCache::new().failing_writes();

    let err = service(&crm, &cache, true)
        .render(ReportKind::Dashboard, ReportParams::default())
        .await
        .unwrap_err();

    assert!(matches!(err, DealboardError::Cache(_)));
}

#[tokio::test]
async fn repeated_builds_are_identical() {
    let crm = FakeCrmSource::new()
        .with_users(vec![agent(1, "Agent", "A", 7), agent(2, "Agent", "B", 9)])
        .with_deals(vec![
            ranking_deal(10, 1, "2025-02-02T10:00:00+04:00", 70.0),
            ranking_deal(11, 2, "2025-02-03T10:00:00+04:00", 70.0),
        ]);

    let first = service(&crm, &MemoryCache::new(), false)
        .render(ReportKind::AgentRankings, ReportParams::default())
        .await
        .unwrap();
    let second = service(&crm, &MemoryCache::new(), false)
        .render(ReportKind::AgentRankings, ReportParams::default())
        .await
        .unwrap();

    assert_eq!(first.body, second.body);
}
