#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, Response};
use axum::Router;
use chrono::{TimeZone, Utc};
use dealboard_api::{router, AppContext};
use dealboard_core::clock_ports::FixedClock;
use dealboard_core::{Clock, CrmSource, ReportCache};
use dealboard_domain::{
    Config, DealboardError, Deal, Department, Employee, Fetched, ListQuery, Result as DomainResult,
};
use dealboard_infra::FileReportCache;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

pub const WEBHOOK: &str = "https://portal.example.com/rest/1/secret-token";
pub const SALES_DEPARTMENT: u64 = 10;

/// `CrmSource` returning fixed records; counts calls so tests can tell a
/// cache hit from a rebuild.
#[derive(Default)]
pub struct StubCrm {
    pub deals: Vec<Deal>,
    pub users: Vec<Employee>,
    pub departments: Vec<Department>,
    pub fail: bool,
    calls: Mutex<usize>,
}

impl StubCrm {
    pub fn with_deals(mut self, deals: Vec<Deal>) -> Self {
        self.deals = deals;
        self
    }

    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }

    fn check(&self) -> DomainResult<()> {
        *self.calls.lock().unwrap() += 1;
        if self.fail {
            return Err(DealboardError::Network(format!("{WEBHOOK}/user.get.json timed out")));
        }
        Ok(())
    }
}

#[async_trait]
impl CrmSource for StubCrm {
    async fn list_deals(&self, _query: &ListQuery) -> DomainResult<Fetched<Deal>> {
        self.check()?;
        Ok(Fetched::complete(self.deals.clone()))
    }

    async fn list_users(&self, _query: &ListQuery) -> DomainResult<Fetched<Employee>> {
        self.check()?;
        Ok(Fetched::complete(self.users.clone()))
    }

    async fn list_departments(
        &self,
        _query: &ListQuery,
        _allow_list: &[u64],
    ) -> DomainResult<Fetched<Department>> {
        self.check()?;
        Ok(Fetched::complete(self.departments.clone()))
    }
}

/// Router wired to a stub CRM, a real file cache and a real audit log, both
/// inside a temp dir. The clock is pinned to 2025-04-10 09:00 Dubai time.
pub struct TestApp {
    pub router: Router,
    pub crm: Arc<StubCrm>,
    pub dir: TempDir,
}

impl TestApp {
    pub fn new(crm: StubCrm) -> Self {
        let dir = TempDir::new().expect("temp dir should be created");
        let mut config = Config::new(WEBHOOK, vec![SALES_DEPARTMENT]);
        config.cache.directory = Some(dir.path().join("cache"));
        config.logging.request_log_dir = dir.path().join("logs");

        let crm = Arc::new(crm);
        let clock: Arc<dyn Clock> =
            Arc::new(FixedClock(Utc.with_ymd_and_hms(2025, 4, 10, 5, 0, 0).unwrap()));
        let cache: Arc<dyn ReportCache> =
            Arc::new(FileReportCache::new(&config.cache, Arc::clone(&clock)));
        let context = AppContext::from_parts(&config, crm.clone(), cache, clock)
            .expect("context should build");

        Self { router: router(Arc::new(context)), crm, dir }
    }

    pub fn audit_log_path(&self) -> PathBuf {
        self.dir.path().join("logs/2025/04/10/requests.log")
    }

    pub async fn send(&self, method: &str, uri: &str) -> Response<Body> {
        let request = Request::builder().method(method).uri(uri).body(Body::empty()).unwrap();
        self.router.clone().oneshot(request).await.unwrap()
    }
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn header<'a>(response: &'a Response<Body>, name: &str) -> Option<&'a str> {
    response.headers().get(name).and_then(|value| value.to_str().ok())
}

pub fn employee(id: u64, name: &str, last_name: &str, position: Option<&str>) -> Employee {
    Employee {
        id,
        name: Some(name.to_string()),
        last_name: Some(last_name.to_string()),
        work_position: position.map(str::to_string),
        departments: vec![SALES_DEPARTMENT],
        ..Employee::default()
    }
}

pub fn sales_crm() -> StubCrm {
    StubCrm {
        users: vec![
            employee(1, "Omar", "Haddad", None),
            employee(2, "Jane", "Doe", Some("Property Consultant")),
        ],
        departments: vec![Department {
            id: SALES_DEPARTMENT,
            name: Some("Team Falcon".into()),
            head_id: Some(1),
        }],
        ..StubCrm::default()
    }
}
