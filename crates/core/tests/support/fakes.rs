//! Fake CRM source and in-memory cache

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dealboard_core::{CrmSource, ReportCache};
use dealboard_domain::{
    DealboardError, Deal, Department, Employee, Fetched, ListQuery, Result as DomainResult,
};
use serde_json::Value;

/// Which list call a recorded query went to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Deals,
    Users,
    Departments,
}

/// In-memory `CrmSource`.
///
/// Returns fixed records regardless of the filter and records every query it
/// receives. `partial` marks every response as incomplete; `fail_deals`
/// makes deal calls return a network error.
#[derive(Default, Clone)]
pub struct FakeCrmSource {
    deals: Arc<Vec<Deal>>,
    users: Arc<Vec<Employee>>,
    departments: Arc<Vec<Department>>,
    partial: bool,
    fail_deals: bool,
    calls: Arc<Mutex<Vec<(Resource, ListQuery)>>>,
}

impl FakeCrmSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_deals(mut self, deals: Vec<Deal>) -> Self {
        self.deals = Arc::new(deals);
        self
    }

    pub fn with_users(mut self, users: Vec<Employee>) -> Self {
        self.users = Arc::new(users);
        self
    }

    pub fn with_departments(mut self, departments: Vec<Department>) -> Self {
        self.departments = Arc::new(departments);
        self
    }

    pub fn partial(mut self) -> Self {
        self.partial = true;
        self
    }

    pub fn failing_deals(mut self) -> Self {
        self.fail_deals = true;
        self
    }

    pub fn calls(&self) -> Vec<(Resource, ListQuery)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, resource: Resource) -> Vec<ListQuery> {
        self.calls()
            .into_iter()
            .filter(|(called, _)| *called == resource)
            .map(|(_, query)| query)
            .collect()
    }

    fn record(&self, resource: Resource, query: &ListQuery) {
        self.calls.lock().unwrap().push((resource, query.clone()));
    }

    fn respond<T: Clone>(&self, items: &[T], limit: Option<usize>) -> Fetched<T> {
        let mut items = items.to_vec();
        if let Some(limit) = limit {
            items.truncate(limit);
        }
        if self.partial {
            Fetched::partial(items)
        } else {
            Fetched::complete(items)
        }
    }
}

#[async_trait]
impl CrmSource for FakeCrmSource {
    async fn list_deals(&self, query: &ListQuery) -> DomainResult<Fetched<Deal>> {
        self.record(Resource::Deals, query);
        if self.fail_deals {
            return Err(DealboardError::Network("connection refused".into()));
        }
        Ok(self.respond(&self.deals, query.limit))
    }

    async fn list_users(&self, query: &ListQuery) -> DomainResult<Fetched<Employee>> {
        self.record(Resource::Users, query);
        Ok(self.respond(&self.users, query.limit))
    }

    async fn list_departments(
        &self,
        query: &ListQuery,
        allow_list: &[u64],
    ) -> DomainResult<Fetched<Department>> {
        self.record(Resource::Departments, query);
        let allowed: Vec<Department> =
            self.departments.iter().filter(|d| allow_list.contains(&d.id)).cloned().collect();
        Ok(self.respond(&allowed, query.limit))
    }
}

/// `ReportCache` backed by a map; entries never expire.
#[derive(Default, Clone)]
pub struct MemoryCache {
    entries: Arc<Mutex<HashMap<String, Value>>>,
    fail_writes: bool,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(self, key: &str, value: Value) -> Self {
        self.entries.lock().unwrap().insert(key.to_string(), value);
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn entry(&self, key: &str) -> Option<Value> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.lock().unwrap().keys().cloned().collect();
        keys.sort();
        keys
    }
}

#[async_trait]
impl ReportCache for MemoryCache {
    async fn get(&self, key: &str) -> Option<Value> {
        self.entry(key)
    }

    async fn set(&self, key: &str, value: &Value) -> DomainResult<()> {
        if self.fail_writes {
            return Err(DealboardError::Cache("disk full".into()));
        }
        self.entries.lock().unwrap().insert(key.to_string(), value.clone());
        Ok(())
    }
}
