//! Port for the remote CRM data source.
//!
//! Implementations page through the remote list endpoints until the server
//! cursor is exhausted or the query limit is reached. Upstream anomalies do
//! not surface as errors: the implementation logs them and returns what it
//! collected with [`Fetched::complete`] set to `false`.

use async_trait::async_trait;
use dealboard_domain::{Deal, Department, Employee, Fetched, ListQuery, Result};

/// Read-only access to CRM deals, users and departments.
#[async_trait]
pub trait CrmSource: Send + Sync {
    /// All deals matching `query`, truncated to `query.limit`.
    async fn list_deals(&self, query: &ListQuery) -> Result<Fetched<Deal>>;

    /// All users matching `query`.
    async fn list_users(&self, query: &ListQuery) -> Result<Fetched<Employee>>;

    /// Departments matching `query`, restricted to `allow_list` after
    /// fetching because the remote filter is not reliable for this resource.
    async fn list_departments(
        &self,
        query: &ListQuery,
        allow_list: &[u64],
    ) -> Result<Fetched<Department>>;
}
