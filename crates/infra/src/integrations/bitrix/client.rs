/// Bitrix24 REST client for deal, user and department listings
use std::time::Duration;

use async_trait::async_trait;
use dealboard_core::CrmSource;
use dealboard_domain::constants::{fields, methods};
use dealboard_domain::{
    BitrixConfig, DealboardError, Deal, Department, Employee, Fetched, ListQuery, Result,
    SortDirection,
};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, warn};

use super::types::{next_offset, ListEnvelope};
use crate::http::HttpClient;

/// Paginating client for the Bitrix24 webhook REST API.
///
/// Every list call follows the server cursor until it runs out or the query
/// limit is reached. Anything unusable from the server ends the walk early:
/// the anomaly is logged and the records collected so far are returned as
/// [`Fetched::partial`].
pub struct BitrixClient {
    webhook_url: String,
    access_token: Option<String>,
    http_client: HttpClient,
}

impl BitrixClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Fails when the underlying HTTP client cannot be built.
    pub fn new(config: &BitrixConfig) -> Result<Self> {
        let http_client = HttpClient::with_timeout(Duration::from_secs(config.timeout_seconds))?;

        Ok(Self::with_http_client(&config.webhook_url, config.access_token.clone(), http_client))
    }

    /// Create a client around an existing HTTP client (for testing)
    pub fn with_http_client(
        webhook_url: &str,
        access_token: Option<String>,
        http_client: HttpClient,
    ) -> Self {
        Self {
            webhook_url: webhook_url.trim_end_matches('/').to_string(),
            access_token,
            http_client,
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/{method}.json", self.webhook_url)
    }

    /// Walk every page of `method` for `query`.
    async fn fetch_all<T: DeserializeOwned>(&self, method: &str, query: &ListQuery) -> Fetched<T> {
        let url = self.method_url(method);
        let mut items: Vec<T> = Vec::new();
        let mut start: u64 = 0;

        loop {
            let page = match self.fetch_page(&url, query, start).await {
                Ok(page) => page,
                Err(err) => {
                    error!(method, start, error = %err, "Bitrix list call failed; returning partial data");
                    return Fetched::partial(truncate(items, query.limit));
                }
            };

            let received = page.records.len();
            for record in page.records {
                match serde_json::from_value::<T>(record) {
                    Ok(item) => items.push(item),
                    Err(err) => warn!(method, start, error = %err, "Skipping undecodable Bitrix record"),
                }
            }
            debug!(method, start, received, total = items.len(), "Fetched Bitrix page");

            if query.is_satisfied_by(items.len()) {
                break;
            }

            match page.next {
                Some(next) if next > start => start = next,
                Some(next) => {
                    warn!(method, start, next, "Bitrix cursor did not advance; stopping");
                    return Fetched::partial(truncate(items, query.limit));
                }
                None => break,
            }
        }

        Fetched::complete(truncate(items, query.limit))
    }

    async fn fetch_page(&self, url: &str, query: &ListQuery, start: u64) -> Result<Page> {
        let mut body = serde_json::to_value(query)
            .map_err(|err| DealboardError::Serialization(err.to_string()))?;
        if let Value::Object(map) = &mut body {
            map.insert("start".into(), Value::from(start));
        }

        let mut request = self.http_client.request(Method::POST, url).json(&body);
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        let response = self.http_client.send(request).await?;
        let status = response.status();
        if !status.is_success() {
            let error_text =
                response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            return Err(DealboardError::Upstream(format!(
                "Bitrix API error (HTTP {status}): {error_text}"
            )));
        }

        let envelope: ListEnvelope = response.json().await.map_err(|err| {
            DealboardError::Upstream(format!("undecodable Bitrix response: {err}"))
        })?;

        let Some(result) = envelope.result else {
            return Err(DealboardError::Upstream(format!(
                "Bitrix response without result: {}",
                envelope.describe_error()
            )));
        };

        let records = match result {
            Value::Array(records) => records,
            other => {
                return Err(DealboardError::Upstream(format!(
                    "Bitrix result is not a list: {other}"
                )))
            }
        };

        Ok(Page { records, next: next_offset(envelope.next.as_ref()) })
    }
}

struct Page {
    records: Vec<Value>,
    next: Option<u64>,
}

fn truncate<T>(mut items: Vec<T>, limit: Option<usize>) -> Vec<T> {
    if let Some(limit) = limit {
        items.truncate(limit);
    }
    items
}

#[async_trait]
impl CrmSource for BitrixClient {
    async fn list_deals(&self, query: &ListQuery) -> Result<Fetched<Deal>> {
        let mut query = query.clone();
        if query.select.is_empty() {
            query = query.select([fields::ID, fields::TITLE]);
        }
        if query.order.is_empty() {
            query = query.order(fields::DATE_CREATE, SortDirection::Desc);
        }
        Ok(self.fetch_all(methods::DEAL_LIST, &query).await)
    }

    async fn list_users(&self, query: &ListQuery) -> Result<Fetched<Employee>> {
        let mut query = query.clone();
        if query.order.is_empty() {
            query = query.order(fields::ID, SortDirection::Asc);
        }
        Ok(self.fetch_all(methods::USER_GET, &query).await)
    }

    async fn list_departments(
        &self,
        query: &ListQuery,
        allow_list: &[u64],
    ) -> Result<Fetched<Department>> {
        let mut fetched: Fetched<Department> = self.fetch_all(methods::DEPARTMENT_GET, query).await;
        fetched.items.retain(|department| allow_list.contains(&department.id));
        Ok(fetched)
    }
}
