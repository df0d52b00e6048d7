//! HTTP routing
//!
//! The server exposes a single resource selected by `?endpoint=<report>` on
//! any path. Every request except CORS preflights is written to the audit log
//! before dispatch.

pub mod reports;

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::Method;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::Router;
use dealboard_infra::AuditEntry;
use tracing::warn;

use crate::context::AppContext;

/// Router serving every path through [`reports::dispatch`].
pub fn router(context: Arc<AppContext>) -> Router {
    Router::new()
        .fallback(reports::dispatch)
        .layer(middleware::from_fn_with_state(Arc::clone(&context), audit_requests))
        .with_state(context)
}

async fn audit_requests(
    State(context): State<Arc<AppContext>>,
    request: Request,
    next: Next,
) -> Response {
    if request.method() != Method::OPTIONS {
        let entry = AuditEntry {
            method: request.method().to_string(),
            uri: request.uri().to_string(),
            query: parse_query(request.uri().query()),
        };
        if let Err(err) = context.audit.record(&entry).await {
            warn!(error = %err, uri = %entry.uri, "Failed to write request audit log");
        }
    }
    next.run(request).await
}

/// Decode a query string. Repeated keys keep the last value.
pub fn parse_query(query: Option<&str>) -> BTreeMap<String, String> {
    query
        .map(|raw| {
            url::form_urlencoded::parse(raw.as_bytes())
                .map(|(key, value)| (key.into_owned(), value.into_owned()))
                .collect()
        })
        .unwrap_or_default()
}
