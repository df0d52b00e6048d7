//! Report endpoint dispatch

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::{RawQuery, State};
use axum::http::header::{self, HeaderName, HeaderValue};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use dealboard_core::ReportParams;
use dealboard_domain::{DealboardError, ReportKind};
use serde_json::Map;
use tracing::{debug, error, warn};

use super::parse_query;
use crate::context::AppContext;

/// Handle one request.
///
/// `OPTIONS` answers the CORS preflight. Otherwise the `endpoint` query
/// parameter picks the report; unknown names are 404 and non-GET methods
/// on a known report are 405.
pub async fn dispatch(
    State(context): State<Arc<AppContext>>,
    method: Method,
    RawQuery(query): RawQuery,
) -> Response {
    if method == Method::OPTIONS {
        return preflight();
    }

    let params = parse_query(query.as_deref());
    let endpoint = params.get("endpoint").map_or("", String::as_str);

    let Ok(kind) = endpoint.parse::<ReportKind>() else {
        debug!(endpoint, "Unknown endpoint");
        return context.responses.error(
            StatusCode::NOT_FOUND,
            &format!("Resource '{endpoint}' not found"),
            Map::new(),
        );
    };

    if method != Method::GET {
        return context.responses.error(
            StatusCode::METHOD_NOT_ALLOWED,
            "Method Not Allowed",
            Map::new(),
        );
    }

    let report_params = match report_params(kind, &params) {
        Ok(report_params) => report_params,
        Err(err) => return error_response(&context, &err),
    };

    match context.reports.render(kind, report_params).await {
        Ok(rendered) => {
            let cache_state = if rendered.from_cache { "HIT" } else { "MISS" };
            context.responses.success(
                StatusCode::OK,
                &rendered.body,
                &[(HeaderName::from_static("x-cache"), HeaderValue::from_static(cache_state))],
                true,
            )
        }
        Err(err) => {
            error!(report = %kind, error = %err, error_kind = err.label(), "Report failed");
            error_response(&context, &err)
        }
    }
}

fn report_params(
    kind: ReportKind,
    params: &BTreeMap<String, String>,
) -> Result<ReportParams, DealboardError> {
    let year = match (kind, params.get("year")) {
        (ReportKind::Dashboard, Some(raw)) => Some(parse_year(raw)?),
        _ => None,
    };
    Ok(ReportParams { year })
}

fn parse_year(raw: &str) -> Result<i32, DealboardError> {
    raw.trim()
        .parse::<i32>()
        .ok()
        .filter(|year| (1..=9999).contains(year))
        .ok_or_else(|| DealboardError::InvalidInput(format!("Invalid year: {raw}")))
}

/// Status and client-facing message for a failed request. Upstream and
/// internal details stay in the logs.
fn error_status(err: &DealboardError) -> (StatusCode, String) {
    match err {
        DealboardError::InvalidInput(message) => (StatusCode::BAD_REQUEST, message.clone()),
        DealboardError::NotFound(message) => (StatusCode::NOT_FOUND, message.clone()),
        DealboardError::Network(_) | DealboardError::Upstream(_) => {
            (StatusCode::BAD_GATEWAY, "Failed to fetch data from CRM".to_string())
        }
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string()),
    }
}

fn error_response(context: &AppContext, err: &DealboardError) -> Response {
    let (status, message) = error_status(err);
    if status.is_server_error() {
        warn!(status = status.as_u16(), error_kind = err.label(), "Responding with server error");
    }
    context.responses.error(status, &message, Map::new())
}

fn preflight() -> Response {
    (
        StatusCode::NO_CONTENT,
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, "GET, POST, PUT, DELETE, OPTIONS"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type, Authorization, X-Requested-With"),
        ],
    )
        .into_response()
}
