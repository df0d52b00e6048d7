//! JSON response emitter
//!
//! Every response the server produces goes through [`ResponseEmitter`], so
//! content type, CORS and cache headers are set in one place.

use axum::body::Body;
use axum::http::header::{self, HeaderMap, HeaderName, HeaderValue};
use axum::http::StatusCode;
use axum::response::Response;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::error;

const ENCODE_FAILURE_BODY: &str = r#"{"error":"Failed to encode JSON"}"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseEmitter {
    max_age_seconds: u64,
}

impl ResponseEmitter {
    /// `max_age_seconds` is advertised on cacheable responses.
    pub const fn new(max_age_seconds: u64) -> Self {
        Self { max_age_seconds }
    }

    /// Serialize `data` with `status`.
    ///
    /// `extra_headers` are applied last and replace any standard header with
    /// the same name.
    pub fn success<T: Serialize + ?Sized>(
        &self,
        status: StatusCode,
        data: &T,
        extra_headers: &[(HeaderName, HeaderValue)],
        cacheable: bool,
    ) -> Response {
        let mut headers = self.standard_headers(cacheable);
        for (name, value) in extra_headers {
            headers.insert(name.clone(), value.clone());
        }
        build(status, headers, encode(data))
    }

    /// `{"error": message, ..extra}`, never cacheable.
    ///
    /// A key named `error` in `extra` replaces the message.
    pub fn error(&self, status: StatusCode, message: &str, extra: Map<String, Value>) -> Response {
        let mut payload = Map::new();
        payload.insert("error".to_string(), Value::String(message.to_string()));
        payload.extend(extra);
        build(status, self.standard_headers(false), encode(&payload))
    }

    fn standard_headers(&self, cacheable: bool) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
        headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static("Content-Type"));

        if cacheable {
            let policy = format!("max-age={}, public", self.max_age_seconds);
            if let Ok(value) = HeaderValue::from_str(&policy) {
                headers.insert(header::CACHE_CONTROL, value);
            }
        } else {
            headers.insert(
                header::CACHE_CONTROL,
                HeaderValue::from_static("no-cache, no-store, must-revalidate"),
            );
            headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
            headers.insert(header::EXPIRES, HeaderValue::from_static("0"));
        }
        headers
    }
}

fn encode<T: Serialize + ?Sized>(data: &T) -> Vec<u8> {
    serde_json::to_vec(data).unwrap_or_else(|err| {
        error!(error = %err, "JSON encode error");
        ENCODE_FAILURE_BODY.as_bytes().to_vec()
    })
}

fn build(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Response {
    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    response
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use axum::body::to_bytes;
    use serde::ser::Error as _;
    use serde_json::json;

    use super::*;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn header_str<'a>(response: &'a Response, name: &str) -> Option<&'a str> {
        response.headers().get(name).and_then(|v| v.to_str().ok())
    }

    #[tokio::test]
    async fn cacheable_success_sets_public_max_age() {
        let emitter = ResponseEmitter::new(300);
        let response = emitter.success(StatusCode::OK, &json!({"jan": {}}), &[], true);

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(header_str(&response, "content-type"), Some("application/json"));
        assert_eq!(header_str(&response, "access-control-allow-origin"), Some("*"));
        assert_eq!(header_str(&response, "access-control-allow-headers"), Some("Content-Type"));
        assert_eq!(header_str(&response, "cache-control"), Some("max-age=300, public"));
        assert!(response.headers().get("pragma").is_none());
        assert_eq!(body_json(response).await, json!({"jan": {}}));
    }

    #[tokio::test]
    async fn non_cacheable_success_disables_caching() {
        let emitter = ResponseEmitter::new(300);
        let response = emitter.success(StatusCode::OK, &json!([]), &[], false);

        assert_eq!(
            header_str(&response, "cache-control"),
            Some("no-cache, no-store, must-revalidate")
        );
        assert_eq!(header_str(&response, "pragma"), Some("no-cache"));
        assert_eq!(header_str(&response, "expires"), Some("0"));
    }

    #[tokio::test]
    async fn extra_headers_override_defaults() {
        let emitter = ResponseEmitter::new(60);
        let extra = [
            (header::CACHE_CONTROL, HeaderValue::from_static("max-age=5")),
            (HeaderName::from_static("x-cache"), HeaderValue::from_static("HIT")),
        ];
        let response = emitter.success(StatusCode::OK, &json!(1), &extra, true);

        assert_eq!(header_str(&response, "cache-control"), Some("max-age=5"));
        assert_eq!(header_str(&response, "x-cache"), Some("HIT"));
    }

    #[tokio::test]
    async fn error_merges_extra_fields() {
        let emitter = ResponseEmitter::new(300);
        let mut extra = Map::new();
        extra.insert("endpoint".into(), json!("dashboard"));

        let response = emitter.error(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed", extra);

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(header_str(&response, "pragma"), Some("no-cache"));
        assert_eq!(
            body_json(response).await,
            json!({"error": "Method Not Allowed", "endpoint": "dashboard"})
        );
    }

    struct Unencodable;

    impl Serialize for Unencodable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("boom"))
        }
    }

    #[tokio::test]
    async fn encode_failure_degrades_to_fixed_payload() {
        let emitter = ResponseEmitter::new(300);
        let response = emitter.success(StatusCode::OK, &Unencodable, &[], true);

        assert_eq!(body_json(response).await, json!({"error": "Failed to encode JSON"}));
    }

    #[tokio::test]
    async fn non_string_map_keys_fail_to_encode() {
        let emitter = ResponseEmitter::new(300);
        let data = BTreeMap::from([(vec![1_u8], 1)]);
        let response = emitter.success(StatusCode::OK, &data, &[], true);

        assert_eq!(body_json(response).await, json!({"error": "Failed to encode JSON"}));
    }
}
