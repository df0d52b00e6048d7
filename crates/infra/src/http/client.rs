use std::time::Duration;

use dealboard_domain::constants::DEFAULT_HTTP_TIMEOUT_SECS;
use dealboard_domain::Result;
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response};
use tracing::debug;

use crate::errors::InfraError;

/// Outbound HTTP with a per-request timeout.
///
/// Each request goes out exactly once; callers decide what a failure means.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: ReqwestClient,
}

impl HttpClient {
    /// Client with the default timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS))
    }

    /// # Errors
    ///
    /// Returns `DealboardError::Network` if the TLS backend cannot be set up.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .no_proxy()
            .build()
            .map_err(InfraError::from)?;
        Ok(Self { client })
    }

    pub fn request<U>(&self, method: Method, url: U) -> RequestBuilder
    where
        U: reqwest::IntoUrl,
    {
        self.client.request(method, url)
    }

    /// Send `builder` once.
    ///
    /// Any HTTP status comes back as `Ok`; transport failures are mapped
    /// through [`InfraError`].
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let request = builder.build().map_err(InfraError::from)?;
        let method = request.method().clone();
        let path = request.url().path().to_string();
        debug!(%method, %path, "sending HTTP request");

        match self.client.execute(request).await {
            Ok(response) => {
                debug!(%method, %path, status = %response.status(), "received HTTP response");
                Ok(response)
            }
            Err(err) => {
                debug!(%method, %path, error = %err, "HTTP request failed");
                Err(InfraError::from(err).into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::net::TcpListener;

    use dealboard_domain::DealboardError;
    use reqwest::StatusCode;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn returns_successful_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::new().expect("http client");
        let response =
            client.send(client.request(Method::POST, server.uri())).await.expect("response");

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn server_errors_are_sent_once_and_returned() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let client = HttpClient::new().expect("http client");
        let response = client
            .send(client.request(Method::POST, server.uri()).body("{}"))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(server.received_requests().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn slow_response_times_out_as_network_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
            .mount(&server)
            .await;

        let client = HttpClient::with_timeout(Duration::from_millis(50)).expect("http client");
        let result = client.send(client.request(Method::POST, server.uri())).await;

        assert!(matches!(result, Err(DealboardError::Network(_))), "got {result:?}");
    }

    #[tokio::test]
    async fn connection_refused_is_a_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = HttpClient::new().expect("http client");
        let result = client.send(client.request(Method::POST, format!("http://{addr}"))).await;

        assert!(matches!(result, Err(DealboardError::Network(_))), "got {result:?}");
    }
}
