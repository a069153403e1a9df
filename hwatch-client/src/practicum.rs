//! Review service endpoint

use hwatch_core::domain::cursor::PollCursor;
use hwatch_core::dto::homework::StatusQuery;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use tracing::{error, info};

use crate::error::{ClientError, Result};

/// Homework status endpoint of the Practicum API
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// HTTP client for the homework review service
///
/// Every query opens a fresh request; retries are left to the caller.
#[derive(Debug, Clone)]
pub struct PracticumClient {
    /// Full URL of the status endpoint (the trailing slash is significant)
    endpoint: String,
    /// OAuth token sent in the `Authorization` header
    token: String,
    /// HTTP client instance
    client: Client,
}

impl PracticumClient {
    /// Create a new review service client
    ///
    /// # Arguments
    /// * `endpoint` - URL of the homework status endpoint
    /// * `token` - OAuth token of the student account
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(endpoint, token, Client::new())
    }

    /// Create a new review service client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client,
        }
    }

    /// Get the status endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Query homework statuses changed after `cursor`
    ///
    /// Returns the decoded JSON body untouched; checking its shape is up to
    /// the caller.
    ///
    /// # Errors
    /// * [`ClientError::Transport`] - the request never got an answer
    /// * [`ClientError::EndpointUnavailable`] - the answer was not `200 OK`
    /// * [`ClientError::MalformedResponse`] - the body is not JSON
    pub async fn homework_statuses(&self, cursor: PollCursor) -> Result<serde_json::Value> {
        info!(
            "Requesting homework statuses from {} (from_date={})",
            self.endpoint, cursor
        );

        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&StatusQuery::from(cursor))
            .send()
            .await
            .map_err(|e| {
                error!("Request to {} failed: {}", self.endpoint, e);
                ClientError::Transport(e)
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            error!("Endpoint {} is unavailable: status {}", self.endpoint, status);
            return Err(ClientError::EndpointUnavailable {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|e| {
            error!("Failed to read response body from {}: {}", self.endpoint, e);
            ClientError::Transport(e)
        })?;

        serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse JSON response from {}: {}", self.endpoint, e);
            ClientError::MalformedResponse(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> PracticumClient {
        PracticumClient::new(format!("{}/homework_statuses/", server.uri()), "secret")
    }

    #[tokio::test]
    async fn test_sends_token_and_cursor() {
        let server = MockServer::start().await;
        let body = json!({"homeworks": [], "current_date": 1000});

        Mock::given(method("GET"))
            .and(path("/homework_statuses/"))
            .and(header("Authorization", "OAuth secret"))
            .and(query_param("from_date", "1000"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let response = client.homework_statuses(PollCursor::new(1000)).await.unwrap();
        assert_eq!(response, body);
    }

    #[tokio::test]
    async fn test_non_ok_status_is_endpoint_unavailable() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client
            .homework_statuses(PollCursor::new(1000))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::EndpointUnavailable { status: 503 }));
    }

    #[tokio::test]
    async fn test_invalid_json_is_malformed_response() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client
            .homework_statuses(PollCursor::new(1000))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        // Nothing listens on the discard port
        let client = PracticumClient::new("http://127.0.0.1:9/homework_statuses/", "secret");
        let err = client
            .homework_statuses(PollCursor::new(1000))
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Transport(_)));
    }
}
