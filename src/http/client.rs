//! Thin HTTP client used for outbound form submissions.

use anyhow::Result;
use log::debug;
use reqwest::{Client, StatusCode};
use serde::Serialize;

/// User agent sent with every outbound request.
pub const USER_AGENT: &str = "xbesh-cli";

/// Build the shared HTTP client.
pub fn build_http_client() -> Result<HttpClient> {
    let client = Client::builder().user_agent(USER_AGENT).build()?;
    Ok(HttpClient::new(client))
}

/// HTTP client wrapper. Every call is a single attempt: no retry, no timeout.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// POSTs `body` as JSON and returns the response status.
    ///
    /// Transport failures are returned as errors; any HTTP status, including
    /// 4xx/5xx, is returned as `Ok` for the caller to judge.
    #[tracing::instrument(skip(self, body))]
    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &T,
    ) -> reqwest::Result<StatusCode> {
        debug!("POST JSON to {}...", url);

        let response = self.client.post(url).json(body).send().await?;
        let status = response.status();

        debug!("POST {} answered {}", url, status);
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    #[tokio::test]
    async fn test_post_json_sends_body_and_content_type() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("POST", "/f/launch")
            .match_header("content-type", "application/json")
            .match_header("user-agent", USER_AGENT)
            .match_body(Matcher::Json(json!({"email": "a@b.co", "message": "hi"})))
            .with_status(200)
            .create_async()
            .await;

        let client = build_http_client().unwrap();
        let status = client
            .post_json(
                &format!("{}/f/launch", url),
                &json!({"email": "a@b.co", "message": "hi"}),
            )
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_post_json_returns_error_status_without_retry() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("POST", "/f/launch")
            .with_status(503)
            .expect(1)
            .create_async()
            .await;

        let client = HttpClient::new(Client::new());
        let status = client
            .post_json(&format!("{}/f/launch", url), &json!({}))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_post_json_connection_refused() {
        let client = HttpClient::new(Client::new());
        let result = client
            .post_json("http://127.0.0.1:1/unreachable", &json!({}))
            .await;

        assert!(result.is_err());
    }
}
