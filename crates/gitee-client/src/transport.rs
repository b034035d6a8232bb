//! Minimal JSON-over-HTTP transport.
//!
//! A transport is bound to one host URL and is meant to be built for a
//! single call and dropped afterwards.

use crate::error::{RequestError, Result};
use reqwest::{Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

/// Query parameters, already rendered as strings.
pub(crate) type Query<'a> = [(&'a str, String)];

/// HTTP transport bound to a host URL.
pub(crate) struct HttpTransport {
    client: Client,
    host_url: String,
}

impl HttpTransport {
    /// Create a transport for `host_url`.
    pub(crate) fn new(host_url: &str, user_agent: &str) -> Result<Self> {
        let client = Client::builder().user_agent(user_agent).build()?;

        Ok(Self {
            client,
            host_url: host_url.to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.host_url)
    }

    /// Make a GET request and decode the JSON response.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str, query: &Query<'_>) -> Result<T> {
        debug!(method = "GET", path, "Sending request");
        let url = self.url(path);
        let response = self.send(self.client.get(&url).query(query), &url).await?;
        Self::decode(response).await
    }

    /// Make a POST request with a JSON body and decode the JSON response.
    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        debug!(method = "POST", path, "Sending request");
        let url = self.url(path);
        let response = self.send(self.client.post(&url).json(body), &url).await?;
        Self::decode(response).await
    }

    /// Make a POST request carrying only query parameters.
    pub(crate) async fn post_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Query<'_>,
    ) -> Result<T> {
        debug!(method = "POST", path, "Sending request");
        let url = self.url(path);
        let response = self.send(self.client.post(&url).query(query), &url).await?;
        Self::decode(response).await
    }

    /// Make a PATCH request with a JSON body and decode the JSON response.
    pub(crate) async fn patch_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        debug!(method = "PATCH", path, "Sending request");
        let url = self.url(path);
        let response = self.send(self.client.patch(&url).json(body), &url).await?;
        Self::decode(response).await
    }

    /// Make a DELETE request, discarding any response body.
    pub(crate) async fn delete(&self, path: &str, query: &Query<'_>) -> Result<()> {
        debug!(method = "DELETE", path, "Sending request");
        let url = self.url(path);
        self.send(self.client.delete(&url).query(query), &url).await?;
        Ok(())
    }

    async fn send(&self, request: RequestBuilder, url: &str) -> Result<Response> {
        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    warn!(status, url, error = %e, "Failed to read error response body");
                    String::new()
                }
            };
            warn!(status, url, "Request failed");
            return Err(RequestError::Status {
                url: url.to_string(),
                status,
                body,
            });
        }

        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let body = response.bytes().await?;
        decode_body(&body)
    }
}

/// Parse a JSON response body. Only malformed or mismatched JSON is a
/// decode error; failures reading the body surface as network errors.
fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|e| RequestError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_host_and_path() {
        let transport = HttpTransport::new("https://gitee.com/api", "test-agent").unwrap();
        assert_eq!(
            transport.url("/v5/user/repos"),
            "https://gitee.com/api/v5/user/repos"
        );
    }

    #[test]
    fn test_decode_body_mismatch_is_decode_error() {
        let result: Result<Vec<String>> = decode_body(br#"{"message":"not a list"}"#);
        assert!(matches!(result, Err(RequestError::Decode(_))));
    }

    #[test]
    fn test_decode_body_parses_json() {
        let names: Vec<String> = decode_body(br#"["a","b"]"#).unwrap();
        assert_eq!(names, vec!["a", "b"]);
    }
}
