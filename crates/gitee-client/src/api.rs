//! Webhook and git-data endpoints.
//!
//! The façade only needs a narrow slice of these endpoint groups, so they
//! sit behind [`WebhooksApi`] and [`GitDataApi`]. [`HttpGiteeApi`] is the
//! HTTP implementation; tests and callers may substitute their own.

use async_trait::async_trait;
use serde::Serialize;

use crate::config::GiteeConfig;
use crate::error::Result;
use crate::transport::HttpTransport;
use crate::types::{Blob, Hook, ListHooksOptions, Tree, UpdateHookOptions};

/// Webhook endpoints of a repository.
#[async_trait]
pub trait WebhooksApi: Send + Sync {
    /// List the webhooks of `owner/repo`.
    async fn list_hooks(
        &self,
        owner: &str,
        repo: &str,
        options: &ListHooksOptions,
    ) -> Result<Vec<Hook>>;

    /// Update webhook `id`, pointing it at `url`.
    async fn update_hook(
        &self,
        owner: &str,
        repo: &str,
        id: i64,
        url: &str,
        options: &UpdateHookOptions,
    ) -> Result<Hook>;

    /// Delete webhook `id`.
    async fn delete_hook(&self, owner: &str, repo: &str, id: i64) -> Result<()>;
}

/// Git object endpoints of a repository.
#[async_trait]
pub trait GitDataApi: Send + Sync {
    /// Fetch a blob by SHA.
    async fn get_blob(&self, owner: &str, repo: &str, sha: &str) -> Result<Blob>;

    /// Fetch a tree by SHA, branch name or commit.
    ///
    /// `recursive` follows the remote's integer convention: `1` lists the
    /// tree recursively. The value is sent as given.
    async fn get_tree(&self, owner: &str, repo: &str, sha: &str, recursive: i32) -> Result<Tree>;
}

/// HTTP implementation of [`WebhooksApi`] and [`GitDataApi`].
///
/// Carries its own optional access token, sent as `access_token` with
/// every request.
#[derive(Debug, Clone, Default)]
pub struct HttpGiteeApi {
    config: GiteeConfig,
    access_token: Option<String>,
}

#[derive(Serialize)]
struct UpdateHookRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    url: &'a str,
    #[serde(flatten)]
    options: &'a UpdateHookOptions,
}

impl HttpGiteeApi {
    /// Create an API bound to `config`.
    pub fn new(config: GiteeConfig, access_token: Option<String>) -> Self {
        Self {
            config,
            access_token,
        }
    }

    fn transport(&self) -> Result<HttpTransport> {
        HttpTransport::new(&self.config.api_url, &self.config.user_agent)
    }

    fn token_query(&self) -> Vec<(&'static str, String)> {
        self.access_token
            .iter()
            .map(|t| ("access_token", t.clone()))
            .collect()
    }
}

#[async_trait]
impl WebhooksApi for HttpGiteeApi {
    async fn list_hooks(
        &self,
        owner: &str,
        repo: &str,
        options: &ListHooksOptions,
    ) -> Result<Vec<Hook>> {
        let mut query = self.token_query();
        if let Some(page) = options.page {
            query.push(("page", page.to_string()));
        }
        if let Some(per_page) = options.per_page {
            query.push(("per_page", per_page.to_string()));
        }

        self.transport()?
            .get(&format!("/v5/repos/{owner}/{repo}/hooks"), &query)
            .await
    }

    async fn update_hook(
        &self,
        owner: &str,
        repo: &str,
        id: i64,
        url: &str,
        options: &UpdateHookOptions,
    ) -> Result<Hook> {
        let request = UpdateHookRequest {
            access_token: self.access_token.as_deref(),
            url,
            options,
        };

        self.transport()?
            .patch_json(&format!("/v5/repos/{owner}/{repo}/hooks/{id}"), &request)
            .await
    }

    async fn delete_hook(&self, owner: &str, repo: &str, id: i64) -> Result<()> {
        self.transport()?
            .delete(
                &format!("/v5/repos/{owner}/{repo}/hooks/{id}"),
                &self.token_query(),
            )
            .await
    }
}

#[async_trait]
impl GitDataApi for HttpGiteeApi {
    async fn get_blob(&self, owner: &str, repo: &str, sha: &str) -> Result<Blob> {
        self.transport()?
            .get(
                &format!("/v5/repos/{owner}/{repo}/git/blobs/{sha}"),
                &self.token_query(),
            )
            .await
    }

    async fn get_tree(&self, owner: &str, repo: &str, sha: &str, recursive: i32) -> Result<Tree> {
        let mut query = self.token_query();
        query.push(("recursive", recursive.to_string()));

        self.transport()?
            .get(&format!("/v5/repos/{owner}/{repo}/git/trees/{sha}"), &query)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_query_empty_without_token() {
        let api = HttpGiteeApi::default();
        assert!(api.token_query().is_empty());
    }

    #[test]
    fn test_update_request_flattens_options() {
        let options = UpdateHookOptions {
            password: Some("pw".to_string()),
            push_events: Some(true),
            ..Default::default()
        };
        let request = UpdateHookRequest {
            access_token: Some("tok"),
            url: "https://ci.example.com/hook",
            options: &options,
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "access_token": "tok",
                "url": "https://ci.example.com/hook",
                "password": "pw",
                "push_events": true
            })
        );
    }
}
