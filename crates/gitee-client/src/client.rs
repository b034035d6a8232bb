//! Gitee client façade.

use serde::Serialize;
use tracing::{info, warn};

use crate::api::{GitDataApi, HttpGiteeApi, WebhooksApi};
use crate::config::GiteeConfig;
use crate::error::Result;
use crate::transport::HttpTransport;
use crate::types::{
    AccessToken, Blob, Compare, Hook, HookSpec, ListHooksOptions, Project, RepoCommit, Tree,
    UpdateHookOptions,
};

/// Client for the Gitee v5 API.
///
/// Every method performs exactly one request. Webhook listing, update and
/// deletion as well as blob and tree retrieval go through the sub-API `A`;
/// the other endpoints are called directly against the configured hosts.
///
/// # Example
///
/// ```rust,ignore
/// use gitee_client::GiteeClient;
///
/// let client = GiteeClient::new(Some("token".to_string()));
/// let projects = client
///     .list_repositories_for_authenticated_user("token", "", 1, 20)
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct GiteeClient<A = HttpGiteeApi> {
    api: A,
    config: GiteeConfig,
}

/// Body of the create-webhook request. The remote expects the event
/// flags of this endpoint as strings.
#[derive(Debug, Serialize)]
struct CreateHookRequest<'a> {
    access_token: &'a str,
    url: &'a str,
    password: &'a str,
    push_events: &'static str,
    tag_push_events: &'static str,
    merge_requests_events: &'static str,
}

impl GiteeClient<HttpGiteeApi> {
    /// Create a client against the public Gitee hosts.
    ///
    /// `access_token` is used by the webhook and git-data endpoints; the
    /// other methods take their token explicitly.
    pub fn new(access_token: Option<String>) -> Self {
        Self::with_config(GiteeConfig::default(), access_token)
    }

    /// Create a client with explicit configuration.
    pub fn with_config(config: GiteeConfig, access_token: Option<String>) -> Self {
        Self {
            api: HttpGiteeApi::new(config.clone(), access_token),
            config,
        }
    }
}

impl<A> GiteeClient<A>
where
    A: WebhooksApi + GitDataApi,
{
    /// Create a client delegating webhook and git-data calls to `api`.
    pub fn with_api(api: A, config: GiteeConfig) -> Self {
        Self { api, config }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &GiteeConfig {
        &self.config
    }

    /// Returns the webhook and git-data API in use.
    pub fn api(&self) -> &A {
        &self.api
    }

    fn api_transport(&self) -> Result<HttpTransport> {
        HttpTransport::new(&self.config.api_url, &self.config.user_agent)
    }

    /// List repositories owned by the authenticated user, filtered by
    /// `keyword`.
    pub async fn list_repositories_for_authenticated_user(
        &self,
        access_token: &str,
        keyword: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Project>> {
        let query = [
            ("access_token", access_token.to_string()),
            ("visibility", "all".to_string()),
            ("affiliation", "owner".to_string()),
            ("q", keyword.to_string()),
            ("page", page.to_string()),
            ("per_page", per_page.to_string()),
        ];

        self.api_transport()?.get("/v5/user/repos", &query).await
    }

    /// List all repositories of organization `org`.
    pub async fn list_repositories_for_org(
        &self,
        access_token: &str,
        org: &str,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Project>> {
        let query = [
            ("access_token", access_token.to_string()),
            ("type", "all".to_string()),
            ("page", page.to_string()),
            ("per_page", per_page.to_string()),
        ];

        self.api_transport()?
            .get(&format!("/v5/orgs/{org}/repos"), &query)
            .await
    }

    /// List the webhooks of `owner/repo`.
    pub async fn list_hooks(
        &self,
        owner: &str,
        repo: &str,
        options: &ListHooksOptions,
    ) -> Result<Vec<Hook>> {
        self.api.list_hooks(owner, repo, options).await
    }

    /// Delete webhook `id` of `owner/repo`.
    pub async fn delete_hook(&self, owner: &str, repo: &str, id: i64) -> Result<()> {
        self.api.delete_hook(owner, repo, id).await?;
        info!(owner, repo, id, "Deleted webhook");
        Ok(())
    }

    /// Register a webhook subscribed to push, tag-push and merge-request
    /// events.
    pub async fn create_hook(
        &self,
        access_token: &str,
        owner: &str,
        repo: &str,
        hook: &HookSpec,
    ) -> Result<Hook> {
        let request = CreateHookRequest {
            access_token,
            url: &hook.url,
            password: &hook.secret,
            push_events: "true",
            tag_push_events: "true",
            merge_requests_events: "true",
        };

        let created: Hook = self
            .api_transport()?
            .post_json(&format!("/v5/repos/{owner}/{repo}/hooks"), &request)
            .await?;
        info!(owner, repo, id = created.id, "Created webhook");
        Ok(created)
    }

    /// Point webhook `id` at `hook` and re-enable push, tag-push and
    /// merge-request events. Issue and note subscriptions are left as
    /// they are.
    pub async fn update_hook(
        &self,
        owner: &str,
        repo: &str,
        id: i64,
        hook: &HookSpec,
    ) -> Result<Hook> {
        let options = UpdateHookOptions {
            password: Some(hook.secret.clone()),
            push_events: Some(true),
            tag_push_events: Some(true),
            merge_requests_events: Some(true),
            ..Default::default()
        };

        self.api
            .update_hook(owner, repo, id, &hook.url, &options)
            .await
    }

    /// Fetch blob `sha` of `owner/repo`.
    pub async fn get_contents(&self, owner: &str, repo: &str, sha: &str) -> Result<Blob> {
        self.api.get_blob(owner, repo, sha).await
    }

    /// Fetch the tree at `sha`, which may be a branch name, a commit or a
    /// tree SHA. A `level` of 1 lists the tree recursively.
    pub async fn get_trees(&self, owner: &str, repo: &str, sha: &str, level: i32) -> Result<Tree> {
        self.api.get_tree(owner, repo, sha, level).await
    }

    /// Fetch a single commit.
    pub async fn get_single_commit(
        &self,
        access_token: &str,
        owner: &str,
        repo: &str,
        sha: &str,
    ) -> Result<RepoCommit> {
        self.api_transport()?
            .get(
                &format!("/v5/repos/{owner}/{repo}/commits/{sha}"),
                &[("access_token", access_token.to_string())],
            )
            .await
    }

    /// Exchange a refresh token for a new access token at the OAuth host.
    pub async fn refresh_access_token(&self, refresh_token: &str) -> Result<AccessToken> {
        refresh_access_token_with(&self.config, refresh_token).await
    }

    /// Compare `base` with `head`.
    pub async fn compare(
        &self,
        access_token: &str,
        owner: &str,
        repo: &str,
        base: &str,
        head: &str,
    ) -> Result<Compare> {
        self.api_transport()?
            .get(
                &format!("/v5/repos/{owner}/{repo}/compare/{base}...{head}"),
                &[("access_token", access_token.to_string())],
            )
            .await
    }
}

/// Exchange a refresh token for a new access token without a client.
///
/// The OAuth host comes from the `GITEE_*` environment variables when set,
/// otherwise the public Gitee host is used.
pub async fn refresh_access_token(refresh_token: &str) -> Result<AccessToken> {
    let config = GiteeConfig::load(None).unwrap_or_else(|e| {
        warn!(error = %e, "Invalid GITEE_* environment configuration, using defaults");
        GiteeConfig::default()
    });
    refresh_access_token_with(&config, refresh_token).await
}

async fn refresh_access_token_with(
    config: &GiteeConfig,
    refresh_token: &str,
) -> Result<AccessToken> {
    let query = [
        ("grant_type", "refresh_token".to_string()),
        ("refresh_token", refresh_token.to_string()),
    ];

    HttpTransport::new(&config.oauth_url, &config.user_agent)?
        .post_query("/oauth/token", &query)
        .await
}
