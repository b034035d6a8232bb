//! CLI command implementations.

use anyhow::{Context as _, Result};
use gitee_client::{GiteeClient, GiteeConfig, HookSpec, ListHooksOptions};
use serde::Serialize;
use std::path::Path;

/// Shared state for a single CLI invocation.
pub struct Context {
    client: GiteeClient,
    token: Option<String>,
}

impl Context {
    /// Load configuration and build the client.
    pub fn new(config_path: Option<&Path>, token: Option<String>) -> Result<Self> {
        let config = GiteeConfig::load(config_path).context("failed to load configuration")?;
        tracing::debug!(api_url = %config.api_url, oauth_url = %config.oauth_url, "Loaded configuration");

        Ok(Self {
            client: GiteeClient::with_config(config, token.clone()),
            token,
        })
    }

    fn token(&self) -> Result<&str> {
        self.token
            .as_deref()
            .context("an access token is required (use --token or GITEE_ACCESS_TOKEN)")
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// List repositories of the authenticated user.
pub async fn repos(ctx: &Context, keyword: &str, page: u32, per_page: u32) -> Result<()> {
    let projects = ctx
        .client
        .list_repositories_for_authenticated_user(ctx.token()?, keyword, page, per_page)
        .await?;
    print_json(&projects)
}

/// List repositories of an organization.
pub async fn org_repos(ctx: &Context, org: &str, page: u32, per_page: u32) -> Result<()> {
    let projects = ctx
        .client
        .list_repositories_for_org(ctx.token()?, org, page, per_page)
        .await?;
    print_json(&projects)
}

/// List webhooks.
pub async fn hooks_list(
    ctx: &Context,
    owner: &str,
    repo: &str,
    page: u32,
    per_page: u32,
) -> Result<()> {
    let options = ListHooksOptions::default().with_page(page, per_page);
    let hooks = ctx.client.list_hooks(owner, repo, &options).await?;
    print_json(&hooks)
}

/// Create a webhook.
pub async fn hooks_create(
    ctx: &Context,
    owner: &str,
    repo: &str,
    url: String,
    secret: String,
) -> Result<()> {
    let hook = ctx
        .client
        .create_hook(ctx.token()?, owner, repo, &HookSpec { url, secret })
        .await?;
    print_json(&hook)
}

/// Update a webhook.
pub async fn hooks_update(
    ctx: &Context,
    owner: &str,
    repo: &str,
    id: i64,
    url: String,
    secret: String,
) -> Result<()> {
    let hook = ctx
        .client
        .update_hook(owner, repo, id, &HookSpec { url, secret })
        .await?;
    print_json(&hook)
}

/// Delete a webhook.
pub async fn hooks_delete(ctx: &Context, owner: &str, repo: &str, id: i64) -> Result<()> {
    ctx.client.delete_hook(owner, repo, id).await?;
    println!("Deleted webhook {id} from {owner}/{repo}");
    Ok(())
}

/// Show a blob.
pub async fn blob(ctx: &Context, owner: &str, repo: &str, sha: &str) -> Result<()> {
    let blob = ctx.client.get_contents(owner, repo, sha).await?;
    print_json(&blob)
}

/// Show a tree.
pub async fn tree(ctx: &Context, owner: &str, repo: &str, sha: &str, level: i32) -> Result<()> {
    let tree = ctx.client.get_trees(owner, repo, sha, level).await?;
    print_json(&tree)
}

/// Show a commit.
pub async fn commit(ctx: &Context, owner: &str, repo: &str, sha: &str) -> Result<()> {
    let commit = ctx
        .client
        .get_single_commit(ctx.token()?, owner, repo, sha)
        .await?;
    print_json(&commit)
}

/// Compare two refs.
pub async fn compare(ctx: &Context, owner: &str, repo: &str, base: &str, head: &str) -> Result<()> {
    let diff = ctx
        .client
        .compare(ctx.token()?, owner, repo, base, head)
        .await?;
    print_json(&diff)
}

/// Refresh an OAuth access token.
pub async fn refresh_token(ctx: &Context, refresh_token: &str) -> Result<()> {
    let token = ctx.client.refresh_access_token(refresh_token).await?;
    print_json(&token)
}
