//! # Gitee Client
//!
//! Typed client for the Gitee v5 REST API: repository listing, webhooks,
//! commits, git blobs and trees, commit comparison and OAuth token refresh.
//!
//! Each method maps to a single HTTP round trip. There is no caching, no
//! retry and no rate-limit handling; failures are returned as
//! [`RequestError`] without further classification.
//!
//! ## Example
//!
//! ```rust,ignore
//! use gitee_client::{GiteeClient, HookSpec};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let token = std::env::var("GITEE_ACCESS_TOKEN")?;
//!     let client = GiteeClient::new(Some(token.clone()));
//!
//!     let hook = client
//!         .create_hook(&token, "owner", "repo", &HookSpec::new("https://ci.example.com/hook", "secret"))
//!         .await?;
//!     println!("created webhook {}", hook.id);
//!
//!     let diff = client.compare(&token, "owner", "repo", "main", "feature").await?;
//!     println!("{} commits, {} files", diff.commits.len(), diff.files.len());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
mod transport;
pub mod types;

// Re-export main types
pub use api::{GitDataApi, HttpGiteeApi, WebhooksApi};
pub use client::{refresh_access_token, GiteeClient};
pub use config::GiteeConfig;
pub use error::{RequestError, Result};
pub use types::*;

/// Version of the client library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hook_spec_builder() {
        let spec = HookSpec::new("https://ci.example.com/hook", "secret");
        assert_eq!(spec.url, "https://ci.example.com/hook");
        assert_eq!(spec.secret, "secret");
    }

    #[test]
    fn test_list_hooks_options_builder() {
        let options = ListHooksOptions::default().with_page(2, 50);
        assert_eq!(options.page, Some(2));
        assert_eq!(options.per_page, Some(50));
    }
}
