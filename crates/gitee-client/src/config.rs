//! Client configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default Gitee REST API host.
pub const DEFAULT_API_URL: &str = "https://gitee.com/api";

/// Default Gitee OAuth authority.
pub const DEFAULT_OAUTH_URL: &str = "https://gitee.com";

/// Default `User-Agent` header.
pub const DEFAULT_USER_AGENT: &str = concat!("gitee-client/", env!("CARGO_PKG_VERSION"));

/// Hosts and headers used by the client.
///
/// The API host and the OAuth host are distinct: token refresh goes to
/// the OAuth authority, everything else to the API host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GiteeConfig {
    /// Base URL of the REST API (`/v5/...` paths are appended).
    pub api_url: String,

    /// Base URL of the OAuth authority (`/oauth/token` is appended).
    pub oauth_url: String,

    /// `User-Agent` sent with every request.
    pub user_agent: String,
}

impl Default for GiteeConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            oauth_url: DEFAULT_OAUTH_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl GiteeConfig {
    /// Load configuration from defaults, an optional file and `GITEE_*`
    /// environment variables, in that order of precedence.
    ///
    /// A missing file is not an error.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .set_default("api_url", DEFAULT_API_URL)?
            .set_default("oauth_url", DEFAULT_OAUTH_URL)?
            .set_default("user_agent", DEFAULT_USER_AGENT)?;

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(false));
        }

        let settings = builder
            .add_source(config::Environment::with_prefix("GITEE"))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        Ok(config.normalized())
    }

    /// Set the API host.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self.normalized()
    }

    /// Set the OAuth host.
    pub fn with_oauth_url(mut self, url: impl Into<String>) -> Self {
        self.oauth_url = url.into();
        self.normalized()
    }

    /// Set the user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    fn normalized(mut self) -> Self {
        let trimmed = self.api_url.trim_end_matches('/').len();
        self.api_url.truncate(trimmed);
        let trimmed = self.oauth_url.trim_end_matches('/').len();
        self.oauth_url.truncate(trimmed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_hosts_are_distinct() {
        let config = GiteeConfig::default();
        assert_eq!(config.api_url, "https://gitee.com/api");
        assert_eq!(config.oauth_url, "https://gitee.com");
        assert_ne!(config.api_url, config.oauth_url);
        assert!(config.user_agent.starts_with("gitee-client/"));
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let config = GiteeConfig::default()
            .with_api_url("http://127.0.0.1:8080/")
            .with_oauth_url("http://127.0.0.1:9090//");

        assert_eq!(config.api_url, "http://127.0.0.1:8080");
        assert_eq!(config.oauth_url, "http://127.0.0.1:9090");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "oauth_url = \"https://oauth.example.com/\"").unwrap();
        writeln!(file, "user_agent = \"custom-agent\"").unwrap();

        let config = GiteeConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.oauth_url, "https://oauth.example.com");
        assert_eq!(config.user_agent, "custom-agent");
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = GiteeConfig::load(Some(dir.path().join("absent.toml").as_path())).unwrap();

        assert!(!config.api_url.is_empty());
        assert!(!config.oauth_url.is_empty());
    }
}
