//! Records mirroring Gitee v5 JSON payloads.
//!
//! Fields missing from a response, or sent as `null`, decode to their zero
//! value, so partial payloads still deserialize.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Decode `null` as the field's zero value, the way absent keys are.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A repository as returned by the listing endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    #[serde(deserialize_with = "null_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_branch: Option<String>,
}

/// A webhook registration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hook {
    #[serde(deserialize_with = "null_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    pub created_at: Option<DateTime<Utc>>,
    /// Secret sent with every delivery.
    #[serde(deserialize_with = "null_default")]
    pub password: String,
    #[serde(deserialize_with = "null_default")]
    pub project_id: i64,
    /// Outcome of the last delivery.
    #[serde(deserialize_with = "null_default")]
    pub result: String,
    #[serde(deserialize_with = "null_default")]
    pub result_code: i64,
    #[serde(deserialize_with = "null_default")]
    pub push_events: bool,
    #[serde(deserialize_with = "null_default")]
    pub tag_push_events: bool,
    #[serde(deserialize_with = "null_default")]
    pub issues_events: bool,
    #[serde(deserialize_with = "null_default")]
    pub note_events: bool,
    #[serde(deserialize_with = "null_default")]
    pub merge_requests_events: bool,
}

/// Caller-supplied webhook target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HookSpec {
    /// Callback URL.
    pub url: String,
    /// Shared secret.
    pub secret: String,
}

impl HookSpec {
    /// Create a webhook target.
    pub fn new(url: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            secret: secret.into(),
        }
    }
}

/// Paging options for listing webhooks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListHooksOptions {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl ListHooksOptions {
    /// Request a specific page.
    pub fn with_page(mut self, page: u32, per_page: u32) -> Self {
        self.page = Some(page);
        self.per_page = Some(per_page);
        self
    }
}

/// Optional fields of a webhook update. Unset fields are left untouched
/// on the remote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateHookOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub push_events: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_push_events: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issues_events: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note_events: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_requests_events: Option<bool>,
}

/// Raw file content addressed by SHA.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Blob {
    #[serde(deserialize_with = "null_default")]
    pub sha: String,
    #[serde(deserialize_with = "null_default")]
    pub size: i64,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    /// Content, usually base64 encoded (see `encoding`).
    #[serde(deserialize_with = "null_default")]
    pub content: String,
    #[serde(deserialize_with = "null_default")]
    pub encoding: String,
}

/// A directory listing addressed by SHA.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tree {
    #[serde(deserialize_with = "null_default")]
    pub sha: String,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    #[serde(deserialize_with = "null_default")]
    pub tree: Vec<TreeEntry>,
    #[serde(deserialize_with = "null_default")]
    pub truncated: bool,
}

/// One entry of a [`Tree`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeEntry {
    #[serde(deserialize_with = "null_default")]
    pub path: String,
    #[serde(deserialize_with = "null_default")]
    pub mode: String,
    /// `blob` or `tree`.
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_default")]
    pub sha: String,
    /// Absent for sub-trees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
}

/// Git identity with timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GitActor {
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub email: String,
    pub date: Option<DateTime<Utc>>,
}

/// A `{sha, url}` pointer to a commit or tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitRef {
    #[serde(deserialize_with = "null_default")]
    pub sha: String,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
}

/// Git-level commit data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitDetail {
    #[serde(deserialize_with = "null_default")]
    pub author: GitActor,
    #[serde(deserialize_with = "null_default")]
    pub committer: GitActor,
    #[serde(deserialize_with = "null_default")]
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree: Option<CommitRef>,
}

/// A single commit of a repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepoCommit {
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    #[serde(deserialize_with = "null_default")]
    pub sha: String,
    #[serde(deserialize_with = "null_default")]
    pub commit: CommitDetail,
}

/// OAuth token envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessToken {
    #[serde(deserialize_with = "null_default")]
    pub access_token: String,
    #[serde(deserialize_with = "null_default")]
    pub token_type: String,
    /// Lifetime in seconds.
    #[serde(deserialize_with = "null_default")]
    pub expires_in: i64,
    #[serde(deserialize_with = "null_default")]
    pub refresh_token: String,
    #[serde(deserialize_with = "null_default")]
    pub scope: String,
    /// Unix timestamp (seconds).
    #[serde(deserialize_with = "null_default")]
    pub created_at: i64,
}

/// Gitee account as embedded in commit listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserBasic {
    #[serde(deserialize_with = "null_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_default")]
    pub login: String,
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    #[serde(deserialize_with = "null_default")]
    pub avatar_url: String,
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    #[serde(deserialize_with = "null_default")]
    pub html_url: String,
    #[serde(deserialize_with = "null_default")]
    pub remark: String,
    #[serde(deserialize_with = "null_default")]
    pub followers_url: String,
    #[serde(deserialize_with = "null_default")]
    pub following_url: String,
    #[serde(deserialize_with = "null_default")]
    pub gists_url: String,
    #[serde(deserialize_with = "null_default")]
    pub starred_url: String,
    #[serde(deserialize_with = "null_default")]
    pub subscriptions_url: String,
    #[serde(deserialize_with = "null_default")]
    pub organizations_url: String,
    #[serde(deserialize_with = "null_default")]
    pub repos_url: String,
    #[serde(deserialize_with = "null_default")]
    pub events_url: String,
    #[serde(deserialize_with = "null_default")]
    pub received_events_url: String,
    #[serde(rename = "type", deserialize_with = "null_default")]
    pub kind: String,
}

/// A commit in a [`Compare`] result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareCommit {
    #[serde(deserialize_with = "null_default")]
    pub url: String,
    #[serde(deserialize_with = "null_default")]
    pub sha: String,
    #[serde(deserialize_with = "null_default")]
    pub html_url: String,
    #[serde(deserialize_with = "null_default")]
    pub comments_url: String,
    #[serde(deserialize_with = "null_default")]
    pub commit: CommitDetail,
    /// `None` when the author has no Gitee account.
    pub author: Option<UserBasic>,
    pub committer: Option<UserBasic>,
    #[serde(deserialize_with = "null_default")]
    pub parents: Vec<CommitRef>,
}

/// A file changed between two refs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitFile {
    #[serde(deserialize_with = "null_default")]
    pub sha: String,
    #[serde(deserialize_with = "null_default")]
    pub filename: String,
    /// `added`, `modified`, `removed` or `renamed`.
    #[serde(deserialize_with = "null_default")]
    pub status: String,
    #[serde(deserialize_with = "null_default")]
    pub additions: i64,
    #[serde(deserialize_with = "null_default")]
    pub deletions: i64,
    #[serde(deserialize_with = "null_default")]
    pub changes: i64,
    #[serde(deserialize_with = "null_default")]
    pub blob_url: String,
    #[serde(deserialize_with = "null_default")]
    pub raw_url: String,
    #[serde(deserialize_with = "null_default")]
    pub content_url: String,
    #[serde(deserialize_with = "null_default")]
    pub patch: String,
}

/// Commits and file diffs between two refs, in remote order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Compare {
    #[serde(deserialize_with = "null_default")]
    pub commits: Vec<CompareCommit>,
    #[serde(deserialize_with = "null_default")]
    pub files: Vec<CommitFile>,
}
