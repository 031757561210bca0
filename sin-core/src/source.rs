//! Source records as returned by the GitHub REST API
//!
//! Only the fields the mapper consumes are modelled. Required fields that are
//! missing from a payload fail deserialization, so malformed records are
//! rejected at the boundary instead of at the point of use.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::Result;

/// Closure reason GitHub reports for issues closed as "not planned"
pub const STATE_REASON_NOT_PLANNED: &str = "not_planned";

/// Issue state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    Open,
    Closed,
}

/// State filter used when listing issues
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueStateFilter {
    #[default]
    Open,
    Closed,
    All,
}

impl IssueStateFilter {
    /// Value of the `state` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueStateFilter::Open => "open",
            IssueStateFilter::Closed => "closed",
            IssueStateFilter::All => "all",
        }
    }
}

impl std::fmt::Display for IssueStateFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A GitHub account reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceUser {
    pub login: String,
    #[serde(default)]
    pub id: Option<u64>,
}

/// A label attached to an issue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLabel {
    pub name: String,
}

/// GitHub issue as read from the REST API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceIssue {
    /// Issue number
    pub number: u64,
    /// Issue title
    pub title: String,
    /// Creation time, as sent by GitHub
    pub created_at: String,
    /// Last update time, as sent by GitHub
    pub updated_at: String,
    /// Current state (open/closed)
    pub state: IssueState,
    /// Why the issue was closed ("completed", "not_planned", ...)
    #[serde(default)]
    pub state_reason: Option<String>,
    /// Link to the issue on github.com
    pub html_url: String,
    /// Author of the issue
    #[serde(default)]
    pub user: Option<SourceUser>,
    #[serde(default)]
    pub assignee: Option<SourceUser>,
    #[serde(default)]
    pub labels: Vec<SourceLabel>,
}

impl SourceIssue {
    pub fn is_open(&self) -> bool {
        self.state == IssueState::Open
    }

    /// Login of the issue author, if GitHub still knows the account
    pub fn author_login(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.login.as_str())
    }

    pub fn assignee_login(&self) -> Option<&str> {
        self.assignee.as_ref().map(|u| u.login.as_str())
    }
}

/// Comment on a GitHub issue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceComment {
    pub id: u64,
    #[serde(default)]
    pub user: Option<SourceUser>,
    pub created_at: String,
}

impl SourceComment {
    pub fn author_login(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.login.as_str())
    }
}

/// Read access to issues and their comments
///
/// Implemented by the GitHub client; the exporter only depends on this trait.
#[async_trait]
pub trait IssueSource: Send + Sync {
    /// Fetch a single issue by number
    async fn get_issue(&self, repo: &str, number: u64) -> Result<SourceIssue>;

    /// List all issues of a repository matching the state filter
    async fn list_issues(&self, repo: &str, state: IssueStateFilter) -> Result<Vec<SourceIssue>>;

    /// Fetch every comment on an issue
    async fn list_comments(&self, repo: &str, number: u64) -> Result<Vec<SourceComment>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_github_issue() {
        let json = r#"{
            "number": 7,
            "title": "Crash on start",
            "created_at": "2023-04-01T10:00:00Z",
            "updated_at": "2023-04-02T11:30:00Z",
            "state": "closed",
            "state_reason": "completed",
            "html_url": "https://github.com/acme/app/issues/7",
            "user": {"login": "octocat", "id": 1},
            "assignee": null,
            "labels": [{"name": "Bug", "color": "d73a4a"}],
            "comments": 3
        }"#;

        let issue: SourceIssue = serde_json::from_str(json).unwrap();
        assert_eq!(issue.number, 7);
        assert_eq!(issue.state, IssueState::Closed);
        assert!(!issue.is_open());
        assert_eq!(issue.state_reason.as_deref(), Some("completed"));
        assert_eq!(issue.author_login(), Some("octocat"));
        assert_eq!(issue.assignee_login(), None);
        assert_eq!(issue.labels[0].name, "Bug");
    }

    #[test]
    fn test_missing_labels_default_to_empty() {
        let json = r#"{
            "number": 1,
            "title": "t",
            "created_at": "2023-01-01T00:00:00Z",
            "updated_at": "2023-01-01T00:00:00Z",
            "state": "open",
            "html_url": "https://x/1"
        }"#;

        let issue: SourceIssue = serde_json::from_str(json).unwrap();
        assert!(issue.labels.is_empty());
        assert!(issue.state_reason.is_none());
        assert!(issue.user.is_none());
    }

    #[test]
    fn test_missing_required_field_rejected() {
        // no title
        let json = r#"{
            "number": 1,
            "created_at": "2023-01-01T00:00:00Z",
            "updated_at": "2023-01-01T00:00:00Z",
            "state": "open",
            "html_url": "https://x/1"
        }"#;

        assert!(serde_json::from_str::<SourceIssue>(json).is_err());
    }

    #[test]
    fn test_state_filter_default_is_open() {
        assert_eq!(IssueStateFilter::default(), IssueStateFilter::Open);
        assert_eq!(IssueStateFilter::All.to_string(), "all");
    }
}
