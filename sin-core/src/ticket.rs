//! Jira JSON importer records
//!
//! Optional fields are skipped during serialization, so an absent value never
//! shows up as `null` in the import file.

use serde::{Deserialize, Serialize};

/// Issue type given to every imported ticket
pub const ISSUE_TYPE: &str = "Task";

/// Name of the custom field carrying the GitHub link
pub const GITHUB_URL_FIELD_NAME: &str = "GitHub URL";

/// Jira type identifier of a URL custom field
pub const URL_FIELD_TYPE: &str = "com.atlassian.jira.plugin.system.customfieldtypes:url";

/// A single issue in the importer's format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// `{repository}-{issue number}`, used for dedup and status lookup
    pub external_id: String,
    pub created: String,
    pub updated: String,
    pub summary: String,
    /// Atlassian account id; falls back to the automation user
    pub reporter: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    pub issue_type: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    pub components: Vec<String>,
    pub custom_field_values: Vec<CustomFieldValue>,
    /// Always emitted, `[]` when the issue has no comments
    #[serde(default)]
    pub comments: Vec<TicketComment>,
}

/// Value of a Jira custom field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomFieldValue {
    pub field_name: String,
    pub field_type: String,
    pub value: String,
}

impl CustomFieldValue {
    /// The "GitHub URL" field pointing back at the source issue
    pub fn github_url(url: impl Into<String>) -> Self {
        Self {
            field_name: GITHUB_URL_FIELD_NAME.to_string(),
            field_type: URL_FIELD_TYPE.to_string(),
            value: url.into(),
        }
    }
}

/// A comment in the importer's format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketComment {
    pub author: String,
    pub created: String,
    /// GitHub comment id
    pub external_id: u64,
    pub body: String,
}

impl TicketComment {
    /// Marker body used to recognise already imported comments
    pub fn marker_body(comment_id: u64) -> String {
        format!("GHCID:{}", comment_id)
    }
}

/// Top-level document accepted by the JSON importer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportDocument {
    pub projects: Vec<ImportProject>,
}

/// One destination project and the tickets imported into it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportProject {
    pub key: String,
    pub issues: Vec<Ticket>,
}

impl ImportDocument {
    /// Document holding a single project
    pub fn single(key: impl Into<String>, issues: Vec<Ticket>) -> Self {
        Self {
            projects: vec![ImportProject {
                key: key.into(),
                issues,
            }],
        }
    }

    /// Total number of tickets across all projects
    pub fn issue_count(&self) -> usize {
        self.projects.iter().map(|p| p.issues.len()).sum()
    }
}
