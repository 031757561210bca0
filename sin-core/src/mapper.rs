//! GitHub issue to Jira ticket field mapping

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::debug;

use crate::identity::IdentityLookup;
use crate::source::{SourceComment, SourceIssue, STATE_REASON_NOT_PLANNED};
use crate::status::{StatusMap, DEFAULT_CLOSED_STATUS, DEFAULT_OPEN_STATUS};
use crate::ticket::{CustomFieldValue, Ticket, TicketComment, ISSUE_TYPE};
use crate::{Error, Result};

/// Resolution for issues closed as not planned
pub const RESOLUTION_WONT_DO: &str = "Won't Do";

/// Resolution for every other closed issue
pub const RESOLUTION_DONE: &str = "Done";

/// Everything the mapper needs besides the issue itself
pub struct MappingContext {
    /// Account used when a GitHub user has no Atlassian counterpart
    pub automation_user_id: String,
    pub lookup: Box<dyn IdentityLookup>,
    pub status_map: StatusMap,
}

impl MappingContext {
    pub fn new(
        automation_user_id: impl Into<String>,
        lookup: impl IdentityLookup + 'static,
        status_map: StatusMap,
    ) -> Self {
        Self {
            automation_user_id: automation_user_id.into(),
            lookup: Box::new(lookup),
            status_map,
        }
    }

    /// Lookup-or-automation resolution shared by reporters and comment authors
    fn identity_or_automation(&self, login: Option<&str>) -> String {
        login
            .and_then(|login| self.lookup.atlassian_id(login))
            .unwrap_or_else(|| self.automation_user_id.clone())
    }
}

impl std::fmt::Debug for MappingContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MappingContext")
            .field("automation_user_id", &self.automation_user_id)
            .field("status_map", &self.status_map)
            .finish_non_exhaustive()
    }
}

/// Builds a [`Ticket`] from one issue and its comments
///
/// The mapper only borrows its inputs; mapping the same inputs twice yields
/// the same ticket.
pub struct TicketMapper<'a> {
    issue: &'a SourceIssue,
    comments: &'a [SourceComment],
    context: &'a MappingContext,
}

impl<'a> TicketMapper<'a> {
    pub fn new(
        issue: &'a SourceIssue,
        comments: &'a [SourceComment],
        context: &'a MappingContext,
    ) -> Self {
        Self {
            issue,
            comments,
            context,
        }
    }

    /// `{repository}-{number}`
    pub fn external_id(&self, repo_name: &str) -> String {
        format!("{}-{}", repo_name, self.issue.number)
    }

    /// Mapped issue author, or the automation user
    pub fn resolve_reporter(&self) -> String {
        self.context.identity_or_automation(self.issue.author_login())
    }

    /// Mapped assignee; no fallback
    pub fn resolve_assignee(&self) -> Option<String> {
        self.issue
            .assignee_login()
            .and_then(|login| self.context.lookup.atlassian_id(login))
    }

    /// Status override for `external_id`, else the open/closed default
    pub fn derive_status(&self, external_id: &str) -> String {
        if let Some(status) = self.context.status_map.get(external_id) {
            return status.to_string();
        }

        if self.issue.is_open() {
            DEFAULT_OPEN_STATUS.to_string()
        } else {
            DEFAULT_CLOSED_STATUS.to_string()
        }
    }

    pub fn derive_resolution(&self) -> Option<String> {
        if self.issue.is_open() {
            return None;
        }

        let resolution = if self.issue.state_reason.as_deref() == Some(STATE_REASON_NOT_PLANNED) {
            RESOLUTION_WONT_DO
        } else {
            RESOLUTION_DONE
        };
        Some(resolution.to_string())
    }

    /// Lowercased, space-to-hyphen label names; `None` when there are none
    pub fn derive_labels(&self) -> Option<Vec<String>> {
        let labels: Vec<String> = self
            .issue
            .labels
            .iter()
            .map(|label| normalize_label(&label.name))
            .collect();

        if labels.is_empty() {
            None
        } else {
            Some(labels)
        }
    }

    pub fn map_comment(&self, comment: &SourceComment) -> Result<TicketComment> {
        Ok(TicketComment {
            author: self.context.identity_or_automation(comment.author_login()),
            created: normalize_timestamp("comment created_at", &comment.created_at)?,
            external_id: comment.id,
            body: TicketComment::marker_body(comment.id),
        })
    }

    /// Assemble the full ticket
    ///
    /// Fails without producing a partial ticket if any timestamp is malformed.
    pub fn to_ticket(&self, repo_name: &str) -> Result<Ticket> {
        let external_id = self.external_id(repo_name);

        let comments = self
            .comments
            .iter()
            .map(|comment| self.map_comment(comment))
            .collect::<Result<Vec<_>>>()?;

        let ticket = Ticket {
            created: normalize_timestamp("issue created_at", &self.issue.created_at)?,
            updated: normalize_timestamp("issue updated_at", &self.issue.updated_at)?,
            summary: self.issue.title.clone(),
            reporter: self.resolve_reporter(),
            assignee: self.resolve_assignee(),
            issue_type: ISSUE_TYPE.to_string(),
            status: self.derive_status(&external_id),
            resolution: self.derive_resolution(),
            labels: self.derive_labels(),
            components: vec![repo_name.to_string()],
            custom_field_values: vec![CustomFieldValue::github_url(&self.issue.html_url)],
            comments,
            external_id,
        };

        debug!(
            external_id = %ticket.external_id,
            status = %ticket.status,
            comments = ticket.comments.len(),
            "Mapped issue"
        );

        Ok(ticket)
    }
}

/// `"Needs Review"` becomes `"needs-review"`
pub fn normalize_label(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// Parse an RFC 3339 timestamp and render it in UTC with a `Z` suffix
pub fn normalize_timestamp(field: &'static str, value: &str) -> Result<String> {
    let parsed = DateTime::parse_from_rfc3339(value).map_err(|source| Error::Timestamp {
        field,
        value: value.to_string(),
        source,
    })?;

    Ok(parsed
        .with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Secs, true))
}
