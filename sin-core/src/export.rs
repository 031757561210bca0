//! Fetch issues from a source and map them into an import document

use tracing::{debug, info};

use crate::mapper::{MappingContext, TicketMapper};
use crate::repository::repository_name;
use crate::source::{IssueSource, IssueStateFilter};
use crate::ticket::{ImportDocument, Ticket};
use crate::Result;

/// Drives an [`IssueSource`] through the mapper
#[derive(Debug)]
pub struct Exporter {
    context: MappingContext,
}

impl Exporter {
    pub fn new(context: MappingContext) -> Self {
        Self { context }
    }

    /// Fetch and map a single issue with its comments
    pub async fn export_issue(
        &self,
        source: &dyn IssueSource,
        repo: &str,
        number: u64,
    ) -> Result<Ticket> {
        let repo_name = repository_name(repo)?;
        let issue = source.get_issue(repo, number).await?;
        let comments = source.list_comments(repo, number).await?;

        TicketMapper::new(&issue, &comments, &self.context).to_ticket(&repo_name)
    }

    /// Fetch and map every issue of a repository matching `state`
    ///
    /// Tickets keep the source order. The first failure aborts the export.
    pub async fn export_repository(
        &self,
        source: &dyn IssueSource,
        repo: &str,
        state: IssueStateFilter,
    ) -> Result<Vec<Ticket>> {
        let repo_name = repository_name(repo)?;
        let issues = source.list_issues(repo, state).await?;
        info!(repo, %state, count = issues.len(), "Exporting issues");

        let mut tickets = Vec::with_capacity(issues.len());
        for issue in &issues {
            let comments = source.list_comments(repo, issue.number).await?;
            debug!(repo, number = issue.number, comments = comments.len(), "Fetched comments");

            let mapper = TicketMapper::new(issue, &comments, &self.context);
            tickets.push(mapper.to_ticket(&repo_name)?);
        }

        Ok(tickets)
    }

    /// Export several repositories into one destination project
    pub async fn export_project(
        &self,
        source: &dyn IssueSource,
        project_key: &str,
        repos: &[String],
        state: IssueStateFilter,
    ) -> Result<ImportDocument> {
        let mut issues = Vec::new();
        for repo in repos {
            issues.extend(self.export_repository(source, repo, state).await?);
        }

        info!(project_key, tickets = issues.len(), "Built import document");

        Ok(ImportDocument::single(project_key, issues))
    }
}
