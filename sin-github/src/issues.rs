//! Issue and comment fetching

use crate::client::{PageParams, PER_PAGE};
use crate::{GitHubClient, Result};
use async_trait::async_trait;
use octocrab::Page;
use serde::Serialize;
use sin_core::{IssueSource, IssueStateFilter, SourceComment, SourceIssue};
use tracing::{debug, info};

#[derive(Debug, Serialize)]
struct ListIssuesParams {
    state: &'static str,
    per_page: u8,
}

impl GitHubClient {
    /// Fetch a single issue by number
    pub async fn get_issue(&self, repo: &str, number: u64) -> Result<SourceIssue> {
        let (owner, name) = self.repository(repo)?;
        debug!(owner = %owner, repo = %name, number, "Fetching issue");

        let issue: SourceIssue = self
            .client()
            .get(
                format!("/repos/{}/{}/issues/{}", owner, name, number),
                None::<&()>,
            )
            .await?;

        Ok(issue)
    }

    /// List every issue in the repository with the given state
    ///
    /// All pages are fetched before returning.
    pub async fn list_issues(
        &self,
        repo: &str,
        state: IssueStateFilter,
    ) -> Result<Vec<SourceIssue>> {
        let (owner, name) = self.repository(repo)?;
        debug!(owner = %owner, repo = %name, %state, "Listing issues");

        let params = ListIssuesParams {
            state: state.as_str(),
            per_page: PER_PAGE,
        };
        let page: Page<SourceIssue> = self
            .client()
            .get(format!("/repos/{}/{}/issues", owner, name), Some(&params))
            .await?;
        let issues = self.client().all_pages(page).await?;

        info!(repo = %name, count = issues.len(), "Fetched issues");
        Ok(issues)
    }

    /// List open issues, the default state filter
    pub async fn list_open_issues(&self, repo: &str) -> Result<Vec<SourceIssue>> {
        self.list_issues(repo, IssueStateFilter::default()).await
    }

    /// Fetch all comments on an issue, oldest first
    pub async fn list_comments(&self, repo: &str, number: u64) -> Result<Vec<SourceComment>> {
        let (owner, name) = self.repository(repo)?;
        debug!(owner = %owner, repo = %name, number, "Fetching comments");

        let page: Page<SourceComment> = self
            .client()
            .get(
                format!("/repos/{}/{}/issues/{}/comments", owner, name, number),
                Some(&PageParams::default()),
            )
            .await?;

        Ok(self.client().all_pages(page).await?)
    }
}

#[async_trait]
impl IssueSource for GitHubClient {
    async fn get_issue(&self, repo: &str, number: u64) -> sin_core::Result<SourceIssue> {
        Ok(GitHubClient::get_issue(self, repo, number).await?)
    }

    async fn list_issues(
        &self,
        repo: &str,
        state: IssueStateFilter,
    ) -> sin_core::Result<Vec<SourceIssue>> {
        Ok(GitHubClient::list_issues(self, repo, state).await?)
    }

    async fn list_comments(&self, repo: &str, number: u64) -> sin_core::Result<Vec<SourceComment>> {
        Ok(GitHubClient::list_comments(self, repo, number).await?)
    }
}
