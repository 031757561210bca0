//! Organization members and repositories

use crate::client::PageParams;
use crate::{GitHubClient, Result};
use octocrab::Page;
use serde::{Deserialize, Serialize};
use sin_core::SourceUser;
use tracing::{debug, info};

/// Repository owned by the organization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub full_name: String,
    pub html_url: String,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub open_issues_count: Option<u64>,
}

impl GitHubClient {
    /// List every member of the organization
    pub async fn organization_members(&self) -> Result<Vec<SourceUser>> {
        debug!(organization = %self.organization(), "Listing organization members");

        let page: Page<SourceUser> = self
            .client()
            .get(
                format!("/orgs/{}/members", self.organization()),
                Some(&PageParams::default()),
            )
            .await?;
        let members = self.client().all_pages(page).await?;

        info!(count = members.len(), "Fetched organization members");
        Ok(members)
    }

    /// List every repository of the organization
    pub async fn organization_repositories(&self) -> Result<Vec<Repository>> {
        debug!(organization = %self.organization(), "Listing organization repositories");

        let page: Page<Repository> = self
            .client()
            .get(
                format!("/orgs/{}/repos", self.organization()),
                Some(&PageParams::default()),
            )
            .await?;
        let repos = self.client().all_pages(page).await?;

        info!(count = repos.len(), "Fetched organization repositories");
        Ok(repos)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::mock_client;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_organization_members() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/orgs/acme/members"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"login": "octocat", "id": 1, "type": "User"},
                {"login": "hubot", "id": 2, "type": "User"}
            ])))
            .mount(&server)
            .await;

        let members = mock_client(&server).organization_members().await.unwrap();
        let logins: Vec<&str> = members.iter().map(|m| m.login.as_str()).collect();
        assert_eq!(logins, vec!["octocat", "hubot"]);
    }

    #[tokio::test]
    async fn test_organization_repositories() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/orgs/acme/repos"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "name": "app",
                "full_name": "acme/app",
                "html_url": "https://github.com/acme/app",
                "private": true,
                "archived": false,
                "open_issues_count": 12
            }])))
            .mount(&server)
            .await;

        let repos = mock_client(&server).organization_repositories().await.unwrap();
        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].full_name, "acme/app");
        assert!(repos[0].private);
        assert_eq!(repos[0].open_issues_count, Some(12));
    }
}
