//! GitHub API client using octocrab

use crate::{Error, Result};
use octocrab::Octocrab;
use serde::Serialize;
use sin_core::{parse_repository, Config, Secrets};
use tracing::{debug, info};

/// Page size requested from list endpoints; octocrab follows the rest
pub(crate) const PER_PAGE: u8 = 100;

/// Query parameters for list endpoints without filters
#[derive(Debug, Serialize)]
pub(crate) struct PageParams {
    per_page: u8,
}

impl Default for PageParams {
    fn default() -> Self {
        Self { per_page: PER_PAGE }
    }
}

/// GitHub API client scoped to one organization
///
/// Construct it once and pass it by reference; the underlying octocrab
/// instance is reused for every request.
pub struct GitHubClient {
    client: Octocrab,
    organization: String,
}

impl GitHubClient {
    /// Create a client authenticated with a personal access token
    pub fn new(token: impl Into<String>, organization: impl Into<String>) -> Result<Self> {
        let organization = organization.into();
        let token: String = token.into();

        let client = Octocrab::builder()
            .personal_token(token)
            .build()
            .map_err(|e| Error::Client(e.to_string()))?;

        info!(organization = %organization, "Created GitHub client");

        Ok(Self {
            client,
            organization,
        })
    }

    /// Create a client from loaded configuration and secrets
    ///
    /// Fails if the organization or the token is not configured.
    pub fn from_config(config: &Config, secrets: &Secrets) -> Result<Self> {
        let organization = config.organization()?;
        let token = secrets.github_token()?;
        Self::new(token, organization)
    }

    /// Wrap an already configured octocrab instance
    pub fn from_octocrab(client: Octocrab, organization: impl Into<String>) -> Self {
        Self {
            client,
            organization: organization.into(),
        }
    }

    /// Get the organization name
    pub fn organization(&self) -> &str {
        &self.organization
    }

    /// Get the underlying octocrab client
    pub fn client(&self) -> &Octocrab {
        &self.client
    }

    /// Resolve a repository reference to `(owner, name)`
    ///
    /// Bare names belong to the client's organization. Parsing is shared with
    /// the exporter so fetched issues and their external ids agree.
    pub fn repository(&self, reference: &str) -> Result<(String, String)> {
        let (owner, name) = parse_repository(reference, &self.organization)?;
        debug!(reference, owner = %owner, name = %name, "Resolved repository");
        Ok((owner, name))
    }
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("organization", &self.organization)
            .finish_non_exhaustive()
    }
}
