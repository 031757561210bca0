//! CLI command implementations

pub mod config;
pub mod export;
pub mod issue;
pub mod org;
pub mod rate_limit;

pub use config::ConfigArgs;
pub use export::ExportArgs;
pub use issue::IssueArgs;
pub use org::OrgArgs;
pub use rate_limit::RateLimitArgs;

use anyhow::Context;
use clap::ValueEnum;
use sin_core::{Config, IssueStateFilter, Secrets};
use sin_github::GitHubClient;

/// Issue state accepted on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StateFilter {
    Open,
    Closed,
    All,
}

impl From<StateFilter> for IssueStateFilter {
    fn from(filter: StateFilter) -> Self {
        match filter {
            StateFilter::Open => IssueStateFilter::Open,
            StateFilter::Closed => IssueStateFilter::Closed,
            StateFilter::All => IssueStateFilter::All,
        }
    }
}

/// Build the GitHub client from configuration and secrets
pub fn github_client(config: &Config) -> anyhow::Result<GitHubClient> {
    let secrets = Secrets::load().context("Failed to load secrets")?;
    Ok(GitHubClient::from_config(config, &secrets)?)
}
