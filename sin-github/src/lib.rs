//! sin GitHub - source tracker client
//!
//! Thin wrapper over octocrab for reading issues, comments, organization
//! members and repositories. Pagination is left to octocrab; errors are
//! returned as octocrab reports them.

mod client;
mod error;
mod issues;
mod org;
mod rate_limit;

pub use client::GitHubClient;
pub use error::{Error, Result};
pub use org::Repository;
pub use rate_limit::RateLimit;
