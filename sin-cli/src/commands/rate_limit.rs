//! Rate-limit command

use clap::Args;
use sin_core::Config;

use super::github_client;

/// Show the GitHub API rate-limit status
#[derive(Args, Debug)]
pub struct RateLimitArgs {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

impl RateLimitArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let client = github_client(config)?;
        let rate_limit = client.rate_limit().await?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&rate_limit)?);
            return Ok(());
        }

        println!(
            "{}/{} requests remaining ({} used)",
            rate_limit.remaining, rate_limit.limit, rate_limit.used
        );
        println!("Resets at {}", rate_limit.reset.format("%Y-%m-%d %H:%M:%S UTC"));
        if rate_limit.is_exhausted() {
            println!("Rate limit exhausted");
        }

        Ok(())
    }
}
