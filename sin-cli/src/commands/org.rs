//! Organization commands

use clap::{Args, Subcommand};
use sin_core::Config;

use super::github_client;

/// Organization commands
#[derive(Args, Debug)]
pub struct OrgArgs {
    #[command(subcommand)]
    pub command: OrgCommand,
}

#[derive(Subcommand, Debug)]
pub enum OrgCommand {
    /// List organization members (useful for filling the user directory)
    Members {
        /// Print a `[users]` TOML skeleton instead of a plain list
        #[arg(long)]
        toml: bool,
    },

    /// List organization repositories
    Repos {
        /// Include archived repositories
        #[arg(long)]
        archived: bool,
    },
}

impl OrgArgs {
    /// Execute the org command
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let client = github_client(config)?;

        match &self.command {
            OrgCommand::Members { toml } => {
                let members = client.organization_members().await?;
                if *toml {
                    println!("[users]");
                    for member in members {
                        println!("{} = \"\"", member.login);
                    }
                } else {
                    println!(
                        "Members of {} ({} found)",
                        client.organization(),
                        members.len()
                    );
                    for member in members {
                        println!("  {}", member.login);
                    }
                }
            }
            OrgCommand::Repos { archived } => {
                let repos = client.organization_repositories().await?;
                println!("Repositories in {}", client.organization());
                for repo in repos.iter().filter(|r| *archived || !r.archived) {
                    let mut flags = Vec::new();
                    if repo.private {
                        flags.push("private");
                    }
                    if repo.archived {
                        flags.push("archived");
                    }
                    let flags = if flags.is_empty() {
                        String::new()
                    } else {
                        format!(" ({})", flags.join(", "))
                    };
                    let open = repo
                        .open_issues_count
                        .map(|n| format!(" - {} open", n))
                        .unwrap_or_default();
                    println!("  {}{}{}", repo.name, flags, open);
                }
            }
        }

        Ok(())
    }
}
