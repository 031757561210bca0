//! Issue commands

use clap::{Args, Subcommand};
use sin_core::{Config, Exporter, IssueState};

use super::{github_client, StateFilter};

/// Issue commands
#[derive(Args, Debug)]
pub struct IssueArgs {
    #[command(subcommand)]
    pub command: IssueCommand,
}

#[derive(Subcommand, Debug)]
pub enum IssueCommand {
    /// List issues from a repository
    List {
        /// Repository (name, owner/name or GitHub URL)
        repo: String,

        /// Filter by state
        #[arg(short, long, value_enum, default_value = "open")]
        state: StateFilter,
    },

    /// Print the import record for a single issue
    Show {
        /// Repository (name, owner/name or GitHub URL)
        repo: String,

        /// Issue number
        number: u64,
    },
}

impl IssueArgs {
    /// Execute the issue command
    pub async fn execute(&self, verbose: bool, config: &Config) -> anyhow::Result<()> {
        match &self.command {
            IssueCommand::List { repo, state } => list_issues(repo, *state, verbose, config).await,
            IssueCommand::Show { repo, number } => show_issue(repo, *number, config).await,
        }
    }
}

async fn list_issues(
    repo: &str,
    state: StateFilter,
    verbose: bool,
    config: &Config,
) -> anyhow::Result<()> {
    let client = github_client(config)?;

    if verbose {
        println!("Fetching issues from {}...", repo);
    }

    let issues = client.list_issues(repo, state.into()).await?;

    if issues.is_empty() {
        println!("No issues found.");
        return Ok(());
    }

    println!("Issues in {} ({} found)", repo, issues.len());
    println!();

    for issue in issues {
        let state_icon = match issue.state {
            IssueState::Open => "○",
            IssueState::Closed => "●",
        };

        let labels = if !issue.labels.is_empty() {
            let names: Vec<&str> = issue.labels.iter().map(|l| l.name.as_str()).collect();
            format!(" [{}]", names.join(", "))
        } else {
            String::new()
        };

        println!("{} #{}: {}{}", state_icon, issue.number, issue.title, labels);
    }

    Ok(())
}

async fn show_issue(repo: &str, number: u64, config: &Config) -> anyhow::Result<()> {
    let exporter = Exporter::new(config.mapping_context()?);
    let client = github_client(config)?;

    let ticket = exporter.export_issue(&client, repo, number).await?;
    println!("{}", serde_json::to_string_pretty(&ticket)?);

    Ok(())
}
