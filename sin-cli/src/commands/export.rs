//! Export command - write a Jira import document for one or more repositories

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use sin_core::{Config, Exporter};

use super::{github_client, StateFilter};

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Repositories to export (name, owner/name or GitHub URL)
    #[arg(required = true)]
    pub repos: Vec<String>,

    /// Destination Jira project key (defaults to [jira] project_key)
    #[arg(short, long)]
    pub project: Option<String>,

    /// Which issues to export
    #[arg(short, long, value_enum, default_value = "open")]
    pub state: StateFilter,

    /// Write the document to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(&self, verbose: bool, config: &Config) -> anyhow::Result<()> {
        let project = self
            .project
            .clone()
            .or_else(|| config.jira.project_key.clone())
            .context("No project key given. Use --project or set [jira] project_key")?;

        // Resolve the mapping context before touching the network
        let exporter = Exporter::new(config.mapping_context()?);
        let client = github_client(config)?;

        if verbose {
            tracing::info!(
                project = %project,
                repos = ?self.repos,
                state = ?self.state,
                "Starting export"
            );
        }

        let document = exporter
            .export_project(&client, &project, &self.repos, self.state.into())
            .await?;
        let json = serde_json::to_string_pretty(&document)?;

        match &self.output {
            Some(path) => {
                std::fs::write(path, json)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                eprintln!(
                    "Exported {} issue(s) into project {} -> {}",
                    document.issue_count(),
                    project,
                    path.display()
                );
            }
            None => println!("{}", json),
        }

        Ok(())
    }
}
