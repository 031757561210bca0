//! Config command - show effective configuration, create the secrets file

use clap::{Args, Subcommand};
use sin_core::{Config, Secrets};

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommand>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Write a secrets.toml template with owner-only permissions
    InitSecrets,
}

impl ConfigArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        match self.command {
            Some(ConfigCommand::InitSecrets) => {
                let path = Secrets::create_template()?;
                println!("Created {}", path.display());
                println!("Add your GitHub token to it before running an export.");
            }
            None => show(config),
        }

        Ok(())
    }
}

fn show(config: &Config) {
    let unset = "(not set)";

    println!("sin Configuration");
    println!("=================");
    println!();
    println!("GitHub:");
    println!(
        "  organization: {}",
        config.github.organization.as_deref().unwrap_or(unset)
    );
    println!("Jira:");
    println!(
        "  automation_user_id: {}",
        config.jira.automation_user_id.as_deref().unwrap_or(unset)
    );
    println!(
        "  project_key: {}",
        config.jira.project_key.as_deref().unwrap_or(unset)
    );
    println!("Mapping:");
    println!(
        "  users_file: {}",
        config
            .mapping
            .users_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| unset.to_string())
    );
    println!(
        "  status_map_file: {}",
        config
            .mapping
            .status_map_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| unset.to_string())
    );
    println!();

    if let Some(path) = Config::default_config_path() {
        println!("Config file: {}", path.display());
        if path.exists() {
            println!("  (exists)");
        } else {
            println!("  (not found - using defaults)");
        }
    }

    let token = match Secrets::load().and_then(|s| s.github_token()) {
        Ok(_) => "found",
        Err(_) => "missing",
    };
    println!("GitHub token: {}", token);
}
