//! sin CLI - export GitHub issues into Jira's JSON importer format

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sin_core::{Config, ConfigOverrides};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{ConfigArgs, ExportArgs, IssueArgs, OrgArgs, RateLimitArgs};

/// sin: move GitHub issues into Jira
#[derive(Parser, Debug)]
#[command(name = "sin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// GitHub organization (overrides config)
    #[arg(long, global = true, env = "GITHUB_ORG")]
    org: Option<String>,

    /// Atlassian account id used when a GitHub user is not mapped
    #[arg(long, global = true, env = "AUTOMATION_FOR_JIRA_USER_ID")]
    automation_user: Option<String>,

    /// TOML file mapping GitHub logins to Atlassian account ids
    #[arg(long, global = true, env = "SIN_USERS_FILE")]
    users_file: Option<PathBuf>,

    /// JSON file mapping external ids to Jira statuses
    #[arg(long, global = true, env = "SIN_STATUS_MAP_FILE")]
    status_map: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show version information
    Version,

    /// Export repositories as a Jira import document
    #[command(visible_alias = "x")]
    Export(ExportArgs),

    /// Inspect issues
    Issue(IssueArgs),

    /// Inspect the organization
    Org(OrgArgs),

    /// Show the GitHub API rate-limit status
    RateLimit(RateLimitArgs),

    /// Show current configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    // Load configuration with overrides
    let config = Config::load_with_overrides(ConfigOverrides {
        organization: cli.org.clone(),
        automation_user_id: cli.automation_user.clone(),
        users_file: cli.users_file.clone(),
        status_map_file: cli.status_map.clone(),
    })?;

    if cli.verbose {
        tracing::info!(
            organization = ?config.github.organization,
            users_file = ?config.mapping.users_file,
            status_map_file = ?config.mapping.status_map_file,
            "Configuration loaded"
        );
    }

    match cli.command {
        Some(Commands::Version) => {
            println!("sin {}", env!("CARGO_PKG_VERSION"));
        }
        Some(Commands::Export(args)) => {
            args.execute(cli.verbose, &config).await?;
        }
        Some(Commands::Issue(args)) => {
            args.execute(cli.verbose, &config).await?;
        }
        Some(Commands::Org(args)) => {
            args.execute(&config).await?;
        }
        Some(Commands::RateLimit(args)) => {
            args.execute(&config).await?;
        }
        Some(Commands::Config(args)) => {
            args.execute(&config)?;
        }
        None => {
            println!("sin - export GitHub issues into Jira's JSON importer format");
            println!();
            println!("Use --help for usage information");
        }
    }

    Ok(())
}
