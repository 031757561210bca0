//! Configuration management for sin
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. Config file (~/.config/sin/config.toml)
//! 4. Default values

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::identity::UserDirectory;
use crate::mapper::MappingContext;
use crate::status::StatusMap;
use crate::{Error, Result};

/// Organization whose repositories are exported
pub const ENV_GITHUB_ORG: &str = "GITHUB_ORG";

/// Atlassian account used when no mapped identity exists
pub const ENV_AUTOMATION_USER: &str = "AUTOMATION_FOR_JIRA_USER_ID";

pub const ENV_USERS_FILE: &str = "SIN_USERS_FILE";
pub const ENV_STATUS_MAP_FILE: &str = "SIN_STATUS_MAP_FILE";

/// GitHub-related configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// Organization owning the source repositories
    pub organization: Option<String>,
}

/// Jira-related configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct JiraConfig {
    /// Account id of the "Automation for Jira" user
    pub automation_user_id: Option<String>,

    /// Default destination project key
    pub project_key: Option<String>,
}

/// Lookup tables used while mapping
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct MappingConfig {
    /// TOML file with a `[users]` login -> account id table
    pub users_file: Option<PathBuf>,

    /// JSON file with external id -> status overrides
    pub status_map_file: Option<PathBuf>,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub github: GitHubConfig,
    pub jira: JiraConfig,
    pub mapping: MappingConfig,
}

/// Values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub organization: Option<String>,
    pub automation_user_id: Option<String>,
    pub users_file: Option<PathBuf>,
    pub status_map_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();

        if let Some(path) = config_path {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &PathBuf) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(Error::Io)?;
        debug!(path = %path.display(), "Loading config file");
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/sin/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("sin").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - GITHUB_ORG: Organization name
    /// - AUTOMATION_FOR_JIRA_USER_ID: Fallback Atlassian account id
    /// - SIN_USERS_FILE: Path to the user directory
    /// - SIN_STATUS_MAP_FILE: Path to the status map
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(org) = var(ENV_GITHUB_ORG) {
            self.github.organization = Some(org);
        }

        if let Some(id) = var(ENV_AUTOMATION_USER) {
            self.jira.automation_user_id = Some(id);
        }

        if let Some(path) = var(ENV_USERS_FILE) {
            self.mapping.users_file = Some(PathBuf::from(path));
        }

        if let Some(path) = var(ENV_STATUS_MAP_FILE) {
            self.mapping.status_map_file = Some(PathBuf::from(path));
        }

        self
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(org) = overrides.organization {
            self.github.organization = Some(org);
        }

        if let Some(id) = overrides.automation_user_id {
            self.jira.automation_user_id = Some(id);
        }

        if let Some(path) = overrides.users_file {
            self.mapping.users_file = Some(path);
        }

        if let Some(path) = overrides.status_map_file {
            self.mapping.status_map_file = Some(path);
        }

        self
    }

    /// Load configuration with all overrides applied
    ///
    /// Priority: CLI > env > config file > defaults
    pub fn load_with_overrides(overrides: ConfigOverrides) -> Result<Self> {
        Ok(Self::load()?
            .with_env_overrides()
            .with_cli_overrides(overrides))
    }

    /// The GitHub organization; an error if it was never configured
    pub fn organization(&self) -> Result<&str> {
        self.github.organization.as_deref().ok_or_else(|| {
            Error::Config(format!(
                "GitHub organization not set. Set {} or [github] organization in the config file",
                ENV_GITHUB_ORG
            ))
        })
    }

    /// The automation account id; an error if it was never configured
    pub fn automation_user_id(&self) -> Result<&str> {
        self.jira.automation_user_id.as_deref().ok_or_else(|| {
            Error::Config(format!(
                "Automation user not set. Set {} or [jira] automation_user_id in the config file",
                ENV_AUTOMATION_USER
            ))
        })
    }

    /// Build the mapping context, loading the user directory and status map
    ///
    /// Fails before any mapping happens if the automation user is missing.
    pub fn mapping_context(&self) -> Result<MappingContext> {
        let automation_user_id = self.automation_user_id()?;
        let users = UserDirectory::load_optional(self.mapping.users_file.as_deref())?;
        let status_map = StatusMap::load_optional(self.mapping.status_map_file.as_deref())?;

        Ok(MappingContext::new(automation_user_id, users, status_map))
    }
}
