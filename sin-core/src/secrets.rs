//! Secrets management for sin
//!
//! The GitHub token is kept out of `config.toml`. It comes from the
//! `GITHUB_TOKEN` environment variable or from `~/.config/sin/secrets.toml`,
//! which must have restrictive permissions (0600 on Unix).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{Error, Result};

/// Environment variable holding the GitHub API token
pub const ENV_GITHUB_TOKEN: &str = "GITHUB_TOKEN";

const TEMPLATE: &str = r#"# sin secrets
# Do not share or commit this file. Keep it chmod 600.

[github]
# Personal access token, create at https://github.com/settings/tokens
# Needs read access to issues and organization members.
token = ""
"#;

/// Secrets file contents
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Secrets {
    pub github: GitHubSecrets,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct GitHubSecrets {
    /// GitHub Personal Access Token
    pub token: Option<String>,
}

impl Secrets {
    /// Load secrets from the default location, or empty secrets if absent
    pub fn load() -> Result<Self> {
        match Self::default_secrets_path() {
            Some(path) if path.exists() => Self::load_from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load secrets from a file, rejecting group/world readable files
    pub fn load_from_file(path: &Path) -> Result<Self> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            let mode = std::fs::metadata(path).map_err(Error::Io)?.permissions().mode();
            if mode & 0o077 != 0 {
                return Err(Error::Config(format!(
                    "Secrets file {} has insecure permissions {:o}. Run: chmod 600 {}",
                    path.display(),
                    mode & 0o777,
                    path.display()
                )));
            }
        }

        let contents = std::fs::read_to_string(path).map_err(Error::Io)?;
        let mut secrets: Secrets = toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse secrets: {}", e)))?;

        secrets.github.token = secrets
            .github
            .token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        debug!(path = %path.display(), "Loaded secrets file");
        Ok(secrets)
    }

    pub fn default_secrets_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("sin").join("secrets.toml"))
    }

    /// GitHub token, `GITHUB_TOKEN` taking priority over the file
    ///
    /// Missing everywhere is a configuration error.
    pub fn github_token(&self) -> Result<String> {
        self.github_token_from(std::env::var(ENV_GITHUB_TOKEN).ok())
    }

    fn github_token_from(&self, env_token: Option<String>) -> Result<String> {
        if let Some(token) = env_token.map(|t| t.trim().to_string()) {
            if !token.is_empty() {
                debug!("Using GitHub token from {}", ENV_GITHUB_TOKEN);
                return Ok(token);
            }
        }

        self.github.token.clone().ok_or_else(|| {
            Error::Config(format!(
                "GitHub token not found. Set {} or add it to ~/.config/sin/secrets.toml",
                ENV_GITHUB_TOKEN
            ))
        })
    }

    /// Write the secrets template to the default location
    pub fn create_template() -> Result<PathBuf> {
        let path = Self::default_secrets_path()
            .ok_or_else(|| Error::Config("Could not determine secrets path".to_string()))?;
        Self::create_template_at(&path)?;
        Ok(path)
    }

    /// Write the secrets template to `path` with owner-only permissions
    ///
    /// Never overwrites an existing file.
    pub fn create_template_at(path: &Path) -> Result<()> {
        if path.exists() {
            return Err(Error::Config(format!(
                "Secrets file already exists at {}",
                path.display()
            )));
        }

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(Error::Io)?;
        }

        std::fs::write(path, TEMPLATE).map_err(Error::Io)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
                .map_err(Error::Io)?;
        }

        warn!(path = %path.display(), "Created secrets template, add your GitHub token");
        Ok(())
    }
}
