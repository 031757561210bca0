//! GitHub login to Atlassian account id lookup
//!
//! The directory is a TOML file with a single `[users]` table:
//!
//! ```toml
//! [users]
//! octocat = "5b10ac8d82e05b22cc7d4ef5"
//! hubot = "557058:f58131cb-b67d-43c7-b30d-6b58d40bd077"
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::{Error, Result};

/// Translates a GitHub login into an Atlassian account id
///
/// A miss is not an error; callers decide on the fallback.
pub trait IdentityLookup: Send + Sync {
    fn atlassian_id(&self, login: &str) -> Option<String>;
}

impl IdentityLookup for HashMap<String, String> {
    fn atlassian_id(&self, login: &str) -> Option<String> {
        self.get(login).cloned()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct UserDirectoryFile {
    users: HashMap<String, String>,
}

/// File-backed identity table
///
/// GitHub logins are case-insensitive, so keys are stored lowercased.
#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: HashMap<String, String>,
}

impl UserDirectory {
    /// Directory with no entries; every lookup misses
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load the directory from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(Error::Io)?;
        let directory = Self::from_toml_str(&contents).map_err(|e| match e {
            Error::Config(msg) => Error::Config(format!("{}: {}", path.display(), msg)),
            other => other,
        })?;

        debug!(path = %path.display(), users = directory.len(), "Loaded user directory");
        Ok(directory)
    }

    /// Load from `path` if given, otherwise start empty
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::empty()),
        }
    }

    /// Parse the directory from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: UserDirectoryFile = toml::from_str(contents)
            .map_err(|e| Error::Config(format!("Failed to parse user directory: {}", e)))?;

        Ok(file.users.into_iter().collect())
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl FromIterator<(String, String)> for UserDirectory {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let users = iter
            .into_iter()
            .map(|(login, id)| (login.to_lowercase(), id.trim().to_string()))
            // blank ids mean "not mapped yet"
            .filter(|(_, id)| !id.is_empty())
            .collect();
        Self { users }
    }
}

impl IdentityLookup for UserDirectory {
    fn atlassian_id(&self, login: &str) -> Option<String> {
        self.users.get(&login.to_lowercase()).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_directory() {
        let toml = r#"
[users]
octocat = "5b10ac8d82e05b22cc7d4ef5"
Hubot = "557058:f58131cb"
"#;
        let directory = UserDirectory::from_toml_str(toml).unwrap();
        assert_eq!(directory.len(), 2);
        assert_eq!(
            directory.atlassian_id("octocat").as_deref(),
            Some("5b10ac8d82e05b22cc7d4ef5")
        );
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let directory: UserDirectory = [("Hubot".to_string(), "id-1".to_string())]
            .into_iter()
            .collect();
        assert_eq!(directory.atlassian_id("hubot").as_deref(), Some("id-1"));
        assert_eq!(directory.atlassian_id("HUBOT").as_deref(), Some("id-1"));
    }

    #[test]
    fn test_blank_id_is_a_miss() {
        let directory = UserDirectory::from_toml_str("[users]\nghost = \"  \"\n").unwrap();
        assert!(directory.is_empty());
        assert!(directory.atlassian_id("ghost").is_none());
    }

    #[test]
    fn test_empty_file() {
        let directory = UserDirectory::from_toml_str("").unwrap();
        assert!(directory.atlassian_id("anyone").is_none());
    }

    #[test]
    fn test_invalid_toml() {
        let result = UserDirectory::from_toml_str("[users\n");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[users]\noctocat = \"abc\"").unwrap();

        let directory = UserDirectory::load_optional(Some(file.path())).unwrap();
        assert_eq!(directory.atlassian_id("octocat").as_deref(), Some("abc"));
    }

    #[test]
    fn test_hash_map_lookup() {
        let mut map = HashMap::new();
        map.insert("octocat".to_string(), "abc".to_string());
        assert_eq!(map.atlassian_id("octocat").as_deref(), Some("abc"));
        assert!(map.atlassian_id("other").is_none());
    }
}
