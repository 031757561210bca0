//! Status overrides keyed by ticket external id
//!
//! The file is a JSON object, e.g. `{"acme-42": "In Review"}`.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{Error, Result};

/// Status used for open issues without an override
pub const DEFAULT_OPEN_STATUS: &str = "Imported";

/// Status used for closed issues without an override
pub const DEFAULT_CLOSED_STATUS: &str = "Complete";

/// Mapping from ticket external id to destination status
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusMap(HashMap<String, String>);

impl StatusMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the map from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(Error::Io)?;
        let map: Self = serde_json::from_str(&contents).map_err(|e| {
            Error::Config(format!(
                "Failed to parse status map {}: {}",
                path.display(),
                e
            ))
        })?;

        debug!(path = %path.display(), entries = map.len(), "Loaded status map");
        Ok(map)
    }

    /// Load from `path` if given, otherwise start empty
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::new()),
        }
    }

    pub fn get(&self, external_id: &str) -> Option<&str> {
        self.0.get(external_id).map(String::as_str)
    }

    pub fn insert(&mut self, external_id: impl Into<String>, status: impl Into<String>) {
        self.0.insert(external_id.into(), status.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for StatusMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_json_object() {
        let map: StatusMap =
            serde_json::from_str(r#"{"acme-1": "In Progress", "acme-2": "Done"}"#).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("acme-1"), Some("In Progress"));
        assert_eq!(map.get("acme-3"), None);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"acme-42": "Blocked"}}"#).unwrap();

        let map = StatusMap::load_optional(Some(file.path())).unwrap();
        assert_eq!(map.get("acme-42"), Some("Blocked"));
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[1, 2]").unwrap();

        let result = StatusMap::load_from_file(file.path());
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_no_file_is_empty() {
        assert!(StatusMap::load_optional(None).unwrap().is_empty());
    }
}
