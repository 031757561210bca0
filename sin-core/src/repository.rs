//! Repository references as accepted on the command line

use crate::{Error, Result};

/// Parse a repository reference into owner and name
///
/// Supports formats:
/// - name (owned by `default_owner`)
/// - owner/name
/// - https://github.com/owner/name, including deeper paths such as issue URLs
/// - git@github.com:owner/name.git
pub fn parse_repository(reference: &str, default_owner: &str) -> Result<(String, String)> {
    let reference = reference.trim();
    if reference.is_empty() {
        return Err(Error::Repository("Empty repository reference".to_string()));
    }

    if reference.starts_with("https://") || reference.starts_with("http://") {
        let url = url::Url::parse(reference)
            .map_err(|e| Error::Repository(format!("{}: {}", reference, e)))?;
        return owner_and_name(url.path().trim_start_matches('/'), reference);
    }

    if let Some(rest) = reference.strip_prefix("git@") {
        return match rest.split_once(':') {
            Some((_, path)) => owner_and_name(path, reference),
            None => Err(Error::Repository(format!("Invalid SSH URL: {}", reference))),
        };
    }

    if !reference.contains('/') {
        return Ok((
            default_owner.to_string(),
            reference.trim_end_matches(".git").to_string(),
        ));
    }

    owner_and_name(reference, reference)
}

/// Bare repository name used in external ids, components and status-map keys
///
/// Resolves the reference the same way the client does, so `widgets`,
/// `acme/widgets` and `https://github.com/acme/widgets/issues/4` all yield
/// `widgets`.
pub fn repository_name(reference: &str) -> Result<String> {
    parse_repository(reference, "").map(|(_, name)| name)
}

fn owner_and_name(path: &str, original: &str) -> Result<(String, String)> {
    let path = path.trim_end_matches('/');
    let mut parts = path.split('/');
    match (parts.next(), parts.next()) {
        (Some(owner), Some(name)) if !owner.is_empty() && !name.is_empty() => Ok((
            owner.to_string(),
            name.trim_end_matches(".git").to_string(),
        )),
        _ => Err(Error::Repository(format!(
            "Invalid repository reference: {}. Expected name or owner/name",
            original
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_name_uses_default_owner() {
        let (owner, repo) = parse_repository("widgets", "acme").unwrap();
        assert_eq!(owner, "acme");
        assert_eq!(repo, "widgets");
    }

    #[test]
    fn test_parse_shorthand() {
        let (owner, repo) = parse_repository("other/repo", "acme").unwrap();
        assert_eq!(owner, "other");
        assert_eq!(repo, "repo");
    }

    #[test]
    fn test_parse_https_url_with_git_suffix() {
        let (owner, repo) = parse_repository("https://github.com/owner/repo.git", "acme").unwrap();
        assert_eq!(owner, "owner");
        assert_eq!(repo, "repo");
    }

    #[test]
    fn test_parse_issue_url() {
        let (owner, repo) =
            parse_repository("https://github.com/owner/repo/issues/4", "acme").unwrap();
        assert_eq!(owner, "owner");
        assert_eq!(repo, "repo");
    }

    #[test]
    fn test_parse_ssh_url() {
        let (owner, repo) = parse_repository("git@github.com:owner/repo.git", "acme").unwrap();
        assert_eq!(owner, "owner");
        assert_eq!(repo, "repo");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_repository("", "acme").is_err());
        assert!(parse_repository("owner/", "acme").is_err());
        assert!(parse_repository("https://github.com/owner", "acme").is_err());
        assert!(parse_repository("git@github.com", "acme").is_err());
    }

    #[test]
    fn test_repository_name_matches_client_resolution() {
        for reference in [
            "widgets",
            "acme/widgets",
            "acme/widgets.git",
            "https://github.com/acme/widgets",
            "https://github.com/acme/widgets/",
            "https://github.com/acme/widgets/issues/4",
            "git@github.com:acme/widgets.git",
        ] {
            assert_eq!(repository_name(reference).unwrap(), "widgets", "{reference}");
        }
    }

    #[test]
    fn test_repository_name_rejects_bad_reference() {
        let err = repository_name("https://github.com/acme").unwrap_err();
        assert!(matches!(err, Error::Repository(_)));
    }
}
