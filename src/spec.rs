//! Compact spec grammar for a file in a remote repository.
//!
//! A spec looks like `owner/repo@ref:path/to/file.json`. The `@ref` part is
//! optional and defaults to [`DEFAULT_REF`].

use std::fmt;

/// Branch used when a spec omits `@ref`.
pub const DEFAULT_REF: &str = "main";

/// A parsed `owner/repo@ref:path` spec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteSpec {
    pub owner: String,
    pub repo: String,
    pub git_ref: String,
    pub path: String,
}

impl RemoteSpec {
    /// Parse a spec string.
    ///
    /// Returns `None` when `owner`, `repo`, or `path` is empty, or when the
    /// repo portion has no `/` separator. Callers treat `None` as "spec
    /// unusable, try the next one" rather than an error.
    pub fn parse(spec: &str) -> Option<Self> {
        let spec = spec.trim();
        if spec.is_empty() {
            return None;
        }

        let (owner_repo, path) = match spec.split_once(':') {
            Some((head, tail)) => (head, tail),
            None => (spec, ""),
        };
        let (repo_part, git_ref) = match owner_repo.split_once('@') {
            Some((head, tail)) => (head, tail),
            None => (owner_repo, DEFAULT_REF),
        };
        let (owner, repo) = repo_part.split_once('/')?;

        if owner.is_empty() || repo.is_empty() || path.is_empty() {
            return None;
        }
        Some(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
            git_ref: git_ref.to_string(),
            path: path.to_string(),
        })
    }
}

impl fmt::Display for RemoteSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}@{}:{}",
            self.owner, self.repo, self.git_ref, self.path
        )
    }
}
