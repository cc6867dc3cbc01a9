use crate::error::Result;
use crate::git::TagSource;
use git2::Repository as Git2Repo;
use std::path::Path;

/// Tag source backed by a git repository on disk
pub struct Git2TagSource {
    repo: Git2Repo,
}

impl Git2TagSource {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2TagSource { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2TagSource { repo }
    }
}

impl TagSource for Git2TagSource {
    fn list_tags(&self) -> Result<Vec<String>> {
        let names = self.repo.tag_names(None)?;
        let mut tags: Vec<String> = names.iter().flatten().map(str::to_string).collect();
        tags.sort();
        tracing::debug!(count = tags.len(), "listed repository tags");
        Ok(tags)
    }
}
