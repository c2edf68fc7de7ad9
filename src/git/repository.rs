use crate::domain::Tag;
use crate::error::{GitSemverError, Result};
use git2::{BranchType, Oid, Repository as Git2Repo};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

/// Wrapper around git2::Repository with our trait interface
///
/// `git2::Repository` is `Send` but not `Sync`, so access goes through a mutex.
pub struct Git2Repository {
    repo: Mutex<Git2Repo>,
}

impl Git2Repository {
    /// Open the repository containing `path`, searching parent directories
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;
        debug!(path = %repo.path().display(), "opened repository");

        Ok(Git2Repository::from_git2(repo))
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository {
            repo: Mutex::new(repo),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Git2Repo>> {
        self.repo
            .lock()
            .map_err(|_| GitSemverError::Git(git2::Error::from_str("repository lock poisoned")))
    }
}

impl super::Repository for Git2Repository {
    fn list_tags(&self) -> Result<Vec<Tag>> {
        let repo = self.lock()?;
        let names = repo.tag_names(None)?;

        let mut tags = Vec::new();
        for name in names.iter().flatten() {
            let reference = repo.find_reference(&format!("refs/tags/{}", name))?;
            match reference.peel_to_commit() {
                Ok(commit) => tags.push(Tag::new(name, commit.id())),
                Err(e) => debug!(tag = name, error = %e, "skipping tag without a commit target"),
            }
        }

        tags.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(tags)
    }

    fn branch_head_oid(&self, branch_name: &str) -> Result<Oid> {
        let repo = self.lock()?;
        let branch = repo
            .find_branch(branch_name, BranchType::Local)
            .or_else(|_| repo.find_branch(branch_name, BranchType::Remote))
            .map_err(|e| {
                GitSemverError::branch(format!("Cannot find branch '{}': {}", branch_name, e))
            })?;

        let commit = branch.get().peel_to_commit().map_err(|e| {
            GitSemverError::branch(format!("Branch '{}' has no commit: {}", branch_name, e))
        })?;

        Ok(commit.id())
    }

    fn is_ancestor(&self, commit: Oid, tip: Oid) -> Result<bool> {
        if commit == tip {
            return Ok(true);
        }

        let repo = self.lock()?;
        Ok(repo.graph_descendant_of(tip, commit)?)
    }
}
