use crate::domain::Tag;
use crate::error::{GitSemverError, Result};
use crate::git::Repository;
use git2::Oid;
use std::collections::{HashMap, HashSet};

/// Mock repository for testing without actual git operations
///
/// Tags keep their insertion order (unlike [super::Git2Repository], which sorts
/// by name) so tests can exercise tie-breaking.
pub struct MockRepository {
    tags: Vec<Tag>,
    parents: HashMap<Oid, Vec<Oid>>,
    branch_heads: HashMap<String, Oid>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            tags: Vec::new(),
            parents: HashMap::new(),
            branch_heads: HashMap::new(),
        }
    }

    /// Add a commit with its parent commits
    pub fn add_commit(&mut self, oid: Oid, parents: &[Oid]) {
        self.parents.insert(oid, parents.to_vec());
    }

    /// Add a tag pointing to an OID
    pub fn add_tag(&mut self, name: impl Into<String>, oid: Oid) {
        self.tags.push(Tag::new(name, oid));
    }

    /// Set a branch head
    pub fn set_branch_head(&mut self, branch: impl Into<String>, oid: Oid) {
        self.branch_heads.insert(branch.into(), oid);
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn list_tags(&self) -> Result<Vec<Tag>> {
        Ok(self.tags.clone())
    }

    fn branch_head_oid(&self, branch_name: &str) -> Result<Oid> {
        self.branch_heads
            .get(branch_name)
            .copied()
            .ok_or_else(|| GitSemverError::branch(format!("Branch not found: {}", branch_name)))
    }

    fn is_ancestor(&self, commit: Oid, tip: Oid) -> Result<bool> {
        let mut pending = vec![tip];
        let mut seen = HashSet::new();

        while let Some(oid) = pending.pop() {
            if oid == commit {
                return Ok(true);
            }
            if seen.insert(oid) {
                if let Some(parents) = self.parents.get(&oid) {
                    pending.extend(parents.iter().copied());
                }
            }
        }

        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oid(n: u8) -> Oid {
        Oid::from_bytes(&[n; 20]).unwrap()
    }

    #[test]
    fn test_mock_repository_branch_head() {
        let mut repo = MockRepository::new();
        repo.set_branch_head("main", oid(1));

        assert_eq!(repo.branch_head_oid("main").unwrap(), oid(1));
        assert!(matches!(
            repo.branch_head_oid("develop"),
            Err(GitSemverError::Branch(_))
        ));
    }

    #[test]
    fn test_mock_repository_list_tags_keeps_insertion_order() {
        let mut repo = MockRepository::new();
        repo.add_tag("v2.0.0", oid(2));
        repo.add_tag("v1.0.0", oid(1));

        let names: Vec<String> = repo.list_tags().unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["v2.0.0", "v1.0.0"]);
    }

    #[test]
    fn test_mock_repository_ancestry() {
        // 1 <- 2 <- 3 (main)
        //       \
        //        4 (feature)
        let mut repo = MockRepository::new();
        repo.add_commit(oid(1), &[]);
        repo.add_commit(oid(2), &[oid(1)]);
        repo.add_commit(oid(3), &[oid(2)]);
        repo.add_commit(oid(4), &[oid(2)]);

        assert!(repo.is_ancestor(oid(1), oid(3)).unwrap());
        assert!(repo.is_ancestor(oid(3), oid(3)).unwrap());
        assert!(!repo.is_ancestor(oid(4), oid(3)).unwrap());
        assert!(!repo.is_ancestor(oid(3), oid(1)).unwrap());
    }

    #[test]
    fn test_mock_repository_merge_commit_ancestry() {
        let mut repo = MockRepository::new();
        repo.add_commit(oid(1), &[]);
        repo.add_commit(oid(2), &[oid(1)]);
        repo.add_commit(oid(3), &[oid(1)]);
        repo.add_commit(oid(5), &[oid(2), oid(3)]);

        assert!(repo.is_ancestor(oid(3), oid(5)).unwrap());
        assert!(repo.is_ancestor(oid(2), oid(5)).unwrap());
    }

    #[test]
    fn test_mock_repository_default() {
        let repo = MockRepository::default();
        assert!(repo.list_tags().unwrap().is_empty());
    }
}
