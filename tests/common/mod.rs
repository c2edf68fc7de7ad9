#![allow(dead_code)]

use git2::{Commit, Oid, Repository, Signature};
use std::path::Path;
use tempfile::TempDir;

/// A throwaway git repository with helpers for building history
pub struct TestRepo {
    pub dir: TempDir,
    pub repo: Repository,
}

impl TestRepo {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Could not create temp dir");
        let repo = Repository::init(dir.path()).expect("Could not init git repo");
        TestRepo { dir, repo }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Commit the empty tree on top of `branch`, creating the branch if needed
    pub fn commit(&self, branch: &str, message: &str) -> Oid {
        let sig = Signature::now("Test User", "test@example.com").expect("Could not get sig");
        let tree_id = self
            .repo
            .index()
            .expect("Could not get index")
            .write_tree()
            .expect("Could not write tree");
        let tree = self.repo.find_tree(tree_id).expect("Could not find tree");

        let refname = format!("refs/heads/{}", branch);
        let parent = self
            .repo
            .find_reference(&refname)
            .ok()
            .and_then(|r| r.peel_to_commit().ok());
        let parents: Vec<&Commit> = parent.iter().collect();

        self.repo
            .commit(Some(&refname), &sig, &sig, message, &tree, &parents)
            .expect("Could not create commit")
    }

    /// Merge commit on `branch` with `other` as second parent
    pub fn merge(&self, branch: &str, other: Oid, message: &str) -> Oid {
        let sig = Signature::now("Test User", "test@example.com").expect("Could not get sig");
        let refname = format!("refs/heads/{}", branch);
        let head = self
            .repo
            .find_reference(&refname)
            .and_then(|r| r.peel_to_commit())
            .expect("Branch to merge into must exist");
        let other = self.repo.find_commit(other).expect("Could not find commit");
        let tree = head.tree().expect("Could not get tree");

        self.repo
            .commit(Some(&refname), &sig, &sig, message, &tree, &[&head, &other])
            .expect("Could not create merge commit")
    }

    pub fn branch(&self, name: &str, at: Oid) {
        let commit = self.repo.find_commit(at).expect("Could not find commit");
        self.repo
            .branch(name, &commit, false)
            .expect("Could not create branch");
    }

    pub fn tag(&self, name: &str, at: Oid) {
        let object = self.repo.find_object(at, None).expect("Could not find object");
        self.repo
            .tag_lightweight(name, &object, false)
            .expect("Could not create tag");
    }

    pub fn annotated_tag(&self, name: &str, at: Oid) {
        let sig = Signature::now("Test User", "test@example.com").expect("Could not get sig");
        let object = self.repo.find_object(at, None).expect("Could not find object");
        self.repo
            .tag(name, &object, &sig, &format!("Release {}", name), false)
            .expect("Could not create annotated tag");
    }
}
