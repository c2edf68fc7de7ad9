//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the read-only git queries
//! that version resolution needs, allowing for a real repository implementation and
//! an in-memory one for testing.
//!
//! # Overview
//!
//! The primary abstraction is the [Repository] trait. The concrete implementations are:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: An in-memory implementation for testing
//!
//! # Usage
//!
//! Resolution code depends on the [Repository] trait rather than a concrete
//! implementation.
//!
//! ```rust
//! # use git_semver::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! let tip = repo.branch_head_oid("main")?;
//! for tag in repo.list_tags()? {
//!     if repo.is_ancestor(tag.target, tip)? {
//!         println!("{} is on main", tag.name);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::domain::Tag;
use crate::error::Result;
use git2::Oid;

/// Read-only git queries used to resolve the latest version
///
/// ## Thread Safety
///
/// All implementors must be `Send + Sync` to allow safe sharing across threads.
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>]. Implementations map `git2::Error`
/// to [crate::error::GitSemverError::Git] and missing branches to
/// [crate::error::GitSemverError::Branch].
pub trait Repository: Send + Sync {
    /// Get every tag in the repository, sorted by name
    ///
    /// Annotated tags are peeled to the commit they point at. Tags that do not
    /// point at a commit are left out.
    ///
    /// # Returns
    /// * `Ok(Vec<Tag>)` - Tags in a stable, name-sorted order
    /// * `Err` - If the tag references cannot be read
    fn list_tags(&self) -> Result<Vec<Tag>>;

    /// Get the OID of a branch's tip commit
    ///
    /// # Arguments
    /// * `branch_name` - The name of the branch (e.g., "main", "origin/main")
    ///
    /// # Returns
    /// * `Ok(Oid)` - Object ID of the branch's tip commit
    /// * `Err` - If the branch doesn't exist or if there's a Git error
    fn branch_head_oid(&self, branch_name: &str) -> Result<Oid>;

    /// Check whether `commit` is reachable from `tip`
    ///
    /// A commit is reachable from itself.
    ///
    /// # Example
    /// ```rust
    /// # use git_semver::git::Repository;
    /// # use git2::Oid;
    /// # fn example<R: Repository>(repo: &R, tag_commit: Oid) -> Result<(), Box<dyn std::error::Error>> {
    /// let tip = repo.branch_head_oid("main")?;
    /// if repo.is_ancestor(tag_commit, tip)? {
    ///     println!("{} is merged into main", tag_commit);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    fn is_ancestor(&self, commit: Oid, tip: Oid) -> Result<bool>;
}
