//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the git operations
//! git-release needs, allowing for multiple implementations including real
//! repositories and an in-memory mock for testing.
//!
//! # Overview
//!
//! The primary abstraction is the [Repository] trait, which defines the
//! narrow set of operations the release pipeline consumes. The concrete
//! implementations include:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! # Usage
//!
//! The preflight pipeline and the orchestrator depend only on the
//! [Repository] trait, so they can be exercised against the mock without a
//! real repository on disk.
//!
//! ```rust
//! # use git_release::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! let branch = repo.current_branch()?;
//! let tags = repo.list_tags()?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Narrow git capability trait consumed by the release pipeline.
///
/// Every method blocks until the underlying operation completes. No method
/// retries; the first failure surfaces to the caller.
///
/// ## Thread Safety
///
/// All implementors must be `Send + Sync` to allow safe sharing across threads.
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>]. Implementations map
/// underlying errors (like `git2::Error`) to the appropriate
/// [crate::error::ReleaseError] variants.
pub trait Repository: Send + Sync {
    /// Get the name of the currently checked-out branch
    fn current_branch(&self) -> Result<String>;

    /// Check whether the working tree has uncommitted changes against HEAD
    fn has_uncommitted_changes(&self) -> Result<bool>;

    /// Fetch the remote tag list
    ///
    /// Side-effecting network call; must complete before tag state is read.
    fn fetch_tags(&self, remote: &str) -> Result<()>;

    /// Get all tag names in the repository, as raw strings, sorted
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Resolve a branch reference to its commit identifier
    ///
    /// Returns `Ok(None)` when the reference does not resolve (a missing
    /// remote counterpart is absence, not a crash). Other git failures,
    /// such as a malformed repository, are errors.
    ///
    /// # Arguments
    /// * `refname` - A revspec such as "main" or "origin/main"
    fn branch_commit(&self, refname: &str) -> Result<Option<String>>;

    /// Create an annotated tag on the current HEAD with the given message
    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()>;

    /// Push exactly one named tag to a remote
    fn push_tag(&self, remote: &str, name: &str) -> Result<()>;
}
