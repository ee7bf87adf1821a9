//! Branch lookup abstraction layer
//!
//! This module provides a trait-based abstraction over "which branch am I
//! on?", allowing the bump workflow to run against a real repository or a
//! canned answer in tests.
//!
//! # Overview
//!
//! The primary abstraction is the [BranchResolver] trait. The concrete
//! implementations include:
//!
//! - [command::GitCommandResolver]: runs `git rev-parse --abbrev-ref HEAD`
//! - [repository::Git2Resolver]: reads HEAD in-process with the `git2` crate
//! - [mock::MockResolver]: a fixed answer for testing
//!
//! ```rust
//! # use branch_bump::git::{BranchResolver, MockResolver};
//! let resolver = MockResolver::branch("fix/bug-42");
//! assert_eq!(resolver.current_branch().unwrap(), "fix/bug-42");
//! ```

pub mod command;
pub mod mock;
pub mod repository;

pub use command::GitCommandResolver;
pub use mock::MockResolver;
pub use repository::Git2Resolver;

use crate::config::{BehaviorConfig, ResolverKind};
use crate::error::Result;

/// Source of the current branch name
///
/// ## Error Handling
///
/// Every way of failing to name a branch (tool missing, not a repository,
/// unborn HEAD, empty output) is reported as
/// [crate::error::BumpError::BranchResolution], which callers treat as
/// recoverable.
pub trait BranchResolver: Send + Sync {
    /// Get the short name of the checked-out branch
    ///
    /// # Returns
    /// * `Ok(String)` - Branch name, trimmed and non-empty (`HEAD` when detached)
    /// * `Err` - If the branch cannot be determined
    fn current_branch(&self) -> Result<String>;
}

impl<R: BranchResolver + ?Sized> BranchResolver for Box<R> {
    fn current_branch(&self) -> Result<String> {
        (**self).current_branch()
    }
}

/// Build the resolver selected by configuration
///
/// Both resolvers look up the branch from the current directory.
///
/// # Arguments
/// * `behavior` - Resolver kind and git program name
pub fn resolver_for(behavior: &BehaviorConfig) -> Box<dyn BranchResolver> {
    match behavior.resolver {
        ResolverKind::Command => Box::new(GitCommandResolver::new(behavior.git_program.clone())),
        ResolverKind::Libgit2 => Box::new(Git2Resolver::new(".")),
    }
}
