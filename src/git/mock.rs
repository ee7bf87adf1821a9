use crate::error::{BumpError, Result};
use crate::git::BranchResolver;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock resolver for testing without a git repository
#[derive(Debug)]
pub struct MockResolver {
    answer: std::result::Result<String, String>,
    calls: AtomicUsize,
}

impl MockResolver {
    /// Resolver that always reports `name` as the current branch
    pub fn branch(name: impl Into<String>) -> Self {
        MockResolver {
            answer: Ok(name.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Resolver that always fails with `reason`
    pub fn failing(reason: impl Into<String>) -> Self {
        MockResolver {
            answer: Err(reason.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of times the branch was requested
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl BranchResolver for MockResolver {
    fn current_branch(&self) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer.clone().map_err(BumpError::branch)
    }
}
