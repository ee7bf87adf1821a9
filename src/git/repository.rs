use crate::error::{BumpError, Result};
use crate::git::BranchResolver;
use git2::Repository as Git2Repo;
use std::path::{Path, PathBuf};

/// Resolves the branch by reading HEAD through libgit2
#[derive(Debug, Clone)]
pub struct Git2Resolver {
    path: PathBuf,
}

impl Git2Resolver {
    /// Discover the repository containing `path` on each lookup
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Git2Resolver {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl BranchResolver for Git2Resolver {
    fn current_branch(&self) -> Result<String> {
        let repo = Git2Repo::discover(&self.path).map_err(|e| {
            BumpError::branch(format!(
                "Not in a git repository ({}): {}",
                self.path.display(),
                e.message()
            ))
        })?;

        // Matches `git rev-parse --abbrev-ref HEAD` on a detached checkout
        if repo.head_detached().unwrap_or(false) {
            return Ok("HEAD".to_string());
        }

        let head = repo
            .head()
            .map_err(|e| BumpError::branch(format!("Cannot read HEAD: {}", e.message())))?;

        match head.shorthand() {
            Some(name) if !name.trim().is_empty() => Ok(name.trim().to_string()),
            Some(_) => Err(BumpError::branch("HEAD has an empty branch name")),
            None => Err(BumpError::branch("branch name is not valid UTF-8")),
        }
    }
}
