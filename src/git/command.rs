use std::io;
use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use crate::error::{BumpError, Result};
use crate::git::BranchResolver;

/// Resolves the branch by running `git rev-parse --abbrev-ref HEAD`
#[derive(Debug, Clone)]
pub struct GitCommandResolver {
    program: String,
    working_dir: Option<PathBuf>,
}

impl GitCommandResolver {
    /// Resolver that runs `program` (normally `git`) in the current directory
    pub fn new(program: impl Into<String>) -> Self {
        GitCommandResolver {
            program: program.into(),
            working_dir: None,
        }
    }

    /// Run the query from `dir` instead of the current directory
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }
}

impl Default for GitCommandResolver {
    fn default() -> Self {
        Self::new("git")
    }
}

impl BranchResolver for GitCommandResolver {
    fn current_branch(&self) -> Result<String> {
        let mut cmd = Command::new(&self.program);
        cmd.args(["rev-parse", "--abbrev-ref", "HEAD"]);
        if let Some(dir) = &self.working_dir {
            if !dir.is_dir() {
                return Err(BumpError::branch(format!(
                    "working directory '{}' does not exist",
                    dir.display()
                )));
            }
            cmd.current_dir(dir);
        }

        debug!(program = %self.program, dir = ?self.working_dir, "querying current branch");

        let output = cmd.output().map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => {
                BumpError::branch(format!("'{}' was not found on PATH", self.program))
            }
            _ => BumpError::branch(format!("Failed to run '{}': {}", self.program, e)),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(BumpError::branch(format!(
                "'{} rev-parse' exited with code {}: {}",
                self.program,
                output.status.code().unwrap_or(-1),
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|_| BumpError::branch("branch name is not valid UTF-8"))?;
        let branch = stdout.trim();

        if branch.is_empty() {
            return Err(BumpError::branch("git reported an empty branch name"));
        }

        Ok(branch.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_branch_error() {
        let resolver = GitCommandResolver::new("/nonexistent/path/to/git");
        let err = resolver.current_branch().unwrap_err();
        assert!(matches!(err, BumpError::BranchResolution(_)));
        assert!(err.to_string().contains("/nonexistent/path/to/git"));
    }

    #[test]
    fn test_missing_working_dir_is_not_reported_as_missing_git() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("gone");
        let err = GitCommandResolver::default()
            .in_dir(&gone)
            .current_branch()
            .unwrap_err();

        assert!(err.is_recoverable());
        let msg = err.to_string();
        assert!(msg.contains("does not exist"), "got: {}", msg);
        assert!(!msg.contains("PATH"), "got: {}", msg);
    }

    #[test]
    fn test_outside_repository_fails() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = GitCommandResolver::default().in_dir(dir.path());
        // Either git is absent or it refuses to run outside a repository
        assert!(resolver.current_branch().unwrap_err().is_recoverable());
    }
}
