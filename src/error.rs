use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for branch-bump operations
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("Could not determine the current git branch: {0}")]
    BranchResolution(String),

    #[error("Failed to read version file '{}': {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Version parsing error: {0}")]
    VersionParse(String),

    #[error("Version overflow: {0}")]
    VersionOverflow(String),

    #[error("Failed to write version file '{}': {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for Results in branch-bump
pub type Result<T> = std::result::Result<T, BumpError>;

impl BumpError {
    /// Create a branch resolution error with context
    pub fn branch(msg: impl Into<String>) -> Self {
        BumpError::BranchResolution(msg.into())
    }

    /// Create a version parsing error with context
    pub fn version(msg: impl Into<String>) -> Self {
        BumpError::VersionParse(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumpError::Config(msg.into())
    }

    /// Whether the run can stop cleanly instead of failing.
    ///
    /// Only a missing branch is recoverable: nothing has been read or written
    /// yet, so the caller reports it and leaves the version file untouched.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, BumpError::BranchResolution(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display() {
        let err = BumpError::config("bad rules");
        assert_eq!(err.to_string(), "Configuration error: bad rules");
    }

    #[test]
    fn test_branch_error_display() {
        let err = BumpError::branch("git not found");
        assert_eq!(
            err.to_string(),
            "Could not determine the current git branch: git not found"
        );
    }

    #[test]
    fn test_file_errors_include_path() {
        let read = BumpError::FileRead {
            path: PathBuf::from("VERSION"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file"),
        };
        let msg = read.to_string();
        assert!(msg.contains("read"));
        assert!(msg.contains("'VERSION'"));
        assert!(msg.contains("No such file"));

        let write = BumpError::FileWrite {
            path: PathBuf::from("/ro/VERSION"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(write.to_string().contains("write version file '/ro/VERSION'"));
    }

    #[test]
    fn test_only_branch_resolution_is_recoverable() {
        assert!(BumpError::branch("x").is_recoverable());

        let fatal = vec![
            BumpError::version("x"),
            BumpError::config("x"),
            BumpError::VersionOverflow("x".to_string()),
            BumpError::FileRead {
                path: PathBuf::from("VERSION"),
                source: io::Error::new(io::ErrorKind::NotFound, "missing"),
            },
            BumpError::FileWrite {
                path: PathBuf::from("VERSION"),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
            },
        ];

        for err in fatal {
            assert!(!err.is_recoverable(), "{} should be fatal", err);
        }
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (BumpError::config("x"), "Configuration error"),
            (BumpError::version("x"), "Version parsing error"),
            (BumpError::branch("x"), "Could not determine"),
            (
                BumpError::VersionOverflow("x".to_string()),
                "Version overflow",
            ),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_io_source_is_preserved() {
        use std::error::Error as _;

        let err = BumpError::FileRead {
            path: PathBuf::from("VERSION"),
            source: io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
        };
        let source = err.source().expect("io source");
        assert!(source.to_string().contains("UTF-8"));
    }
}
