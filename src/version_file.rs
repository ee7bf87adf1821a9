//! Reading and writing the one-line version file.

use std::fs;
use std::path::Path;

use crate::domain::Version;
use crate::error::{BumpError, Result};

/// Reads the version file and returns its contents with surrounding whitespace removed.
///
/// The text is not validated here; malformed contents surface when the version is parsed.
///
/// # Returns
/// * `Ok(String)` - Trimmed file contents
/// * `Err(BumpError::FileRead)` - If the file is missing or unreadable
pub fn read_version(path: &Path) -> Result<String> {
    let text = fs::read_to_string(path).map_err(|source| BumpError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(text.trim().to_string())
}

/// Overwrites the version file with `major.minor.patch` and a trailing newline.
///
/// # Returns
/// * `Ok(())` - File replaced
/// * `Err(BumpError::FileWrite)` - If the file cannot be written
pub fn write_version(path: &Path, version: &Version) -> Result<()> {
    fs::write(path, format!("{}\n", version)).map_err(|source| BumpError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_trims_whitespace() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("VERSION");
        fs::write(&path, "  1.2.3 \r\n\n").unwrap();

        assert_eq!(read_version(&path).unwrap(), "1.2.3");
    }

    #[test]
    fn test_read_does_not_validate() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("VERSION");
        fs::write(&path, "not a version\n").unwrap();

        assert_eq!(read_version(&path).unwrap(), "not a version");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("VERSION");

        let err = read_version(&path).unwrap_err();
        assert!(matches!(err, BumpError::FileRead { .. }));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_write_replaces_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("VERSION");
        fs::write(&path, "9.9.9-old-and-much-longer\nsecond line\n").unwrap();

        write_version(&path, &Version::new(1, 3, 0)).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "1.3.0\n");
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("VERSION");
        let version = Version::new(12, 0, 345);

        write_version(&path, &version).unwrap();
        let text = read_version(&path).unwrap();

        assert_eq!(Version::parse(&text).unwrap(), version);
    }

    #[test]
    fn test_write_into_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("VERSION");

        let err = write_version(&path, &Version::new(1, 0, 0)).unwrap_err();
        assert!(matches!(err, BumpError::FileWrite { .. }));
    }
}
