use crate::error::{BumpError, Result};
use std::fmt;

/// Version number stored in a version file: `major.minor.patch`, nothing else
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse version text such as "1.2.3"
    ///
    /// Exactly three dot-separated decimal components are accepted. Leading
    /// zeros are tolerated ("01.2.3" is 1.2.3); signs, whitespace, prefixes
    /// and pre-release or build suffixes are rejected.
    pub fn parse(text: &str) -> Result<Self> {
        let parts: Vec<&str> = text.split('.').collect();
        if parts.len() != 3 {
            return Err(BumpError::version(format!(
                "Invalid version format: '{}' - expected X.Y.Z",
                text
            )));
        }

        let major = parse_component(parts[0], "major", text)?;
        let minor = parse_component(parts[1], "minor", text)?;
        let patch = parse_component(parts[2], "patch", text)?;

        Ok(Version {
            major,
            minor,
            patch,
        })
    }

    /// Bump version according to bump level
    ///
    /// The selected component is incremented, every less significant
    /// component is reset to zero and more significant ones are kept.
    pub fn bump(&self, level: BumpLevel) -> Result<Self> {
        let bumped = match level {
            BumpLevel::Major => Version::new(increment(self.major, "major", self)?, 0, 0),
            BumpLevel::Minor => {
                Version::new(self.major, increment(self.minor, "minor", self)?, 0)
            }
            BumpLevel::Patch => Version::new(
                self.major,
                self.minor,
                increment(self.patch, "patch", self)?,
            ),
        };
        Ok(bumped)
    }

    /// Parse `text` and bump it in one step
    pub fn bump_str(text: &str, level: BumpLevel) -> Result<Self> {
        Version::parse(text)?.bump(level)
    }
}

fn parse_component(part: &str, name: &str, text: &str) -> Result<u64> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BumpError::version(format!(
            "Invalid {} version '{}' in '{}'",
            name, part, text
        )));
    }

    part.parse::<u64>().map_err(|_| {
        BumpError::version(format!(
            "{} version '{}' in '{}' is out of range",
            name, part, text
        ))
    })
}

fn increment(value: u64, name: &str, version: &Version) -> Result<u64> {
    value.checked_add(1).ok_or_else(|| {
        BumpError::VersionOverflow(format!("cannot bump {} component of {}", name, version))
    })
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl std::str::FromStr for Version {
    type Err = BumpError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

/// Which component of the version gets incremented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BumpLevel {
    Major,
    Minor,
    Patch,
}

impl fmt::Display for BumpLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BumpLevel::Major => "major",
            BumpLevel::Minor => "minor",
            BumpLevel::Patch => "patch",
        };
        f.write_str(name)
    }
}
