use regex::Regex;

use crate::config::RulesConfig;
use crate::domain::version::BumpLevel;
use crate::error::{BumpError, Result};

const FEATURE_PREFIX: &str = "feature/";
const FIX_PREFIX: &str = "fix/";

/// Classify a branch name with the `feature/` / `fix/` naming convention
///
/// `feature/...` is a major bump, `fix/...` a minor bump, and any other
/// name (including an empty one) a patch bump. `feature/` is checked first.
pub fn classify_branch(branch: &str) -> BumpLevel {
    if branch.starts_with(FEATURE_PREFIX) {
        BumpLevel::Major
    } else if branch.starts_with(FIX_PREFIX) {
        BumpLevel::Minor
    } else {
        BumpLevel::Patch
    }
}

/// Configurable branch classification rules
///
/// Patterns are regular expressions searched in the branch name; anchor them
/// with `^` to get prefix semantics. Major patterns are tried before minor
/// ones and the first match wins.
#[derive(Debug, Clone)]
pub struct BranchRules {
    major: Vec<Regex>,
    minor: Vec<Regex>,
}

impl BranchRules {
    /// Compile rules from configuration
    pub fn from_config(config: &RulesConfig) -> Result<Self> {
        Ok(BranchRules {
            major: compile_patterns(&config.major, "major")?,
            minor: compile_patterns(&config.minor, "minor")?,
        })
    }

    /// Rules equivalent to [`classify_branch`]
    pub fn conventional() -> Result<Self> {
        Self::from_config(&RulesConfig::default())
    }

    /// Determine the bump level for a branch name
    pub fn classify(&self, branch: &str) -> BumpLevel {
        if self.major.iter().any(|re| re.is_match(branch)) {
            BumpLevel::Major
        } else if self.minor.iter().any(|re| re.is_match(branch)) {
            BumpLevel::Minor
        } else {
            BumpLevel::Patch
        }
    }
}

fn compile_patterns(patterns: &[String], level: &str) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|pattern| {
            Regex::new(pattern).map_err(|e| {
                BumpError::config(format!(
                    "Invalid {} branch pattern '{}': {}",
                    level, pattern, e
                ))
            })
        })
        .collect()
}
