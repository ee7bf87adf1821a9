//! Main workflow orchestration logic
//!
//! Resolve branch, read version, classify, bump, write. Kept apart from
//! main.rs so the whole sequence can be driven programmatically and tested
//! without clap or a real repository.

use std::path::PathBuf;

use tracing::debug;

use crate::domain::{BranchRules, BumpLevel, Version};
use crate::error::Result;
use crate::git::BranchResolver;
use crate::version_file::{read_version, write_version};

/// Arguments for the bump workflow
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic.
#[derive(Debug, Clone, PartialEq)]
pub struct BumpWorkflowArgs {
    /// Path to the version file
    pub version_file: PathBuf,

    /// Branch name to use instead of asking the resolver
    pub branch: Option<String>,

    /// Compute and report without writing
    pub dry_run: bool,
}

impl BumpWorkflowArgs {
    /// Plain run against `version_file`
    pub fn new(version_file: impl Into<PathBuf>) -> Self {
        BumpWorkflowArgs {
            version_file: version_file.into(),
            branch: None,
            dry_run: false,
        }
    }
}

/// What a completed bump did
#[derive(Debug, Clone, PartialEq)]
pub struct BumpReport {
    /// Branch the bump level was derived from
    pub branch: String,

    /// Component that was incremented
    pub level: BumpLevel,

    /// Version text as read from the file
    pub old_version: String,

    /// The bumped version
    pub new_version: Version,

    /// Whether the version file was rewritten
    pub written: bool,
}

/// Result of a bump workflow that did not hit a fatal error
#[derive(Debug, Clone, PartialEq)]
pub enum BumpOutcome {
    /// Version computed (and written unless dry run)
    Bumped(BumpReport),

    /// The branch could not be determined; the version file was not touched
    BranchUnavailable { reason: String },
}

/// Main bump workflow
///
/// Orchestrates the entire bump:
/// 1. Resolve the current branch (or take the explicit one)
/// 2. Read the version file
/// 3. Classify the branch into a bump level
/// 4. Parse and bump the version
/// 5. Write the new version back
///
/// A branch resolution failure stops the run before the version file is
/// read and comes back as [`BumpOutcome::BranchUnavailable`]. Read, parse and
/// write failures are returned as errors.
pub fn run_bump_workflow<R: BranchResolver + ?Sized>(
    args: &BumpWorkflowArgs,
    rules: &BranchRules,
    resolver: &R,
) -> Result<BumpOutcome> {
    let branch = match &args.branch {
        Some(branch) => branch.clone(),
        None => match resolver.current_branch() {
            Ok(branch) => branch,
            Err(e) if e.is_recoverable() => {
                debug!(error = %e, "branch resolution failed, leaving version untouched");
                return Ok(BumpOutcome::BranchUnavailable {
                    reason: e.to_string(),
                });
            }
            Err(e) => return Err(e),
        },
    };
    debug!(%branch, "resolved branch");

    let old_version = read_version(&args.version_file)?;
    debug!(version = %old_version, file = %args.version_file.display(), "read version");

    let level = rules.classify(&branch);
    let new_version = Version::bump_str(&old_version, level)?;
    debug!(%level, %new_version, "computed bump");

    let written = if args.dry_run {
        debug!("dry run, not writing");
        false
    } else {
        write_version(&args.version_file, &new_version)?;
        true
    };

    Ok(BumpOutcome::Bumped(BumpReport {
        branch,
        level,
        old_version,
        new_version,
        written,
    }))
}
