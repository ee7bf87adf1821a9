use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use branch_bump::cli::{run_bump_workflow, BumpOutcome, BumpWorkflowArgs};
use branch_bump::config::{self, ResolverKind};
use branch_bump::domain::BranchRules;
use branch_bump::{git, logging, ui};

#[derive(clap::Parser)]
#[command(
    name = "branch-bump",
    about = "Bump the version file according to the current git branch",
    version
)]
struct Args {
    #[arg(short, long, help = "Version file to bump [default: VERSION]")]
    file: Option<PathBuf>,

    #[arg(short, long, help = "Use this branch name instead of asking git")]
    branch: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(long, value_enum, help = "How to look up the current branch")]
    resolver: Option<ResolverArg>,

    #[arg(long, help = "Preview the new version without writing it")]
    dry_run: bool,

    #[arg(long, help = "Exit with status 1 when the branch cannot be determined")]
    strict: bool,

    #[arg(short, long, help = "Print diagnostic output to stderr")]
    verbose: bool,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum ResolverArg {
    Command,
    Libgit2,
}

impl From<ResolverArg> for ResolverKind {
    fn from(arg: ResolverArg) -> Self {
        match arg {
            ResolverArg::Command => ResolverKind::Command,
            ResolverArg::Libgit2 => ResolverKind::Libgit2,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let mut config =
        config::load_config(args.config.as_deref()).context("Failed to load configuration")?;

    if let Some(resolver) = args.resolver {
        config.behavior.resolver = resolver.into();
    }
    let strict = args.strict || config.behavior.strict;

    let rules = BranchRules::from_config(&config.rules).context("Invalid branch rules")?;

    let resolver = git::resolver_for(&config.behavior);

    let workflow_args = BumpWorkflowArgs {
        version_file: args.file.unwrap_or(config.version_file),
        branch: args.branch,
        dry_run: args.dry_run,
    };

    let outcome = run_bump_workflow(&workflow_args, &rules, &resolver).with_context(|| {
        format!(
            "Failed to bump '{}'",
            workflow_args.version_file.display()
        )
    })?;

    match outcome {
        BumpOutcome::Bumped(report) => ui::display_bump_summary(&report),
        BumpOutcome::BranchUnavailable { reason } => {
            ui::display_branch_unavailable(&reason);
            if strict {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
