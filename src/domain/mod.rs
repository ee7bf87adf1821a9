//! Domain logic - pure business rules independent of git and the filesystem

pub mod branch;
pub mod version;

pub use branch::{classify_branch, BranchRules};
pub use version::{BumpLevel, Version};
