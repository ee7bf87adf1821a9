//! User interface module - terminal output.
//!
//! `formatter` holds the text building and printing; this module re-exports it.

pub mod formatter;

pub use formatter::{
    display_branch_unavailable, display_bump_summary, display_error, display_status,
    format_bump_reason, format_bump_summary,
};
