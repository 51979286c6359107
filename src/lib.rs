//! Restore working tree modification times from git history.
//!
//! Git does not preserve file modification times: every clone and checkout
//! stamps files with the current clock, which invalidates anything keyed on
//! mtime (build caches, static site generators, backup tools). This crate
//! walks the first-parent commit chain, works out when each tracked path
//! last changed, and rewrites the working tree timestamps to match.

pub mod areas;
pub mod artifacts;
pub mod commands;
