//! Last-change time collection from commit history
//!
//! This module works out, for every path the history knows about, when it
//! last changed:
//!
//! - `commit_stamp`: A commit id paired with its committer time
//! - `touch_times`: The path-to-timestamp map being built up
//! - `collector`: The first-parent traversal that fills the map
//!
//! ## Algorithm
//!
//! Starting from `HEAD`, the collector walks first parents only, so merge
//! commits contribute a single diff against their mainline parent. Each
//! commit's changed paths are stamped with that commit's committer time,
//! and every stamp also refreshes the path's ancestor directories. Newer
//! times win, and since the walk runs newest to oldest, the first time a
//! path is seen is the time it keeps. The root commit has no parent to
//! diff against, so its whole tree counts as changed.

pub mod collector;
pub mod commit_stamp;
pub mod touch_times;
