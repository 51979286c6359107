//! Timestamp restoration algorithms
//!
//! This module contains the two halves of a restoration run:
//!
//! - `history`: First-parent traversal mapping each path to the time of
//!   the commit that last changed it
//! - `sync`: Working tree walk that rewrites on-disk modification times
//!   to match the collected history

pub mod history;
pub mod sync;
