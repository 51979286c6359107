//! Command implementations
//!
//! Each command is an `impl Repository` block that wires the areas and
//! artifacts together:
//!
//! - `restore`: Collect last-change times and apply them to the working tree

pub mod restore;
