//! Core repository components
//!
//! This module contains the building blocks shared by every command:
//!
//! - `ignores`: Ignore rules loaded from the top-level `.gitignore`
//! - `repository`: Read access to the underlying git repository
//! - `workspace`: Working directory file system operations

pub mod ignores;
pub mod repository;
pub mod workspace;
