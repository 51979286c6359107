//! Working tree synchronization
//!
//! This module applies collected last-change times to the file system:
//!
//! - `synchronizer`: Walks the working tree and rewrites modification
//!   times, skipping `.git` and everything the ignore rules match

pub mod synchronizer;
