use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// The last-change times collected from history, keyed by
/// repository-relative path.
///
/// Files and directories share the map: recording a change for
/// `src/lib.rs` also refreshes `src`, since a directory is considered
/// changed whenever anything beneath it changes. A stamp only sticks if
/// it is not older than what the map already holds.
#[derive(Debug, Clone)]
pub struct TouchTimes {
    times: BTreeMap<PathBuf, DateTime<Utc>>,
    oldest_seen: DateTime<Utc>,
    depth_capped: bool,
}

impl TouchTimes {
    pub fn new(depth_capped: bool) -> Self {
        TouchTimes {
            times: BTreeMap::new(),
            oldest_seen: Utc::now(),
            depth_capped,
        }
    }

    /// Stamps a changed path and all of its ancestor directories.
    ///
    /// The workspace root is not a mappable path, so an empty path is
    /// left alone and the ancestor walk stops in front of it.
    pub fn record(&mut self, path: &Path, at: DateTime<Utc>) {
        let mut current = path;

        while !current.as_os_str().is_empty() {
            self.stamp(current, at);

            match current.parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }
    }

    /// Folds a traversed commit's time into the oldest-seen fallback.
    pub fn note_commit_time(&mut self, at: DateTime<Utc>) {
        if at < self.oldest_seen {
            self.oldest_seen = at;
        }
    }

    pub fn get(&self, path: &Path) -> Option<DateTime<Utc>> {
        self.times.get(path).copied()
    }

    /// The oldest committer time the traversal has seen, used as a
    /// conservative stand-in when a depth-capped walk leaves paths
    /// unmapped.
    pub fn oldest_seen(&self) -> DateTime<Utc> {
        self.oldest_seen
    }

    /// Whether the walk that built this map had a depth cap configured.
    pub fn is_depth_capped(&self) -> bool {
        self.depth_capped
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    fn stamp(&mut self, path: &Path, at: DateTime<Utc>) {
        match self.times.get_mut(path) {
            Some(existing) if *existing > at => {}
            Some(existing) => *existing = at,
            None => {
                self.times.insert(path.to_path_buf(), at);
            }
        }
    }
}
