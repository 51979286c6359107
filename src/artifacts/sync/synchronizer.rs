use crate::areas::ignores::IgnoreRules;
use crate::areas::workspace::Workspace;
use crate::artifacts::history::touch_times::TouchTimes;
use anyhow::Context;
use chrono::{DateTime, Utc};
use derive_new::new;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Rewrites working tree modification times to match collected history.
#[derive(new)]
pub struct Synchronizer<'r> {
    workspace: &'r Workspace,
    ignores: &'r IgnoreRules,
}

impl Synchronizer<'_> {
    /// Walks every entry under the workspace root and sets its
    /// modification time to the one history recorded for it.
    ///
    /// The `.git` directory and ignored paths are pruned without
    /// descending into them. Paths history does not know about are
    /// skipped with a warning, unless the map came from a depth-capped
    /// walk, in which case they get the oldest time that walk saw.
    /// Entries already carrying the right time are left alone, which
    /// keeps a second run from touching anything.
    ///
    /// Returns how many entries were actually rewritten.
    pub fn apply(&self, times: &TouchTimes) -> anyhow::Result<usize> {
        let mut updated = 0;

        let entries = WalkDir::new(self.workspace.path())
            .into_iter()
            .filter_entry(|entry| self.should_visit(entry));

        for entry in entries {
            let entry = entry.context("Failed to walk the working tree")?;
            let path = self.workspace.relativize(entry.path())?;

            // The workspace root itself carries no history.
            if path.as_os_str().is_empty() {
                continue;
            }

            let target = match times.get(path) {
                Some(at) => at,
                None if times.is_depth_capped() => times.oldest_seen(),
                None => {
                    warn!(path = %path.display(), "path not found in commit history, skipping");
                    continue;
                }
            };

            let metadata = entry
                .metadata()
                .with_context(|| format!("Failed to read metadata for: {:?}", path))?;
            let modified: DateTime<Utc> = metadata
                .modified()
                .with_context(|| format!("Failed to read modification time for: {:?}", path))?
                .into();

            if modified == target {
                continue;
            }

            debug!(path = %path.display(), from = %modified, to = %target, "setting modification time");
            self.workspace.set_times(path, target)?;
            updated += 1;
        }

        Ok(updated)
    }

    fn should_visit(&self, entry: &DirEntry) -> bool {
        let Ok(path) = entry.path().strip_prefix(self.workspace.path()) else {
            return true;
        };

        if path.as_os_str().is_empty() {
            return true;
        }

        if Workspace::is_internal(path) {
            return false;
        }

        !self.ignores.matches(path, entry.file_type().is_dir())
    }
}
