use crate::areas::repository::Repository;
use crate::artifacts::history::touch_times::TouchTimes;
use derive_new::new;
use tracing::debug;

/// Walks the first-parent chain from `HEAD` and collects each path's
/// last-change time into a [`TouchTimes`] map.
#[derive(new)]
pub struct HistoryCollector<'r> {
    repository: &'r Repository,
    max_depth: Option<usize>,
}

impl HistoryCollector<'_> {
    pub fn collect(self) -> anyhow::Result<TouchTimes> {
        let mut times = TouchTimes::new(self.max_depth.is_some());
        let mut current = self.repository.head_commit()?;
        let mut depth = 0;

        loop {
            let Some(parent) = self.repository.first_parent(&current)? else {
                // The root commit introduced everything in its tree.
                debug!(commit = %current.id(), "reached root commit");
                for path in self.repository.snapshot_paths(&current)? {
                    times.record(&path, current.committed_at());
                }

                break;
            };

            for path in self.repository.changed_paths(&parent, &current)? {
                times.record(&path, current.committed_at());
            }
            times.note_commit_time(current.committed_at());

            current = parent;
            depth += 1;

            if let Some(max_depth) = self.max_depth
                && depth >= max_depth
            {
                debug!(depth, "stopping at maximum traversal depth");
                break;
            }
        }

        Ok(times)
    }
}
