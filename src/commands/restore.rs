use crate::areas::repository::Repository;
use crate::artifacts::history::collector::HistoryCollector;
use crate::artifacts::sync::synchronizer::Synchronizer;
use anyhow::Context;
use tracing::{debug, info};

#[derive(Debug, Clone, Default)]
pub struct RestoreOptions {
    /// How many parent links to follow from `HEAD` before giving up,
    /// or `None` to walk all the way to the root commit.
    pub max_depth: Option<usize>,
}

impl Repository {
    /// Restores working tree modification times from commit history.
    ///
    /// Returns how many entries had their times rewritten.
    pub fn restore_times(&self, opts: &RestoreOptions) -> anyhow::Result<usize> {
        let times = HistoryCollector::new(self, opts.max_depth)
            .collect()
            .context("Failed to collect last-change times")?;
        debug!(paths = times.len(), "collected last-change times");

        let updated = Synchronizer::new(self.workspace(), self.ignores())
            .apply(&times)
            .context("Failed to synchronize the working tree")?;
        info!(updated, "restored modification times");

        Ok(updated)
    }
}
