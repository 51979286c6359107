use anyhow::Context;
use chrono::{DateTime, Utc};
use filetime::FileTime;
use std::path::{Component, Path};

const INTERNAL_DIR: &str = ".git";

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Strips the workspace root from an absolute path, yielding the
    /// repository-relative form used as map keys everywhere else.
    pub fn relativize<'p>(&self, path: &'p Path) -> anyhow::Result<&'p Path> {
        path.strip_prefix(self.path.as_ref())
            .with_context(|| format!("Path is outside the workspace: {:?}", path))
    }

    /// Whether a repository-relative path lives under the `.git` directory.
    ///
    /// Only the leading component counts, so `.gitignore` and `.github`
    /// are not internal, while `.git/config` is.
    pub fn is_internal(path: &Path) -> bool {
        matches!(
            path.components().next(),
            Some(Component::Normal(name)) if name == INTERNAL_DIR
        )
    }

    /// Sets both the access and modification time of a workspace entry.
    pub fn set_times(&self, path: &Path, to: DateTime<Utc>) -> anyhow::Result<()> {
        let stamp = FileTime::from_unix_time(to.timestamp(), to.timestamp_subsec_nanos());

        filetime::set_file_times(self.path.join(path), stamp, stamp)
            .with_context(|| format!("Failed to set times for: {:?}", path))
    }
}
