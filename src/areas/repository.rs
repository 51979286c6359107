use crate::areas::ignores::IgnoreRules;
use crate::areas::workspace::Workspace;
use crate::artifacts::history::commit_stamp::CommitStamp;
use anyhow::Context;
use chrono::{TimeZone, Utc};
use git2::{ObjectType, TreeWalkMode};
use std::path::{Path, PathBuf};

/// Read access to a git repository and the working tree around it.
///
/// All history queries go through libgit2; the rest of the crate only ever
/// sees [`CommitStamp`]s and repository-relative paths.
pub struct Repository {
    path: Box<Path>,
    git: git2::Repository,
    workspace: Workspace,
    ignores: IgnoreRules,
}

impl Repository {
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let path = path
            .canonicalize()
            .with_context(|| format!("Failed to resolve repository path: {:?}", path))?;

        let git = git2::Repository::open(&path)
            .with_context(|| format!("Failed to open git repository at: {:?}", path))?;

        let workspace = Workspace::new(path.clone().into_boxed_path());
        let ignores = IgnoreRules::load(&path);

        Ok(Repository {
            path: path.into_boxed_path(),
            git,
            workspace,
            ignores,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn ignores(&self) -> &IgnoreRules {
        &self.ignores
    }

    /// The commit `HEAD` currently points at.
    ///
    /// Fails on unborn repositories, where there is no history to restore
    /// timestamps from.
    pub fn head_commit(&self) -> anyhow::Result<CommitStamp> {
        let head = self.git.head().context("Failed to resolve HEAD")?;
        let commit = head
            .peel_to_commit()
            .context("Failed to peel HEAD to a commit")?;

        Self::stamp(&commit)
    }

    /// The first parent of a commit, or `None` for a root commit.
    ///
    /// Merge commits have more than one parent; only the first is ever
    /// followed, so history reads as a single line of mainline commits.
    pub fn first_parent(&self, commit: &CommitStamp) -> anyhow::Result<Option<CommitStamp>> {
        let commit = self.find_commit(commit.id())?;

        if commit.parent_count() == 0 {
            return Ok(None);
        }

        let parent_id = commit
            .parent_id(0)
            .with_context(|| format!("Failed to read first parent of commit: {}", commit.id()))?;
        let parent = self.find_commit(parent_id)?;

        Self::stamp(&parent).map(Some)
    }

    /// Repository-relative paths touched between a commit and its parent.
    ///
    /// Deletions report the removed path, so a file that disappears still
    /// refreshes the timestamps of the directories it lived in.
    pub fn changed_paths(
        &self,
        parent: &CommitStamp,
        commit: &CommitStamp,
    ) -> anyhow::Result<Vec<PathBuf>> {
        let parent_tree = self.tree_of(parent)?;
        let commit_tree = self.tree_of(commit)?;

        let diff = self
            .git
            .diff_tree_to_tree(Some(&parent_tree), Some(&commit_tree), None)
            .with_context(|| {
                format!(
                    "Failed to diff trees of commits: {} and {}",
                    parent.id(),
                    commit.id()
                )
            })?;

        Ok(diff
            .deltas()
            .filter_map(|delta| {
                delta
                    .new_file()
                    .path()
                    .or_else(|| delta.old_file().path())
                    .map(Path::to_path_buf)
            })
            .collect())
    }

    /// Every file path present in the tree of a commit.
    pub fn snapshot_paths(&self, commit: &CommitStamp) -> anyhow::Result<Vec<PathBuf>> {
        let tree = self.tree_of(commit)?;
        let mut paths = Vec::new();

        tree.walk(TreeWalkMode::PreOrder, |root, entry| {
            if entry.kind() == Some(ObjectType::Blob) {
                let name = String::from_utf8_lossy(entry.name_bytes());
                paths.push(PathBuf::from(format!("{root}{name}")));
            }

            0
        })
        .with_context(|| format!("Failed to walk tree of commit: {}", commit.id()))?;

        Ok(paths)
    }

    fn find_commit(&self, id: git2::Oid) -> anyhow::Result<git2::Commit<'_>> {
        self.git
            .find_commit(id)
            .with_context(|| format!("Failed to read commit: {id}"))
    }

    fn tree_of(&self, commit: &CommitStamp) -> anyhow::Result<git2::Tree<'_>> {
        self.find_commit(commit.id())?
            .tree()
            .with_context(|| format!("Failed to read tree of commit: {}", commit.id()))
    }

    fn stamp(commit: &git2::Commit<'_>) -> anyhow::Result<CommitStamp> {
        let committed_at = Utc
            .timestamp_opt(commit.time().seconds(), 0)
            .single()
            .with_context(|| {
                format!("Commit has an out-of-range committer time: {}", commit.id())
            })?;

        Ok(CommitStamp::new(commit.id(), committed_at))
    }
}
