use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use filetime::FileTime;
use rstest::fixture;
use std::path::Path;

// 2023-01-01 12:00:00 UTC and the two following days, far enough in the
// past that freshly written fixture files never collide with them.
pub const EPOCH_ONE: i64 = 1_672_574_400;
pub const EPOCH_TWO: i64 = 1_672_660_800;
pub const EPOCH_THREE: i64 = 1_672_747_200;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

pub fn init_repository(dir: &Path) -> git2::Repository {
    git2::Repository::init(dir).expect("Failed to init repository")
}

pub fn signature_at(epoch: i64) -> git2::Signature<'static> {
    git2::Signature::new(
        "Fixture Author",
        "fixture@example.com",
        &git2::Time::new(epoch, 0),
    )
    .expect("Failed to create signature")
}

/// Stages every addition, modification and deletion in the working tree,
/// honouring `.gitignore` the way `git add --all` does.
pub fn stage_all(repo: &git2::Repository) {
    let mut index = repo.index().expect("Failed to open index");
    index
        .add_all(["*"], git2::IndexAddOption::DEFAULT, None)
        .expect("Failed to stage additions");
    index
        .update_all(["*"], None)
        .expect("Failed to stage deletions");
    index.write().expect("Failed to write index");
}

/// Commits whatever is staged, advancing `HEAD`, with the committer time
/// pinned to the given epoch.
pub fn commit_at(repo: &git2::Repository, message: &str, epoch: i64) -> git2::Oid {
    let mut index = repo.index().expect("Failed to open index");
    let tree_id = index.write_tree().expect("Failed to write tree");
    let tree = repo.find_tree(tree_id).expect("Failed to find tree");
    let signature = signature_at(epoch);

    let parent = match repo.head() {
        Ok(head) => Some(head.peel_to_commit().expect("Failed to peel HEAD")),
        Err(_) => None,
    };
    let parents = parent.iter().collect::<Vec<_>>();

    repo.commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)
        .expect("Failed to commit")
}

/// Commits staged changes on top of an explicit set of parents, which is
/// how the fixtures build merge commits.
pub fn merge_commit_at(
    repo: &git2::Repository,
    message: &str,
    epoch: i64,
    parent_ids: &[git2::Oid],
) -> git2::Oid {
    let mut index = repo.index().expect("Failed to open index");
    let tree_id = index.write_tree().expect("Failed to write tree");
    let tree = repo.find_tree(tree_id).expect("Failed to find tree");
    let signature = signature_at(epoch);

    let parents = parent_ids
        .iter()
        .map(|id| repo.find_commit(*id).expect("Failed to find parent commit"))
        .collect::<Vec<_>>();
    let parent_refs = parents.iter().collect::<Vec<_>>();

    repo.commit(
        Some("HEAD"),
        &signature,
        &signature,
        message,
        &tree,
        &parent_refs,
    )
    .expect("Failed to commit merge")
}

/// Writes the given files, stages everything and commits at the given
/// epoch. Paths are relative to the repository workdir.
pub fn commit_files(
    repo: &git2::Repository,
    files: &[(&str, &str)],
    message: &str,
    epoch: i64,
) -> git2::Oid {
    let workdir = repo.workdir().expect("Repository has no workdir");

    for (path, content) in files {
        write_file(FileSpec::new(workdir.join(path), content.to_string()));
    }

    stage_all(repo);
    commit_at(repo, message, epoch)
}

pub fn mtime_epoch(path: &Path) -> i64 {
    let metadata = std::fs::metadata(path).expect("Failed to stat path");
    FileTime::from_last_modification_time(&metadata).unix_seconds()
}

pub fn file_time_of(path: &Path) -> FileTime {
    let metadata = std::fs::metadata(path).expect("Failed to stat path");
    FileTime::from_last_modification_time(&metadata)
}

pub fn run_retime_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("retime").expect("Failed to find retime binary");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}
