use chrono::{DateTime, Utc};
use derive_new::new;
use git2::Oid;

/// A commit reduced to the two things restoration cares about: its id and
/// its committer time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct CommitStamp {
    id: Oid,
    committed_at: DateTime<Utc>,
}

impl CommitStamp {
    pub fn id(&self) -> Oid {
        self.id
    }

    pub fn committed_at(&self) -> DateTime<Utc> {
        self.committed_at
    }
}
