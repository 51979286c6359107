use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::path::Path;
use tracing::warn;

const IGNORE_FILE: &str = ".gitignore";

/// Ignore rules read from the top-level `.gitignore` of a repository.
///
/// A repository without a readable `.gitignore` gets an empty rule set,
/// so restoration still runs and simply ignores nothing.
pub struct IgnoreRules {
    matcher: Gitignore,
}

impl IgnoreRules {
    pub fn load(workspace_path: &Path) -> Self {
        let mut builder = GitignoreBuilder::new(workspace_path);

        if let Some(error) = builder.add(workspace_path.join(IGNORE_FILE)) {
            warn!(%error, "could not read {IGNORE_FILE}, ignoring nothing");
            return IgnoreRules {
                matcher: Gitignore::empty(),
            };
        }

        match builder.build() {
            Ok(matcher) => IgnoreRules { matcher },
            Err(error) => {
                warn!(%error, "could not compile {IGNORE_FILE}, ignoring nothing");
                IgnoreRules {
                    matcher: Gitignore::empty(),
                }
            }
        }
    }

    /// Whether a repository-relative path matches the ignore rules.
    pub fn matches(&self, path: &Path, is_dir: bool) -> bool {
        self.matcher.matched(path, is_dir).is_ignore()
    }
}
