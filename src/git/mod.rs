pub mod cli_ops;

pub use cli_ops::CliOps;

use crate::error::GitError;

/// How many subjects a prompt pulls from history.
pub const RECENT_COMMIT_LIMIT: u32 = 25;

/// Abstraction over the git operations the prompt builder and config loader need.
/// `CliOps` shells out to the `git` binary.
pub trait GitOps {
    /// Subject lines of the most recent commits on the current branch, newest first,
    /// at most `limit` of them. A branch with no commits yields an empty list.
    fn recent_subjects(&self, limit: u32) -> Result<Vec<String>, GitError>;

    /// Read a git config value.
    fn config_get(&self, key: &str) -> Result<Option<String>, GitError>;

    /// Set a git config value (repository scope).
    fn config_set(&self, key: &str, value: &str) -> Result<(), GitError>;
}
