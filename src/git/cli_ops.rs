use std::path::PathBuf;
use std::process::Command;

use crate::error::git_error::CommandFailedSnafu;
use crate::error::GitError;
use crate::git::GitOps;

/// Git operations implemented by shelling out to the `git` CLI.
pub struct CliOps {
    pub repo_dir: PathBuf,
}

impl CliOps {
    pub fn new(repo_dir: PathBuf) -> Self {
        Self { repo_dir }
    }

    /// Run a git command and return stdout on success, or an error with stderr.
    fn run_git(&self, args: &[&str]) -> Result<String, GitError> {
        let (success, stdout, stderr) = self.run_git_raw(args)?;
        if success {
            Ok(stdout)
        } else {
            Err(CommandFailedSnafu {
                message: stderr.trim().to_string(),
            }
            .build())
        }
    }

    /// Whether HEAD resolves to a commit. An unborn branch makes `rev-parse -q`
    /// exit non-zero with empty stderr; anything git prints is a real failure.
    fn has_head(&self) -> Result<bool, GitError> {
        let (success, _stdout, stderr) =
            self.run_git_raw(&["rev-parse", "--verify", "-q", "HEAD"])?;
        if success {
            Ok(true)
        } else if stderr.trim().is_empty() {
            Ok(false)
        } else {
            Err(CommandFailedSnafu {
                message: stderr.trim().to_string(),
            }
            .build())
        }
    }

    /// Run git and return (success, stdout, stderr) without failing on non-zero exit.
    fn run_git_raw(&self, args: &[&str]) -> Result<(bool, String, String), GitError> {
        tracing::debug!("running git {}", args.join(" "));
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo_dir)
            .output()
            .map_err(|e| {
                CommandFailedSnafu {
                    message: format!("failed to run git: {e}"),
                }
                .build()
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        Ok((output.status.success(), stdout, stderr))
    }
}

/// One subject per `\n`-separated line, blank lines dropped. Other
/// whitespace, including a trailing `\r`, is kept as git printed it.
fn parse_subjects(stdout: &str) -> Vec<String> {
    stdout
        .split('\n')
        .filter(|l| !l.is_empty())
        .map(|l| l.to_string())
        .collect()
}

impl GitOps for CliOps {
    fn recent_subjects(&self, limit: u32) -> Result<Vec<String>, GitError> {
        if !self.has_head()? {
            tracing::debug!("no commits on current branch yet");
            return Ok(Vec::new());
        }

        let limit = limit.to_string();
        let stdout = self.run_git(&["log", "--pretty=format:%s", "-n", &limit])?;

        let subjects = parse_subjects(&stdout);
        tracing::debug!("read {} recent commit subjects", subjects.len());
        Ok(subjects)
    }

    fn config_get(&self, key: &str) -> Result<Option<String>, GitError> {
        let (success, stdout, stderr) = self.run_git_raw(&["config", "--get", key])?;
        if success {
            let val = stdout.trim().to_string();
            if val.is_empty() {
                Ok(None)
            } else {
                Ok(Some(val))
            }
        } else if stderr.trim().is_empty() {
            // git config --get exits with 1 when key is not found, which is not an error
            Ok(None)
        } else {
            Err(CommandFailedSnafu {
                message: stderr.trim().to_string(),
            }
            .build())
        }
    }

    fn config_set(&self, key: &str, value: &str) -> Result<(), GitError> {
        self.run_git(&["config", key, value])?;
        Ok(())
    }
}
