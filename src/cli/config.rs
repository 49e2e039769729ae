use crate::config::{git_config_key, UserConfig};
use crate::error::aicommit_error::{ConfigSnafu, GitSnafu, IoSnafu};
use crate::error::{ConfigError, Result};
use crate::git::{CliOps, GitOps};
use snafu::ResultExt;

pub fn run_get(keys: &[String]) -> Result<()> {
    let config = UserConfig::load().context(ConfigSnafu)?.unwrap_or_default();
    for line in render_values(&config, keys).context(ConfigSnafu)? {
        println!("{line}");
    }
    Ok(())
}

pub fn run_set(entries: &[String], local: bool) -> Result<()> {
    if local {
        let repo_dir = std::env::current_dir().context(IoSnafu)?;
        return write_repo_entries(&CliOps::new(repo_dir), entries);
    }

    let existing = UserConfig::load().context(ConfigSnafu)?.unwrap_or_default();
    let updated = apply_entries(existing, entries).context(ConfigSnafu)?;
    updated.save().context(ConfigSnafu)?;
    tracing::info!("updated {} config key(s)", entries.len());
    Ok(())
}

/// One `key=value` line per requested key; unset keys print an empty value.
fn render_values(config: &UserConfig, keys: &[String]) -> Result<Vec<String>, ConfigError> {
    keys.iter()
        .map(|key| -> Result<String, ConfigError> {
            let value = config.get(key)?.unwrap_or_default();
            Ok(format!("{key}={value}"))
        })
        .collect()
}

/// Validate every entry first, then write each as `aicommit.<key>` in git config.
fn write_repo_entries(git_ops: &dyn GitOps, entries: &[String]) -> Result<()> {
    let validated = apply_entries(UserConfig::default(), entries).context(ConfigSnafu)?;
    for entry in entries {
        let key = entry.split_once('=').map_or(entry.as_str(), |(k, _)| k).trim();
        let git_key = git_config_key(key).context(ConfigSnafu)?;
        let value = validated
            .get(key)
            .context(ConfigSnafu)?
            .unwrap_or_default();
        git_ops.config_set(git_key, &value).context(GitSnafu)?;
    }
    tracing::info!("updated {} repository config key(s)", entries.len());
    Ok(())
}

/// Entries apply all-or-nothing: one invalid entry leaves the file untouched.
fn apply_entries(mut config: UserConfig, entries: &[String]) -> Result<UserConfig, ConfigError> {
    for entry in entries {
        config.set_entry(entry)?;
    }
    Ok(config)
}
