use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::{parse_locale, parse_max_length, validate_max_length};
use crate::error::config_error::{
    MissingValueSnafu, NoHomeDirectorySnafu, ParseFileSnafu, ReadFileSnafu, SerializeSnafu,
    UnknownKeySnafu, WriteFileSnafu,
};
use crate::error::ConfigError;
use crate::prompt::CommitType;
use snafu::ResultExt;

/// Keys accepted by `config get` / `config set`.
pub const KEYS: [&str; 3] = ["locale", "max-length", "type"];

/// User-level settings stored at ~/.git-aicommit.toml. Every key is optional;
/// unset keys fall through to the next layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct UserConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub commit_type: Option<CommitType>,
}

impl UserConfig {
    /// Path to the user config file (~/.git-aicommit.toml).
    pub fn path() -> Result<PathBuf, ConfigError> {
        let home = std::env::var("HOME")
            .ok()
            .map(PathBuf::from)
            .filter(|p| p.is_absolute())
            .ok_or_else(|| NoHomeDirectorySnafu.build())?;
        Ok(home.join(".git-aicommit.toml"))
    }

    /// Load user config from ~/.git-aicommit.toml.
    /// Returns Ok(None) if the file does not exist.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(path).context(ReadFileSnafu {
            path: path.display().to_string(),
        })?;
        let config: UserConfig = toml::from_str(&contents).context(ParseFileSnafu {
            path: path.display().to_string(),
        })?;
        config.validate()?;
        Ok(Some(config))
    }

    /// Save user config to ~/.git-aicommit.toml.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self).context(SerializeSnafu)?;
        std::fs::write(path, contents).context(WriteFileSnafu {
            path: path.display().to_string(),
        })?;
        Ok(())
    }

    /// Check values that came from a file, where the type system alone
    /// does not enforce the allowed ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(locale) = &self.locale {
            parse_locale(locale)?;
        }
        if let Some(max_length) = self.max_length {
            validate_max_length(max_length)?;
        }
        Ok(())
    }

    /// Current value of `key` as it would be written on the command line,
    /// or None when unset.
    pub fn get(&self, key: &str) -> Result<Option<String>, ConfigError> {
        match key {
            "locale" => Ok(self.locale.clone()),
            "max-length" => Ok(self.max_length.map(|n| n.to_string())),
            "type" => Ok(self.commit_type.map(|t| t.to_string())),
            other => UnknownKeySnafu { key: other }.fail(),
        }
    }

    /// Validate and store `value` under `key`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "locale" => self.locale = Some(parse_locale(value)?),
            "max-length" => self.max_length = Some(parse_max_length(value)?),
            "type" => self.commit_type = Some(value.parse::<CommitType>()?),
            other => return UnknownKeySnafu { key: other }.fail(),
        }
        Ok(())
    }

    /// Apply a `key=value` assignment as given to `config set`.
    pub fn set_entry(&mut self, entry: &str) -> Result<(), ConfigError> {
        let (key, value) = entry
            .split_once('=')
            .ok_or_else(|| MissingValueSnafu { entry }.build())?;
        self.set(key.trim(), value.trim())
    }
}
