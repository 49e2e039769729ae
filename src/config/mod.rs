pub mod user_config;

pub use user_config::UserConfig;

use crate::error::aicommit_error::{ConfigSnafu, GitSnafu};
use crate::error::config_error::{InvalidLocaleSnafu, InvalidMaxLengthSnafu, UnknownKeySnafu};
use crate::error::{ConfigError, Result};
use crate::git::GitOps;
use crate::prompt::CommitType;
use snafu::ResultExt;

/// Shortest message budget accepted from any config layer.
pub const MIN_MAX_LENGTH: u32 = 20;

/// Prompt settings, assembled from defaults + user file + git config + flags.
#[derive(Debug, Clone, PartialEq)]
pub struct AicommitConfig {
    pub locale: String,
    pub max_length: u32,
    pub commit_type: CommitType,
}

impl Default for AicommitConfig {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            max_length: 50,
            commit_type: CommitType::Plain,
        }
    }
}

impl AicommitConfig {
    /// Overlay every key that `layer` sets.
    pub fn apply(&mut self, layer: &UserConfig) -> std::result::Result<(), ConfigError> {
        layer.validate()?;
        if let Some(locale) = &layer.locale {
            self.locale = locale.clone();
        }
        if let Some(max_length) = layer.max_length {
            self.max_length = max_length;
        }
        if let Some(commit_type) = layer.commit_type {
            self.commit_type = commit_type;
        }
        Ok(())
    }
}

/// Load config from the user file and git config, merging with defaults.
/// Command-line overrides are applied on top.
pub fn load_config(
    git_ops: &dyn GitOps,
    user: Option<&UserConfig>,
    overrides: &UserConfig,
) -> Result<AicommitConfig> {
    let mut config = AicommitConfig::default();

    if let Some(user) = user {
        config.apply(user).context(ConfigSnafu)?;
    }

    let repo_layer = git_config_layer(git_ops)?;
    config.apply(&repo_layer).context(ConfigSnafu)?;
    config.apply(overrides).context(ConfigSnafu)?;

    tracing::debug!(
        "resolved config: locale={} max_length={} type={:?}",
        config.locale,
        config.max_length,
        config.commit_type
    );
    Ok(config)
}

/// Repository-level settings under the `aicommit.*` git config keys.
fn git_config_layer(git_ops: &dyn GitOps) -> Result<UserConfig> {
    let mut layer = UserConfig::default();

    if let Some(val) = git_ops.config_get("aicommit.locale").context(GitSnafu)? {
        layer.locale = Some(parse_locale(&val).context(ConfigSnafu)?);
    }

    if let Some(val) = git_ops.config_get("aicommit.maxlength").context(GitSnafu)? {
        layer.max_length = Some(parse_max_length(&val).context(ConfigSnafu)?);
    }

    // An empty value reads back as unset, so only "conventional" can be chosen here.
    if let Some(val) = git_ops.config_get("aicommit.type").context(GitSnafu)? {
        layer.commit_type = Some(val.parse::<CommitType>().context(ConfigSnafu)?);
    }

    Ok(layer)
}

/// git config key holding the repository-level value of a user-file key.
pub fn git_config_key(key: &str) -> std::result::Result<&'static str, ConfigError> {
    match key {
        "locale" => Ok("aicommit.locale"),
        "max-length" => Ok("aicommit.maxlength"),
        "type" => Ok("aicommit.type"),
        other => UnknownKeySnafu { key: other }.fail(),
    }
}

/// Locales are language tags such as `en` or `pt-br`: letters and dashes only.
pub fn parse_locale(value: &str) -> std::result::Result<String, ConfigError> {
    let valid = !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic() || c == '-');
    if !valid {
        return InvalidLocaleSnafu { value }.fail();
    }
    Ok(value.to_string())
}

pub fn parse_max_length(value: &str) -> std::result::Result<u32, ConfigError> {
    let n = value.trim().parse::<u32>().map_err(|_| {
        InvalidMaxLengthSnafu {
            value,
            min: MIN_MAX_LENGTH,
        }
        .build()
    })?;
    validate_max_length(n)
}

pub fn validate_max_length(n: u32) -> std::result::Result<u32, ConfigError> {
    if n < MIN_MAX_LENGTH {
        return InvalidMaxLengthSnafu {
            value: n.to_string(),
            min: MIN_MAX_LENGTH,
        }
        .fail();
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AicommitError, GitError};
    use std::collections::HashMap;

    struct FakeGitConfig(HashMap<&'static str, &'static str>);

    impl GitOps for FakeGitConfig {
        fn recent_subjects(&self, _limit: u32) -> std::result::Result<Vec<String>, GitError> {
            Ok(Vec::new())
        }

        fn config_get(&self, key: &str) -> std::result::Result<Option<String>, GitError> {
            Ok(self.0.get(key).map(|v| v.to_string()))
        }

        fn config_set(&self, _key: &str, _value: &str) -> std::result::Result<(), GitError> {
            Ok(())
        }
    }

    #[test]
    fn defaults_when_nothing_set() {
        let git = FakeGitConfig(HashMap::new());
        let config = load_config(&git, None, &UserConfig::default()).unwrap();
        assert_eq!(config, AicommitConfig::default());
        assert_eq!(config.locale, "en");
        assert_eq!(config.max_length, 50);
        assert_eq!(config.commit_type, CommitType::Plain);
    }

    #[test]
    fn layers_apply_in_precedence_order() {
        let git = FakeGitConfig(HashMap::from([("aicommit.maxlength", "72")]));
        let user = UserConfig {
            locale: Some("de".to_string()),
            max_length: Some(60),
            commit_type: Some(CommitType::Conventional),
        };
        let overrides = UserConfig {
            locale: Some("fr".to_string()),
            ..Default::default()
        };

        let config = load_config(&git, Some(&user), &overrides).unwrap();
        assert_eq!(config.locale, "fr");
        assert_eq!(config.max_length, 72);
        assert_eq!(config.commit_type, CommitType::Conventional);
    }

    #[test]
    fn invalid_git_config_value_is_rejected() {
        let git = FakeGitConfig(HashMap::from([("aicommit.type", "semantic")]));
        let err = load_config(&git, None, &UserConfig::default()).unwrap_err();
        assert!(matches!(err, AicommitError::Config { .. }));
    }

    #[test]
    fn short_override_is_rejected() {
        let git = FakeGitConfig(HashMap::new());
        let overrides = UserConfig {
            max_length: Some(10),
            ..Default::default()
        };
        assert!(load_config(&git, None, &overrides).is_err());
    }

    #[test]
    fn user_keys_map_to_git_config_keys() {
        assert_eq!(git_config_key("locale").unwrap(), "aicommit.locale");
        assert_eq!(git_config_key("max-length").unwrap(), "aicommit.maxlength");
        assert_eq!(git_config_key("type").unwrap(), "aicommit.type");
        assert!(matches!(
            git_config_key("maxlength").unwrap_err(),
            ConfigError::UnknownKey { .. }
        ));
    }

    #[test]
    fn locale_validation() {
        assert_eq!(parse_locale("en").unwrap(), "en");
        assert_eq!(parse_locale("zh-CN").unwrap(), "zh-CN");
        assert!(parse_locale("").is_err());
        assert!(parse_locale("en US").is_err());
        assert!(parse_locale("en_US").is_err());
    }

    #[test]
    fn max_length_validation() {
        assert_eq!(parse_max_length("20").unwrap(), 20);
        assert_eq!(parse_max_length(" 120 ").unwrap(), 120);
        assert!(parse_max_length("19").is_err());
        assert!(parse_max_length("-5").is_err());
        assert!(parse_max_length("fifty").is_err());
    }
}
