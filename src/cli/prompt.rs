use crate::config::{load_config, parse_locale, parse_max_length, UserConfig};
use crate::error::aicommit_error::{ConfigSnafu, GitSnafu, IoSnafu};
use crate::error::Result;
use crate::git::CliOps;
use crate::prompt::{CommitType, PromptBuilder};
use snafu::ResultExt;

pub fn run(
    locale: Option<String>,
    max_length: Option<String>,
    commit_type: Option<String>,
) -> Result<()> {
    let overrides = flag_overrides(locale, max_length, commit_type)?;

    let repo_dir = std::env::current_dir().context(IoSnafu)?;
    let git_ops = CliOps::new(repo_dir);

    let user = UserConfig::load().context(ConfigSnafu)?;
    let config = load_config(&git_ops, user.as_ref(), &overrides)?;

    let prompt = PromptBuilder::new(&git_ops)
        .build(&config.locale, config.max_length, config.commit_type)
        .context(GitSnafu)?;

    println!("{prompt}");
    Ok(())
}

/// Command-line flags form the highest-precedence config layer.
fn flag_overrides(
    locale: Option<String>,
    max_length: Option<String>,
    commit_type: Option<String>,
) -> Result<UserConfig> {
    let mut layer = UserConfig::default();
    if let Some(locale) = locale {
        layer.locale = Some(parse_locale(&locale).context(ConfigSnafu)?);
    }
    if let Some(max_length) = max_length {
        layer.max_length = Some(parse_max_length(&max_length).context(ConfigSnafu)?);
    }
    if let Some(commit_type) = commit_type {
        layer.commit_type = Some(commit_type.parse::<CommitType>().context(ConfigSnafu)?);
    }
    Ok(layer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_become_overrides() {
        let layer = flag_overrides(
            Some("ko".to_string()),
            Some("30".to_string()),
            Some(String::new()),
        )
        .unwrap();
        assert_eq!(layer.locale.as_deref(), Some("ko"));
        assert_eq!(layer.max_length, Some(30));
        assert_eq!(layer.commit_type, Some(CommitType::Plain));
    }

    #[test]
    fn absent_flags_leave_layer_empty() {
        let layer = flag_overrides(None, None, None).unwrap();
        assert_eq!(layer, UserConfig::default());
    }

    #[test]
    fn bad_flags_are_rejected() {
        assert!(flag_overrides(None, Some("0".to_string()), None).is_err());
        assert!(flag_overrides(None, None, Some("emoji".to_string())).is_err());
        assert!(flag_overrides(Some("e n".to_string()), None, None).is_err());
    }
}
