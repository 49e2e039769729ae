use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::config_error::InvalidCommitTypeSnafu;
use crate::error::ConfigError;

/// Style of commit message the model is asked to produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommitType {
    /// Freeform message; the model may still pick the conventional style
    /// when recent history uses it. Written as the empty string.
    #[default]
    #[serde(rename = "")]
    Plain,
    #[serde(rename = "conventional")]
    Conventional,
}

impl CommitType {
    pub fn as_str(self) -> &'static str {
        match self {
            CommitType::Plain => "",
            CommitType::Conventional => "conventional",
        }
    }

    /// Shape the generated message must follow.
    pub fn format_template(self) -> &'static str {
        match self {
            CommitType::Plain => {
                "<commit message>, or if it fits with previous commits, then use the conventional style: <type>(<optional scope>): <commit message>"
            }
            CommitType::Conventional => "<type>(<optional scope>): <commit message>",
        }
    }

    pub fn format_instruction(self) -> String {
        format!(
            "The output response must be in format:\n{}",
            self.format_template()
        )
    }

    /// Type-to-description guidance for this style. Empty for `Plain`.
    ///
    /// Labels and wording follow commitlint's `config-conventional` and the
    /// conventional-changelog writer.
    pub fn type_descriptions(self) -> String {
        match self {
            CommitType::Plain => String::new(),
            CommitType::Conventional => {
                let table = json!({
                    "docs": "Documentation only changes",
                    "style": "Changes that do not affect the meaning of the code (white-space, formatting, missing semi-colons, etc)",
                    "refactor": "A code change that neither fixes a bug, nor adds a feature, nor changes what the code does",
                    "perf": "A code change that improves performance",
                    "test": "Adding missing tests or correcting existing tests",
                    "build": "Changes that affect the build system or external dependencies",
                    "ci": "Changes to our CI configuration files and scripts",
                    "chore": "Other changes that don't modify src or test files",
                    "revert": "Reverts a previous commit",
                    "feat": "A new feature or an improvement to the existing code",
                    "fix": "A bug fix",
                });
                // `{:#}` pretty-prints with two-space indentation.
                format!(
                    "Choose a type from the type-to-description JSON below that best describes the git diff:\n{table:#}"
                )
            }
        }
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommitType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(CommitType::Plain),
            "conventional" => Ok(CommitType::Conventional),
            other => InvalidCommitTypeSnafu { value: other }.fail(),
        }
    }
}
