pub mod commit_type;

pub use commit_type::CommitType;

use crate::error::GitError;
use crate::git::{GitOps, RECENT_COMMIT_LIMIT};

const TASK_INSTRUCTION: &str = "Generate a concise git commit message written in present tense for the following code diff with the given specifications below:";
const EXCLUSION_DIRECTIVE: &str = "Exclude anything unnecessary such as translation. Your entire response will be passed directly into git commit.";
const INTENT_GUIDANCE: &str = "If possible, instead of simply describing what code changed, try to infer and describe why the developer wanted to changed it.";
const RECENT_COMMITS_HEADER: &str =
    "Here are some recent commit messages, which you can use as a guideline:";

/// Assembles the instruction text sent to the model alongside a diff.
///
/// Holds no state of its own. Every call to [`PromptBuilder::build`] reads
/// history again through the supplied [`GitOps`].
pub struct PromptBuilder<'a> {
    git_ops: &'a dyn GitOps,
}

impl<'a> PromptBuilder<'a> {
    pub fn new(git_ops: &'a dyn GitOps) -> Self {
        Self { git_ops }
    }

    /// Build the prompt for the given message language, length budget and style.
    ///
    /// Fails only when reading commit history fails.
    pub fn build(
        &self,
        locale: &str,
        max_length: u32,
        commit_type: CommitType,
    ) -> Result<String, GitError> {
        // A plain style still shows the model the conventional type list.
        let description_type = match commit_type {
            CommitType::Plain => CommitType::Conventional,
            other => other,
        };

        let segments = [
            TASK_INSTRUCTION.to_string(),
            format!("Message language: {locale}"),
            format!("Commit message must be a maximum of {max_length} characters."),
            EXCLUSION_DIRECTIVE.to_string(),
            INTENT_GUIDANCE.to_string(),
            description_type.type_descriptions(),
            commit_type.format_instruction(),
            self.recent_commits()?,
        ];

        let prompt = segments
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("\n");
        tracing::debug!("built {commit_type:?} prompt ({} bytes)", prompt.len());
        Ok(prompt)
    }

    fn recent_commits(&self) -> Result<String, GitError> {
        let subjects = self.git_ops.recent_subjects(RECENT_COMMIT_LIMIT)?;
        let mut block = String::from(RECENT_COMMITS_HEADER);
        for subject in &subjects {
            block.push('\n');
            block.push_str(subject);
        }
        Ok(block)
    }
}
