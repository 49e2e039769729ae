use std::path::Path;
use std::process::Command;

use aicommit::config::{load_config, UserConfig};
use aicommit::git::{CliOps, GitOps};
use aicommit::prompt::{CommitType, PromptBuilder};

fn create_temp_repo() -> (tempfile::TempDir, CliOps) {
    let dir = tempfile::tempdir().unwrap();
    for args in [
        vec!["init"],
        vec!["config", "user.email", "test@test.com"],
        vec!["config", "user.name", "Test"],
    ] {
        Command::new("git")
            .args(&args)
            .current_dir(dir.path())
            .output()
            .unwrap();
    }
    let ops = CliOps::new(dir.path().to_path_buf());
    (dir, ops)
}

fn add_and_commit(dir: &Path, filename: &str, content: &str, message: &str) {
    std::fs::write(dir.join(filename), content).unwrap();
    Command::new("git")
        .args(["add", filename])
        .current_dir(dir)
        .output()
        .unwrap();
    Command::new("git")
        .args(["commit", "-m", message])
        .current_dir(dir)
        .output()
        .unwrap();
}

#[test]
fn prompt_lists_real_history() {
    let (dir, ops) = create_temp_repo();
    add_and_commit(dir.path(), "lib.rs", "fn a() {}\n", "add feature");
    add_and_commit(dir.path(), "lib.rs", "fn a() { b() }\n", "fix bug");

    let prompt = PromptBuilder::new(&ops)
        .build("en", 50, CommitType::Conventional)
        .unwrap();

    assert!(prompt.ends_with(
        "\nHere are some recent commit messages, which you can use as a guideline:\nfix bug\nadd feature"
    ));
    assert!(!prompt.contains("\n\n"));
}

#[test]
fn prompt_for_fresh_repo_has_header_only() {
    let (_dir, ops) = create_temp_repo();
    let prompt = PromptBuilder::new(&ops)
        .build("es", 72, CommitType::Plain)
        .unwrap();

    assert!(prompt.ends_with(
        "<commit message>, or if it fits with previous commits, then use the conventional style: <type>(<optional scope>): <commit message>\nHere are some recent commit messages, which you can use as a guideline:"
    ));
    assert!(prompt.contains("Message language: es\n"));
}

#[test]
fn prompt_fails_outside_repository() {
    let dir = tempfile::tempdir().unwrap();
    let ops = CliOps::new(dir.path().to_path_buf());
    assert!(PromptBuilder::new(&ops)
        .build("en", 50, CommitType::Plain)
        .is_err());
}

#[test]
fn repository_config_drives_prompt() {
    let (dir, ops) = create_temp_repo();
    add_and_commit(dir.path(), "README.md", "# demo\n", "docs: add readme");
    ops.config_set("aicommit.type", "conventional").unwrap();
    ops.config_set("aicommit.locale", "ja").unwrap();
    ops.config_set("aicommit.maxlength", "100").unwrap();

    let config = load_config(&ops, None, &UserConfig::default()).unwrap();
    assert_eq!(config.commit_type, CommitType::Conventional);

    let prompt = PromptBuilder::new(&ops)
        .build(&config.locale, config.max_length, config.commit_type)
        .unwrap();
    assert!(prompt.contains("Message language: ja\n"));
    assert!(prompt.contains("Commit message must be a maximum of 100 characters.\n"));
    assert!(prompt.contains(
        "The output response must be in format:\n<type>(<optional scope>): <commit message>\n"
    ));
    assert!(prompt.ends_with("guideline:\ndocs: add readme"));
}
