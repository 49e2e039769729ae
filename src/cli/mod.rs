pub mod config;
pub mod prompt;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "git-aicommit",
    version,
    about = "Build prompts that ask an AI model for a git commit message"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the commit-message prompt for the current repository
    Prompt {
        /// Language the message should be written in (e.g. en, pt-br)
        #[arg(long)]
        locale: Option<String>,

        /// Maximum commit message length in characters
        #[arg(long)]
        max_length: Option<String>,

        /// Message style: "" for freeform or "conventional"
        #[arg(long = "type")]
        commit_type: Option<String>,
    },

    /// Read or update ~/.git-aicommit.toml
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the value of one or more keys
    Get {
        /// Keys to read (locale, max-length, type)
        #[arg(required = true)]
        keys: Vec<String>,
    },

    /// Set one or more keys, given as key=value
    Set {
        #[arg(required = true)]
        entries: Vec<String>,

        /// Write to the current repository's git config (aicommit.*) instead.
        /// An empty type reads back as unset there.
        #[arg(long)]
        local: bool,
    },
}
