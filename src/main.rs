use aicommit::cli::{Cli, Commands, ConfigAction};
use clap::Parser;

fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Prompt { locale, max_length, commit_type } => {
            aicommit::cli::prompt::run(locale, max_length, commit_type)
        }
        Commands::Config { action } => match action {
            ConfigAction::Get { keys } => aicommit::cli::config::run_get(&keys),
            ConfigAction::Set { entries, local } => {
                aicommit::cli::config::run_set(&entries, local)
            }
        },
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
