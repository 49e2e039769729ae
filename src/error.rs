use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub), module(aicommit_error))]
pub enum AicommitError {
    #[snafu(display("git error: {source}"))]
    Git {
        source: GitError,
        #[snafu(implicit)]
        location: snafu::Location,
    },

    #[snafu(display("config error: {source}"))]
    Config {
        source: ConfigError,
        #[snafu(implicit)]
        location: snafu::Location,
    },

    #[snafu(display("IO error: {source}"))]
    Io {
        source: std::io::Error,
        #[snafu(implicit)]
        location: snafu::Location,
    },
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub), module(git_error))]
pub enum GitError {
    #[snafu(display("git command failed: {message}"))]
    CommandFailed {
        message: String,
        #[snafu(implicit)]
        location: snafu::Location,
    },
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub), module(config_error))]
pub enum ConfigError {
    #[snafu(display("could not determine home directory"))]
    NoHomeDirectory {
        #[snafu(implicit)]
        location: snafu::Location,
    },

    #[snafu(display("failed to read {path}: {source}"))]
    ReadFile {
        path: String,
        source: std::io::Error,
        #[snafu(implicit)]
        location: snafu::Location,
    },

    #[snafu(display("failed to parse {path}: {source}"))]
    ParseFile {
        path: String,
        source: toml::de::Error,
        #[snafu(implicit)]
        location: snafu::Location,
    },

    #[snafu(display("failed to write {path}: {source}"))]
    WriteFile {
        path: String,
        source: std::io::Error,
        #[snafu(implicit)]
        location: snafu::Location,
    },

    #[snafu(display("failed to serialize config: {source}"))]
    Serialize {
        source: toml::ser::Error,
        #[snafu(implicit)]
        location: snafu::Location,
    },

    #[snafu(display("invalid locale {value:?}: must be letters and dashes only (e.g. en, pt-br)"))]
    InvalidLocale {
        value: String,
        #[snafu(implicit)]
        location: snafu::Location,
    },

    #[snafu(display("invalid max-length {value:?}: must be an integer of at least {min}"))]
    InvalidMaxLength {
        value: String,
        min: u32,
        #[snafu(implicit)]
        location: snafu::Location,
    },

    #[snafu(display("invalid commit type {value:?}: expected \"\" or \"conventional\""))]
    InvalidCommitType {
        value: String,
        #[snafu(implicit)]
        location: snafu::Location,
    },

    #[snafu(display("unknown config key: {key}"))]
    UnknownKey {
        key: String,
        #[snafu(implicit)]
        location: snafu::Location,
    },

    #[snafu(display("expected key=value, got {entry:?}"))]
    MissingValue {
        entry: String,
        #[snafu(implicit)]
        location: snafu::Location,
    },
}

pub type Result<T, E = AicommitError> = std::result::Result<T, E>;
