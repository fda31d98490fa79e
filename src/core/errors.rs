use std::path::PathBuf;

/// All domain errors for frontenv.
///
/// Each variant provides enough context to diagnose the issue
/// without needing a debugger.
#[derive(Debug, thiserror::Error)]
pub enum FrontenvError {
    #[error(
        "File not found: {path}\n\n  \
         Check that the path is correct and the file exists.\n  \
         Run 'frontenv init' to create a starter frontenv.toml."
    )]
    FileNotFound { path: PathBuf },

    #[error(
        "Parse error in {file}: {detail}\n\n  \
         Override files use KEY=value (one per line).\n  \
         Comments (#) and blank lines are allowed."
    )]
    ParseError { file: PathBuf, detail: String },

    #[error("Could not read {format} document: {detail}")]
    FormatError { format: String, detail: String },

    #[error(
        "Environment '{name}' not found\n\n  \
         Available environments: {available}\n  \
         Check frontenv.toml for [environments.<name>] sections."
    )]
    EnvironmentNotFound { name: String, available: String },

    #[error(
        "Circular inheritance detected: {chain}\n\n  \
         Two or more environments inherit from each other, creating a loop.\n\n  \
         Fix: edit frontenv.toml and ensure inheritance forms a tree:\n    \
         → Valid:   base → dev, base → prod\n    \
         → Invalid: dev → prod → dev (cycle)"
    )]
    CircularInheritance { chain: String },

    #[error(
        "Environment '{env}' does not set '{field}'\n\n  \
         Every field must be set by the environment, one of the environments\n  \
         it inherits from, or an override.\n  \
         Run 'frontenv show --env {env}' to see which layers were applied."
    )]
    MissingField { env: String, field: String },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error(
        "This project uses format version {project_version}, but your frontenv \
         only supports up to version {supported_version}.\n\n  \
         Solution: install a newer frontenv (cargo install frontenv --force)"
    )]
    FormatVersionTooNew {
        project_version: u32,
        supported_version: u32,
    },

    #[error("Validation failed for '{env}': {errors} error(s)")]
    ValidationFailed { env: String, errors: usize },

    #[error("Probe failed: {reason}")]
    ProbeFailed { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FrontenvError>;
