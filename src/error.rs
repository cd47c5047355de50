use std::io;
use thiserror::Error;

use crate::config::settings::ConfigError;

/// Errors that can occur while talking to the git binary
#[derive(Debug, Error)]
pub enum GitError {
    #[error("Not a git repository")]
    NotARepository,

    #[error("Git command failed: {0}")]
    CommandFailed(String),

    #[error("Failed to parse git output: {0}")]
    ParseError(String),

    #[error("Git version {0} is too old. Minimum required: 2.20")]
    GitVersionTooOld(String),

    #[error("Failed to detect git version: {0}")]
    GitVersionDetectionFailed(String),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

/// A gated workflow step exited non-zero.
///
/// Each variant carries the stderr captured from the failing invocation so the
/// operator sees exactly what git reported.
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("Failed to determine current branch: {0}")]
    BranchDetection(String),

    #[error("Failed to stash changes: {0}")]
    Stash(String),

    #[error("Failed to fetch from remote: {0}")]
    Fetch(String),

    #[error("Failed to read repository status: {0}")]
    Status(String),

    #[error("Failed to stage changes: {0}")]
    Stage(String),

    #[error("Failed to pull changes: {0}")]
    Pull(String),

    #[error("Failed to commit changes: {0}")]
    Commit(String),

    #[error("Failed to push changes: {0}")]
    Push(String),

    #[error("Failed to read confirmation: {0}")]
    Prompt(#[source] io::Error),

    #[error(transparent)]
    Git(#[from] GitError),
}

impl WorkflowError {
    /// Raw git stderr behind this failure, when there is one
    pub fn stderr(&self) -> Option<&str> {
        match self {
            WorkflowError::BranchDetection(s)
            | WorkflowError::Stash(s)
            | WorkflowError::Fetch(s)
            | WorkflowError::Status(s)
            | WorkflowError::Stage(s)
            | WorkflowError::Pull(s)
            | WorkflowError::Commit(s)
            | WorkflowError::Push(s) => Some(s),
            WorkflowError::Prompt(_) | WorkflowError::Git(_) => None,
        }
    }
}

/// Top-level application error that wraps all module-specific errors
///
/// Entry points work in terms of `AppError`; every module error converts into
/// it via `From`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    #[error("Workflow error: {0}")]
    Workflow(#[from] WorkflowError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for git operations
pub type GitResult<T> = std::result::Result<T, GitError>;

/// Result type for workflow runs
pub type WorkflowResult<T> = std::result::Result<T, WorkflowError>;

/// Result type for application-level operations
pub type AppResult<T> = std::result::Result<T, AppError>;

/// Shorthand used throughout the git module
pub type Result<T> = GitResult<T>;
