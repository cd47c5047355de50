pub mod audit;
pub mod cli;
pub mod config;
pub mod error;
pub mod error_translation;
pub mod git;
pub mod report;
pub mod workflow;

// Re-export commonly used types for convenience
pub use error::{AppError, GitError, Result, WorkflowError};
pub use git::{GitExecutor, GitRunner, GitVersion, Repository, RepositoryState};
pub use workflow::{Orchestrator, WorkflowMode, WorkflowOptions, WorkflowOutcome};
