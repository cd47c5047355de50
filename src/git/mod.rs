pub mod executor;
pub mod parser;
pub mod repository;
pub mod version;

// Re-export commonly used types
pub use executor::{CommandOutput, GitExecutor, GitRunner};
pub use parser::{
    ChangeRecord, FileStatus, changed_paths, commit_message, parse_commit_count,
    parse_status_porcelain,
};
pub use repository::{Repository, RepositoryState};
pub use version::GitVersion;
