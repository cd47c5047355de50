use crate::error::{GitError, Result};
use crate::git::executor::{CommandOutput, GitExecutor, GitRunner};
use std::env;
use std::path::{Path, PathBuf};

/// Default remote used for tracking-branch comparisons
pub const DEFAULT_REMOTE: &str = "origin";

/// A git repository rooted at an explicit path.
///
/// Every operation runs through the repository's runner in that root; nothing
/// depends on the process working directory once the repository exists.
#[derive(Debug)]
pub struct Repository<R = GitExecutor> {
    path: PathBuf,
    runner: R,
    remote: String,
}

impl Repository<GitExecutor> {
    /// Detect git repository from current working directory
    pub fn discover() -> Result<Self> {
        let current_dir = env::current_dir().map_err(GitError::IoError)?;

        Self::discover_from(&current_dir)
    }

    /// Detect git repository starting from a specific directory
    pub fn discover_from<P: AsRef<Path>>(start_path: P) -> Result<Self> {
        let mut current = start_path.as_ref().to_path_buf();

        loop {
            // `.git` is a file inside worktrees and submodules
            if current.join(".git").exists() {
                return Ok(Self::new(current));
            }

            if !current.pop() {
                return Err(GitError::NotARepository);
            }
        }
    }

    /// Create a Repository for a known git directory
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self::with_runner(GitExecutor::new(path))
    }
}

impl<R: GitRunner> Repository<R> {
    /// Wrap an existing runner; the repository root is the runner's
    pub fn with_runner(runner: R) -> Self {
        Self {
            path: runner.repo_path().to_path_buf(),
            runner,
            remote: DEFAULT_REMOTE.to_string(),
        }
    }

    /// Use a remote other than `origin` for tracking comparisons
    pub fn with_remote(mut self, remote: impl Into<String>) -> Self {
        self.remote = remote.into();
        self
    }

    /// Get the repository path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Name of the remote whose branches are compared against
    pub fn remote(&self) -> &str {
        &self.remote
    }

    /// Get the runner for this repository
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Directory name of the repository root, for display
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// `rev-parse --abbrev-ref HEAD`
    pub fn rev_parse_head(&self) -> Result<CommandOutput> {
        self.runner.run(&["rev-parse", "--abbrev-ref", "HEAD"])
    }

    /// `status --porcelain`
    pub fn status_porcelain(&self) -> Result<CommandOutput> {
        self.runner.run(&["status", "--porcelain"])
    }

    /// Human-readable `status`
    pub fn status(&self) -> Result<CommandOutput> {
        self.runner.run(&["status"])
    }

    pub fn fetch(&self) -> Result<CommandOutput> {
        self.runner.run(&["fetch"])
    }

    pub fn stash(&self) -> Result<CommandOutput> {
        self.runner.run(&["stash"])
    }

    pub fn pull(&self) -> Result<CommandOutput> {
        self.runner.run(&["pull"])
    }

    pub fn push(&self) -> Result<CommandOutput> {
        self.runner.run(&["push"])
    }

    /// Stage everything under the repository root
    pub fn add_all(&self) -> Result<CommandOutput> {
        self.runner.run(&["add", "."])
    }

    /// Stage a single path
    pub fn add_path(&self, path: &str) -> Result<CommandOutput> {
        self.runner.run(&["add", "--", path])
    }

    /// Commit the index with `message`
    pub fn commit(&self, message: &str) -> Result<CommandOutput> {
        self.runner.run(&["commit", "-m", message])
    }

    /// Commit all tracked modifications plus the index with `message`
    pub fn commit_all(&self, message: &str) -> Result<CommandOutput> {
        self.runner.run(&["commit", "-a", "-m", message])
    }

    /// `rev-list --count HEAD..<remote>/<branch>`
    pub fn count_behind(&self, branch: &str) -> Result<CommandOutput> {
        let range = format!("HEAD..{}/{}", self.remote, branch);
        self.runner.run(&["rev-list", "--count", &range])
    }

    /// `rev-list --count <remote>/<branch>..HEAD`
    pub fn count_ahead(&self, branch: &str) -> Result<CommandOutput> {
        let range = format!("{}/{}..HEAD", self.remote, branch);
        self.runner.run(&["rev-list", "--count", &range])
    }

}

/// What a pull-only run learned about the branch before deciding to pull
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryState {
    pub current_branch: String,
    pub ahead: usize,
    pub behind: usize,
    pub is_clean: bool,
}

impl RepositoryState {
    /// Check if the local branch is missing commits from the remote
    pub fn is_behind(&self) -> bool {
        self.behind > 0
    }
}
