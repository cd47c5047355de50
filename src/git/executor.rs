use crate::error::{GitError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Result of executing a git command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    pub success: bool,
}

impl CommandOutput {
    /// Build an output from raw parts; `success` follows the exit code
    pub fn new(exit_code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
            exit_code,
            success: exit_code == 0,
        }
    }
}

/// Something that can run git subcommands inside one repository.
///
/// Arguments are passed as a vector straight to the process, never through a
/// shell, so paths and commit messages are not reinterpreted.
pub trait GitRunner {
    /// Run `git <args>` and capture its output whatever the exit status.
    ///
    /// `Err` is reserved for failing to launch git at all.
    fn run(&self, args: &[&str]) -> Result<CommandOutput>;

    /// Root of the repository every command runs in
    fn repo_path(&self) -> &Path;
}

impl<R: GitRunner + ?Sized> GitRunner for &R {
    fn run(&self, args: &[&str]) -> Result<CommandOutput> {
        (**self).run(args)
    }

    fn repo_path(&self) -> &Path {
        (**self).repo_path()
    }
}

/// Executes git commands within a repository
#[derive(Debug, Clone)]
pub struct GitExecutor {
    repo_path: PathBuf,
}

impl GitExecutor {
    /// Create a new GitExecutor for the given repository path
    pub fn new<P: AsRef<Path>>(repo_path: P) -> Self {
        Self {
            repo_path: repo_path.as_ref().to_path_buf(),
        }
    }

    /// Process command output into CommandOutput struct
    fn process_output(output: Output) -> CommandOutput {
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let exit_code = output.status.code().unwrap_or(-1);

        CommandOutput {
            stdout,
            stderr,
            exit_code,
            success: output.status.success(),
        }
    }
}

impl GitRunner for GitExecutor {
    fn run(&self, args: &[&str]) -> Result<CommandOutput> {
        if args.is_empty() {
            return Err(GitError::CommandFailed("Empty command".to_string()));
        }

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo_path)
            .output()
            .map_err(|e| GitError::CommandFailed(format!("Failed to execute git: {}", e)))?;

        Ok(Self::process_output(output))
    }

    fn repo_path(&self) -> &Path {
        &self.repo_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let repo_path = temp_dir.path().to_path_buf();

        for args in [
            &["init"][..],
            &["config", "user.name", "Test User"][..],
            &["config", "user.email", "test@example.com"][..],
        ] {
            Command::new("git")
                .args(args)
                .current_dir(&repo_path)
                .output()
                .unwrap();
        }

        (temp_dir, repo_path)
    }

    #[test]
    fn test_run_status() {
        let (_temp, repo_path) = create_test_repo();
        let executor = GitExecutor::new(&repo_path);

        let output = executor.run(&["status", "--porcelain"]).unwrap();
        assert!(output.success);
        assert_eq!(output.exit_code, 0);
        assert!(output.stdout.is_empty());
    }

    #[test]
    fn test_run_captures_failure_without_error() {
        let (_temp, repo_path) = create_test_repo();
        let executor = GitExecutor::new(&repo_path);

        // Log fails in a repository with no commits
        let output = executor.run(&["log", "--oneline"]).unwrap();
        assert!(!output.success);
        assert_ne!(output.exit_code, 0);
        assert!(!output.stderr.is_empty());
    }

    #[test]
    fn test_arguments_are_not_shell_interpreted() {
        let (_temp, repo_path) = create_test_repo();
        fs::write(repo_path.join("a.txt"), "a").unwrap();
        let executor = GitExecutor::new(&repo_path);

        assert!(executor.run(&["add", "."]).unwrap().success);
        let message = "Adding: \"quoted\" $(whoami) `id`";
        assert!(executor.run(&["commit", "-m", message]).unwrap().success);

        let log = executor.run(&["log", "-1", "--format=%s"]).unwrap();
        assert_eq!(log.stdout.trim(), message);
    }

    #[test]
    fn test_empty_command() {
        let (_temp, repo_path) = create_test_repo();
        let executor = GitExecutor::new(&repo_path);

        assert!(executor.run(&[]).is_err());
    }

    #[test]
    fn test_repo_path() {
        let (_temp, repo_path) = create_test_repo();
        let executor = GitExecutor::new(&repo_path);

        assert_eq!(executor.repo_path(), repo_path.as_path());
    }

    #[test]
    fn test_new_derives_success_from_exit_code() {
        assert!(CommandOutput::new(0, "out", "").success);

        let failed = CommandOutput::new(128, "", "fatal: boom\n");
        assert!(!failed.success);
        assert_eq!(failed.stderr, "fatal: boom\n");
    }
}
