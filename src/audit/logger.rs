use chrono::Utc;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::git::executor::{CommandOutput, GitRunner};

const MAX_LOG_SIZE: u64 = 10 * 1024 * 1024; // 10MB

/// Append-only history of git invocations and workflow results
#[derive(Debug, Clone)]
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    /// Create a new AuditLogger with the default log path
    pub fn new() -> std::io::Result<Self> {
        Self::with_path(Self::default_log_path()?)
    }

    /// Create an AuditLogger with a custom log path
    pub fn with_path<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let log_path = path.as_ref().to_path_buf();

        if let Some(parent) = log_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(Self { log_path })
    }

    /// Get the default log path: ~/.config/gitsync/history.log
    fn default_log_path() -> std::io::Result<PathBuf> {
        let home = std::env::var("HOME").map_err(|_| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "HOME environment variable not set",
            )
        })?;

        Ok(PathBuf::from(home)
            .join(".config")
            .join("gitsync")
            .join("history.log"))
    }

    /// Log a command execution
    pub fn log_command(
        &self,
        command: &str,
        repo_path: &Path,
        exit_code: i32,
    ) -> std::io::Result<()> {
        self.append(repo_path, &format!("[exit:{}] {}", exit_code, command))
    }

    /// Log how a workflow run ended
    pub fn log_workflow(&self, mode: &str, result: &str, repo_path: &Path) -> std::io::Result<()> {
        self.append(
            repo_path,
            &format!("[WORKFLOW] mode={} result={}", mode, result),
        )
    }

    fn append(&self, repo_path: &Path, body: &str) -> std::io::Result<()> {
        self.rotate_if_needed()?;

        let timestamp = Utc::now().to_rfc3339();
        let user = std::env::var("USER").unwrap_or_else(|_| "unknown".to_string());

        let log_entry = format!(
            "[{}] [{}] [{}] {}\n",
            timestamp,
            user,
            repo_path.display(),
            body
        );

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;

        file.write_all(log_entry.as_bytes())?;
        file.flush()
    }

    /// Rotate log file if it exceeds MAX_LOG_SIZE
    fn rotate_if_needed(&self) -> std::io::Result<()> {
        if !self.log_path.exists() {
            return Ok(());
        }

        let metadata = fs::metadata(&self.log_path)?;
        if metadata.len() > MAX_LOG_SIZE {
            // history.log -> history.log.1
            let backup_path = self.log_path.with_extension("log.1");
            fs::rename(&self.log_path, backup_path)?;
        }

        Ok(())
    }

    /// Get the path to the log file
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }
}

/// Runner decorator that records every invocation in an [`AuditLogger`].
///
/// Log write failures are reported on stderr once per invocation and never
/// change the command's result.
#[derive(Debug)]
pub struct AuditedRunner<R> {
    inner: R,
    logger: AuditLogger,
}

impl<R: GitRunner> AuditedRunner<R> {
    pub fn new(inner: R, logger: AuditLogger) -> Self {
        Self { inner, logger }
    }
}

impl<R: GitRunner> GitRunner for AuditedRunner<R> {
    fn run(&self, args: &[&str]) -> Result<CommandOutput> {
        let result = self.inner.run(args);
        let exit_code = result.as_ref().map(|output| output.exit_code).unwrap_or(-1);
        let command = format!("git {}", args.join(" "));

        if let Err(e) = self
            .logger
            .log_command(&command, self.inner.repo_path(), exit_code)
        {
            eprintln!("Warning: failed to write audit log: {}", e);
        }

        result
    }

    fn repo_path(&self) -> &Path {
        self.inner.repo_path()
    }
}
