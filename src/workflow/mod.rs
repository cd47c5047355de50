//! The fetch/pull/push workflows and the orchestrator that drives them.
//!
//! Every workflow is a fixed sequence of git invocations. Gated steps stop the
//! run on the first non-zero exit after reporting it; nothing is rolled back.

pub mod prompt;
mod pull;
mod quick;
mod sync;

#[cfg(test)]
mod testing;

use std::fmt;
use std::io::Write;

use crate::config::Config;
use crate::error::{WorkflowError, WorkflowResult};
use crate::git::executor::{CommandOutput, GitRunner};
use crate::git::repository::Repository;
use crate::report::Reporter;

pub use prompt::{Confirm, LineConfirm};

/// Which workflow an entry point runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowMode {
    /// Fetch and pull only when the remote branch is ahead, offering to stash first
    PullOnly,
    /// Pull, then commit every local change and push it
    FetchPullPush,
    /// Pull, add one configured file, commit, push, with no failure gating
    PullAddFixedFilePush,
}

impl WorkflowMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkflowMode::PullOnly => "pull-only",
            WorkflowMode::FetchPullPush => "fetch-pull-push",
            WorkflowMode::PullAddFixedFilePush => "pull-add-fixed-file-push",
        }
    }
}

impl fmt::Display for WorkflowMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a successful run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowOutcome {
    /// Nothing to pull, or nothing to push
    UpToDate,
    Pulled { commits: usize },
    Pushed { commit_message: String },
    /// The unchecked fire-and-forget sequence ran to its end
    Completed,
}

impl fmt::Display for WorkflowOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorkflowOutcome::UpToDate => write!(f, "up-to-date"),
            WorkflowOutcome::Pulled { commits } => write!(f, "pulled {} commit(s)", commits),
            WorkflowOutcome::Pushed { commit_message } => {
                write!(f, "pushed \"{}\"", commit_message)
            }
            WorkflowOutcome::Completed => write!(f, "completed"),
        }
    }
}

/// Knobs the workflows read; built from [`Config`] by the entry points
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowOptions {
    pub confirm_stash: bool,
    pub quick_push_file: String,
    pub quick_push_message: String,
}

impl Default for WorkflowOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for WorkflowOptions {
    fn from(config: &Config) -> Self {
        Self {
            confirm_stash: config.behavior.confirm_stash,
            quick_push_file: config.quick_push.file.clone(),
            quick_push_message: config.quick_push.message.clone(),
        }
    }
}

/// Runs one workflow against one repository
pub struct Orchestrator<R: GitRunner, W: Write, C: Confirm> {
    repo: Repository<R>,
    reporter: Reporter<W>,
    confirm: C,
    options: WorkflowOptions,
}

impl<R: GitRunner, W: Write, C: Confirm> Orchestrator<R, W, C> {
    pub fn new(repo: Repository<R>, out: W, confirm: C) -> Self {
        Self {
            repo,
            reporter: Reporter::new(out),
            confirm,
            options: WorkflowOptions::default(),
        }
    }

    pub fn with_options(mut self, options: WorkflowOptions) -> Self {
        self.options = options;
        self
    }

    pub fn repository(&self) -> &Repository<R> {
        &self.repo
    }

    /// Run `mode` to completion or to its first gated failure
    pub fn run_workflow(&mut self, mode: WorkflowMode) -> WorkflowResult<WorkflowOutcome> {
        let result = match mode {
            WorkflowMode::PullOnly => self.pull_only(),
            WorkflowMode::FetchPullPush => self.fetch_pull_push(),
            WorkflowMode::PullAddFixedFilePush => self.pull_add_fixed_file_push(),
        };

        // Step failures were reported where they happened
        if let Err(e @ (WorkflowError::Git(_) | WorkflowError::Prompt(_))) = &result {
            self.reporter.failure(&e.to_string());
        }

        result
    }

    /// Check a gated step: on failure report it and build the step's error
    fn gate(
        &mut self,
        command: &str,
        output: CommandOutput,
        failure: &str,
        error: fn(String) -> WorkflowError,
    ) -> WorkflowResult<CommandOutput> {
        if output.success {
            return Ok(output);
        }

        self.reporter.command_failed(command, &output.stderr);
        self.reporter.failure(failure);
        Err(error(output.stderr.trim().to_string()))
    }

    /// Print `git status` as the closing report; a failure here is only shown
    fn final_status(&mut self) -> WorkflowResult<()> {
        let output = self.repo.status()?;
        if output.success {
            self.reporter.status_block(&output.stdout);
        } else {
            self.reporter.command_failed("git status", &output.stderr);
        }

        Ok(())
    }
}
