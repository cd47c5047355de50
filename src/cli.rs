//! Shared startup for the `auto-pull`, `sync-push` and `quick-push` binaries.

use std::env;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use crate::audit::{AuditLogger, AuditedRunner};
use crate::config::Config;
use crate::error::{AppError, AppResult, GitError, GitResult, WorkflowResult};
use crate::error_translation::ErrorTranslator;
use crate::git::executor::GitRunner;
use crate::git::{GitVersion, Repository};
use crate::workflow::{
    Confirm, LineConfirm, Orchestrator, WorkflowMode, WorkflowOptions, WorkflowOutcome,
};

/// Entry point body: run `mode` in the repository around the current
/// directory and map the result to a process exit code
pub fn main_for(mode: WorkflowMode) -> ExitCode {
    match run(mode) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            for line in failure_report(&e) {
                eprintln!("{}", line);
            }
            ExitCode::FAILURE
        }
    }
}

/// The stderr lines for a failed run
fn failure_report(error: &AppError) -> Vec<String> {
    let friendly = ErrorTranslator::translate_app_error(error);
    let mut lines = vec![format!("Error: {}", friendly.simple_message)];

    // A failed workflow step already printed its hint
    if !matches!(error, AppError::Workflow(_))
        && let Some(suggestion) = friendly.suggestion
    {
        lines.push(format!("Suggestion: {}", suggestion));
    }

    lines
}

/// Load config and run `mode` from the current directory on stdin/stdout
pub fn run(mode: WorkflowMode) -> AppResult<WorkflowOutcome> {
    let config = Config::load()?;
    let start = env::current_dir()?;

    run_in(&start, mode, &config, io::stdout(), LineConfirm::stdio())
}

/// Check git and run `mode` in the repository around `start`.
///
/// Outside a work tree the workflow still runs from `start` itself, so its
/// own git calls report the failure.
pub fn run_in<W: Write, C: Confirm>(
    start: &Path,
    mode: WorkflowMode,
    config: &Config,
    out: W,
    confirm: C,
) -> AppResult<WorkflowOutcome> {
    let repo = open_repository(start)?;
    GitVersion::validate(repo.runner())?;

    let remote = config.git.remote.clone();
    let options = WorkflowOptions::from(config);

    if config.behavior.log_commands {
        match AuditLogger::new() {
            Ok(logger) => {
                let runner = AuditedRunner::new(repo.runner().clone(), logger.clone());
                let repo = Repository::with_runner(runner).with_remote(remote);
                return execute(repo, options, mode, out, confirm, Some(&logger));
            }
            Err(e) => eprintln!("Warning: audit log unavailable: {}", e),
        }
    }

    execute(repo.with_remote(remote), options, mode, out, confirm, None)
}

fn open_repository(start: &Path) -> GitResult<Repository> {
    match Repository::discover_from(start) {
        Err(GitError::NotARepository) => Ok(Repository::new(start)),
        other => other,
    }
}

fn execute<R: GitRunner, W: Write, C: Confirm>(
    repo: Repository<R>,
    options: WorkflowOptions,
    mode: WorkflowMode,
    out: W,
    confirm: C,
    logger: Option<&AuditLogger>,
) -> AppResult<WorkflowOutcome> {
    let repo_path = repo.path().to_path_buf();

    let mut orchestrator = Orchestrator::new(repo, out, confirm).with_options(options);
    let result = orchestrator.run_workflow(mode);

    if let Some(logger) = logger {
        record(logger, mode, &result, &repo_path);
    }

    Ok(result?)
}

fn record(
    logger: &AuditLogger,
    mode: WorkflowMode,
    result: &WorkflowResult<WorkflowOutcome>,
    repo_path: &Path,
) {
    let summary = match result {
        Ok(outcome) => outcome.to_string(),
        Err(e) => format!("error: {}", e),
    };

    if let Err(e) = logger.log_workflow(mode.as_str(), &summary, repo_path) {
        eprintln!("Warning: failed to write audit log: {}", e);
    }
}
