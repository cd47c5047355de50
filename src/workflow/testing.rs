//! Scripted git runner for driving workflows without a repository.

use std::cell::RefCell;
use std::io::{self, Cursor};
use std::path::{Path, PathBuf};

use super::{Confirm, LineConfirm, Orchestrator, WorkflowMode, WorkflowOptions, WorkflowOutcome};
use crate::error::{GitResult, WorkflowResult};
use crate::git::executor::{CommandOutput, GitRunner};
use crate::git::repository::Repository;

pub type Answers = LineConfirm<Cursor<Vec<u8>>, io::Sink>;

/// Operator input for the stash prompt
pub fn answers(input: &str) -> Answers {
    LineConfirm::new(Cursor::new(input.as_bytes().to_vec()), io::sink())
}

/// A prompt whose input stream is already gone
pub struct ClosedInput;

impl Confirm for ClosedInput {
    fn confirm(&mut self, _question: &str) -> io::Result<bool> {
        Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"))
    }
}

/// Replies to git invocations from a table and records every call.
///
/// A reply is keyed by a word prefix of the argument list; the longest
/// matching key wins. Unmatched commands succeed with empty output.
pub struct ScriptedRunner {
    path: PathBuf,
    replies: Vec<(String, CommandOutput)>,
    calls: RefCell<Vec<Vec<String>>>,
}

fn matches_prefix(command: &str, key: &str) -> bool {
    command == key || command.starts_with(&format!("{} ", key))
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self {
            path: PathBuf::from("/scripted/repo"),
            replies: Vec::new(),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn respond(mut self, key: &str, exit_code: i32, stdout: &str, stderr: &str) -> Self {
        self.replies
            .push((key.to_string(), CommandOutput::new(exit_code, stdout, stderr)));
        self
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }

    /// First argument of every call, in order
    pub fn subcommands(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|args| args.first().cloned().unwrap_or_default())
            .collect()
    }

    pub fn was_called(&self, prefix: &str) -> bool {
        self.calls
            .borrow()
            .iter()
            .any(|args| matches_prefix(&args.join(" "), prefix))
    }
}

impl GitRunner for ScriptedRunner {
    fn run(&self, args: &[&str]) -> GitResult<CommandOutput> {
        self.calls
            .borrow_mut()
            .push(args.iter().map(|a| a.to_string()).collect());

        let command = args.join(" ");
        let reply = self
            .replies
            .iter()
            .filter(|(key, _)| matches_prefix(&command, key))
            .max_by_key(|(key, _)| key.len())
            .map(|(_, output)| output.clone())
            .unwrap_or_else(|| CommandOutput::new(0, "", ""));

        Ok(reply)
    }

    fn repo_path(&self) -> &Path {
        &self.path
    }
}

pub fn orchestrate(
    runner: &ScriptedRunner,
    confirm: Answers,
    mode: WorkflowMode,
) -> (WorkflowResult<WorkflowOutcome>, String) {
    orchestrate_with(runner, confirm, WorkflowOptions::default(), mode)
}

/// Run `mode` against `runner`, returning the result and everything printed
pub fn orchestrate_with<C: Confirm>(
    runner: &ScriptedRunner,
    confirm: C,
    options: WorkflowOptions,
    mode: WorkflowMode,
) -> (WorkflowResult<WorkflowOutcome>, String) {
    let mut out = Vec::new();
    let result = {
        let mut orchestrator =
            Orchestrator::new(Repository::with_runner(runner), &mut out, confirm)
                .with_options(options);
        orchestrator.run_workflow(mode)
    };

    (result, String::from_utf8(out).unwrap())
}
