use std::io::Write;

use super::{Confirm, Orchestrator, WorkflowOutcome};
use crate::error::{GitResult, WorkflowResult};
use crate::git::executor::{CommandOutput, GitRunner};

const DONE: &str =
    "Successfully fetched and pulled from a GitHub repo and then push any local changes";

impl<R: GitRunner, W: Write, C: Confirm> Orchestrator<R, W, C> {
    /// Pull, add the configured file, commit, push and show status.
    ///
    /// No step is gated: failures are shown and the sequence carries on.
    pub(super) fn pull_add_fixed_file_push(&mut self) -> WorkflowResult<WorkflowOutcome> {
        let file = self.options.quick_push_file.clone();
        let message = self.options.quick_push_message.clone();

        let pull = self.repo.pull();
        self.unchecked("git pull", pull);

        let add = self.repo.add_path(&file);
        self.unchecked(&format!("git add {}", file), add);

        let commit = self.repo.commit_all(&message);
        self.unchecked(&format!("git commit -a -m \"{}\"", message), commit);

        let push = self.repo.push();
        self.unchecked("git push", push);

        let status = self.repo.status();
        if let Some(output) = self.unchecked("git status", status) {
            self.reporter.line(output.stdout.trim_end());
        }

        self.reporter.line(DONE);
        Ok(WorkflowOutcome::Completed)
    }

    fn unchecked(
        &mut self,
        command: &str,
        result: GitResult<CommandOutput>,
    ) -> Option<CommandOutput> {
        match result {
            Ok(output) if output.success => Some(output),
            Ok(output) => {
                self.reporter.command_failed(command, &output.stderr);
                None
            }
            Err(e) => {
                self.reporter.command_failed(command, &e.to_string());
                None
            }
        }
    }
}
