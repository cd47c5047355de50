use std::io::Write;

use super::{Confirm, Orchestrator, WorkflowOutcome};
use crate::error::{WorkflowError, WorkflowResult};
use crate::git::executor::GitRunner;
use crate::git::parser;

impl<R: GitRunner, W: Write, C: Confirm> Orchestrator<R, W, C> {
    /// Bring in remote work, then commit and push every local change
    pub(super) fn fetch_pull_push(&mut self) -> WorkflowResult<WorkflowOutcome> {
        self.reporter.mark("🌐", "Fetching latest changes from remote repository...");
        let fetch = self.repo.fetch()?;
        if !fetch.success {
            self.reporter.command_failed("git fetch", &fetch.stderr);
            self.reporter.warn("Fetch failed, continuing with pull.");
        }

        self.reporter.mark("⬇️", "Pulling changes from remote repository...");
        let pull = self.repo.pull()?;
        self.gate(
            "git pull",
            pull,
            "Failed to pull changes. There might be conflicts.",
            WorkflowError::Pull,
        )?;

        let status = self.repo.status_porcelain()?;
        let status = self.gate(
            "git status --porcelain",
            status,
            "Failed to read repository status.",
            WorkflowError::Status,
        )?;
        let entries = parser::parse_status_porcelain(&status.stdout)?;
        let changed = parser::changed_paths(&entries);

        if changed.is_empty() {
            self.reporter.success("Repository is up to date. No local changes to push.");
            return Ok(WorkflowOutcome::UpToDate);
        }

        self.reporter.mark("🔄", &format!("Found {} changed file(s):", changed.len()));
        for path in &changed {
            self.reporter.line(&format!("  - {}", path));
        }

        let commit_message = parser::commit_message(&changed);

        self.reporter.mark("➕", "Adding changes...");
        let add = self.repo.add_all()?;
        self.gate("git add .", add, "Failed to stage changes.", WorkflowError::Stage)?;

        self.reporter.mark("💾", "Committing changes...");
        let commit = self.repo.commit(&commit_message)?;
        self.gate(
            &format!("git commit -m \"{}\"", commit_message),
            commit,
            "Failed to commit changes.",
            WorkflowError::Commit,
        )?;

        self.reporter.mark("⬆️", "Pushing to remote repository...");
        let push = self.repo.push()?;
        self.gate(
            "git push",
            push,
            "Failed to push changes to remote.",
            WorkflowError::Push,
        )?;

        self.reporter.success("Successfully pushed changes to the remote!");
        self.reporter.mark("📝", &format!("Commit message: \"{}\"", commit_message));

        self.final_status()?;
        Ok(WorkflowOutcome::Pushed { commit_message })
    }
}
