use std::io::Write;

use chrono::Local;

use super::{Confirm, Orchestrator, WorkflowOutcome};
use crate::error::{WorkflowError, WorkflowResult};
use crate::git::executor::GitRunner;
use crate::git::parser;
use crate::git::repository::RepositoryState;

const STASH_QUESTION: &str = "Do you want to stash these changes before pulling? (y/n): ";

impl<R: GitRunner, W: Write, C: Confirm> Orchestrator<R, W, C> {
    /// Pull only when the remote branch has commits the local one lacks
    pub(super) fn pull_only(&mut self) -> WorkflowResult<WorkflowOutcome> {
        let now = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let name = self.repo.display_name();
        self.reporter.mark("🕒", &now);
        self.reporter.mark("📂", &format!("Repository: {}", name));

        let branch = self.detect_branch()?;
        self.reporter.mark("🔀", &format!("Current branch: {}", branch));

        let is_clean = self.working_tree_clean()?;
        if !is_clean {
            self.offer_stash()?;
        }

        self.reporter.mark("🌐", "Fetching updates from remote...");
        let fetch = self.repo.fetch()?;
        self.gate(
            "git fetch",
            fetch,
            "Failed to fetch from remote.",
            WorkflowError::Fetch,
        )?;

        let state = RepositoryState {
            ahead: self.commits_ahead(&branch)?,
            behind: self.commits_behind(&branch)?,
            current_branch: branch,
            is_clean,
        };

        if state.ahead > 0 {
            self.reporter.mark(
                "ℹ️",
                &format!("Your branch is ahead by {} commit(s).", state.ahead),
            );
        }

        let outcome = if state.is_behind() {
            self.reporter.mark(
                "ℹ️",
                &format!("Your branch is behind by {} commit(s).", state.behind),
            );
            self.reporter.mark("⬇️", "Pulling latest changes...");

            let pull = self.repo.pull()?;
            self.gate(
                "git pull",
                pull,
                "Failed to pull changes. There might be conflicts.",
                WorkflowError::Pull,
            )?;

            self.reporter.success("Successfully pulled the latest changes.");
            WorkflowOutcome::Pulled {
                commits: state.behind,
            }
        } else {
            self.reporter.success("Already up to date. No changes to pull.");
            WorkflowOutcome::UpToDate
        };

        self.final_status()?;
        Ok(outcome)
    }

    fn detect_branch(&mut self) -> WorkflowResult<String> {
        const FAILURE: &str = "Failed to determine current branch. Is this a git repository?";

        let output = self.repo.rev_parse_head()?;
        let output = self.gate(
            "git rev-parse --abbrev-ref HEAD",
            output,
            FAILURE,
            WorkflowError::BranchDetection,
        )?;

        match parser::parse_branch_name(&output.stdout) {
            Some(branch) => Ok(branch),
            None => {
                self.reporter.failure(FAILURE);
                Err(WorkflowError::BranchDetection(
                    "HEAD is not on a branch".to_string(),
                ))
            }
        }
    }

    fn working_tree_clean(&mut self) -> WorkflowResult<bool> {
        let status = self.repo.status_porcelain()?;
        let status = self.gate(
            "git status --porcelain",
            status,
            "Failed to read repository status.",
            WorkflowError::Status,
        )?;

        Ok(status.stdout.trim().is_empty())
    }

    /// Stash the dirty tree if the operator agrees
    fn offer_stash(&mut self) -> WorkflowResult<()> {
        self.reporter.warn("You have local changes that might conflict with pulled changes.");

        if !self.options.confirm_stash {
            return Ok(());
        }

        let stash = self
            .confirm
            .confirm(STASH_QUESTION)
            .map_err(WorkflowError::Prompt)?;
        if !stash {
            return Ok(());
        }

        self.reporter.mark("📦", "Stashing local changes...");
        let output = self.repo.stash()?;
        self.gate(
            "git stash",
            output,
            "Failed to stash changes.",
            WorkflowError::Stash,
        )?;
        self.reporter.success("Changes stashed successfully.");

        Ok(())
    }

    /// Local commits not yet on the remote branch; unknown counts as none
    fn commits_ahead(&mut self, branch: &str) -> WorkflowResult<usize> {
        let output = self.repo.count_ahead(branch)?;
        if !output.success {
            return Ok(0);
        }

        Ok(parser::parse_commit_count(&output.stdout).unwrap_or(0))
    }

    /// Commits on the remote branch missing locally.
    ///
    /// A failing or unreadable count means there is nothing known to pull.
    fn commits_behind(&mut self, branch: &str) -> WorkflowResult<usize> {
        let output = self.repo.count_behind(branch)?;
        if !output.success {
            let command = format!(
                "git rev-list --count HEAD..{}/{}",
                self.repo.remote(),
                branch
            );
            self.reporter.command_failed(&command, &output.stderr);
            return Ok(0);
        }

        Ok(parser::parse_commit_count(&output.stdout).unwrap_or(0))
    }
}
