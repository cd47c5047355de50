use crate::error::{AppError, GitError, WorkflowError};

/// A failure rephrased for the operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFriendlyError {
    pub simple_message: String,
    pub suggestion: Option<String>,
    pub raw_error: String,
}

pub struct ErrorTranslator;

impl ErrorTranslator {
    /// Translate an AppError into a user-friendly error message
    pub fn translate_app_error(error: &AppError) -> UserFriendlyError {
        match error {
            AppError::Git(git_err) => Self::translate(git_err),
            AppError::Workflow(workflow_err) => Self::translate_workflow(workflow_err),
            AppError::Config(config_err) => UserFriendlyError {
                simple_message: "Configuration error occurred.".to_string(),
                suggestion: Some(
                    "Check your config file at ~/.config/gitsync/config.toml".to_string(),
                ),
                raw_error: config_err.to_string(),
            },
            AppError::Io(io_err) => UserFriendlyError {
                simple_message: "I/O error occurred.".to_string(),
                suggestion: Some("Check file permissions and disk space".to_string()),
                raw_error: io_err.to_string(),
            },
        }
    }

    /// Translate a failed workflow step, matching on the git stderr it carries
    pub fn translate_workflow(error: &WorkflowError) -> UserFriendlyError {
        match error {
            WorkflowError::Git(git_err) => Self::translate(git_err),
            other => Self::translate_text(other.stderr().unwrap_or_default(), other.to_string()),
        }
    }

    /// Translate a GitError into a user-friendly error message
    pub fn translate(error: &GitError) -> UserFriendlyError {
        let raw_error = error.to_string();
        Self::translate_text(&raw_error, raw_error.clone())
    }

    /// Only the hint for raw stderr text, if any pattern matches
    pub fn suggestion_for(stderr: &str) -> Option<String> {
        Self::match_error_patterns(stderr).map(|(_, suggestion)| suggestion)?
    }

    fn translate_text(text: &str, raw_error: String) -> UserFriendlyError {
        match Self::match_error_patterns(text) {
            Some((simple_message, suggestion)) => UserFriendlyError {
                simple_message,
                suggestion,
                raw_error,
            },
            // Unknown errors pass through as-is
            None => UserFriendlyError {
                simple_message: raw_error.clone(),
                suggestion: None,
                raw_error,
            },
        }
    }

    /// Match common git error patterns and provide user-friendly messages
    fn match_error_patterns(error_text: &str) -> Option<(String, Option<String>)> {
        let lower = error_text.to_lowercase();

        let matched = |message: &str, suggestion: Option<&str>| {
            Some((message.to_string(), suggestion.map(str::to_string)))
        };

        if lower.contains("not a git repository") {
            return matched(
                "Current directory is not a git repository.",
                Some("Run the command from inside a repository, or initialize one with: git init"),
            );
        }

        if lower.contains("no tracking information") {
            return matched(
                "The current branch does not track a remote branch.",
                Some("Set one with: git branch --set-upstream-to=origin/<branch>"),
            );
        }

        if lower.contains("no upstream") || lower.contains("does not have an upstream") {
            return matched(
                "No remote branch is configured for tracking.",
                Some("Try: git push -u origin <branch-name>"),
            );
        }

        if lower.contains("untracked working tree files would be overwritten") {
            return matched(
                "Untracked files would be overwritten by this operation.",
                Some("Move or remove the conflicting files, or commit them first."),
            );
        }

        if lower.contains("uncommitted changes") || lower.contains("would be overwritten") {
            return matched(
                "Operation would overwrite uncommitted changes.",
                Some("Commit or stash your changes first: git stash"),
            );
        }

        if lower.contains("unmerged files") || lower.contains("merge in progress") {
            return matched(
                "A merge is still in progress.",
                Some("Resolve the conflicts and commit, or abort with: git merge --abort"),
            );
        }

        if lower.contains("conflict") {
            return matched(
                "Merge has conflicts that need to be resolved.",
                Some("Fix conflicts in the listed files, then git add and git commit."),
            );
        }

        if lower.contains("divergent branches") || lower.contains("diverged") {
            return matched(
                "Local and remote branches have diverged.",
                Some("Choose a strategy: git pull --rebase or git pull --no-rebase"),
            );
        }

        if lower.contains("rejected")
            && (lower.contains("non-fast-forward") || lower.contains("fetch first"))
        {
            return matched(
                "The remote has commits you do not have yet.",
                Some("Pull first, then push again."),
            );
        }

        if lower.contains("nothing to commit") || lower.contains("working tree clean") {
            return matched("No changes to commit - working directory is clean.", None);
        }

        if lower.contains("no changes added to commit") {
            return matched(
                "No files staged for commit.",
                Some("Stage files with: git add <file>"),
            );
        }

        if lower.contains("pathspec") && lower.contains("did not match") {
            return matched(
                "File path not found in the repository.",
                Some("Check the file path and try again. Use 'git status' to see available files."),
            );
        }

        if lower.contains("please tell me who you are") {
            return matched(
                "Git does not know your name and email.",
                Some("Set them with: git config user.name / git config user.email"),
            );
        }

        if lower.contains("authentication failed") || lower.contains("permission denied") {
            return matched(
                "Authentication failed - check your credentials.",
                Some("Verify your SSH keys or personal access token."),
            );
        }

        if lower.contains("could not read from remote")
            || (lower.contains("remote")
                && (lower.contains("not found") || lower.contains("does not appear")))
        {
            return matched(
                "Remote repository not reachable.",
                Some("Check the remote URL with: git remote -v"),
            );
        }

        None
    }
}
