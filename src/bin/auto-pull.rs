//! Pull from the remote when the current branch is behind it.

use std::process::ExitCode;

use gitsync::WorkflowMode;

fn main() -> ExitCode {
    gitsync::cli::main_for(WorkflowMode::PullOnly)
}
