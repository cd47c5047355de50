//! Pull, then commit and push every local change.

use std::process::ExitCode;

use gitsync::WorkflowMode;

fn main() -> ExitCode {
    gitsync::cli::main_for(WorkflowMode::FetchPullPush)
}
