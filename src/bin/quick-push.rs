//! Pull, commit the configured file and push, without stopping on failures.

use std::process::ExitCode;

use gitsync::WorkflowMode;

fn main() -> ExitCode {
    gitsync::cli::main_for(WorkflowMode::PullAddFixedFilePush)
}
