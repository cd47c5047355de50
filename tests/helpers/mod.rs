#![allow(dead_code)]

use gitsync::workflow::LineConfirm;
use gitsync::{
    GitExecutor, Orchestrator, Repository, WorkflowError, WorkflowMode, WorkflowOptions,
    WorkflowOutcome,
};
use std::fs;
use std::io::{self, Cursor};
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Run git in `dir`, panicking if it fails
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run git");

    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );

    String::from_utf8_lossy(&output.stdout).to_string()
}

fn configure_identity(repo_path: &Path) {
    git(repo_path, &["config", "user.name", "Test User"]);
    git(repo_path, &["config", "user.email", "test@example.com"]);
    git(repo_path, &["config", "pull.rebase", "false"]);
}

/// Helper to create a test git repository
pub fn create_test_repo() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let repo_path = temp_dir.path().to_path_buf();

    git(&repo_path, &["init", "-b", "main"]);
    configure_identity(&repo_path);

    (temp_dir, repo_path)
}

/// Helper to create a commit
pub fn create_commit(repo_path: &Path, file: &str, content: &str, message: &str) {
    fs::write(repo_path.join(file), content).expect("Failed to write file");
    git(repo_path, &["add", file]);
    git(repo_path, &["commit", "-m", message]);
}

/// A bare `origin` plus two clones of it, both tracking `main`.
///
/// `local` is the clone the workflows run in; `peer` stands in for another
/// developer pushing to the same remote.
pub struct RemoteFixture {
    _temp: TempDir,
    pub origin: PathBuf,
    pub local: PathBuf,
    pub peer: PathBuf,
}

impl RemoteFixture {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let root = temp.path().to_path_buf();

        let origin = root.join("origin.git");
        fs::create_dir(&origin).unwrap();
        git(&origin, &["init", "--bare", "-b", "main"]);

        let seed = root.join("seed");
        fs::create_dir(&seed).unwrap();
        git(&seed, &["init", "-b", "main"]);
        configure_identity(&seed);
        create_commit(&seed, "README.md", "# project\n", "Initial commit");
        git(&seed, &["remote", "add", "origin", origin.to_str().unwrap()]);
        git(&seed, &["push", "-u", "origin", "main"]);

        let clone = |name: &str| -> PathBuf {
            let path = root.join(name);
            git(&root, &["clone", origin.to_str().unwrap(), name]);
            configure_identity(&path);
            path
        };

        let local = clone("local");
        let peer = clone("peer");

        Self {
            _temp: temp,
            origin,
            local,
            peer,
        }
    }

    /// Commit a file in the peer clone and push it to origin
    pub fn peer_pushes(&self, file: &str, content: &str) {
        git(&self.peer, &["pull"]);
        create_commit(&self.peer, file, content, &format!("Peer adds {}", file));
        git(&self.peer, &["push"]);
    }

    /// Subject of the newest commit on origin's main
    pub fn origin_head_subject(&self) -> String {
        git(&self.origin, &["log", "-1", "--format=%s", "main"])
            .trim()
            .to_string()
    }
}

/// Run `mode` in `repo_path` with real git, answering the stash prompt with
/// `input`; returns the result and everything printed
pub fn run_workflow(
    repo_path: &Path,
    mode: WorkflowMode,
    input: &str,
    options: WorkflowOptions,
) -> (Result<WorkflowOutcome, WorkflowError>, String) {
    let mut out = Vec::new();
    let confirm = LineConfirm::new(Cursor::new(input.as_bytes().to_vec()), io::sink());

    let result = {
        let repo: Repository<GitExecutor> = Repository::new(repo_path);
        let mut orchestrator = Orchestrator::new(repo, &mut out, confirm).with_options(options);
        orchestrator.run_workflow(mode)
    };

    (result, String::from_utf8(out).unwrap())
}
