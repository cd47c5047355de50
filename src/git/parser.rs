use crate::error::{GitError, GitResult};

/// Byte offset of the path in a `status --porcelain` (v1) line: `XY <path>`
const PORCELAIN_PATH_OFFSET: usize = 3;

/// Prefix of commit messages generated for pushed changes
pub const COMMIT_MESSAGE_PREFIX: &str = "Adding: ";

/// Parse `git status --porcelain` (v1) output.
///
/// Lines too short to hold a status code and a path are skipped. Entries keep
/// the order git printed them in.
pub fn parse_status_porcelain(output: &str) -> GitResult<Vec<ChangeRecord>> {
    let mut entries = Vec::new();

    for line in output.lines() {
        if line.trim().is_empty() {
            continue;
        }

        let (Some(code), Some(rest)) = (line.get(..2), line.get(PORCELAIN_PATH_OFFSET..)) else {
            continue;
        };

        let path = rest.trim();
        if path.is_empty() {
            continue;
        }

        entries.push(ChangeRecord {
            status: FileStatus::from_code(code),
            code: code.to_string(),
            path: path.to_string(),
        });
    }

    Ok(entries)
}

/// Paths worth staging and naming in a commit message.
///
/// Everything except pure deletions, in status order.
pub fn changed_paths(entries: &[ChangeRecord]) -> Vec<String> {
    entries
        .iter()
        .filter(|entry| !entry.is_pure_deletion())
        .map(|entry| entry.path.clone())
        .collect()
}

/// Build the commit message used when pushing local changes
pub fn commit_message(paths: &[String]) -> String {
    format!("{}{}", COMMIT_MESSAGE_PREFIX, paths.join(", "))
}

/// Parse `git rev-list --count` output (a single integer)
pub fn parse_commit_count(output: &str) -> GitResult<usize> {
    let trimmed = output.trim();
    trimmed
        .parse::<usize>()
        .map_err(|_| GitError::ParseError(format!("Invalid commit count: '{}'", trimmed)))
}

/// Parse `git rev-parse --abbrev-ref HEAD` output.
///
/// Returns `None` when there is no usable branch name: empty output, or the
/// literal `HEAD` git prints for a detached checkout.
pub fn parse_branch_name(output: &str) -> Option<String> {
    match output.trim() {
        "" | "HEAD" => None,
        name => Some(name.to_string()),
    }
}

/// One line of porcelain status output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRecord {
    pub path: String,
    /// The raw two-character `XY` code (index, working tree)
    pub code: String,
    pub status: FileStatus,
}

impl ChangeRecord {
    /// True when every non-blank column of the code is `D`
    pub fn is_pure_deletion(&self) -> bool {
        let mut columns = self.code.chars().filter(|c| *c != ' ').peekable();
        columns.peek().is_some() && columns.all(|c| c == 'D')
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Modified,
    Added,
    Deleted,
    Untracked,
    Renamed,
    Copied,
    Unmerged,
    Unknown,
}

impl FileStatus {
    /// Classify a porcelain `XY` code
    pub fn from_code(code: &str) -> Self {
        let mut chars = code.chars();
        let x = chars.next().unwrap_or(' ');
        let y = chars.next().unwrap_or(' ');

        match (x, y) {
            ('?', '?') => FileStatus::Untracked,
            ('D', 'D') | ('A', 'A') => FileStatus::Unmerged,
            ('U', _) | (_, 'U') => FileStatus::Unmerged,
            ('D', ' ') | (' ', 'D') => FileStatus::Deleted,
            ('R', _) | (_, 'R') => FileStatus::Renamed,
            ('C', _) | (_, 'C') => FileStatus::Copied,
            ('A', _) | (_, 'A') => FileStatus::Added,
            ('M', _) | (_, 'M') | ('T', _) | (_, 'T') => FileStatus::Modified,
            ('D', _) | (_, 'D') => FileStatus::Deleted,
            _ => FileStatus::Unknown,
        }
    }
}
