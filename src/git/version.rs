use crate::error::{GitError, GitResult};
use crate::git::executor::GitRunner;
use std::fmt;
use std::str::FromStr;

/// Oldest git the workflows are exercised against
pub const MIN_GIT_VERSION: GitVersion = GitVersion {
    major: 2,
    minor: 20,
    patch: 0,
};

/// An installed git version, as reported by `git --version`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct GitVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl GitVersion {
    /// Ask `runner` for its git version
    pub fn detect<R: GitRunner>(runner: &R) -> GitResult<Self> {
        let output = runner
            .run(&["--version"])
            .map_err(|e| GitError::GitVersionDetectionFailed(e.to_string()))?;

        if !output.success {
            return Err(GitError::GitVersionDetectionFailed(format!(
                "git --version exited with {}",
                output.exit_code
            )));
        }

        output.stdout.parse()
    }

    /// Check if this version meets minimum requirements
    pub fn is_supported(&self) -> bool {
        (self.major, self.minor) >= (MIN_GIT_VERSION.major, MIN_GIT_VERSION.minor)
    }

    /// Detect the version and reject anything older than the minimum
    pub fn validate<R: GitRunner>(runner: &R) -> GitResult<Self> {
        let version = Self::detect(runner)?;

        if !version.is_supported() {
            return Err(GitError::GitVersionTooOld(format!(
                "{}\n\nPlease upgrade git to version {}.{} or higher.\n\
                 Visit: https://git-scm.com/downloads",
                version, MIN_GIT_VERSION.major, MIN_GIT_VERSION.minor
            )));
        }

        Ok(version)
    }
}

impl FromStr for GitVersion {
    type Err = GitError;

    /// Accepts "git version X.Y[.Z...]", including vendor suffixes such as
    /// "2.39.2.windows.1" or "2.39.3 (Apple Git-145)"
    fn from_str(s: &str) -> GitResult<Self> {
        let mut words = s.split_whitespace();
        let numbers = match (words.next(), words.next(), words.next()) {
            (Some("git"), Some("version"), Some(numbers)) => numbers,
            _ => {
                return Err(GitError::ParseError(format!(
                    "Unexpected git version format: {}",
                    s.trim()
                )));
            }
        };

        let mut parts = numbers.split('.');
        let mut component = |name: &str| -> GitResult<u32> {
            let part = parts.next().unwrap_or_default();
            part.parse::<u32>()
                .map_err(|_| GitError::ParseError(format!("Invalid {} version: {}", name, part)))
        };

        let major = component("major")?;
        let minor = component("minor")?;
        // Patch may be missing or carry a non-numeric suffix (rc builds)
        let patch = component("patch").unwrap_or(0);

        Ok(GitVersion {
            major,
            minor,
            patch,
        })
    }
}

impl fmt::Display for GitVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
