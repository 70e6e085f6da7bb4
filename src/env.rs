//! Environment capabilities: version-control reads and the clock.
//!
//! Both are injected into [`ContextManager`](crate::ContextManager) behind
//! small traits so operations can be tested without a real git checkout or a
//! real wall clock.

use std::path::PathBuf;
use std::process::Command;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// Snapshot of version-control state.
///
/// Every field is best effort: when no repository is available the
/// placeholders from [`GitInfo::unavailable`] are used and output quality
/// degrades, but no operation fails because of it.
#[derive(Debug, Clone, Serialize)]
pub struct GitInfo {
    pub branch: String,
    /// Short status (`git status --short`), or `(clean)`.
    pub status: String,
    /// Last commit as `<short-hash> - <subject>`.
    pub last_commit: String,
    pub is_clean: bool,
}

impl GitInfo {
    /// Placeholder values used when no repository can be read.
    pub fn unavailable() -> Self {
        Self {
            branch: "unknown".to_string(),
            status: "not a git repository".to_string(),
            last_commit: "N/A".to_string(),
            is_clean: false,
        }
    }
}

/// Best-effort source-control reads.
pub trait EnvironmentInfo {
    fn git_info(&self) -> GitInfo;

    /// Change summary since the last commit (`git diff --stat`), empty when
    /// unavailable or when there are no changes.
    fn diff_summary(&self) -> String;
}

/// Reads repository state by shelling out to the `git` binary.
pub struct GitCli {
    project_root: PathBuf,
}

impl GitCli {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
        }
    }

    fn run(&self, args: &[&str]) -> Option<String> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.project_root)
            .output()
            .ok()?;
        if !output.status.success() {
            return None;
        }
        Some(String::from_utf8_lossy(&output.stdout).trim_end().to_string())
    }
}

impl EnvironmentInfo for GitCli {
    fn git_info(&self) -> GitInfo {
        let Some(branch) = self.run(&["branch", "--show-current"]) else {
            tracing::debug!("git unavailable, using placeholder environment info");
            return GitInfo::unavailable();
        };

        let status = self.run(&["status", "--short"]).unwrap_or_default();
        let last_commit = self
            .run(&["log", "-1", "--pretty=%h - %s"])
            .unwrap_or_else(|| "N/A".to_string());
        let is_clean = status.is_empty();

        GitInfo {
            // Detached HEAD prints an empty branch name.
            branch: if branch.is_empty() {
                "(detached)".to_string()
            } else {
                branch
            },
            status: if is_clean {
                "(clean)".to_string()
            } else {
                status
            },
            last_commit,
            is_clean,
        }
    }

    fn diff_summary(&self) -> String {
        self.run(&["diff", "--stat"]).unwrap_or_default()
    }
}

/// Fixed environment values, for tests and checkouts without git.
#[derive(Debug, Clone)]
pub struct FixedEnvironment {
    pub info: GitInfo,
    pub diff: String,
}

impl FixedEnvironment {
    pub fn new(info: GitInfo) -> Self {
        Self {
            info,
            diff: String::new(),
        }
    }
}

impl Default for FixedEnvironment {
    fn default() -> Self {
        Self::new(GitInfo::unavailable())
    }
}

impl EnvironmentInfo for FixedEnvironment {
    fn git_info(&self) -> GitInfo {
        self.info.clone()
    }

    fn diff_summary(&self) -> String {
        self.diff.clone()
    }
}

impl<T: EnvironmentInfo + ?Sized> EnvironmentInfo for &T {
    fn git_info(&self) -> GitInfo {
        (**self).git_info()
    }

    fn diff_summary(&self) -> String {
        (**self).diff_summary()
    }
}

/// Time source for document timestamps and checkpoint identifiers.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// The real wall clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Manually advanced clock for tests.
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn advance_secs(&self, seconds: i64) {
        let mut now = self.now.lock().expect("clock lock poisoned");
        *now = *now + Duration::seconds(seconds);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().expect("clock lock poisoned")
    }
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
