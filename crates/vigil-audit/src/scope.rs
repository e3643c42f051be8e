//! Per-project, per-branch log scoping.
//!
//! Audit logs live under `logs/<project>/<branch>/` so that verdicts from
//! parallel worktrees and branches stay separated. Branch lookup is
//! advisory: outside a repository the scope falls back to `no-branch`.

use std::path::{Path, PathBuf};
use vigil_core::{ProjectDir, git};

/// Scope label used when no git branch can be determined.
const NO_BRANCH: &str = "no-branch";

/// The project/branch pair a log belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogScope {
    project: String,
    branch: String,
}

impl LogScope {
    /// Build a scope from a project name and an optional branch.
    ///
    /// Branch names are sanitized for path use: `/` separators (as in
    /// `feature/add-tests`) become `-`.
    #[must_use]
    pub fn new(project: impl Into<String>, branch: Option<String>) -> Self {
        Self {
            project: project.into(),
            branch: branch.map_or_else(|| NO_BRANCH.to_string(), |b| b.replace('/', "-")),
        }
    }

    /// Detect the scope for a project directory, looking up the current git
    /// branch. Lookup failures fall back to `no-branch`.
    pub async fn detect(project: &ProjectDir) -> Self {
        let branch = git::current_branch_in(project.root()).await;
        Self::new(project.name(), branch)
    }

    /// Project label.
    #[must_use]
    pub fn project(&self) -> &str {
        &self.project
    }

    /// Branch label (sanitized).
    #[must_use]
    pub fn branch(&self) -> &str {
        &self.branch
    }

    /// The scoped log directory under a logs root.
    #[must_use]
    pub fn dir_under(&self, logs_root: &Path) -> PathBuf {
        logs_root.join(&self.project).join(&self.branch)
    }
}
