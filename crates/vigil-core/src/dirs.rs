//! Directory scaffolding for the Vigil home and the guarded project.
//!
//! - [`VigilHome`]: global state at `~/.vigil/` (or `$VIGIL_HOME`). Holds the
//!   audit logs.
//! - [`ProjectDir`]: the project the intercepted action belongs to, detected
//!   by walking up from the working directory to the nearest `.git`.
//!
//! # Layout
//!
//! ```text
//! ~/.vigil/                      (VigilHome)
//! └── logs/
//!     └── <project>/<branch>/    (per-project, per-branch audit logs)
//!         └── pre_tool_use.jsonl
//! ```

use std::io;
use std::path::{Path, PathBuf};

/// Global Vigil home directory (`~/.vigil/` or `$VIGIL_HOME`).
#[derive(Debug, Clone)]
pub struct VigilHome {
    root: PathBuf,
}

impl VigilHome {
    /// Resolve the home directory.
    ///
    /// Checks `$VIGIL_HOME` first, then falls back to `$HOME/.vigil/`.
    ///
    /// # Errors
    ///
    /// Returns an error if `$VIGIL_HOME` is relative, or if neither
    /// `$VIGIL_HOME` nor `$HOME` is set.
    pub fn resolve() -> io::Result<Self> {
        let root = if let Ok(custom) = std::env::var("VIGIL_HOME") {
            let p = PathBuf::from(&custom);
            if !p.is_absolute() {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "VIGIL_HOME must be an absolute path",
                ));
            }
            p
        } else {
            let home = std::env::var("HOME").map_err(|_| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    "neither VIGIL_HOME nor HOME environment variable is set",
                )
            })?;
            PathBuf::from(home).join(".vigil")
        };

        Ok(Self { root })
    }

    /// Create from an explicit path (useful for testing).
    #[must_use]
    pub fn from_path(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Ensure the directory structure exists with owner-only permissions.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation or permission setting fails.
    pub fn ensure(&self) -> io::Result<()> {
        std::fs::create_dir_all(self.logs_dir())?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let perms = std::fs::Permissions::from_mode(0o700);
            std::fs::set_permissions(self.root(), perms.clone())?;
            std::fs::set_permissions(self.logs_dir(), perms)?;
        }
        Ok(())
    }

    /// Root directory path.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Logs directory (`~/.vigil/logs/`).
    #[must_use]
    pub fn logs_dir(&self) -> PathBuf {
        self.root.join("logs")
    }
}

/// The project directory an intercepted action belongs to.
#[derive(Debug, Clone)]
pub struct ProjectDir {
    root: PathBuf,
}

impl ProjectDir {
    /// Detect the project root by walking up from `start_dir` to the nearest
    /// directory containing `.git`, falling back to `start_dir` itself.
    #[must_use]
    pub fn detect(start_dir: &Path) -> Self {
        let start = if start_dir.is_absolute() {
            start_dir.to_path_buf()
        } else {
            std::env::current_dir().unwrap_or_default().join(start_dir)
        };

        let mut current = start.as_path();
        loop {
            if current.join(".git").exists() {
                return Self {
                    root: current.to_path_buf(),
                };
            }
            match current.parent() {
                Some(parent) if parent != current => current = parent,
                _ => break,
            }
        }

        Self { root: start }
    }

    /// Create from an explicit project root (useful for testing).
    #[must_use]
    pub fn from_path(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Project root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The project's directory name, used to scope audit logs.
    #[must_use]
    pub fn name(&self) -> String {
        self.root
            .file_name()
            .map_or_else(|| "project".to_string(), |n| n.to_string_lossy().into_owned())
    }
}
