//! Process-wide guard configuration.
//!
//! The original environment-variable reads scattered through the decision
//! path are replaced by one [`GuardConfig`] value constructed at process
//! start and threaded as a parameter into every classifier call. Classifiers
//! stay pure functions of `(ToolCall, GuardConfig)` and can be unit-tested
//! with different configurations in the same process.

/// Environment variable that disables external-volume enforcement.
pub const ALLOW_EXTERNAL_DRIVES_ENV: &str = "VIGIL_ALLOW_EXTERNAL_DRIVES";

/// Environment variable marking a sandboxed desktop session.
pub const SANDBOX_ENV: &str = "VIGIL_SANDBOX";

/// Runtime-configurable overrides, read once per evaluation process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GuardConfig {
    /// Operator override: when true, the external-volume classifier never
    /// fires. Default false (enforce).
    pub allow_external_drives: bool,
    /// When true the guard runs inside a sandboxed desktop session and the
    /// simulator-redirect check applies. Default false (check skipped).
    pub sandbox_session: bool,
}

impl GuardConfig {
    /// Read the configuration from the process environment.
    ///
    /// Absent or unrecognized values mean "enforce" / "not sandboxed".
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            allow_external_drives: env_flag(ALLOW_EXTERNAL_DRIVES_ENV),
            sandbox_session: env_flag(SANDBOX_ENV),
        }
    }

    /// Set the external-drive override (useful for testing).
    #[must_use]
    pub fn with_allow_external_drives(mut self, allow: bool) -> Self {
        self.allow_external_drives = allow;
        self
    }

    /// Set the sandbox-session flag (useful for testing).
    #[must_use]
    pub fn with_sandbox_session(mut self, sandboxed: bool) -> Self {
        self.sandbox_session = sandboxed;
        self
    }
}

/// Truthiness rule for boolean environment overrides.
fn env_flag(key: &str) -> bool {
    std::env::var(key).is_ok_and(|value| {
        let v = value.trim();
        v.eq_ignore_ascii_case("1") || v.eq_ignore_ascii_case("true") || v.eq_ignore_ascii_case("yes")
    })
}
