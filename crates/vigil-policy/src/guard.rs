//! The decision dispatcher.
//!
//! # Rule Order
//!
//! Rules run in a fixed order and the first blocking rule wins. Order is
//! observable behavior: messages differ between rules, and future rules may
//! overlap with existing ones.
//!
//! 1. Simulator redirect (only in sandboxed sessions)
//! 2. Dangerous deletion
//! 3. Secrets-file access
//! 4. External-volume access
//!
//! # Fault Isolation
//!
//! Each rule runs inside `catch_unwind`: a defect in one rule must not
//! suppress the checks that follow it. A faulting rule is logged and treated
//! as "no match", but if any rule faulted and nothing blocked, the dispatch
//! fails closed — a false negative loses data, a false positive blocks one
//! command.

use std::panic::{AssertUnwindSafe, catch_unwind};
use tracing::{debug, error};
use vigil_core::config::ALLOW_EXTERNAL_DRIVES_ENV;
use vigil_core::{GuardConfig, ToolCall, Verdict};

use crate::command::is_dangerous_delete;
use crate::env_files::touches_env_file;
use crate::external_drives::touches_external_drive;
use crate::simulator::simulator_redirect;

/// One entry in the ordered rule table: a name for diagnostics and a
/// predicate returning the block message when it fires.
struct GuardRule {
    name: &'static str,
    check: fn(&ToolCall, &GuardConfig) -> Option<String>,
}

/// The precedence-ordered rule table. First match wins.
const RULES: &[GuardRule] = &[
    GuardRule {
        name: "simulator_redirect",
        check: simulator_redirect,
    },
    GuardRule {
        name: "dangerous_delete",
        check: check_dangerous_delete,
    },
    GuardRule {
        name: "env_file",
        check: check_env_file,
    },
    GuardRule {
        name: "external_drive",
        check: check_external_drive,
    },
];

fn check_dangerous_delete(call: &ToolCall, _config: &GuardConfig) -> Option<String> {
    let command = call.command()?;
    if is_dangerous_delete(command) {
        Some(
            "Dangerous rm command blocked: recursive/force deletion of a high-value path. \
             Delete specific files by exact path instead."
                .to_string(),
        )
    } else {
        None
    }
}

fn check_env_file(call: &ToolCall, _config: &GuardConfig) -> Option<String> {
    if touches_env_file(call) {
        Some(
            "Access to .env files is blocked to protect secrets. \
             Use .env.sample for template values instead."
                .to_string(),
        )
    } else {
        None
    }
}

fn check_external_drive(call: &ToolCall, config: &GuardConfig) -> Option<String> {
    if touches_external_drive(call, config) {
        Some(format!(
            "Access to external volumes under /Volumes is blocked. \
             Set {ALLOW_EXTERNAL_DRIVES_ENV}=1 to allow external drive access."
        ))
    } else {
        None
    }
}

/// Evaluate one tool call against the rule table.
///
/// Pure apart from tracing: one call in, one verdict out, no I/O. Recording
/// the verdict is the caller's responsibility.
#[must_use]
pub fn evaluate(call: &ToolCall, config: &GuardConfig) -> Verdict {
    let mut faulted = false;

    for rule in RULES {
        match catch_unwind(AssertUnwindSafe(|| (rule.check)(call, config))) {
            Ok(Some(message)) => {
                debug!(rule = rule.name, tool = call.tool_name(), "rule matched");
                return Verdict::block(message);
            },
            Ok(None) => {},
            Err(_) => {
                error!(rule = rule.name, tool = call.tool_name(), "guard rule panicked");
                faulted = true;
            },
        }
    }

    if faulted {
        return Verdict::block(
            "The guard hit an internal fault while evaluating this action and is failing closed. \
             Report this to the operator before retrying.",
        );
    }

    Verdict::Allow
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bash(command: &str) -> ToolCall {
        ToolCall::Bash {
            command: command.to_string(),
        }
    }

    #[test]
    fn destructive_delete_blocked_with_deletion_message() {
        let verdict = evaluate(&bash("rm -rf ~"), &GuardConfig::default());
        assert!(verdict.is_blocking());
        assert!(verdict.message().unwrap().contains("rm"));
    }

    #[test]
    fn env_access_blocked_with_secrets_message() {
        let verdict = evaluate(
            &ToolCall::Read {
                file_path: "/app/.env".to_string(),
            },
            &GuardConfig::default(),
        );
        assert!(verdict.is_blocking());
        assert!(verdict.message().unwrap().contains(".env.sample"));
    }

    #[test]
    fn external_drive_blocked_with_override_hint() {
        let verdict = evaluate(
            &bash("cat /Volumes/USB/secret.txt"),
            &GuardConfig::default(),
        );
        assert!(verdict.is_blocking());
        assert!(
            verdict
                .message()
                .unwrap()
                .contains(ALLOW_EXTERNAL_DRIVES_ENV)
        );
    }

    #[test]
    fn benign_calls_allowed() {
        let config = GuardConfig::default();
        assert_eq!(evaluate(&bash("ls -la"), &config), Verdict::Allow);
        assert_eq!(
            evaluate(
                &ToolCall::Read {
                    file_path: "/Users/test/notes.md".to_string()
                },
                &config
            ),
            Verdict::Allow
        );
        assert_eq!(
            evaluate(
                &ToolCall::Other {
                    tool: "WebFetch".to_string(),
                    parameters: serde_json::json!({}),
                },
                &config
            ),
            Verdict::Allow
        );
    }

    #[test]
    fn deletion_takes_precedence_over_env_file() {
        // A command matching both rules gets the deletion message: the rule
        // table order is observable behavior.
        let verdict = evaluate(&bash("rm -rf ./.env"), &GuardConfig::default());
        assert!(verdict.is_blocking());
        assert!(verdict.message().unwrap().contains("rm"));
        assert!(!verdict.message().unwrap().contains(".env.sample"));
    }

    #[test]
    fn simulator_redirect_first_in_sandbox() {
        let sandboxed = GuardConfig::default().with_sandbox_session(true);
        let verdict = evaluate(&bash("open -a Simulator"), &sandboxed);
        assert!(verdict.is_blocking());
        assert!(verdict.message().unwrap().contains("mcp__ios-simulator__"));

        // Outside the sandbox the same command is allowed.
        let verdict = evaluate(&bash("open -a Simulator"), &GuardConfig::default());
        assert_eq!(verdict, Verdict::Allow);
    }

    #[test]
    fn simulator_gate_does_not_leak_into_other_rules() {
        // Sandbox flag changes only rule 1; a dangerous delete is blocked
        // either way.
        let sandboxed = GuardConfig::default().with_sandbox_session(true);
        assert!(evaluate(&bash("rm -rf /"), &sandboxed).is_blocking());
    }
}
