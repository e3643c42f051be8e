//! Simulator redirect check for sandboxed desktop sessions.
//!
//! Inside a sandboxed session the GUI simulator launches on a desktop the
//! user cannot see, so direct launches are pointless. These commands are
//! redirected to the proxied `mcp__ios-simulator__*` tools, which run in the
//! logged-in user's session. Outside a sandboxed session the check is
//! skipped entirely.

use vigil_core::{GuardConfig, ToolCall};

/// Redirect message when a Bash command matches a simulator launch or
/// control invocation. Returns `None` when the session is not sandboxed or
/// the command is unrelated.
#[must_use]
pub fn simulator_redirect(call: &ToolCall, config: &GuardConfig) -> Option<String> {
    if !config.sandbox_session {
        return None;
    }
    let command = call.command()?.to_lowercase();

    // Launching the GUI simulator directly.
    if command.contains("open -a") && command.contains("simulator") {
        return Some(
            "Use mcp__ios-simulator__open_simulator instead of 'open -a Simulator'".to_string(),
        );
    }

    // The simulator's command-line control tool.
    if command.contains("xcrun simctl") {
        return Some("Use mcp__ios-simulator__* instead of xcrun simctl commands".to_string());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bash(command: &str) -> ToolCall {
        ToolCall::Bash {
            command: command.to_string(),
        }
    }

    fn sandboxed() -> GuardConfig {
        GuardConfig::default().with_sandbox_session(true)
    }

    #[test]
    fn gui_launch_redirected() {
        let msg = simulator_redirect(&bash("open -a Simulator"), &sandboxed()).unwrap();
        assert!(msg.contains("mcp__ios-simulator__open_simulator"));

        // Case-insensitive.
        assert!(simulator_redirect(&bash("OPEN -A simulator"), &sandboxed()).is_some());
    }

    #[test]
    fn simctl_redirected() {
        let msg = simulator_redirect(&bash("xcrun simctl boot 'iPhone 15'"), &sandboxed()).unwrap();
        assert!(msg.contains("mcp__ios-simulator__"));
    }

    #[test]
    fn skipped_outside_sandbox() {
        let config = GuardConfig::default();
        assert!(simulator_redirect(&bash("open -a Simulator"), &config).is_none());
        assert!(simulator_redirect(&bash("xcrun simctl list"), &config).is_none());
    }

    #[test]
    fn unrelated_commands_pass() {
        assert!(simulator_redirect(&bash("open -a TextEdit"), &sandboxed()).is_none());
        assert!(simulator_redirect(&bash("xcrun swift build"), &sandboxed()).is_none());
        assert!(
            simulator_redirect(
                &ToolCall::Read {
                    file_path: "simulator.txt".to_string()
                },
                &sandboxed()
            )
            .is_none()
        );
    }
}
