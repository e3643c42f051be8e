//! The stdin side of the hook protocol.
//!
//! Malformed input fails closed: some hosts treat a crashed hook as
//! approval, so an unparseable payload gets an explanatory block verdict
//! and a clean exit rather than an error.

use tracing::warn;
use vigil_core::{GuardConfig, ToolCall, Verdict};

/// Parse one tool-call payload and evaluate it.
///
/// Returns the parsed call (when there was one) alongside the verdict so
/// the caller can audit both.
pub(crate) fn decide(input: &str, config: &GuardConfig) -> (Option<ToolCall>, Verdict) {
    match serde_json::from_str::<ToolCall>(input) {
        Ok(call) => {
            let verdict = vigil_policy::evaluate(&call, config);
            (Some(call), verdict)
        },
        Err(err) => {
            warn!(error = %err, "unparseable tool call; failing closed");
            (
                None,
                Verdict::block(format!(
                    "invalid tool call payload ({err}); the guard fails closed on malformed input"
                )),
            )
        },
    }
}
