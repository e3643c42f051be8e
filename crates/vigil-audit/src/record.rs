//! Verdict record construction.

use chrono::Utc;
use uuid::Uuid;
use vigil_core::{ToolCall, Verdict};

use crate::error::AuditResult;
use crate::sink::AuditSink;

/// Log name the pre-execution guard appends to.
pub const PRE_TOOL_USE_LOG: &str = "pre_tool_use.jsonl";

/// Build the audit record for one evaluated tool call.
///
/// Shape: `{event, id, timestamp, tool_call, verdict}` where `verdict`
/// carries the wire `{action, message?}` form.
#[must_use]
pub fn verdict_record(call: &ToolCall, verdict: &Verdict) -> serde_json::Value {
    serde_json::json!({
        "event": "pre_tool_use",
        "id": Uuid::new_v4(),
        "timestamp": Utc::now().to_rfc3339(),
        "tool_call": call,
        "verdict": verdict,
    })
}

/// Append the record for one verdict — allow or block — to the guard's log.
///
/// # Errors
///
/// Returns an error if the sink cannot persist the record. Callers must not
/// let this change the verdict.
pub fn record_verdict(
    sink: &dyn AuditSink,
    call: &ToolCall,
    verdict: &Verdict,
) -> AuditResult<()> {
    sink.append(PRE_TOOL_USE_LOG, &verdict_record(call, verdict))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;

    #[test]
    fn record_carries_call_and_verdict() {
        let call = ToolCall::Bash {
            command: "rm -rf /".to_string(),
        };
        let record = verdict_record(&call, &Verdict::block("nope"));

        assert_eq!(record["event"], "pre_tool_use");
        assert_eq!(record["tool_call"]["tool"], "Bash");
        assert_eq!(record["tool_call"]["parameters"]["command"], "rm -rf /");
        assert_eq!(record["verdict"]["action"], "block");
        assert_eq!(record["verdict"]["message"], "nope");
        assert!(record["timestamp"].is_string());
        assert!(record["id"].is_string());
    }

    #[test]
    fn allows_are_recorded_too() {
        let sink = MemorySink::new();
        let call = ToolCall::Read {
            file_path: "/tmp/notes.md".to_string(),
        };

        record_verdict(&sink, &call, &Verdict::Allow).unwrap();

        let records = sink.records(PRE_TOOL_USE_LOG);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["verdict"]["action"], "allow");
        assert!(records[0]["verdict"].get("message").is_none());
    }
}
