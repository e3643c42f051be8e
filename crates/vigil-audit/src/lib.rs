//! Vigil Audit - append-only JSONL audit logging.
//!
//! Every verdict the guard produces, allow or block, is appended as one
//! newline-delimited JSON record to a log scoped by project and git branch.
//! Audit failures are reported to the caller but must never change a
//! verdict.

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]

pub mod error;
pub mod record;
pub mod scope;
pub mod sink;

pub use error::{AuditError, AuditResult};
pub use record::{PRE_TOOL_USE_LOG, record_verdict, verdict_record};
pub use scope::LogScope;
pub use sink::{AuditSink, JsonlSink, MemorySink};
