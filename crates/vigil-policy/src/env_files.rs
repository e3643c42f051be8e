//! Secrets-file classifier.
//!
//! Blocks access to `.env`-family files by name, in any directory, before
//! the file is ever opened. The boundary is name-based: `.env` and
//! `.env.<suffix>` are secrets, except suffixes in the recognized
//! non-secret set (templates shipped for documentation).

use vigil_core::ToolCall;

/// `.env.<suffix>` names that are templates, not secrets.
const NON_SECRET_SUFFIXES: &[&str] = &["sample"];

/// Classify a tool call as touching a secrets file.
///
/// File-oriented tools are judged by the final component of the path they
/// carry; Bash commands are scanned token-by-token for file-path-like
/// arguments. Unknown tools never match.
#[must_use]
pub fn touches_env_file(call: &ToolCall) -> bool {
    match call {
        ToolCall::Bash { command } => command
            .split_whitespace()
            .any(|token| is_env_file_name(final_component(token))),
        _ => call
            .path()
            .is_some_and(|path| is_env_file_name(final_component(path))),
    }
}

/// Whether a file name (no directory part) is a secrets file.
fn is_env_file_name(name: &str) -> bool {
    if name == ".env" {
        return true;
    }
    name.strip_prefix(".env.")
        .is_some_and(|suffix| !NON_SECRET_SUFFIXES.contains(&suffix))
}

/// Final path component; the whole input if it contains no separator.
fn final_component(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
