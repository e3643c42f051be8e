//! External-volume classifier.
//!
//! User-mounted volumes appear under `/Volumes/` on the host OS; anything
//! there that is not a system-managed volume is treated as a removable or
//! external drive and blocked by default, to keep an agent from reading or
//! writing media the operator did not intend to expose. The operator can
//! lift enforcement with the `allow_external_drives` override.

use vigil_core::{GuardConfig, ToolCall};

/// Mount root the host OS uses for user-mounted volumes.
const MOUNT_ROOT: &str = "/Volumes/";

/// System-managed volumes that live under the mount root but are not
/// external media. Names may contain spaces; component extraction splits on
/// `/` only, so `Macintosh HD` is matched whole from structured paths.
const SYSTEM_VOLUMES: &[&str] = &["Macintosh HD", "Recovery"];

/// Classify a tool call as touching an external volume.
///
/// Always `false` when `config.allow_external_drives` is set (operator
/// override, highest precedence). Otherwise file-oriented tools are judged
/// by their carried path and Bash commands by each whitespace token that
/// starts at the mount root.
#[must_use]
pub fn touches_external_drive(call: &ToolCall, config: &GuardConfig) -> bool {
    if config.allow_external_drives {
        return false;
    }
    match call {
        ToolCall::Bash { command } => command.split_whitespace().any(is_external_path),
        _ => call.path().is_some_and(is_external_path),
    }
}

/// Whether a single path points into a non-system volume under the mount
/// root. Paths anywhere else are not external.
fn is_external_path(path: &str) -> bool {
    volume_name(path).is_some_and(|name| !SYSTEM_VOLUMES.contains(&name))
}

/// The top-level volume name of a path under the mount root.
fn volume_name(path: &str) -> Option<&str> {
    let rest = path.strip_prefix(MOUNT_ROOT)?;
    let name = rest.split('/').next().unwrap_or(rest);
    if name.is_empty() { None } else { Some(name) }
}
