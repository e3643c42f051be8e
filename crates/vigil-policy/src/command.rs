//! Dangerous-deletion command classifier.
//!
//! Detects mass-recursive-force removal of high-value paths in raw shell
//! command text. The classifier is deliberately over-conservative: it
//! matches on the text of the command without tokenizing shell grammar, so
//! `echo rm -rf /` is dangerous (the dangerous text is present), and
//! `rm -r ./node_modules` is dangerous (`./` contains the `.` target).
//! Those are accepted false positives, not defects: a false negative here
//! deletes data, a false positive blocks one command.

use regex::Regex;
use std::sync::LazyLock;

/// Removal-intent patterns, matched against lowercased, whitespace-collapsed
/// command text. A `sudo` prefix needs no special handling because matching
/// starts at the `rm` word boundary.
static REMOVAL_INTENT: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // Combined short flags with recursive and force in either order,
        // with optional extra letters (-rf, -fr, -Rf, -rfv, ...).
        r"\brm\s+.*-[a-z]*r[a-z]*f",
        r"\brm\s+.*-[a-z]*f[a-z]*r",
        // Long-form pairs in either order.
        r"\brm\s+--recursive\s+--force",
        r"\brm\s+--force\s+--recursive",
        // Split (-r ... -f, -f ... -r) or bare recursive flag. Bare -r is
        // enough: combined with the target check below it is what blocks
        // `rm -r ./...`.
        r"\brm\s+.*-[a-z]*r\b",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("removal-intent patterns are static and valid"))
    .collect()
});

/// High-value target substrings, checked against the normalized (lowercased)
/// command once removal intent is confirmed. This list is pinned: it is
/// matched as substrings of the whole command, so `/` catches any absolute
/// path and `.` catches `./relative` paths. Do not generalize it.
const DANGEROUS_TARGETS: &[&str] = &["/", "/*", "~", "~/", "$home", ".", "..", "*"];

/// Classify a shell command as a dangerous mass deletion.
///
/// Returns `true` when the command expresses recursive removal intent
/// (`rm` with any recursive/force flag spelling, optionally `sudo`-prefixed)
/// and mentions a high-value target. Never panics; commands without delete
/// intent return `false`.
#[must_use]
pub fn is_dangerous_delete(command: &str) -> bool {
    let normalized = normalize(command);

    if !REMOVAL_INTENT.iter().any(|re| re.is_match(&normalized)) {
        return false;
    }

    DANGEROUS_TARGETS
        .iter()
        .any(|target| normalized.contains(target))
}

/// Lowercase and collapse whitespace runs so flag/target matching is
/// insensitive to spacing (`"  rm   -rf   /  "` ≡ `"rm -rf /"`).
fn normalize(command: &str) -> String {
    command
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
