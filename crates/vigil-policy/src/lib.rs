//! Vigil Policy - classifiers and the decision dispatcher.
//!
//! This crate provides:
//! - The dangerous-deletion command classifier
//! - The secrets-file and external-volume path classifiers
//! - The simulator-redirect check for sandboxed sessions
//! - [`evaluate`], the precedence-ordered dispatcher composing them
//!
//! Every classifier is a pure function of `(ToolCall, GuardConfig)`:
//! no I/O, no shared state, no failure mode. Malformed input is a
//! non-match, never an error.

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]

pub mod command;
pub mod env_files;
pub mod external_drives;
pub mod guard;
pub mod simulator;

pub use command::is_dangerous_delete;
pub use env_files::touches_env_file;
pub use external_drives::touches_external_drive;
pub use guard::evaluate;
