//! Vigil Core - Foundation types for the Vigil pre-execution tool-call guard.
//!
//! This crate provides:
//! - The `ToolCall` / `Verdict` wire types spoken with the host agent
//! - `GuardConfig`, the process-wide configuration read once at startup
//! - Home and project directory scaffolding
//! - Git context lookups that never fail

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]

pub mod config;
pub mod dirs;
pub mod git;
pub mod types;

pub use config::GuardConfig;
pub use dirs::{ProjectDir, VigilHome};
pub use git::GitStatus;
pub use types::{ToolCall, Verdict};
