//! Wire types shared between the guard and the host agent.
//!
//! A [`ToolCall`] arrives on stdin as `{"tool": ..., "parameters": {...}}`;
//! a [`Verdict`] leaves on stdout as `{"action": "allow"}` or
//! `{"action": "block", "message": ...}`.
//!
//! `ToolCall` is a tagged variant over the fixed tool set rather than an open
//! string map: each variant carries only the fields relevant to it, so the
//! classifiers never reach into an untyped bag by key. Tool names the guard
//! does not recognize land in [`ToolCall::Other`] and match no classifier.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A single intercepted action proposed by the agent.
///
/// Immutable once constructed; one value is created per intercepted action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolCall {
    /// A shell command.
    Bash {
        /// Raw command text, unparsed.
        command: String,
    },
    /// A file read.
    Read {
        /// Path of the file being read.
        file_path: String,
    },
    /// A file write.
    Write {
        /// Path of the file being written.
        file_path: String,
    },
    /// An in-place file edit.
    Edit {
        /// Path of the file being edited.
        file_path: String,
    },
    /// A filename-pattern search.
    Glob {
        /// Directory the search is rooted at.
        path: String,
    },
    /// A content search.
    Grep {
        /// Directory the search is rooted at.
        path: String,
    },
    /// Any tool the guard does not recognize. Never matches a classifier.
    Other {
        /// The tool name as received.
        tool: String,
        /// The raw parameters as received.
        parameters: serde_json::Value,
    },
}

impl ToolCall {
    /// The tool name as it appears on the wire.
    #[must_use]
    pub fn tool_name(&self) -> &str {
        match self {
            Self::Bash { .. } => "Bash",
            Self::Read { .. } => "Read",
            Self::Write { .. } => "Write",
            Self::Edit { .. } => "Edit",
            Self::Glob { .. } => "Glob",
            Self::Grep { .. } => "Grep",
            Self::Other { tool, .. } => tool,
        }
    }

    /// The shell command text, if this is a Bash call.
    #[must_use]
    pub fn command(&self) -> Option<&str> {
        match self {
            Self::Bash { command } => Some(command),
            _ => None,
        }
    }

    /// The file or directory path carried by a file-oriented call.
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Read { file_path } | Self::Write { file_path } | Self::Edit { file_path } => {
                Some(file_path)
            },
            Self::Glob { path } | Self::Grep { path } => Some(path),
            Self::Bash { .. } | Self::Other { .. } => None,
        }
    }
}

impl fmt::Display for ToolCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tool_name())
    }
}

/// The `{tool, parameters}` envelope as it appears on the wire.
#[derive(Deserialize)]
struct RawToolCall {
    tool: String,
    #[serde(default)]
    parameters: serde_json::Value,
}

/// Parameters of a command-oriented tool.
///
/// Missing or malformed fields default to empty: an absent command is not an
/// error, it is a command that matches nothing.
#[derive(Default, Deserialize)]
struct CommandParams {
    #[serde(default)]
    command: String,
}

#[derive(Default, Deserialize)]
struct FilePathParams {
    #[serde(default)]
    file_path: String,
}

#[derive(Default, Deserialize)]
struct SearchPathParams {
    #[serde(default)]
    path: String,
}

fn params<T: Default + for<'de> Deserialize<'de>>(value: serde_json::Value) -> T {
    serde_json::from_value(value).unwrap_or_default()
}

impl<'de> Deserialize<'de> for ToolCall {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawToolCall::deserialize(deserializer)?;
        let call = match raw.tool.as_str() {
            "Bash" => Self::Bash {
                command: params::<CommandParams>(raw.parameters).command,
            },
            "Read" => Self::Read {
                file_path: params::<FilePathParams>(raw.parameters).file_path,
            },
            "Write" => Self::Write {
                file_path: params::<FilePathParams>(raw.parameters).file_path,
            },
            "Edit" => Self::Edit {
                file_path: params::<FilePathParams>(raw.parameters).file_path,
            },
            "Glob" => Self::Glob {
                path: params::<SearchPathParams>(raw.parameters).path,
            },
            "Grep" => Self::Grep {
                path: params::<SearchPathParams>(raw.parameters).path,
            },
            _ => Self::Other {
                tool: raw.tool,
                parameters: raw.parameters,
            },
        };
        Ok(call)
    }
}

impl Serialize for ToolCall {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let parameters = match self {
            Self::Bash { command } => serde_json::json!({ "command": command }),
            Self::Read { file_path } | Self::Write { file_path } | Self::Edit { file_path } => {
                serde_json::json!({ "file_path": file_path })
            },
            Self::Glob { path } | Self::Grep { path } => serde_json::json!({ "path": path }),
            Self::Other { parameters, .. } => parameters.clone(),
        };
        let mut state = serializer.serialize_struct("ToolCall", 2)?;
        state.serialize_field("tool", self.tool_name())?;
        state.serialize_field("parameters", &parameters)?;
        state.end()
    }
}

/// The guard's decision for one [`ToolCall`].
///
/// There is no warn or partial state: an action is either allowed or blocked,
/// and every block carries an actionable message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "action")]
pub enum Verdict {
    /// Let the action execute.
    #[default]
    Allow,
    /// Refuse the action before it executes.
    Block {
        /// Why the action was blocked and what to do instead.
        message: String,
    },
}

impl Verdict {
    /// Create a block verdict.
    #[must_use]
    pub fn block(message: impl Into<String>) -> Self {
        Self::Block {
            message: message.into(),
        }
    }

    /// Check if this verdict blocks the action.
    #[must_use]
    pub fn is_blocking(&self) -> bool {
        matches!(self, Self::Block { .. })
    }

    /// The block message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Allow => None,
            Self::Block { message } => Some(message),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allow => write!(f, "allow"),
            Self::Block { message } => write!(f, "block: {message}"),
        }
    }
}
