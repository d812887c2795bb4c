use std::fmt;

use crate::submit::ValidationError;

/// Machine-readable error codes surfaced by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    UninitializedContext,
    ConfigParseError,
    ValidationFailed,
    ScriptParseError,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::UninitializedContext => "E1001",
            Self::ConfigParseError => "E1002",
            Self::ValidationFailed => "E2001",
            Self::ScriptParseError => "E2003",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::UninitializedContext => "Filter preferences read without a session context",
            Self::ConfigParseError => "Config file parse error",
            Self::ValidationFailed => "Feedback submission rejected",
            Self::ScriptParseError => "Malformed action script line",
        }
    }

    /// Optional remediation hint.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::UninitializedContext => {
                Some("Construct preferences through a Board or FilterContext::provided.")
            }
            Self::ConfigParseError => Some("Fix syntax in the feedboard config file and retry."),
            Self::ValidationFailed => Some("Provide a non-empty title and description."),
            Self::ScriptParseError => {
                Some("Each script line must be one JSON object with an \"action\" field.")
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors raised by the board core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Preferences were read before any context provided them. This is a
    /// wiring bug, not a runtime condition.
    #[error("filter preferences must be read within an initialized session context")]
    UninitializedContext,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("failed to parse config {path}: {reason}")]
    ConfigParse { path: String, reason: String },
}

impl BoardError {
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::UninitializedContext => ErrorCode::UninitializedContext,
            Self::Validation(_) => ErrorCode::ValidationFailed,
            Self::ConfigParse { .. } => ErrorCode::ConfigParseError,
        }
    }

    /// Remediation text for this error, falling back to the code's message.
    #[must_use]
    pub fn suggestion(&self) -> String {
        let code = self.error_code();
        code.hint().unwrap_or(code.message()).to_string()
    }
}
