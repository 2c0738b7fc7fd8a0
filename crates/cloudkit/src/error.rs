//! Error types for platform operations.
//!
//! This module provides error types and categories for resolution and
//! provisioning. Errors are categorized to enable the provisioning retry
//! prompt and appropriate user feedback.

use crate::types::ResourceKind;

/// Result type alias for platform operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Categories of platform errors.
///
/// Error categories determine whether an operation may be offered a retry
/// and what kind of user feedback is appropriate. Only remote API failures
/// are retryable; everything else is fatal to the current command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Remote API call failed (retryable via user confirmation).
    Remote,
    /// Invalid or missing command input.
    Usage,
    /// Requested resource does not exist.
    NotFound,
    /// The user declined to continue.
    Cancelled,
    /// A resource definition is internally inconsistent.
    Definition,
    /// Other/unexpected errors.
    Other,
}

impl ErrorCategory {
    /// Whether this error category is eligible for the provisioning retry prompt.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Remote)
    }

    /// Get a user-friendly description of this error category.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Remote => "Platform API request failed",
            Self::Usage => "Invalid command input",
            Self::NotFound => "Resource not found",
            Self::Cancelled => "Operation cancelled",
            Self::Definition => "Invalid resource definition",
            Self::Other => "Unexpected error",
        }
    }

    /// Get actionable advice for resolving this error category.
    #[must_use]
    pub fn advice(&self) -> &'static str {
        match self {
            Self::Remote => "Check your network connection and the platform status page",
            Self::Usage => "Rerun with the missing argument, or in an interactive terminal",
            Self::NotFound => "Check the spelling, or pass the numeric id instead",
            Self::Cancelled => "Rerun the command when you are ready to continue",
            Self::Definition => "This is a bug in the resource definition, please report it",
            Self::Other => "Check the error details for more information",
        }
    }
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Errors that can occur during resolution and provisioning.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No resources of the requested kind exist yet.
    #[error("no {} found (create one with `{}`)", .kind.display_name(), .kind.create_command())]
    EmptyCollection {
        /// Kind that came back empty.
        kind: ResourceKind,
    },

    /// Required identifier absent and the session is non-interactive.
    #[error("missing argument '{name}' (required when running non-interactively)")]
    MissingArgument {
        /// Name of the missing argument.
        name: String,
    },

    /// A name matches more than one resource.
    #[error("'{name}' matches {count} resources, use the numeric id to disambiguate")]
    AmbiguousIdentifier {
        /// The ambiguous name.
        name: String,
        /// How many resources share it.
        count: usize,
    },

    /// The token matched nothing.
    #[error("no {} matches '{}'", .kind.display_name(), .token)]
    NotFound {
        /// Kind that was searched.
        kind: ResourceKind,
        /// The raw token as supplied by the user.
        token: String,
    },

    /// Call to the remote API failed.
    #[error("platform API error: {message}")]
    Remote {
        /// Human-readable error message.
        message: String,
        /// HTTP status code if available.
        status: Option<u16>,
    },

    /// The user declined to retry after a remote failure.
    #[error("{resource} creation cancelled")]
    Cancelled {
        /// Display name of the resource being created.
        resource: String,
    },

    /// A resource definition declares an invalid requirement graph.
    #[error("invalid resource definition: {message}")]
    Definition {
        /// What is wrong with the definition.
        message: String,
    },

    /// A named secret is not available from the credentials source.
    #[error("credential '{key}' not found")]
    Credentials {
        /// Key that was looked up.
        key: String,
    },

    /// Terminal interaction failed.
    #[error("prompt failed: {0}")]
    Prompt(String),

    /// Malformed response from the API.
    #[error("invalid API response: {0}")]
    Decode(String),
}

impl Error {
    /// Create a remote error.
    pub fn remote(message: impl Into<String>, status: Option<u16>) -> Self {
        Self::Remote {
            message: message.into(),
            status,
        }
    }

    /// Get the error category.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::EmptyCollection { .. } | Error::NotFound { .. } => ErrorCategory::NotFound,
            Error::MissingArgument { .. } | Error::AmbiguousIdentifier { .. } => {
                ErrorCategory::Usage
            }
            Error::Remote { .. } => ErrorCategory::Remote,
            Error::Cancelled { .. } => ErrorCategory::Cancelled,
            Error::Definition { .. } => ErrorCategory::Definition,
            Error::Credentials { .. } | Error::Prompt(_) | Error::Decode(_) => ErrorCategory::Other,
        }
    }

    /// Whether this error is eligible for the provisioning retry prompt.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        self.category().is_retryable()
    }
}

impl From<ureq::Error> for Error {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::StatusCode(code) => Self::Remote {
                message: format!("HTTP {}", code),
                status: Some(code),
            },
            other => Self::Remote {
                message: other.to_string(),
                status: None,
            },
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_retryable() {
        assert!(ErrorCategory::Remote.is_retryable());
        assert!(!ErrorCategory::Usage.is_retryable());
        assert!(!ErrorCategory::NotFound.is_retryable());
        assert!(!ErrorCategory::Cancelled.is_retryable());
        assert!(!ErrorCategory::Definition.is_retryable());
        assert!(!ErrorCategory::Other.is_retryable());
    }

    #[test]
    fn test_category_description_and_advice() {
        assert!(!ErrorCategory::Remote.description().is_empty());
        assert!(!ErrorCategory::Usage.advice().is_empty());
        assert!(format!("{}", ErrorCategory::NotFound).contains("not found"));
    }

    #[test]
    fn test_remote_error_is_retryable() {
        let err = Error::remote("connection reset", Some(502));
        assert_eq!(err.category(), ErrorCategory::Remote);
        assert!(err.is_retryable());
    }

    #[test]
    fn test_local_errors_are_not_retryable() {
        let not_found = Error::NotFound {
            kind: ResourceKind::Cache,
            token: "primary".to_string(),
        };
        assert_eq!(not_found.category(), ErrorCategory::NotFound);
        assert!(!not_found.is_retryable());

        let ambiguous = Error::AmbiguousIdentifier {
            name: "staging".to_string(),
            count: 2,
        };
        assert_eq!(ambiguous.category(), ErrorCategory::Usage);
        assert!(!ambiguous.is_retryable());

        let cancelled = Error::Cancelled {
            resource: "cache cluster".to_string(),
        };
        assert_eq!(cancelled.category(), ErrorCategory::Cancelled);
        assert!(!cancelled.is_retryable());
    }

    #[test]
    fn test_empty_collection_names_create_command() {
        let err = Error::EmptyCollection {
            kind: ResourceKind::Provider,
        };
        let display = err.to_string();
        assert!(display.contains("provider"));
        assert!(display.contains("stratus providers add"));
    }

    #[test]
    fn test_ambiguous_display_names_count() {
        let err = Error::AmbiguousIdentifier {
            name: "staging".to_string(),
            count: 3,
        };
        let display = err.to_string();
        assert!(display.contains("staging"));
        assert!(display.contains('3'));
    }

    #[test]
    fn test_not_found_carries_raw_token() {
        let err = Error::NotFound {
            kind: ResourceKind::Database,
            token: "users-db".to_string(),
        };
        assert!(err.to_string().contains("users-db"));
    }

    #[test]
    fn test_remote_constructor() {
        let err = Error::remote("HTTP 503", Some(503));
        match err {
            Error::Remote { message, status } => {
                assert_eq!(message, "HTTP 503");
                assert_eq!(status, Some(503));
            }
            _ => panic!("Expected Error::Remote"),
        }
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<u64>("not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Decode(_)));
    }
}
