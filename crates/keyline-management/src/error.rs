//! Error types for management API operations
//!
//! Every layer propagates errors unchanged; callers branch on kind via
//! [`Error::status`] / [`Error::is_not_found`] rather than string matching.

use thiserror::Error;

/// Fixed message attached to synthesized 404 errors, independent of whatever
/// the remote put in the body.
pub const NOT_FOUND_MESSAGE: &str = "resource not found";

/// Errors from management API operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A required path identifier was missing or empty. Caught locally,
    /// before any network I/O, to avoid sending a malformed URL.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The request body could not be marshaled to JSON. Caught before any
    /// network I/O.
    #[error("request serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Network-level failure building or sending the request.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The remote returned a non-success status. For 404 the message is the
    /// fixed [`NOT_FOUND_MESSAGE`]; for everything else it is decoded from
    /// the error envelope and `status` is the actual HTTP status code.
    #[error("remote error ({status}): {message}")]
    Remote { status: u16, message: String },

    /// A response body was present but not valid JSON for the expected
    /// shape. `context` distinguishes success-body decoding from
    /// error-envelope decoding.
    #[error("decoding {context} failed: {source}")]
    Decode {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Client construction failed: no credential material, invalid base
    /// URL, or credential material that cannot form a header. Surfaced at
    /// build time, never at request time.
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// HTTP status code for remote errors, `None` for everything local.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this is the synthesized 404 case.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Local validation error for a missing required path identifier.
    pub(crate) fn missing(field: &'static str) -> Self {
        Error::InvalidRequest(format!("{field} is required"))
    }
}

/// Result alias for management API operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_exposed_for_remote_errors_only() {
        let remote = Error::Remote {
            status: 409,
            message: "slug already taken".into(),
        };
        assert_eq!(remote.status(), Some(409));

        let local = Error::missing("project_slug");
        assert_eq!(local.status(), None);
    }

    #[test]
    fn not_found_detection() {
        let not_found = Error::Remote {
            status: 404,
            message: NOT_FOUND_MESSAGE.into(),
        };
        assert!(not_found.is_not_found());

        let conflict = Error::Remote {
            status: 409,
            message: "conflict".into(),
        };
        assert!(!conflict.is_not_found());
    }

    #[test]
    fn display_includes_status_and_message() {
        let err = Error::Remote {
            status: 429,
            message: "too many requests".into(),
        };
        assert_eq!(err.to_string(), "remote error (429): too many requests");
    }

    #[test]
    fn missing_field_names_the_field() {
        let err = Error::missing("environment_slug");
        assert_eq!(err.to_string(), "invalid request: environment_slug is required");
    }
}
