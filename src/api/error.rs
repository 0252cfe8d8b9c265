//! Error types for API calls.

use thiserror::Error;

use crate::transport::TransportError;

/// Errors returned by the client pipeline and resource accessors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required request field is empty or invalid; nothing was sent.
    #[error("malformed request: missing or invalid `{field}`")]
    MalformedRequest {
        /// Name of the offending request field.
        field: &'static str,
    },

    /// The HTTP executor failed (connection, TLS, timeout, body read).
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response body is not JSON of the expected shape.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    /// The accessor exists in the API surface but has no implementation yet.
    #[error("operation `{operation}` is not implemented")]
    NotImplemented {
        /// Accessor name, e.g. `link/comments`.
        operation: &'static str,
    },
}

impl ApiError {
    /// Creates a `MalformedRequest` error for `field`.
    #[must_use]
    pub fn malformed(field: &'static str) -> Self {
        Self::MalformedRequest { field }
    }

    /// Creates a `NotImplemented` error for `operation`.
    #[must_use]
    pub fn not_implemented(operation: &'static str) -> Self {
        Self::NotImplemented { operation }
    }

    /// Returns true for the not-implemented signal.
    #[must_use]
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, Self::NotImplemented { .. })
    }
}
