//! Authentication failures.

use thiserror::Error;

/// Reasons a recognized credential was refused.
///
/// These never reach the caller: the dispatcher logs them and reduces them
/// to a generic denial on the `AuthorizationContext`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("malformed timestamp '{0}'")]
    MalformedTimestamp(String),

    #[error("timestamp '{timestamp}' outside the replay window (delta {delta}s)")]
    ExpiredOrFutureTimestamp { timestamp: String, delta: i64 },

    #[error("missing ticket auth parameters")]
    MissingParameters,

    #[error("malformed signature: {0}")]
    MalformedSignature(String),

    #[error("ticket lookup failed: {0}")]
    TicketLookupFailed(String),

    #[error("signature does not match the ticket fee address")]
    SignatureInvalid,

    #[error("invalid api token claims: {0}")]
    ClaimsInvalid(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Whether the failure is a server-side fault rather than bad input.
    #[must_use]
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Internal(_))
    }
}
