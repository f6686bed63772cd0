//! Error types for collaborator lookups.

use thiserror::Error;

/// Errors returned by [`crate::TicketInfoSource`] and [`crate::UserDirectory`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The requested record does not exist.
    #[error("not found")]
    NotFound,

    /// The backing service could not be reached.
    #[error("lookup unavailable: {0}")]
    Unavailable(String),

    /// The backing store failed.
    #[error("internal error: {0}")]
    Internal(String),
}
