//! Collaborator traits for the authentication core.
//!
//! Implementations are injected at startup; the core never caches their
//! answers and never retries a failed lookup.

use async_trait::async_trait;
use vsp_security::UserId;

use crate::error::LookupError;
use crate::models::{TicketInfo, User};

/// Resolves ticket hashes to the addresses recorded for them.
///
/// ```ignore
/// let info = source.ticket_info(ticket_hash).await?;
/// verify_against(&info.owner_fee_address);
/// ```
#[async_trait]
pub trait TicketInfoSource: Send + Sync {
    /// Look up the fee and multisig addresses of a ticket.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the ticket is unknown
    /// - `Unavailable` if the ticket backend cannot be reached
    async fn ticket_info(&self, ticket_hash: &str) -> Result<TicketInfo, LookupError>;
}

/// Read access to stored pool users.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// # Errors
    ///
    /// - `NotFound` if no user has this id
    /// - `Internal` if the store fails
    async fn find_by_id(&self, id: UserId) -> Result<User, LookupError>;

    /// # Errors
    ///
    /// - `NotFound` if no user owns this multisig address
    /// - `Internal` if the store fails
    async fn find_by_multisig_address(&self, address: &str) -> Result<User, LookupError>;
}
