use api_auth_sdk::LookupError;
use async_trait::async_trait;
use vsp_security::UserId;

/// Persistent vote bits of pool users.
#[async_trait]
pub trait VoteBitsRepository: Send + Sync {
    /// Store `vote_bits` for `user` and return the value it replaced.
    ///
    /// The write is all-or-nothing.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the user does not exist
    /// - `Internal` if the store fails
    async fn set_vote_bits(&self, user: UserId, vote_bits: u16) -> Result<u16, LookupError>;
}
