use async_trait::async_trait;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
#[error("voting infrastructure notification failed: {0}")]
pub struct NotifyError(pub String);

/// Tells the voting infrastructure that user vote preferences changed.
#[async_trait]
pub trait VotingInfraNotifier: Send + Sync {
    /// # Errors
    ///
    /// Returns `NotifyError` if the infrastructure could not be reached.
    async fn users_updated(&self) -> Result<(), NotifyError>;
}
