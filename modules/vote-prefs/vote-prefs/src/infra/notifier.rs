use async_trait::async_trait;

use crate::domain::notifier::{NotifyError, VotingInfraNotifier};

/// Notifier for standalone runs: records the event in the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingNotifier;

#[async_trait]
impl VotingInfraNotifier for LoggingNotifier {
    async fn users_updated(&self) -> Result<(), NotifyError> {
        tracing::info!("voting infrastructure notified of updated users");
        Ok(())
    }
}
