use std::sync::Arc;

use api_auth_sdk::UserDirectory;
use vsp_security::{AuthorizationContext, Identity, UserId};

use super::agenda::AgendaPolicy;
use super::error::DomainError;
use super::notifier::VotingInfraNotifier;
use super::repo::VoteBitsRepository;

/// Outcome of a successful update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteBitsChange {
    pub user_id: UserId,
    pub previous: u16,
    pub current: u16,
}

impl VoteBitsChange {
    #[must_use]
    pub fn changed(&self) -> bool {
        self.previous != self.current
    }
}

pub struct VoteBitsUpdater {
    users: Arc<dyn UserDirectory>,
    repo: Arc<dyn VoteBitsRepository>,
    agendas: Arc<dyn AgendaPolicy>,
    notifier: Arc<dyn VotingInfraNotifier>,
}

impl VoteBitsUpdater {
    #[must_use]
    pub fn new(
        users: Arc<dyn UserDirectory>,
        repo: Arc<dyn VoteBitsRepository>,
        agendas: Arc<dyn AgendaPolicy>,
        notifier: Arc<dyn VotingInfraNotifier>,
    ) -> Self {
        Self {
            users,
            repo,
            agendas,
            notifier,
        }
    }

    /// Set the vote bits of the user behind `ctx` to `requested`.
    ///
    /// Nothing is written unless `ctx` is authenticated and `requested` is a
    /// valid vote bits value for the active agendas.
    ///
    /// # Errors
    ///
    /// - `Unauthenticated` if `ctx` carries no identity, or its address
    ///   belongs to no registered user
    /// - `InvalidArgument` if `requested` is not a decimal `u16` or is not
    ///   legal for the active agendas
    /// - `Internal` if the lookup or the write fails
    pub async fn update(
        &self,
        ctx: &AuthorizationContext,
        requested: &str,
    ) -> Result<VoteBitsChange, DomainError> {
        let Some(identity) = ctx.identity() else {
            return Err(DomainError::unauthenticated(
                ctx.failure_reason().unwrap_or("no credentials"),
            ));
        };

        let vote_bits = parse_vote_bits(requested)?;
        if !self.agendas.is_valid_vote_bits(vote_bits) {
            return Err(DomainError::invalid_argument(format!(
                "vote bits {vote_bits} are not valid for the active agendas"
            )));
        }

        let user_id = self.resolve_user(identity).await?;
        // The user was resolved above, so any write failure is a storage fault.
        let previous = self
            .repo
            .set_vote_bits(user_id, vote_bits)
            .await
            .map_err(|e| DomainError::internal(format!("storing vote bits of user {user_id}: {e}")))?;
        let change = VoteBitsChange {
            user_id,
            previous,
            current: vote_bits,
        };

        if change.changed()
            && let Err(e) = self.notifier.users_updated().await
        {
            tracing::warn!(error = %e, user_id = %user_id, "vote bits stored but notification failed");
        }

        tracing::info!(
            user_id = %user_id,
            old_vote_bits = previous,
            new_vote_bits = vote_bits,
            "updated vote bits"
        );
        Ok(change)
    }

    async fn resolve_user(&self, identity: &Identity) -> Result<UserId, DomainError> {
        match identity {
            Identity::User(id) => Ok(*id),
            Identity::MultiSigAddress(address) => {
                let user = self.users.find_by_multisig_address(address).await?;
                Ok(user.id)
            }
        }
    }
}

/// Parse a decimal vote bits value, rejecting anything outside `u16`.
fn parse_vote_bits(requested: &str) -> Result<u16, DomainError> {
    let wide: i64 = requested.trim().parse().map_err(|_| {
        DomainError::invalid_argument(format!("vote bits '{requested}' is not an integer"))
    })?;
    u16::try_from(wide).map_err(|_| {
        DomainError::invalid_argument(format!("vote bits {wide} out of range 0..=65535"))
    })
}
