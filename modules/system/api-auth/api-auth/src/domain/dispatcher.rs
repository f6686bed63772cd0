//! Routes each request's `Authorization` header to the validator for its scheme.

use std::sync::Arc;

use api_auth_sdk::{TicketInfoSource, UserDirectory};
use vsp_security::{AuthScheme, AuthorizationContext, UserId};

use super::credential::AuthCredential;
use super::legacy::LegacyCredentialValidator;
use super::replay::ReplayGuard;
use super::ticket::TicketOwnershipAuthenticator;
use crate::config::ApiAuthConfig;

pub const INVALID_API_TOKEN: &str = "invalid api token";
pub const INVALID_TICKET_AUTH: &str = "invalid ticket auth";

/// Produces the single [`AuthorizationContext`] of a request.
///
/// Exactly one validator runs per request. Requests outside the path prefix,
/// and requests without a recognized scheme, are anonymous.
pub struct SchemeDispatcher {
    path_prefix: String,
    legacy: LegacyCredentialValidator,
    tickets: TicketOwnershipAuthenticator,
}

impl SchemeDispatcher {
    #[must_use]
    pub fn new(
        path_prefix: impl Into<String>,
        legacy: LegacyCredentialValidator,
        tickets: TicketOwnershipAuthenticator,
    ) -> Self {
        Self {
            path_prefix: path_prefix.into(),
            legacy,
            tickets,
        }
    }

    /// Wire both validators from configuration and the lookup collaborators.
    #[must_use]
    pub fn from_config(
        cfg: &ApiAuthConfig,
        tickets: Arc<dyn TicketInfoSource>,
        users: Arc<dyn UserDirectory>,
    ) -> Self {
        let legacy = LegacyCredentialValidator::new(
            cfg.static_token.clone(),
            UserId::new(cfg.static_token_user_id),
            cfg.token_secret.as_ref(),
            users,
        );
        let tickets = TicketOwnershipAuthenticator::new(
            tickets,
            ReplayGuard::new(cfg.replay_window_secs),
            cfg.network,
        );
        Self::new(cfg.path_prefix.clone(), legacy, tickets)
    }

    /// Whether requests to `path` are authenticated at all.
    ///
    /// The prefix matches whole path segments: `/api` covers `/api` and
    /// `/api/v3/voting` but not `/apis`.
    #[must_use]
    pub fn covers(&self, path: &str) -> bool {
        path.strip_prefix(self.path_prefix.trim_end_matches('/'))
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    }

    pub async fn dispatch(&self, path: &str, header: Option<&str>) -> AuthorizationContext {
        self.dispatch_at(path, header, chrono::Utc::now().timestamp())
            .await
    }

    /// [`Self::dispatch`] with an explicit clock, in seconds since epoch.
    pub async fn dispatch_at(
        &self,
        path: &str,
        header: Option<&str>,
        now: i64,
    ) -> AuthorizationContext {
        if !self.covers(path) {
            return AuthorizationContext::anonymous();
        }

        match AuthCredential::from_header(header) {
            AuthCredential::Bearer { token } => match self.legacy.validate(&token).await {
                Some((user_id, scheme)) => {
                    tracing::info!(
                        user_id = %user_id,
                        scheme = scheme.as_str(),
                        "mapped api auth header to user"
                    );
                    AuthorizationContext::for_user(user_id, scheme)
                }
                None => AuthorizationContext::denied(AuthScheme::Bearer, INVALID_API_TOKEN),
            },
            AuthCredential::TicketAuth(params) => match self.tickets.resolve(&params, now).await {
                Some(address) => {
                    tracing::info!(
                        multisig_address = %address,
                        ticket_hash = %params.ticket_hash,
                        "mapped api auth header to address"
                    );
                    AuthorizationContext::for_multisig_address(address)
                }
                None => AuthorizationContext::denied(AuthScheme::TicketAuth, INVALID_TICKET_AUTH),
            },
            AuthCredential::Unrecognized => {
                if header.is_some() {
                    tracing::debug!(path, "unrecognized authorization scheme");
                }
                AuthorizationContext::anonymous()
            }
        }
    }
}
