use serde::{Deserialize, Serialize};

use crate::identity::{AuthScheme, Identity, UserId};

/// `AuthorizationContext` is the outcome of authenticating one request.
///
/// Built once by the scheme dispatcher and passed read-only through the rest
/// of request handling. A context holds at most one identity, so a request
/// can never carry both a user id and an address. A context without an
/// identity is unauthenticated, optionally with the generic reason a
/// recognized credential was refused.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuthorizationContext {
    identity: Option<Identity>,
    scheme: Option<AuthScheme>,
    failure_reason: Option<String>,
}

impl AuthorizationContext {
    /// Context for a request that presented no recognized credential.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Context for a request whose credential resolved to a stored user.
    #[must_use]
    pub fn for_user(user_id: UserId, scheme: AuthScheme) -> Self {
        Self {
            identity: Some(Identity::User(user_id)),
            scheme: Some(scheme),
            failure_reason: None,
        }
    }

    /// Context for a request that proved ownership of a ticket.
    #[must_use]
    pub fn for_multisig_address(address: impl Into<String>) -> Self {
        Self {
            identity: Some(Identity::MultiSigAddress(address.into())),
            scheme: Some(AuthScheme::TicketAuth),
            failure_reason: None,
        }
    }

    /// Context for a request whose recognized credential was refused.
    #[must_use]
    pub fn denied(scheme: AuthScheme, reason: impl Into<String>) -> Self {
        Self {
            identity: None,
            scheme: Some(scheme),
            failure_reason: Some(reason.into()),
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    #[must_use]
    pub fn resolved_user_id(&self) -> Option<UserId> {
        match self.identity {
            Some(Identity::User(id)) => Some(id),
            _ => None,
        }
    }

    #[must_use]
    pub fn resolved_address(&self) -> Option<&str> {
        match &self.identity {
            Some(Identity::MultiSigAddress(addr)) => Some(addr),
            _ => None,
        }
    }

    /// Scheme that was attempted, if the header carried a recognized one.
    #[must_use]
    pub fn scheme(&self) -> Option<AuthScheme> {
        self.scheme
    }

    #[must_use]
    pub fn failure_reason(&self) -> Option<&str> {
        self.failure_reason.as_deref()
    }
}
