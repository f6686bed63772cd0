use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric identifier of a registered pool user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Credential scheme that produced a resolved identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthScheme {
    /// `Bearer <token>` that matched neither token form.
    Bearer,
    /// `Bearer <token>` matching the pre-shared static token.
    StaticToken,
    /// `Bearer <token>` carrying an HMAC-signed claims token.
    SignedClaims,
    /// `TicketAuth SignedTimestamp=..,Signature=..,TicketHash=..`.
    TicketAuth,
}

impl AuthScheme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bearer => "bearer",
            Self::StaticToken => "static_token",
            Self::SignedClaims => "signed_claims",
            Self::TicketAuth => "ticket_auth",
        }
    }
}

/// The single identity a request was resolved to.
///
/// Bearer credentials resolve to a user id; ticket ownership proofs resolve
/// to the ticket's multisig voting address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Identity {
    User(UserId),
    MultiSigAddress(String),
}
