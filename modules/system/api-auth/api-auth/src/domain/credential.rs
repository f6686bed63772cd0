//! `Authorization` header classification.

use super::params::{AuthParams, parse_auth_params};

pub const BEARER_PREFIX: &str = "Bearer ";
pub const TICKET_AUTH_PREFIX: &str = "TicketAuth ";

/// Credential carried by one request, decided once from the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthCredential {
    /// `Bearer <token>`: static token or signed claims token.
    Bearer { token: String },
    /// `TicketAuth <params>`; parameters may still be incomplete.
    TicketAuth(AuthParams),
    /// Absent header or a scheme this gateway does not speak.
    Unrecognized,
}

impl AuthCredential {
    #[must_use]
    pub fn from_header(header: Option<&str>) -> Self {
        let Some(header) = header else {
            return Self::Unrecognized;
        };

        if let Some(token) = header.strip_prefix(BEARER_PREFIX) {
            return Self::Bearer {
                token: token.trim().to_owned(),
            };
        }
        if let Some(params) = header.strip_prefix(TICKET_AUTH_PREFIX) {
            return Self::TicketAuth(parse_auth_params(params));
        }
        Self::Unrecognized
    }
}
