//! Ticket ownership proofs (`TicketAuth` scheme).

use std::sync::Arc;

use api_auth_sdk::{LookupError, TicketInfoSource};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::address::PubKeyHashAddress;
use super::credential::AuthCredential;
use super::error::AuthError;
use super::params::AuthParams;
use super::replay::ReplayGuard;
use super::signature::SignatureVerifier;
use crate::config::Network;

/// Resolves a `TicketAuth` credential to the ticket's multisig address.
///
/// The caller proves ownership by signing a fresh timestamp with the key
/// behind the ticket's fee address. Every failure is soft: it is logged and
/// the request stays unauthenticated.
pub struct TicketOwnershipAuthenticator {
    tickets: Arc<dyn TicketInfoSource>,
    replay_guard: ReplayGuard,
    verifier: SignatureVerifier,
    network: Network,
}

impl TicketOwnershipAuthenticator {
    #[must_use]
    pub fn new(tickets: Arc<dyn TicketInfoSource>, replay_guard: ReplayGuard, network: Network) -> Self {
        Self {
            tickets,
            replay_guard,
            verifier: SignatureVerifier,
            network,
        }
    }

    /// Authenticate a raw `Authorization` header value.
    ///
    /// Returns `None` both for headers of another scheme and for refused
    /// proofs.
    pub async fn authenticate(&self, header: &str) -> Option<String> {
        let AuthCredential::TicketAuth(params) = AuthCredential::from_header(Some(header)) else {
            return None;
        };
        self.resolve(&params, chrono::Utc::now().timestamp()).await
    }

    /// Like [`Self::authenticate`] for already parsed parameters, at time `now`.
    pub async fn resolve(&self, params: &AuthParams, now: i64) -> Option<String> {
        match self.verify(params, now).await {
            Ok(multisig_address) => Some(multisig_address),
            Err(err) => {
                log_refusal(&err, params);
                None
            }
        }
    }

    /// Run the ownership proof and report why it failed.
    ///
    /// # Errors
    ///
    /// Returns the first failing check as an [`AuthError`].
    pub async fn verify(&self, params: &AuthParams, now: i64) -> Result<String, AuthError> {
        if !params.is_complete() {
            return Err(AuthError::MissingParameters);
        }

        let signature = STANDARD
            .decode(&params.signature)
            .map_err(|e| AuthError::MalformedSignature(e.to_string()))?;

        self.replay_guard.check(&params.timestamp, now)?;

        let info = self
            .tickets
            .ticket_info(&params.ticket_hash)
            .await
            .map_err(|e| match e {
                LookupError::NotFound => {
                    AuthError::TicketLookupFailed(format!("ticket {} not found", params.ticket_hash))
                }
                LookupError::Unavailable(msg) | LookupError::Internal(msg) => {
                    AuthError::TicketLookupFailed(msg)
                }
            })?;

        // Stored fee addresses are trusted input.
        let fee_address = PubKeyHashAddress::decode(&info.owner_fee_address, self.network)
            .map_err(|e| {
                AuthError::Internal(format!(
                    "stored fee address {} for ticket {} is undecodable: {e}",
                    info.owner_fee_address, params.ticket_hash
                ))
            })?;

        match self
            .verifier
            .verify(&fee_address, &signature, &params.timestamp)
        {
            Ok(true) => Ok(info.multisig_address),
            Ok(false) => Err(AuthError::SignatureInvalid),
            Err(e) => Err(AuthError::MalformedSignature(e.to_string())),
        }
    }
}

fn log_refusal(err: &AuthError, params: &AuthParams) {
    if err.is_internal() {
        tracing::error!(error = %err, ticket_hash = %params.ticket_hash, "ticket auth failed");
    } else {
        tracing::warn!(
            error = %err,
            timestamp = %params.timestamp,
            signature = %params.signature,
            ticket_hash = %params.ticket_hash,
            "ticket auth refused"
        );
    }
}
