#![allow(clippy::unwrap_used, clippy::expect_used, clippy::missing_panics_doc)]
//! Helpers for producing credentials and collaborators in tests.

use std::collections::HashMap;

use api_auth_sdk::{LookupError, TicketInfo, User, UserDirectory};
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use k256::ecdsa::SigningKey;
use vsp_security::UserId;

use crate::config::Network;
use crate::domain::address::PubKeyHashAddress;
use crate::domain::signature::message_digest;

/// Deterministic secp256k1 key that signs messages the way wallets do.
pub struct TestSigner {
    key: SigningKey,
    compressed: bool,
}

impl TestSigner {
    /// Key whose scalar is `seed` repeated 32 times. `seed` must be in `1..=0x7f`.
    #[must_use]
    pub fn from_seed(seed: u8) -> Self {
        let key = SigningKey::from_slice(&[seed; 32]).expect("seed yields a valid scalar");
        Self {
            key,
            compressed: true,
        }
    }

    /// Same key, but addresses and signatures use the uncompressed encoding.
    #[must_use]
    pub fn uncompressed(self) -> Self {
        Self {
            compressed: false,
            ..self
        }
    }

    #[must_use]
    pub fn p2pkh(&self, network: Network) -> PubKeyHashAddress {
        let point = self.key.verifying_key().to_encoded_point(self.compressed);
        PubKeyHashAddress::from_pubkey(network, point.as_bytes())
    }

    #[must_use]
    pub fn address(&self, network: Network) -> String {
        self.p2pkh(network).encode()
    }

    /// 65-byte compact signature over `message`.
    #[must_use]
    pub fn sign(&self, message: &str) -> Vec<u8> {
        let digest = message_digest(message);
        let (sig, recid) = self
            .key
            .sign_prehash_recoverable(&digest)
            .expect("signing a 32-byte digest succeeds");

        let mut header = 27 + recid.to_byte();
        if self.compressed {
            header += 4;
        }

        let mut out = Vec::with_capacity(65);
        out.push(header);
        out.extend_from_slice(&sig.to_bytes());
        out
    }

    #[must_use]
    pub fn sign_base64(&self, message: &str) -> String {
        STANDARD.encode(self.sign(message))
    }
}

/// `Authorization` header value for a ticket auth request.
#[must_use]
pub fn ticket_auth_header(timestamp: &str, signature_b64: &str, ticket_hash: &str) -> String {
    format!("TicketAuth SignedTimestamp={timestamp},Signature={signature_b64},TicketHash={ticket_hash}")
}

/// HMAC-signed claims token over `claims`.
#[must_use]
pub fn sign_claims(secret: &str, alg: Algorithm, claims: &serde_json::Value) -> String {
    jsonwebtoken::encode(
        &Header::new(alg),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("claims encode")
}

/// Ticket fixture owned by `signer`.
#[must_use]
pub fn ticket_for(signer: &TestSigner, network: Network, multisig_address: &str) -> TicketInfo {
    TicketInfo {
        owner_fee_address: signer.address(network),
        multisig_address: multisig_address.to_owned(),
    }
}

/// Fixed set of users for validator tests.
#[derive(Debug, Default)]
pub struct UserFixture {
    users: HashMap<UserId, User>,
}

impl UserFixture {
    #[must_use]
    pub fn new(users: impl IntoIterator<Item = (UserId, Option<String>)>) -> Self {
        let users = users
            .into_iter()
            .map(|(id, multisig_address)| {
                (
                    id,
                    User {
                        id,
                        multisig_address,
                        vote_bits: 1,
                    },
                )
            })
            .collect();
        Self { users }
    }
}

#[async_trait]
impl UserDirectory for UserFixture {
    async fn find_by_id(&self, id: UserId) -> Result<User, LookupError> {
        self.users.get(&id).cloned().ok_or(LookupError::NotFound)
    }

    async fn find_by_multisig_address(&self, address: &str) -> Result<User, LookupError> {
        self.users
            .values()
            .find(|u| u.multisig_address.as_deref() == Some(address))
            .cloned()
            .ok_or(LookupError::NotFound)
    }
}
