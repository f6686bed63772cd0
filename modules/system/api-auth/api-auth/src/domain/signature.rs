//! Detached message signature verification.
//!
//! Signatures are 65-byte compact recoverable secp256k1 signatures
//! (`header || r || s`, header `27 + recid`, plus 4 when the signing key is
//! compressed) over
//! `SHA256(SHA256(varstr(SIGNED_MESSAGE_MAGIC) || varstr(message)))`.
//! The public key is recovered from the signature and hashed back into a
//! pubkey hash, which must equal the hash inside the claimed address.

use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};
use sha2::{Digest, Sha256};
use thiserror::Error;

use super::address::{PubKeyHashAddress, hash160};

pub const SIGNED_MESSAGE_MAGIC: &str = "Decred Signed Message:\n";
pub const COMPACT_SIGNATURE_LEN: usize = 65;

const COMPACT_HEADER_BASE: u8 = 27;
const COMPACT_HEADER_MAX: u8 = COMPACT_HEADER_BASE + 7;
const COMPRESSED_FLAG: u8 = 4;

/// Signature bytes that cannot be a compact signature at all.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SignatureError {
    #[error("compact signature must be {COMPACT_SIGNATURE_LEN} bytes, got {0}")]
    Length(usize),

    #[error("invalid compact signature header byte {0}")]
    Header(u8),
}

/// Verifies signed messages against pay-to-pubkey-hash addresses.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignatureVerifier;

impl SignatureVerifier {
    /// Check that `signature` over `message` was made by the key behind `address`.
    ///
    /// Returns `Ok(false)` when the signature is well formed but does not
    /// recover to the address.
    ///
    /// # Errors
    ///
    /// Returns `SignatureError` when the bytes are not a compact signature.
    pub fn verify(
        &self,
        address: &PubKeyHashAddress,
        signature: &[u8],
        message: &str,
    ) -> Result<bool, SignatureError> {
        if signature.len() != COMPACT_SIGNATURE_LEN {
            return Err(SignatureError::Length(signature.len()));
        }

        let header = signature[0];
        if !(COMPACT_HEADER_BASE..=COMPACT_HEADER_MAX).contains(&header) {
            return Err(SignatureError::Header(header));
        }
        let flags = header - COMPACT_HEADER_BASE;
        let compressed = flags & COMPRESSED_FLAG != 0;
        let Some(recovery_id) = RecoveryId::from_byte(flags & 0b11) else {
            return Err(SignatureError::Header(header));
        };

        let Ok(sig) = Signature::from_slice(&signature[1..]) else {
            return Ok(false);
        };

        let digest = message_digest(message);
        let Ok(key) = VerifyingKey::recover_from_prehash(&digest, &sig, recovery_id) else {
            return Ok(false);
        };

        let point = key.to_encoded_point(compressed);
        Ok(&hash160(point.as_bytes()) == address.pubkey_hash())
    }
}

/// Digest that is actually signed for `message`.
#[must_use]
pub fn message_digest(message: &str) -> [u8; 32] {
    let mut buf = Vec::with_capacity(SIGNED_MESSAGE_MAGIC.len() + message.len() + 10);
    write_var_bytes(&mut buf, SIGNED_MESSAGE_MAGIC.as_bytes());
    write_var_bytes(&mut buf, message.as_bytes());

    let second = Sha256::digest(Sha256::digest(&buf));
    let mut out = [0u8; 32];
    out.copy_from_slice(&second);
    out
}

fn write_var_bytes(buf: &mut Vec<u8>, bytes: &[u8]) {
    write_var_int(buf, bytes.len());
    buf.extend_from_slice(bytes);
}

fn write_var_int(buf: &mut Vec<u8>, n: usize) {
    if let Ok(small) = u8::try_from(n)
        && small < 0xfd
    {
        buf.push(small);
    } else if let Ok(v) = u16::try_from(n) {
        buf.push(0xfd);
        buf.extend_from_slice(&v.to_le_bytes());
    } else if let Ok(v) = u32::try_from(n) {
        buf.push(0xfe);
        buf.extend_from_slice(&v.to_le_bytes());
    } else {
        buf.push(0xff);
        buf.extend_from_slice(&u64::try_from(n).unwrap_or(u64::MAX).to_le_bytes());
    }
}
