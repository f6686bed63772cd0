//! Pay-to-pubkey-hash address codec.
//!
//! Layout: `base58check(network_id[2] || hash160(pubkey)[20])` with the usual
//! 4-byte double-SHA-256 checksum.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::config::Network;

pub const HASH160_LEN: usize = 20;
const NET_ID_LEN: usize = 2;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("invalid base58check encoding: {0}")]
    Encoding(String),

    #[error("unexpected address payload length {0}")]
    Length(usize),

    #[error("address network id {found:02x?} does not match {expected:02x?}")]
    WrongNetwork { expected: [u8; 2], found: [u8; 2] },
}

/// A decoded pay-to-pubkey-hash address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PubKeyHashAddress {
    network: Network,
    hash: [u8; HASH160_LEN],
}

impl PubKeyHashAddress {
    #[must_use]
    pub fn from_pubkey(network: Network, pubkey: &[u8]) -> Self {
        Self {
            network,
            hash: hash160(pubkey),
        }
    }

    /// Decode an address string for `network`.
    ///
    /// # Errors
    ///
    /// Fails on bad base58, a checksum mismatch, a wrong payload length or
    /// a prefix that belongs to another network or address type.
    pub fn decode(encoded: &str, network: Network) -> Result<Self, AddressError> {
        let payload = bs58::decode(encoded)
            .with_check(None)
            .into_vec()
            .map_err(|e| AddressError::Encoding(e.to_string()))?;

        if payload.len() != NET_ID_LEN + HASH160_LEN {
            return Err(AddressError::Length(payload.len()));
        }

        let (net_id, hash_bytes) = payload.split_at(NET_ID_LEN);
        let expected = network.p2pkh_id();
        if net_id != expected {
            return Err(AddressError::WrongNetwork {
                expected,
                found: [net_id[0], net_id[1]],
            });
        }

        let mut hash = [0u8; HASH160_LEN];
        hash.copy_from_slice(hash_bytes);
        Ok(Self { network, hash })
    }

    #[must_use]
    pub fn encode(&self) -> String {
        let mut payload = Vec::with_capacity(NET_ID_LEN + HASH160_LEN);
        payload.extend_from_slice(&self.network.p2pkh_id());
        payload.extend_from_slice(&self.hash);
        bs58::encode(payload).with_check().into_string()
    }

    #[must_use]
    pub fn pubkey_hash(&self) -> &[u8; HASH160_LEN] {
        &self.hash
    }
}

/// `RIPEMD160(SHA256(data))`.
#[must_use]
pub fn hash160(data: &[u8]) -> [u8; HASH160_LEN] {
    let digest = Ripemd160::digest(Sha256::digest(data));
    let mut out = [0u8; HASH160_LEN];
    out.copy_from_slice(&digest);
    out
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn sample() -> PubKeyHashAddress {
        PubKeyHashAddress::from_pubkey(Network::Mainnet, b"not really a public key")
    }

    #[test]
    fn encode_then_decode_preserves_hash() {
        let addr = sample();
        let decoded = PubKeyHashAddress::decode(&addr.encode(), Network::Mainnet).unwrap();

        assert_eq!(decoded, addr);
    }

    #[test]
    fn mainnet_addresses_start_with_ds() {
        assert!(sample().encode().starts_with("Ds"));
    }

    #[test]
    fn rejects_address_from_other_network() {
        let encoded = sample().encode();

        let err = PubKeyHashAddress::decode(&encoded, Network::Testnet).unwrap_err();
        assert_eq!(err, AddressError::WrongNetwork {
            expected: [0x0f, 0x21],
            found: [0x07, 0x3f],
        });
    }

    #[test]
    fn rejects_corrupted_checksum() {
        let mut encoded = sample().encode();
        let last = encoded.pop().unwrap();
        encoded.push(if last == '1' { '2' } else { '1' });

        assert!(matches!(
            PubKeyHashAddress::decode(&encoded, Network::Mainnet),
            Err(AddressError::Encoding(_))
        ));
    }

    #[test]
    fn rejects_non_base58_input() {
        assert!(matches!(
            PubKeyHashAddress::decode("0OIl", Network::Mainnet),
            Err(AddressError::Encoding(_))
        ));
    }

    #[test]
    fn rejects_wrong_payload_length() {
        let short = bs58::encode([0x07, 0x3f, 0x01]).with_check().into_string();

        assert_eq!(
            PubKeyHashAddress::decode(&short, Network::Mainnet).unwrap_err(),
            AddressError::Length(3)
        );
    }
}
