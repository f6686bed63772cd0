//! Random challenges handed out to clients.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use rand::TryRngCore;
use rand::rngs::OsRng;
use thiserror::Error;

pub const CHALLENGE_LEN: usize = 32;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChallengeError {
    #[error("secure random source failed: {0}")]
    RandomSource(String),
}

/// Source of cryptographically secure bytes, shared by all requests.
pub trait RandomSource: Send + Sync {
    /// # Errors
    ///
    /// Returns a description of the failure when `buf` could not be filled.
    fn fill(&self, buf: &mut [u8]) -> Result<(), String>;
}

/// The operating system's CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill(&self, buf: &mut [u8]) -> Result<(), String> {
        OsRng.try_fill_bytes(buf).map_err(|e| e.to_string())
    }
}

/// Issues base64url encoded challenges of [`CHALLENGE_LEN`] random bytes.
///
/// Challenges are not recorded anywhere.
pub struct ChallengeGenerator {
    source: Box<dyn RandomSource>,
}

impl Default for ChallengeGenerator {
    fn default() -> Self {
        Self::new(OsRandom)
    }
}

impl ChallengeGenerator {
    #[must_use]
    pub fn new(source: impl RandomSource + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    /// # Errors
    ///
    /// Returns `RandomSource` if the random source fails; a partially
    /// filled buffer is never handed out.
    pub fn issue(&self) -> Result<String, ChallengeError> {
        let mut bytes = [0u8; CHALLENGE_LEN];
        self.source
            .fill(&mut bytes)
            .map_err(ChallengeError::RandomSource)?;
        Ok(URL_SAFE.encode(bytes))
    }
}
