/**
 * Password Hashing
 *
 * Salted bcrypt hashes for stored credentials. Each call to `hash` draws a
 * fresh salt; `verify` re-derives the hash under the salt and cost embedded
 * in the stored string and compares in constant time.
 *
 * bcrypt only reads the first 72 bytes of its input, so longer passwords are
 * refused instead of being silently truncated.
 */

use std::sync::Arc;
use thiserror::Error;

/// Longest password bcrypt accepts without truncation
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Password hashing failures
#[derive(Debug, Error)]
pub enum HashError {
    /// Input longer than [`MAX_PASSWORD_BYTES`]
    #[error("password exceeds {MAX_PASSWORD_BYTES} bytes")]
    TooLong,

    /// bcrypt failed (bad cost, malformed stored hash, entropy failure)
    #[error("bcrypt failure: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
}

/// bcrypt hasher with a fixed cost
///
/// Cheap to clone; clones share the precomputed dummy hash.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
    dummy_hash: Arc<str>,
}

impl PasswordHasher {
    /// Create a hasher at `cost`
    ///
    /// Fails if bcrypt rejects the cost (valid range is 4..=31).
    pub fn new(cost: u32) -> Result<Self, HashError> {
        let dummy_hash = bcrypt::hash("snippet-organizer-dummy", cost)?;
        Ok(Self {
            cost,
            dummy_hash: dummy_hash.into(),
        })
    }

    /// The bcrypt cost factor in use
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash `plaintext` with a fresh random salt
    pub fn hash(&self, plaintext: &str) -> Result<String, HashError> {
        if plaintext.len() > MAX_PASSWORD_BYTES {
            return Err(HashError::TooLong);
        }
        Ok(bcrypt::hash(plaintext, self.cost)?)
    }

    /// Check `plaintext` against a stored hash
    ///
    /// A mismatch is `Ok(false)`. Only a malformed stored hash is an error.
    pub fn verify(&self, plaintext: &str, hashed: &str) -> Result<bool, HashError> {
        if plaintext.len() > MAX_PASSWORD_BYTES {
            // Nothing this long was ever hashed; spend the same work and fail.
            self.verify_dummy(plaintext);
            return Ok(false);
        }
        Ok(bcrypt::verify(plaintext, hashed)?)
    }

    /// Run one verification against an internal hash and discard the result
    ///
    /// Login calls this when the username is unknown so both paths cost one
    /// bcrypt verification.
    pub fn verify_dummy(&self, plaintext: &str) {
        let input = if plaintext.len() > MAX_PASSWORD_BYTES { "" } else { plaintext };
        let _ = bcrypt::verify(input, &self.dummy_hash);
    }
}
