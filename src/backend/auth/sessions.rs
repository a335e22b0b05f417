/**
 * Session Management and JWT Tokens
 *
 * Issues and validates HS256 bearer tokens that bind a request to a user ID.
 * Tokens are stateless: nothing is stored server-side and a token stays
 * valid until its `exp` passes.
 *
 * The accepted algorithm is pinned to HS256. A token whose header names any
 * other algorithm is rejected, whatever its signature.
 */

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::backend::server::config::ConfigError;

/// Signing algorithm for every token this service issues or accepts
pub const TOKEN_ALGORITHM: Algorithm = Algorithm::HS256;

/// Shortest accepted signing secret, in bytes
pub const MIN_SECRET_BYTES: usize = 32;

/// Longest accepted token lifetime (one year)
pub const MAX_TOKEN_TTL_SECS: i64 = 365 * 24 * 60 * 60;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub user_id: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Why a token was rejected
///
/// Only logged; callers of the HTTP API see a single "invalid token" outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    /// Not three base64url segments of JSON, or missing claims
    Malformed,
    /// Signature does not match the payload under our key
    BadSignature,
    /// `exp` is not in the future
    Expired,
    /// Header names an algorithm other than HS256
    WrongAlgorithm,
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::Malformed => "malformed",
            Self::BadSignature => "bad signature",
            Self::Expired => "expired",
            Self::WrongAlgorithm => "unexpected algorithm",
        };
        f.write_str(reason)
    }
}

/// Token issuance/validation failures
#[derive(Debug, Error)]
pub enum TokenError {
    /// Signing a new token failed
    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),

    /// A presented token was rejected
    #[error("invalid token: {0}")]
    Invalid(InvalidReason),

    /// `issued_at + ttl` is not a representable time
    #[error("token expiry out of range")]
    ExpiryOutOfRange,
}

impl TokenError {
    /// The rejection reason, if this is a validation failure
    pub fn invalid_reason(&self) -> Option<InvalidReason> {
        match self {
            Self::Invalid(reason) => Some(*reason),
            Self::Signing(_) | Self::ExpiryOutOfRange => None,
        }
    }
}

impl From<jsonwebtoken::errors::Error> for InvalidReason {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::InvalidSignature => Self::BadSignature,
            ErrorKind::ExpiredSignature => Self::Expired,
            ErrorKind::InvalidAlgorithm
            | ErrorKind::InvalidAlgorithmName
            | ErrorKind::MissingAlgorithm => Self::WrongAlgorithm,
            _ => Self::Malformed,
        }
    }
}

/// Issues and validates session tokens
///
/// Holds the process-wide signing key. Read-only after construction, so one
/// instance is shared by every request behind an `Arc` without locking.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("algorithm", &TOKEN_ALGORITHM)
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl TokenService {
    /// Create a token service
    ///
    /// # Arguments
    /// * `secret` - HMAC signing secret, at least [`MIN_SECRET_BYTES`] long
    /// * `ttl` - lifetime of every issued token
    ///
    /// # Errors
    /// A short secret, or a TTL that is not positive or exceeds
    /// [`MAX_TOKEN_TTL_SECS`], is a startup misconfiguration.
    pub fn new(secret: &[u8], ttl: Duration) -> Result<Self, ConfigError> {
        if secret.len() < MIN_SECRET_BYTES {
            return Err(ConfigError::WeakSecret {
                min: MIN_SECRET_BYTES,
            });
        }
        if ttl <= Duration::zero() || ttl.num_seconds() > MAX_TOKEN_TTL_SECS {
            return Err(ConfigError::InvalidValue {
                name: "TOKEN_TTL_SECS",
                reason: format!("must be between 1 and {}", MAX_TOKEN_TTL_SECS),
            });
        }

        let mut validation = Validation::new(TOKEN_ALGORITHM);
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp"]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
        })
    }

    /// Lifetime of issued tokens
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a token for `user_id` expiring `ttl` from now
    pub fn issue(&self, user_id: i64) -> Result<String, TokenError> {
        self.issue_at(user_id, Utc::now())
    }

    /// Issue a token as if it had been created at `issued_at`
    pub fn issue_at(&self, user_id: i64, issued_at: DateTime<Utc>) -> Result<String, TokenError> {
        let expires_at = issued_at
            .checked_add_signed(self.ttl)
            .ok_or(TokenError::ExpiryOutOfRange)?;
        let claims = Claims {
            user_id,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(&Header::new(TOKEN_ALGORITHM), &claims, &self.encoding_key)
            .map_err(TokenError::Signing)
    }

    /// Verify and decode a token
    ///
    /// Checks the signature under the pinned algorithm, then requires
    /// `exp > now`.
    pub fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| TokenError::Invalid(e.into()))?;

        let claims = token_data.claims;
        if claims.exp <= Utc::now().timestamp() {
            return Err(TokenError::Invalid(InvalidReason::Expired));
        }

        Ok(claims)
    }
}
