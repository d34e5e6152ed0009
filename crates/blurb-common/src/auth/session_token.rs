//! Session cookie codec
//!
//! The cookie value is a signed JWT whose `sid` claim carries the opaque
//! session id. The session record itself lives in a `SessionStore`.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Claims carried by the session cookie
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Opaque session id
    pub sid: String,
    pub iat: i64,
    pub exp: i64,
}

impl SessionClaims {
    /// True once half of the token's lifetime has passed
    #[must_use]
    pub fn needs_refresh(&self) -> bool {
        let lifetime = self.exp - self.iat;
        Utc::now().timestamp() - self.iat >= lifetime / 2
    }
}

/// Signs and verifies session cookies (HS256)
#[derive(Clone)]
pub struct SessionTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_secs: i64,
}

impl SessionTokenService {
    #[must_use]
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs,
        }
    }

    /// Sign a cookie value for the given session id
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn encode(&self, session_id: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = SessionClaims {
            sid: session_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.ttl_secs)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode session token")))
    }

    /// Verify a cookie value and return its claims
    ///
    /// # Errors
    /// Returns an error if the signature is wrong or the token has expired
    pub fn decode(&self, token: &str) -> Result<SessionClaims, AppError> {
        let token_data = decode::<SessionClaims>(token, &self.decoding_key, &Validation::default())
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            })?;

        Ok(token_data.claims)
    }

    /// Verify a cookie value's signature, accepting it even past `exp`
    ///
    /// Used to renew the cookie of a session the store still holds.
    pub fn decode_expired(&self, token: &str) -> Result<SessionClaims, AppError> {
        let mut validation = Validation::default();
        validation.validate_exp = false;

        decode::<SessionClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|_| AppError::InvalidToken)
    }
}

impl std::fmt::Debug for SessionTokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionTokenService")
            .field("ttl_secs", &self.ttl_secs)
            .finish_non_exhaustive()
    }
}
