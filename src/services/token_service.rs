//! JWT verification and issuance.
//!
//! Tokens are minted by an external identity provider sharing the HMAC secret;
//! `issue` exists for operators and tests.

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use log::debug;

use crate::errors::ApiError;
use crate::models::{Claims, Role};

/// Holds the HS256 keys for one secret.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    expiration_hours: i64,
}

impl TokenService {
    pub fn new(secret: &str, expiration_hours: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            expiration_hours,
        }
    }

    /// Generate a signed token for `subject` carrying `role`.
    pub fn issue(&self, subject: &str, role: Role) -> Result<String, ApiError> {
        let now = Utc::now().timestamp().max(0) as usize;
        let exp = now + (self.expiration_hours.max(0) as usize * 3600);

        let claims = Claims {
            sub: subject.to_string(),
            role: role.to_string(),
            exp,
            iat: now,
        };

        debug!("Generated token for {} with role {}", subject, role);

        Ok(encode(&Header::default(), &claims, &self.encoding)?)
    }

    /// Check signature and expiry, returning the claims.
    pub fn verify(&self, token: &str) -> Result<Claims, ApiError> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())?;
        Ok(data.claims)
    }
}
