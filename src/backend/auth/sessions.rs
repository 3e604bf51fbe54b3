/**
 * Session Tokens
 *
 * HS256 JWTs signed with the key from `AppConfig::jwt_secret`. The `aud`
 * claim carries the principal kind ("admin" or "collaborator") and
 * verification pins the expected audience, so an admin token is rejected on
 * collaborator routes and vice versa.
 */

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::shared::{AppConfig, PrincipalKind};

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Principal ID
    pub sub: String,
    /// Email
    pub email: String,
    /// Principal kind the token was issued for
    pub aud: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

impl Claims {
    /// Parse the subject back into a principal id
    pub fn subject_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

/// Token issuance failures
#[derive(Debug, Error)]
pub enum TokenError {
    /// The validity window does not fit the clock range
    #[error("Token lifetime of {0} hours is out of range")]
    TtlOutOfRange(i64),

    #[error(transparent)]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

/// Issues and verifies tokens with an injected signing key
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_hours: i64,
}

impl TokenService {
    pub fn new(secret: &str, ttl_hours: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_hours,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.jwt_secret, config.token_ttl_hours)
    }

    /// Create a token for a principal
    ///
    /// # Arguments
    /// * `kind` - Principal kind, becomes the audience
    /// * `subject` - Principal ID
    /// * `email` - Principal email
    pub fn issue(
        &self,
        kind: PrincipalKind,
        subject: Uuid,
        email: &str,
    ) -> Result<String, TokenError> {
        let now = Utc::now();
        let expires = TimeDelta::try_hours(self.ttl_hours)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or(TokenError::TtlOutOfRange(self.ttl_hours))?;
        let claims = Claims {
            sub: subject.to_string(),
            email: email.to_string(),
            aud: kind.as_str().to_string(),
            exp: expires.timestamp().max(0) as u64,
            iat: now.timestamp().max(0) as u64,
        };
        Ok(self.sign(&claims)?)
    }

    fn sign(&self, claims: &Claims) -> Result<String, jsonwebtoken::errors::Error> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
    }

    /// Verify signature, expiry and audience
    pub fn verify(&self, kind: PrincipalKind, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[kind.as_str()]);
        validation.set_required_spec_claims(&["exp", "sub", "aud"]);

        let token_data = decode::<Claims>(token, &self.decoding, &validation)?;
        Ok(token_data.claims)
    }
}

/// Extract the token from an `Authorization` header value.
///
/// Accepts both `Bearer <token>` and a bare `<token>`. A `Bearer` scheme
/// with nothing after it yields `None`.
pub fn token_from_header(value: &str) -> Option<&str> {
    let value = value.trim_start();
    let token = match value.get(..BEARER.len()) {
        Some(scheme) if scheme.eq_ignore_ascii_case(BEARER) => {
            let rest = &value[BEARER.len()..];
            if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
                // a bare token that happens to start with "bearer"
                value.trim_end()
            } else {
                rest.trim()
            }
        }
        _ => {
            let value = value.trim_end();
            if value.contains(char::is_whitespace) {
                return None;
            }
            value
        }
    };
    (!token.is_empty()).then_some(token)
}

const BEARER: &str = "bearer";
