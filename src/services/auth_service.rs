use crate::utils::error::{AppError, AppResult};
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const TOKEN_COOKIE: &str = "token";
pub const TOKEN_TTL_SECS: i64 = 60 * 60;

/// Decoded session token: the login payload plus issue/expiry timestamps.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SessionClaims {
    pub iat: i64,
    pub exp: i64,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

/// Signs and verifies HS256 session tokens with the server-held secret.
#[derive(Clone)]
pub struct SessionTokens {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_secs: i64,
}

impl SessionTokens {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs: TOKEN_TTL_SECS,
        }
    }

    pub fn issue(&self, payload: &Value) -> AppResult<String> {
        self.issue_at(payload, Utc::now().timestamp())
    }

    /// The payload must be a JSON object; `iat`/`exp` in it are overwritten.
    pub fn issue_at(&self, payload: &Value, now: i64) -> AppResult<String> {
        let payload = payload
            .as_object()
            .ok_or_else(|| AppError::Validation("Token payload must be a JSON object".to_string()))?;

        let mut payload = payload.clone();
        payload.remove("iat");
        payload.remove("exp");

        let claims = SessionClaims {
            iat: now,
            exp: now + self.ttl_secs,
            payload,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to sign session token: {}", e)))
    }

    pub fn verify(&self, token: &str) -> AppResult<SessionClaims> {
        self.verify_at(token, Utc::now().timestamp())
    }

    /// Checks the signature, then expiry against `now` with no leeway.
    pub fn verify_at(&self, token: &str, now: i64) -> AppResult<SessionClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_aud = false;

        let claims = decode::<SessionClaims>(token, &self.decoding_key, &validation)?.claims;

        if now >= claims.exp {
            return Err(AppError::Auth("Session token expired".to_string()));
        }
        Ok(claims)
    }
}
