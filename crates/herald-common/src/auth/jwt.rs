//! JWT utilities for authenticating RPC callers
//!
//! Provides token encoding, decoding, and validation using the
//! `jsonwebtoken` crate. Tokens carry the authorization claims mirrored by
//! the sanction engine; those claims are only a fallback when the stored
//! role cannot be read.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Display name of the caller
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Email of the caller, checked against the admin allowlist fallback
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Role string mirrored from the stored record at issue time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Admin custom claim
    #[serde(default)]
    pub admin: bool,
    /// Moderator custom claim
    #[serde(default)]
    pub moderator: bool,
    /// Banned custom claim
    #[serde(default)]
    pub banned: bool,
}

impl Claims {
    /// Check if the token is expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }
}

/// JWT service for encoding and decoding caller tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_expiry: i64,
}

impl JwtService {
    /// Create a new JWT service with the given secret and expiry seconds
    #[must_use]
    pub fn new(secret: &str, token_expiry: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            token_expiry,
        }
    }

    /// Issue a token for a caller
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue(&self, claims: &CallerClaims) -> Result<String, AppError> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.token_expiry);

        let claims = Claims {
            sub: claims.user_id.clone(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
            name: claims.name.clone(),
            email: claims.email.clone(),
            role: claims.role.clone(),
            admin: claims.admin,
            moderator: claims.moderator,
            banned: claims.banned,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Token encoding failed: {e}")))
    }

    /// Validate a token and return its claims
    ///
    /// # Errors
    /// Returns `AppError::InvalidToken` if the token is malformed or expired
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| AppError::InvalidToken)
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("token_expiry", &self.token_expiry)
            .finish()
    }
}

/// Input for issuing a caller token
#[derive(Debug, Clone, Default)]
pub struct CallerClaims {
    pub user_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub admin: bool,
    pub moderator: bool,
    pub banned: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> JwtService {
        JwtService::new("test-secret-at-least-32-characters", 3600)
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let svc = service();
        let token = svc
            .issue(&CallerClaims {
                user_id: "u1".to_string(),
                name: Some("tester".to_string()),
                email: Some("tester@example.com".to_string()),
                role: Some("moderator".to_string()),
                moderator: true,
                ..CallerClaims::default()
            })
            .unwrap();

        let claims = svc.verify(&token).unwrap();
        assert_eq!(claims.sub, "u1");
        assert_eq!(claims.role.as_deref(), Some("moderator"));
        assert!(claims.moderator);
        assert!(!claims.admin);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let svc = service();
        assert!(matches!(
            svc.verify("not-a-token"),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let token = service()
            .issue(&CallerClaims {
                user_id: "u1".to_string(),
                ..CallerClaims::default()
            })
            .unwrap();

        let other = JwtService::new("a-completely-different-secret-key", 3600);
        assert!(other.verify(&token).is_err());
    }
}
