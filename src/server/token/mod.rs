//! Signed, expiring, purpose-scoped credentials.
//!
//! Five token kinds gate five distinct actions (API access, token refresh,
//! email verification, password change, team deletion). Every token carries a
//! literal `kind` discriminator in its claims, so a token minted for one
//! purpose is never accepted for another: verification checks the
//! discriminator, not just the signature.
//!
//! Encoding is deterministic — identical claims and secret always produce the
//! same compact string, which the idempotence tests rely on.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Errors from token encoding or verification.
///
/// `Expired` is only reported for tokens with a valid signature whose `exp`
/// has lapsed; everything else (bad signature, malformed token, kind
/// mismatch) is `Invalid`. Neither variant carries the secret or any claim
/// contents.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TokenError {
    /// Malformed token, bad signature, or kind discriminator mismatch.
    #[error("token is invalid")]
    Invalid,

    /// Valid signature, lapsed expiry.
    #[error("token is expired")]
    Expired,
}

/// The purpose a token was minted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    #[serde(rename = "ACCESS")]
    Access,
    #[serde(rename = "REFRESH")]
    Refresh,
    #[serde(rename = "REGISTRATION")]
    Registration,
    #[serde(rename = "CHANGE_PASSWORD")]
    ChangePassword,
    #[serde(rename = "DELETE_TEAM")]
    DeleteTeam,
}

/// Claims carried by every token.
///
/// `sub` is a user id for access/refresh/change-password tokens, a username
/// for registration tokens, and a team id for delete-team tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
    pub kind: TokenKind,
}

/// HS256 signer/verifier shared across the application.
///
/// Cheap to clone: the derived keys live behind an `Arc`.
#[derive(Clone)]
pub struct TokenCodec {
    keys: Arc<Keys>,
}

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenCodec {
    /// Creates a codec from the shared signing secret.
    pub fn new(secret: &str) -> Self {
        Self {
            keys: Arc::new(Keys {
                encoding: EncodingKey::from_secret(secret.as_bytes()),
                decoding: DecodingKey::from_secret(secret.as_bytes()),
            }),
        }
    }

    /// Mints a token of the given kind, expiring `ttl` from now.
    pub fn create(
        &self,
        kind: TokenKind,
        sub: impl Into<String>,
        ttl: chrono::Duration,
    ) -> Result<String, TokenError> {
        let claims = Claims {
            sub: sub.into(),
            exp: (Utc::now() + ttl).timestamp(),
            kind,
        };
        self.encode(&claims)
    }

    /// Encodes pre-built claims. Deterministic for fixed claims and secret.
    pub fn encode(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.keys.encoding)
            .map_err(|_| TokenError::Invalid)
    }

    /// Verifies a token and checks its kind discriminator.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Signature valid, not expired, kind matches
    /// - `Err(TokenError::Expired)` - Signature valid but `exp` lapsed
    /// - `Err(TokenError::Invalid)` - Anything else, including kind mismatch
    pub fn verify(&self, token: &str, expected_kind: TokenKind) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // `sub` is required by our claims struct; no audience/issuer in play.
        validation.required_spec_claims.clear();

        let data = decode::<Claims>(token, &self.keys.decoding, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            }
        })?;

        if data.claims.kind != expected_kind {
            return Err(TokenError::Invalid);
        }

        Ok(data.claims)
    }

    /// Verifies signature and kind while ignoring expiry.
    ///
    /// Token rotation needs the subject of an access token that has already
    /// lapsed, to check it against the refresh token's subject.
    pub fn verify_ignoring_expiry(
        &self,
        token: &str,
        expected_kind: TokenKind,
    ) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let data = decode::<Claims>(token, &self.keys.decoding, &validation)
            .map_err(|_| TokenError::Invalid)?;

        if data.claims.kind != expected_kind {
            return Err(TokenError::Invalid);
        }

        Ok(data.claims)
    }
}
