//! Bearer-token authentication guard with refresh rotation.
//!
//! Guarded handlers take an [`AuthClient`] argument; extraction fails the
//! request with the matching coded error before the handler body runs.
//!
//! The rotation path is the unusual part: an expired access token alongside
//! a valid refresh cookie does not fail the request outright but "fails" it
//! with `UpdateTokens` — a 401 carrying a fresh access token in the body and
//! a fresh refresh cookie, after which the client retries the original call.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::server::{
    error::{
        api::{ApiError, REFRESH_TOKEN_COOKIE},
        AppError,
    },
    middleware::cookie_value,
    state::AppState,
    token::{TokenError, TokenKind},
};

/// The authenticated caller, extracted from the Authorization header.
pub struct AuthClient {
    pub user_id: String,
}

impl FromRequestParts<AppState> for AuthClient {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(ApiError::AuthorizationHeaderMissing)?;
        let token = header
            .to_str()
            .ok()
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or(ApiError::AccessTokenInvalid)?;

        match state.tokens.verify(token, TokenKind::Access) {
            Ok(claims) => Ok(Self {
                user_id: claims.sub,
            }),
            Err(TokenError::Expired) => Err(rotate_tokens(parts, state, token)),
            Err(TokenError::Invalid) => Err(ApiError::AccessTokenInvalid.into()),
        }
    }
}

/// Exchanges a valid refresh cookie for a fresh token pair.
///
/// Always returns an error value: either the `UpdateTokens` rotation
/// response or the coded failure explaining why rotation was impossible.
/// Both tokens must name the same subject, so a stolen refresh cookie
/// cannot be combined with someone else's expired access token.
fn rotate_tokens(parts: &Parts, state: &AppState, access: &str) -> AppError {
    let Some(refresh) = cookie_value(&parts.headers, REFRESH_TOKEN_COOKIE) else {
        return ApiError::RefreshTokenCookieMissing.into();
    };

    let claims = match state.tokens.verify(&refresh, TokenKind::Refresh) {
        Ok(claims) => claims,
        Err(_) => return ApiError::RefreshTokenInvalid.into(),
    };

    let access_claims = match state.tokens.verify_ignoring_expiry(access, TokenKind::Access) {
        Ok(claims) => claims,
        Err(_) => return ApiError::AccessTokenInvalid.into(),
    };
    if access_claims.sub != claims.sub {
        return ApiError::TokensSubjectNotEqual.into();
    }

    let auth = &state.config.auth;
    let access_token = match state
        .tokens
        .create(TokenKind::Access, &claims.sub, auth.access_token_ttl)
    {
        Ok(token) => token,
        Err(e) => return e.into(),
    };
    let refresh_token = match state
        .tokens
        .create(TokenKind::Refresh, &claims.sub, auth.refresh_token_ttl)
    {
        Ok(token) => token,
        Err(e) => return e.into(),
    };

    ApiError::UpdateTokens {
        access_token,
        refresh_token,
    }
    .into()
}
