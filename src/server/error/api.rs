use axum::{
    http::{header::SET_COOKIE, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{ErrorDto, TokenRotationDto};

/// Name of the HttpOnly cookie carrying the refresh token.
pub const REFRESH_TOKEN_COOKIE: &str = "refresh-token";

/// Builds the `Set-Cookie` value for a fresh refresh token.
pub fn refresh_cookie(token: &str) -> String {
    format!("{REFRESH_TOKEN_COOKIE}={token}; HttpOnly; Path=/; Secure")
}

/// Client-facing errors with stable numeric codes.
///
/// Each variant maps to an HTTP status and a machine-readable `error_code`
/// in the JSON body. Clients branch on the code, never on the message.
/// `UpdateTokens` is the one variant that is not strictly a failure: it
/// signals a successful token rotation and carries the fresh token pair.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Another user already holds the requested username. Code 1, 409.
    #[error("Username not unique")]
    UsernameNotUnique,

    /// Another user already holds the requested email. Code 2, 409.
    #[error("Email not unique")]
    EmailNotUnique,

    /// The mail provider rejected the address as non-existent. Code 3, 422.
    #[error("Email does not exist")]
    EmailNonExistent,

    /// Registration token failed verification. Code 4, 422.
    #[error("Registration token is invalid")]
    RegistrationTokenInvalid,

    /// Access token is malformed or has a bad signature. Code 5, 401.
    #[error("Access token is invalid")]
    AccessTokenInvalid,

    /// Refresh token failed verification. Code 6, 401.
    #[error("Refresh token is invalid")]
    RefreshTokenInvalid,

    /// Activation was attempted for an already-active user. Code 7, 403.
    #[error("The user is already active")]
    UserIsActive,

    /// Another team already holds the requested name. Code 8, 409.
    #[error("The team name is already taken")]
    TeamNameNotUnique,

    /// No team with the given id or name. Code 9, 422.
    #[error("The team does not exist")]
    TeamNotExists,

    /// No user with the given id or username. Code 10, 422.
    #[error("User not exists")]
    UserNotExists,

    /// Login with a wrong username/password pair, or for an inactive
    /// account. Code 11, 401.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Access token is valid but past its expiry, and no refresh rotation
    /// took place. Code 12, 401.
    #[error("Access token is expired")]
    AccessTokenExpired,

    /// Request reached a guarded endpoint without an Authorization header.
    /// Code 13, 401.
    #[error("Authorization header missing")]
    AuthorizationHeaderMissing,

    /// Expired access token and no refresh cookie to rotate with.
    /// Code 14, 401.
    #[error("Refresh token missing in cookie")]
    RefreshTokenCookieMissing,

    /// Token rotation: the expired access token was exchanged through a
    /// valid refresh cookie. Code 15, 401. The fresh access token is
    /// returned in the body and the fresh refresh token as a cookie.
    #[error("New access and refresh tokens")]
    UpdateTokens {
        access_token: String,
        refresh_token: String,
    },

    /// Change-password token failed verification. Code 16, 422.
    #[error("Change password token is invalid")]
    ChangePasswordTokenInvalid,

    /// Delete-team token failed verification. Code 17, 422.
    #[error("Delete team token is invalid")]
    DeleteTeamTokenInvalid,

    /// The authenticated user does not own the targeted team. Code 18, 403.
    #[error("The action is available only to the owner of the team")]
    UserNotTeamOwner,

    /// Access and refresh tokens belong to different users. Code 19, 403.
    #[error("Tokens subject not equal")]
    TokensSubjectNotEqual,

    /// No active raider with the given id in the team. Code 20, 422.
    #[error("Raider not exists")]
    RaiderNotExists,

    /// An active raider with the same name and class already exists in the
    /// team. Code 21, 409.
    #[error("Active raider with the same name and class already exists in the team")]
    RaiderNotUnique,

    /// The item is unknown to both the database and the external item API.
    /// Code 22, 422.
    #[error("Item not exists")]
    ItemNotExists,

    /// No queue for the given team and item. Code 23, 422.
    #[error("Queue not exists")]
    QueueNotExists,
}

impl ApiError {
    /// Stable numeric code carried in the response body.
    pub fn code(&self) -> u16 {
        match self {
            Self::UsernameNotUnique => 1,
            Self::EmailNotUnique => 2,
            Self::EmailNonExistent => 3,
            Self::RegistrationTokenInvalid => 4,
            Self::AccessTokenInvalid => 5,
            Self::RefreshTokenInvalid => 6,
            Self::UserIsActive => 7,
            Self::TeamNameNotUnique => 8,
            Self::TeamNotExists => 9,
            Self::UserNotExists => 10,
            Self::InvalidCredentials => 11,
            Self::AccessTokenExpired => 12,
            Self::AuthorizationHeaderMissing => 13,
            Self::RefreshTokenCookieMissing => 14,
            Self::UpdateTokens { .. } => 15,
            Self::ChangePasswordTokenInvalid => 16,
            Self::DeleteTeamTokenInvalid => 17,
            Self::UserNotTeamOwner => 18,
            Self::TokensSubjectNotEqual => 19,
            Self::RaiderNotExists => 20,
            Self::RaiderNotUnique => 21,
            Self::ItemNotExists => 22,
            Self::QueueNotExists => 23,
        }
    }

    /// HTTP status the error is served with.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::UsernameNotUnique
            | Self::EmailNotUnique
            | Self::TeamNameNotUnique
            | Self::RaiderNotUnique => StatusCode::CONFLICT,
            Self::AccessTokenInvalid
            | Self::RefreshTokenInvalid
            | Self::InvalidCredentials
            | Self::AccessTokenExpired
            | Self::AuthorizationHeaderMissing
            | Self::RefreshTokenCookieMissing
            | Self::UpdateTokens { .. } => StatusCode::UNAUTHORIZED,
            Self::UserIsActive | Self::UserNotTeamOwner | Self::TokensSubjectNotEqual => {
                StatusCode::FORBIDDEN
            }
            Self::EmailNonExistent
            | Self::RegistrationTokenInvalid
            | Self::TeamNotExists
            | Self::UserNotExists
            | Self::ChangePasswordTokenInvalid
            | Self::DeleteTeamTokenInvalid
            | Self::RaiderNotExists
            | Self::ItemNotExists
            | Self::QueueNotExists => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

/// Converts coded API errors into HTTP responses.
///
/// Every variant serializes to `{error_code, message}` with its status code.
/// `UpdateTokens` additionally carries the fresh access token in the body
/// and sets the fresh refresh token as an HttpOnly cookie, so a client
/// seeing code 15 can retry the original request with the new credentials.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        match self {
            Self::UpdateTokens {
                access_token,
                refresh_token,
            } => (
                status,
                [(SET_COOKIE, refresh_cookie(&refresh_token))],
                Json(TokenRotationDto {
                    error_code: code,
                    message: "New access and refresh tokens".to_string(),
                    access_token,
                }),
            )
                .into_response(),
            err => (
                status,
                Json(ErrorDto {
                    error_code: code,
                    message: err.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
