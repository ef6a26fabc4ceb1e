//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod api;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::{
        error::{api::ApiError, config::ConfigError},
        mailer::MailerError,
        token::TokenError,
        wowhead::ItemApiError,
    },
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. Coded client errors (`ApiError`) handle their own response
/// mapping, while infrastructure variants collapse to 500 with the details logged
/// server-side only.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Coded client-facing error.
    ///
    /// Delegates to `ApiError::into_response()` for status and
    /// `{error_code, message}` body mapping.
    #[error(transparent)]
    ApiErr(#[from] ApiError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Token minting failure.
    ///
    /// Verification failures are mapped to coded `ApiError`s at their call
    /// sites; an error reaching this variant means encoding itself failed,
    /// which is a 500.
    #[error(transparent)]
    TokenErr(#[from] TokenError),

    /// Outbound email failure.
    ///
    /// `MailerError::NonExistentEmail` is mapped to `ApiError::EmailNonExistent`
    /// by the auth service; transport failures fall through here as 500.
    #[error(transparent)]
    MailerErr(#[from] MailerError),

    /// HTTP client request error from reqwest.
    ///
    /// Results in 500 Internal Server Error when external API calls fail.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// External item API failure (transport or malformed payload).
    ///
    /// Results in 500 Internal Server Error. A well-formed "no such item"
    /// answer is not an error; it surfaces as `ApiError::ItemNotExists`.
    #[error(transparent)]
    ItemApiErr(#[from] ItemApiError),

    /// Cron scheduler error.
    ///
    /// Results in 500 Internal Server Error when scheduled job operations fail.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Request payload failed basic validation (field length bounds).
    ///
    /// Results in 400 Bad Request with the offending constraint in the
    /// message; carries error code 0 since validation failures are not part
    /// of the coded error table.
    #[error("{0}")]
    Validation(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    ///
    /// # Fields
    /// - Detailed error message for server-side logging
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// Coded client errors delegate to their own response handling; everything
/// else is an infrastructure failure and becomes a generic 500. Internal
/// errors are logged with full details but return generic messages to avoid
/// information leakage.
///
/// # Returns
/// - Variable - For `ApiErr`, delegated to `ApiError::into_response()`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::ApiErr(err) => err.into_response(),
            Self::Validation(message) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error_code: 0,
                    message,
                }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

/// Converts wrapped errors into 500 Internal Server Error responses.
///
/// Logs the full error message for debugging, but returns a generic error message to the
/// client to avoid exposing internal implementation details or sensitive information.
///
/// # Arguments
/// - `E` - Any type that implements `Display` (typically an error type)
///
/// # Returns
/// A 500 Internal Server Error response with a generic error message JSON body
impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error_code: 0,
                message: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
