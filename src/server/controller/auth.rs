//! Registration, email verification, login, and password change endpoints.

use axum::{
    extract::{Path, State},
    http::{header::SET_COOKIE, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::auth::{ChangePasswordDto, LoginDto, RegistrationDto, TokenPairDto},
    server::{
        controller::check_length,
        error::{api::refresh_cookie, AppError},
        middleware::{auth::AuthClient, lang::Lang},
        model::auth::{RegistrationParams, TokenPair},
        service::auth::AuthService,
        state::AppState,
    },
};

/// POST /api/auth/registration
/// Create an inactive account and email a verification token
pub async fn register(
    State(state): State<AppState>,
    Lang(lang): Lang,
    Json(data): Json<RegistrationDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth = &state.config.auth;
    check_length(
        "username",
        &data.username,
        auth.username_min_length,
        auth.username_max_length,
    )?;
    check_length("email", &data.email, 3, auth.email_max_length)?;
    check_length(
        "password",
        &data.password,
        auth.password_min_length,
        auth.password_max_length,
    )?;

    AuthService::new(&state.db, &state.tokens, auth)
        .register(
            state.mailer.as_ref(),
            state.scheduler.as_ref(),
            lang,
            RegistrationParams {
                username: data.username,
                email: data.email,
                password: data.password,
            },
        )
        .await?;

    Ok(StatusCode::CREATED)
}

/// GET /api/auth/verify-email/{token}
/// Activate the account behind a registration token and log it in
pub async fn verify_email(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let pair = AuthService::new(&state.db, &state.tokens, &state.config.auth)
        .verify_email(&token)
        .await?;

    Ok(token_pair_response(pair))
}

/// POST /api/auth/login
/// Exchange username and password for a token pair
pub async fn login(
    State(state): State<AppState>,
    Json(data): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let pair = AuthService::new(&state.db, &state.tokens, &state.config.auth)
        .login(&data.username, &data.password)
        .await?;

    Ok(token_pair_response(pair))
}

/// POST /api/auth/change-password-request
/// Email the caller a change-password confirmation token
pub async fn change_password_request(
    State(state): State<AppState>,
    client: AuthClient,
    Lang(lang): Lang,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state.db, &state.tokens, &state.config.auth)
        .request_password_change(state.mailer.as_ref(), lang, &client.user_id)
        .await?;

    Ok(StatusCode::OK)
}

/// POST /api/auth/change-password/{token}
/// Store a new password under a change-password token
pub async fn change_password(
    State(state): State<AppState>,
    Path(token): Path<String>,
    Json(data): Json<ChangePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth = &state.config.auth;
    check_length(
        "password",
        &data.password,
        auth.password_min_length,
        auth.password_max_length,
    )?;

    AuthService::new(&state.db, &state.tokens, auth)
        .change_password(&token, &data.password)
        .await?;

    Ok(StatusCode::OK)
}

/// Token pair body plus the refresh token as an HttpOnly cookie.
fn token_pair_response(pair: TokenPair) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(SET_COOKIE, refresh_cookie(&pair.refresh_token))],
        Json(TokenPairDto {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
        }),
    )
}
