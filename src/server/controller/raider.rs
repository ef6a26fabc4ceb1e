//! Raider roster endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::raider::{CreateRaiderDto, RaiderDto},
    server::{
        error::AppError, middleware::auth::AuthClient, service::raider::RaiderService,
        state::AppState,
    },
};

/// GET /api/raider/{raider_id}
pub async fn get_raider(
    State(state): State<AppState>,
    Path(raider_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let raider = RaiderService::new(&state.db).get_raider(&raider_id).await?;

    Ok(Json(RaiderDto::from_model(raider)))
}

/// POST /api/raider
/// Add a raider to a team the caller owns
pub async fn create_raider(
    State(state): State<AppState>,
    client: AuthClient,
    Json(data): Json<CreateRaiderDto>,
) -> Result<impl IntoResponse, AppError> {
    let raider = RaiderService::new(&state.db)
        .create(
            &client.user_id,
            &data.team_id,
            &data.name,
            data.class_name,
            data.is_active,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(RaiderDto::from_model(raider))))
}

/// DELETE /api/raider/{raider_id}
/// Deactivate a raider on a team the caller owns
pub async fn delete_raider(
    State(state): State<AppState>,
    client: AuthClient,
    Path(raider_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    RaiderService::new(&state.db)
        .delete(&client.user_id, &raider_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
