//! Loot queue endpoints.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::queue::{CreateQueueDto, QueueListDto},
    server::{
        error::AppError,
        middleware::{auth::AuthClient, lang::Lang},
        service::queue::QueueService,
        state::AppState,
    },
};

#[derive(Deserialize)]
pub struct QueueQuery {
    pub team_id: String,
    pub wow_item_id: i32,
}

/// GET /api/queue?team_id=...&wow_item_id=...
/// Read the ordered queue of one (team, item) pair
pub async fn get_queue(
    State(state): State<AppState>,
    Query(query): Query<QueueQuery>,
) -> Result<impl IntoResponse, AppError> {
    let entries = QueueService::new(&state.db)
        .get(&query.team_id, query.wow_item_id)
        .await?;

    Ok(Json(QueueListDto::from_entries(
        query.team_id,
        query.wow_item_id,
        entries,
    )))
}

/// POST /api/queue
/// Replace the queue of one (team, item) pair with a fresh order
pub async fn update_queue(
    State(state): State<AppState>,
    client: AuthClient,
    Lang(lang): Lang,
    Json(data): Json<CreateQueueDto>,
) -> Result<impl IntoResponse, AppError> {
    let entries = QueueService::new(&state.db)
        .replace(
            state.cache.as_ref(),
            state.item_api.as_ref(),
            lang,
            &client.user_id,
            &data.team_id,
            data.wow_item_id,
            &data.raiders,
        )
        .await?;

    Ok(Json(QueueListDto::from_entries(
        data.team_id,
        data.wow_item_id,
        entries,
    )))
}

/// DELETE /api/queue?team_id=...&wow_item_id=...
/// Delete the queue of one (team, item) pair
pub async fn delete_queue(
    State(state): State<AppState>,
    client: AuthClient,
    Query(query): Query<QueueQuery>,
) -> Result<impl IntoResponse, AppError> {
    QueueService::new(&state.db)
        .remove(
            state.cache.as_ref(),
            &client.user_id,
            &query.team_id,
            query.wow_item_id,
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
