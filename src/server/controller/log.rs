//! Queue-change audit log endpoint.

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        log::{LogDto, LogListDto},
        queue::QueueDto,
    },
    server::{
        data::log::LogRepository,
        error::AppError,
        model::log::LogFilter,
        state::AppState,
    },
};

#[derive(Deserialize)]
pub struct LogQuery {
    pub team_id: String,
    pub wow_item_id: Option<i32>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

/// GET /api/log/logs?team_id=...
/// List a team's queue-change history, newest first
pub async fn get_logs(
    State(state): State<AppState>,
    Query(query): Query<LogQuery>,
) -> Result<impl IntoResponse, AppError> {
    let logs = LogRepository::new(&state.db)
        .list(
            &query.team_id,
            LogFilter {
                wow_id: query.wow_item_id,
                limit: query.limit,
                offset: query.offset,
            },
        )
        .await?;

    let logs = logs
        .into_iter()
        .map(|log| {
            let queue: Vec<QueueDto> = serde_json::from_str(&log.queue).map_err(|e| {
                AppError::InternalError(format!("Malformed queue snapshot in log {}: {e}", log.id))
            })?;
            Ok(LogDto {
                created_at: log.created_at,
                queue,
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    Ok(Json(LogListDto {
        team_id: query.team_id,
        wow_item_id: query.wow_item_id,
        limit: query.limit,
        offset: query.offset,
        logs,
    }))
}
