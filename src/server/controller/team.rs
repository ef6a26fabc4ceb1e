//! Team endpoints, including the cached full-team aggregate.

use std::time::Duration;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::team::{CreateTeamDto, FullTeamDto, TeamDto, UpdateTeamDto},
    server::{
        controller::check_length,
        error::AppError,
        middleware::{auth::AuthClient, lang::Lang},
        service::team::TeamService,
        state::AppState,
    },
};

/// GET /api/team/id/{team_id}
pub async fn get_team_by_id(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let team = TeamService::new(&state.db, &state.tokens, &state.config.team)
        .get_team(&team_id)
        .await?;

    Ok(Json(TeamDto::from_model(team)))
}

/// GET /api/team/name/{name}
pub async fn get_team_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let team = TeamService::new(&state.db, &state.tokens, &state.config.team)
        .get_team_by_name(&name)
        .await?;

    Ok(Json(TeamDto::from_model(team)))
}

/// POST /api/team
/// Create a team owned by the caller
pub async fn create_team(
    State(state): State<AppState>,
    client: AuthClient,
    Json(data): Json<CreateTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let settings = &state.config.team;
    check_length(
        "name",
        &data.name,
        settings.name_min_length,
        settings.name_max_length,
    )?;
    check_length(
        "password",
        &data.password,
        settings.password_min_length,
        settings.password_max_length,
    )?;

    let team = TeamService::new(&state.db, &state.tokens, settings)
        .create(&client.user_id, &data.name, &data.password, data.addon)
        .await?;

    Ok((StatusCode::CREATED, Json(TeamDto::from_model(team))))
}

/// PATCH /api/team/{team_id}
/// Update name, addon, or password of a team the caller owns
pub async fn update_team(
    State(state): State<AppState>,
    client: AuthClient,
    Path(team_id): Path<String>,
    Json(data): Json<UpdateTeamDto>,
) -> Result<impl IntoResponse, AppError> {
    let settings = &state.config.team;
    if let Some(name) = &data.name {
        check_length("name", name, settings.name_min_length, settings.name_max_length)?;
    }
    if let Some(password) = &data.password {
        check_length(
            "password",
            password,
            settings.password_min_length,
            settings.password_max_length,
        )?;
    }

    let team = TeamService::new(&state.db, &state.tokens, settings)
        .update(&client.user_id, &team_id, data.name, data.addon, data.password)
        .await?;

    Ok(Json(TeamDto::from_model(team)))
}

/// POST /api/team/delete-request/{team_name}
/// Email the owner a delete-confirmation token
pub async fn delete_request_team(
    State(state): State<AppState>,
    client: AuthClient,
    Lang(lang): Lang,
    Path(team_name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    TeamService::new(&state.db, &state.tokens, &state.config.team)
        .request_delete(state.mailer.as_ref(), lang, &client.user_id, &team_name)
        .await?;

    Ok(StatusCode::OK)
}

/// DELETE /api/team/delete/{token}
/// Delete the team named by a delete-confirmation token
pub async fn delete_team(
    State(state): State<AppState>,
    client: AuthClient,
    Path(token): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    TeamService::new(&state.db, &state.tokens, &state.config.team)
        .delete(&client.user_id, &token)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/{team_name}
/// Return the full-team aggregate, served from cache when warm
pub async fn get_full_team(
    State(state): State<AppState>,
    Path(team_name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let full_team: FullTeamDto = TeamService::new(&state.db, &state.tokens, &state.config.team)
        .get_full_team(
            state.cache.as_ref(),
            Duration::from_secs(state.config.cache_ttl_secs),
            &team_name,
        )
        .await?;

    Ok(Json(full_team))
}
