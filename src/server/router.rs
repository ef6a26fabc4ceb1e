use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::server::{
    controller::{
        auth::{change_password, change_password_request, login, register, verify_email},
        item::{get_item_by_id, get_item_by_wow_id},
        log::get_logs,
        queue::{delete_queue, get_queue, update_queue},
        raider::{create_raider, delete_raider, get_raider},
        team::{
            create_team, delete_request_team, delete_team, get_full_team, get_team_by_id,
            get_team_by_name, update_team,
        },
        user::get_account,
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/registration", post(register))
        .route("/api/auth/verify-email/{token}", get(verify_email))
        .route("/api/auth/login", post(login))
        .route("/api/auth/change-password-request", post(change_password_request))
        .route("/api/auth/change-password/{token}", post(change_password))
        .route("/api/user/account", get(get_account))
        .route("/api/team", post(create_team))
        .route("/api/team/id/{team_id}", get(get_team_by_id))
        .route("/api/team/name/{name}", get(get_team_by_name))
        .route("/api/team/{team_id}", patch(update_team))
        .route("/api/team/delete-request/{team_name}", post(delete_request_team))
        .route("/api/team/delete/{token}", delete(delete_team))
        .route("/api/raider", post(create_raider))
        .route("/api/raider/{raider_id}", get(get_raider).delete(delete_raider))
        .route("/api/item/id/{item_id}", get(get_item_by_id))
        .route("/api/item/wow-id/{wow_id}", get(get_item_by_wow_id))
        .route("/api/queue", get(get_queue).post(update_queue).delete(delete_queue))
        .route("/api/log/logs", get(get_logs))
        // Static segments like /api/team win over this dynamic one, and
        // team names colliding with reserved pages are rejected at creation.
        .route("/api/{team_name}", get(get_full_team))
}
