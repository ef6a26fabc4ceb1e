//! Account endpoint.

use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    model::user::UserDto,
    server::{
        error::AppError, middleware::auth::AuthClient, service::user::UserService,
        state::AppState,
    },
};

/// GET /api/user/account
/// Return the calling user's own account
pub async fn get_account(
    State(state): State<AppState>,
    client: AuthClient,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).get_user(&client.user_id).await?;

    Ok(Json(UserDto::from_model(user)))
}
