//! Handlers for the `/users` resource.

use axum::extract::State;
use axum::Json;
use newsroom_core::error::CoreError;
use newsroom_db::models::user::User;
use newsroom_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ApiPath;
use crate::response::{UserResponse, UsersResponse};
use crate::state::AppState;

/// GET /api/users
pub async fn list(State(state): State<AppState>) -> AppResult<Json<UsersResponse<User>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(UsersResponse { users }))
}

/// GET /api/users/{username}
pub async fn get_by_username(
    State(state): State<AppState>,
    ApiPath(username): ApiPath<String>,
) -> AppResult<Json<UserResponse<User>>> {
    let user = UserRepo::find_by_username(&state.pool, &username)
        .await?
        .ok_or(AppError::Core(CoreError::user_not_found()))?;
    Ok(Json(UserResponse { user }))
}
