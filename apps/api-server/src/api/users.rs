//! User API endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use entities::User;
use meal_store::MealStore;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

/// Request body for creating a user.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
}

/// Response body for listing users.
#[derive(Debug, Serialize)]
pub struct ListUsersResponse {
    pub users: Vec<User>,
}

/// Creates a new user.
pub async fn create_user<S: MealStore>(
    State(state): State<Arc<AppState<S>>>,
    Json(request): Json<CreateUserRequest>,
) -> ServerResult<(StatusCode, Json<User>)> {
    let name = request.name.unwrap_or_default();
    if name.trim().is_empty() {
        return Err(ServerError::InvalidRequest(
            "A name must be provided to create a new user".to_string(),
        ));
    }

    let user = state.store.create_user(User::new(name)).await?;

    tracing::info!(user_id = %user.id, "User created");

    Ok((StatusCode::CREATED, Json(user)))
}

/// Lists all users.
pub async fn list_users<S: MealStore>(
    State(state): State<Arc<AppState<S>>>,
) -> ServerResult<Json<ListUsersResponse>> {
    let users = state.store.list_users().await?;

    Ok(Json(ListUsersResponse { users }))
}

/// Gets a user by ID.
pub async fn get_user<S: MealStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<Uuid>,
) -> ServerResult<Json<User>> {
    let user = state
        .store
        .get_user(id)
        .await?
        .ok_or(ServerError::NotFound)?;

    Ok(Json(user))
}
