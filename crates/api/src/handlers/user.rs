//! Handlers for the `/user` resource.
//!
//! Responses are always [`UserResponse`]; the stored password is never
//! serialized on any path.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use musiclib_core::validation::parse_entity_id;
use musiclib_db::models::user::{
    CreateUserPayload, NewUser, PasswordChange, UpdatePasswordPayload, UserResponse,
};

use crate::error::AppResult;
use crate::state::AppState;

/// GET /user
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = state.users.list().await?;
    Ok(Json(users))
}

/// POST /user
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateUserPayload>, JsonRejection>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let Json(payload) = body?;
    let input = NewUser::try_from(payload)?;
    let user = state.users.create(&input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /user/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<UserResponse>> {
    let id = parse_entity_id(&id)?;
    let user = state.users.get(id).await?;
    Ok(Json(user))
}

/// PUT /user/{id}
///
/// Changes the password. Responds 403 if `oldPassword` does not match.
pub async fn update_password(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdatePasswordPayload>, JsonRejection>,
) -> AppResult<Json<UserResponse>> {
    let id = parse_entity_id(&id)?;
    let Json(payload) = body?;
    let change = PasswordChange::try_from(payload)?;
    let user = state.users.change_password(id, &change).await?;
    Ok(Json(user))
}

/// DELETE /user/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<StatusCode> {
    let id = parse_entity_id(&id)?;
    state.users.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
