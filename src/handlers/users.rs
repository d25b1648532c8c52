use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::WithRejection;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::db::User;
use crate::{RosterError, router::RosterState};

pub const GREETING: &str = "Welcome to Roster CRUD API";

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

/// GET / -> static greeting.
pub async fn index() -> &'static str {
    GREETING
}

/// POST /users -> inserts one row, 201 on success.
/// A missing or malformed body is rejected with a structured 400 before
/// the handler runs.
pub async fn create_user(
    State(state): State<RosterState>,
    WithRejection(Json(req), _): WithRejection<Json<CreateUserRequest>, RosterError>,
) -> Result<impl IntoResponse, RosterError> {
    let id = state.storage.insert(&req.name, &req.email).await?;

    info!(id, name = %req.name, "user created");
    Ok((StatusCode::CREATED, Json(json!({"status": "User added"}))))
}

/// GET /users -> every stored row as named JSON objects.
pub async fn list_users(
    State(state): State<RosterState>,
) -> Result<Json<Vec<User>>, RosterError> {
    let users = state.storage.list().await?;
    Ok(Json(users))
}
