use axum::Router;
use axum::routing::{get, post};

use crate::db::UserStorage;
use crate::handlers::users::{create_user, index, list_users};

#[derive(Clone)]
pub struct RosterState {
    pub storage: UserStorage,
}

impl RosterState {
    pub fn new(storage: UserStorage) -> Self {
        Self { storage }
    }
}

pub fn roster_router(state: RosterState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/users", post(create_user).get(list_users))
        .with_state(state)
}
