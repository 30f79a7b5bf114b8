use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    state.logout_handler.handle();
    StatusCode::NO_CONTENT
}
