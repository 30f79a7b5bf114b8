use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use tracing::error;

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.recent_activity_handler.handle(state.clock.today()).await {
        Ok(items) => Json(items).into_response(),
        Err(e) => {
            error!(error = %e, "error reading recent activity");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
