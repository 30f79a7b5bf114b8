use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use tracing::error;

use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.dashboard_handler.handle(state.clock.today()).await {
        Ok(stats) => Json(stats).into_response(),
        Err(e) => {
            error!(error = %e, "error computing dashboard stats");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
