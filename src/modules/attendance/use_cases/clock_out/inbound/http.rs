use axum::{
    Extension, Json, extract::State, extract::rejection::JsonRejection, response::IntoResponse,
};

use crate::modules::attendance::use_cases::clock_in::inbound::http::{
    ClockBody, resolve_location, sync_error_response,
};
use crate::modules::auth::core::user::User;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    body: Result<Json<ClockBody>, JsonRejection>,
) -> impl IntoResponse {
    let location = match resolve_location(&state, body).await {
        Ok(location) => location,
        Err(response) => return response,
    };

    state.attendance.ensure_mounted(&user).await;
    match state.attendance.clock_out(location).await {
        Ok(record) => Json(record).into_response(),
        Err(e) => sync_error_response(e),
    }
}
