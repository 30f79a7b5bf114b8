use axum::{
    Extension, Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;

use crate::modules::auth::core::user::User;
use crate::modules::leave::use_cases::submit_leave::command::SubmitLeave;
use crate::modules::leave::use_cases::submit_leave::handler::SubmitLeaveError;
use crate::shell::state::AppState;

/// Missing fields deserialize as empty and are caught by validation.
#[derive(Deserialize)]
pub struct SubmitLeaveBody {
    #[serde(default)]
    pub leave_type: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub reason: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    body: Result<Json<SubmitLeaveBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = SubmitLeave {
        user_id: user.id,
        leave_type: body.leave_type,
        start_date: body.start_date,
        end_date: body.end_date,
        reason: body.reason,
    };

    match state.submit_leave_handler.handle(command).await {
        Ok(created) => (StatusCode::CREATED, Json(created)).into_response(),
        Err(SubmitLeaveError::Validation(e)) => {
            (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() }))).into_response()
        }
        Err(SubmitLeaveError::Store(_)) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
