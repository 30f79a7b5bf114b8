use axum::{
    Extension, Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use crate::modules::auth::core::user::User;
use crate::modules::leave::adapters::outbound::leave_store::LeaveStoreError;
use crate::modules::leave::use_cases::review_leave::decide::ReviewAction;
use crate::modules::leave::use_cases::review_leave::handler::ReviewLeaveError;
use crate::shell::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct RejectBody {
    pub reason: Option<String>,
}

pub async fn handle_approve(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(leave_id): Path<String>,
) -> impl IntoResponse {
    review(&state, &leave_id, &user, ReviewAction::Approve).await
}

pub async fn handle_reject(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Path(leave_id): Path<String>,
    body: Result<Json<RejectBody>, JsonRejection>,
) -> impl IntoResponse {
    let body = match body {
        Ok(Json(body)) => body,
        Err(JsonRejection::MissingJsonContentType(_)) => RejectBody::default(),
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let action = ReviewAction::Reject {
        reason: body.reason.filter(|r| !r.trim().is_empty()),
    };
    review(&state, &leave_id, &user, action).await
}

async fn review(state: &AppState, leave_id: &str, user: &User, action: ReviewAction) -> Response {
    match state.review_leave_handler.handle(leave_id, user, action).await {
        Ok(reviewed) => Json(reviewed).into_response(),
        Err(ReviewLeaveError::Store(LeaveStoreError::NotFound(_))) => {
            StatusCode::NOT_FOUND.into_response()
        }
        Err(ReviewLeaveError::Domain(reason)) => (
            StatusCode::CONFLICT,
            Json(json!({ "error": reason.to_string() })),
        )
            .into_response(),
        Err(ReviewLeaveError::Store(_)) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
