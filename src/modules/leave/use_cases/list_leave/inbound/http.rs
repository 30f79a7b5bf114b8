use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use tracing::error;

use crate::modules::auth::core::user::User;
use crate::modules::leave::adapters::outbound::leave_store::LeaveStore;
use crate::modules::leave::core::leave_request::LeaveRequest;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct LeaveView {
    #[serde(flatten)]
    pub request: LeaveRequest,
    pub status_label: &'static str,
}

pub async fn handle(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> impl IntoResponse {
    match state.leave_store.list_by_user(&user.id).await {
        Ok(requests) => {
            let views: Vec<LeaveView> = requests
                .into_iter()
                .map(|request| LeaveView {
                    status_label: request.status.label(),
                    request,
                })
                .collect();
            Json(views).into_response()
        }
        Err(e) => {
            error!(user_id = %user.id, error = %e, "error listing leave requests");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
