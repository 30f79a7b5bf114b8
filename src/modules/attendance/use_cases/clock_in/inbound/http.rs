use axum::{
    Extension, Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse, response::Response,
};
use serde::Deserialize;
use serde_json::json;

use crate::modules::attendance::sync::attendance_sync::SyncError;
use crate::modules::attendance::use_cases::errors::ApplicationError;
use crate::modules::auth::core::user::User;
use crate::shared::core::primitives::Location;
use crate::shared::infrastructure::geolocation::locate_best_effort;
use crate::shell::state::AppState;

/// Body of both clock actions. Both the body and the location are optional.
#[derive(Debug, Default, Deserialize)]
pub struct ClockBody {
    pub location: Option<Location>,
}

/// An explicit location wins; otherwise ask the geolocation provider, and go
/// without one if that fails. `Err` carries the 422 for a malformed body.
pub(crate) async fn resolve_location(
    state: &AppState,
    body: Result<Json<ClockBody>, JsonRejection>,
) -> Result<Option<Location>, Response> {
    let body = match body {
        Ok(Json(body)) => body,
        Err(JsonRejection::MissingJsonContentType(_)) => ClockBody::default(),
        Err(_) => return Err(StatusCode::UNPROCESSABLE_ENTITY.into_response()),
    };
    match body.location {
        Some(location) => Ok(Some(location)),
        None => Ok(locate_best_effort(state.geolocation.as_ref()).await),
    }
}

pub(crate) fn sync_error_response(error: SyncError) -> Response {
    match error {
        SyncError::NoSession => StatusCode::UNAUTHORIZED.into_response(),
        SyncError::Application(ApplicationError::Domain(reason)) => (
            StatusCode::CONFLICT,
            Json(json!({ "error": reason.to_string() })),
        )
            .into_response(),
        SyncError::Application(ApplicationError::Store(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

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
    match state.attendance.clock_in(location).await {
        Ok(record) => Json(record).into_response(),
        Err(e) => sync_error_response(e),
    }
}
