use axum::{Extension, Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::modules::attendance::core::summary::HistorySummary;
use crate::modules::attendance::sync::attendance_sync::AttendanceSnapshot;
use crate::modules::auth::core::user::User;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct AttendanceView {
    #[serde(flatten)]
    pub snapshot: AttendanceSnapshot,
    pub day: &'static str,
    pub summary: HistorySummary,
}

impl From<AttendanceSnapshot> for AttendanceView {
    fn from(snapshot: AttendanceSnapshot) -> Self {
        Self {
            day: snapshot.day().label(),
            summary: snapshot.summary(),
            snapshot,
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> impl IntoResponse {
    state.attendance.ensure_mounted(&user).await;
    Json(AttendanceView::from(state.attendance.snapshot().await))
}

pub async fn handle_refresh(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> impl IntoResponse {
    state.attendance.ensure_mounted(&user).await;
    match state.attendance.refetch().await {
        Ok(()) => Json(AttendanceView::from(state.attendance.snapshot().await)).into_response(),
        Err(_) => StatusCode::UNAUTHORIZED.into_response(),
    }
}
