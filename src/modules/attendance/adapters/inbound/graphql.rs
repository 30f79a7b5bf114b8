use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::attendance::core::record::AttendanceRecord;
use crate::modules::auth::core::user::{Role, User};
use crate::shared::core::primitives::Location;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlAttendanceRecord {
    pub id: String,
    pub user_id: String,
    pub date: String,
    pub clock_in_time: Option<String>,
    pub clock_out_time: Option<String>,
    pub status: String,
    pub location_lat: Option<f64>,
    pub location_lng: Option<f64>,
    pub notes: Option<String>,
}

impl From<AttendanceRecord> for GqlAttendanceRecord {
    fn from(r: AttendanceRecord) -> Self {
        Self {
            id: r.id,
            user_id: r.user_id,
            date: r.date.to_string(),
            clock_in_time: r.clock_in_time.map(|t| t.to_rfc3339()),
            clock_out_time: r.clock_out_time.map(|t| t.to_rfc3339()),
            status: r.status.to_string(),
            location_lat: r.location_lat,
            location_lng: r.location_lng,
            notes: r.notes,
        }
    }
}

#[derive(async_graphql::InputObject)]
pub struct GqlLocation {
    pub lat: f64,
    pub lng: f64,
}

impl From<GqlLocation> for Location {
    fn from(l: GqlLocation) -> Self {
        Self { lat: l.lat, lng: l.lng }
    }
}

async fn signed_in_employee(state: &AppState) -> GqlResult<User> {
    match state.session.current() {
        Some(user) if user.role == Role::Employee => {
            state.attendance.ensure_mounted(&user).await;
            Ok(user)
        }
        _ => Err(async_graphql::Error::new("no signed-in employee")),
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn today_attendance(
        &self,
        context: &Context<'_>,
    ) -> GqlResult<Option<GqlAttendanceRecord>> {
        let state = context.data_unchecked::<AppState>();
        signed_in_employee(state).await?;
        Ok(state.attendance.snapshot().await.today.map(Into::into))
    }

    async fn attendance_history(&self, context: &Context<'_>) -> GqlResult<Vec<GqlAttendanceRecord>> {
        let state = context.data_unchecked::<AppState>();
        signed_in_employee(state).await?;
        let snapshot = state.attendance.snapshot().await;
        Ok(snapshot.history.into_iter().map(Into::into).collect())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn clock_in(
        &self,
        context: &Context<'_>,
        location: Option<GqlLocation>,
    ) -> GqlResult<GqlAttendanceRecord> {
        let state = context.data_unchecked::<AppState>();
        signed_in_employee(state).await?;
        let record = state
            .attendance
            .clock_in(location.map(Into::into))
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(record.into())
    }

    async fn clock_out(
        &self,
        context: &Context<'_>,
        location: Option<GqlLocation>,
    ) -> GqlResult<GqlAttendanceRecord> {
        let state = context.data_unchecked::<AppState>();
        signed_in_employee(state).await?;
        let record = state
            .attendance
            .clock_out(location.map(Into::into))
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(record.into())
    }
}
