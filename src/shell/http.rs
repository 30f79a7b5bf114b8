use axum::{
    Extension, Json, Router,
    extract::State,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::admin::use_cases::dashboard_stats::inbound::http as dashboard_http;
use crate::modules::admin::use_cases::recent_activity::inbound::http as activity_http;
use crate::modules::attendance::use_cases::clock_in::inbound::http as clock_in_http;
use crate::modules::attendance::use_cases::clock_out::inbound::http as clock_out_http;
use crate::modules::attendance::use_cases::fetch_history::inbound::http as attendance_http;
use crate::modules::auth::core::user::User;
use crate::modules::auth::use_cases::guard_route::decide::landing_route;
use crate::modules::auth::use_cases::guard_route::inbound::http::{
    require_admin, require_employee,
};
use crate::modules::auth::use_cases::login::inbound::http as login_http;
use crate::modules::auth::use_cases::logout::inbound::http as logout_http;
use crate::modules::auth::use_cases::signup::inbound::http as signup_http;
use crate::modules::leave::use_cases::list_leave::inbound::http as list_leave_http;
use crate::modules::leave::use_cases::review_leave::inbound::http as review_leave_http;
use crate::modules::leave::use_cases::submit_leave::inbound::http as submit_leave_http;
use crate::shared::core::toast::Toast;
use crate::shell::graphql::{GRAPHQL_PATH, build_schema, graphiql, graphql};
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct SessionView {
    pub user: Option<User>,
    pub is_loading: bool,
    pub redirect_to: Option<&'static str>,
}

pub async fn session(State(state): State<AppState>) -> Json<SessionView> {
    let user = state.session.current();
    Json(SessionView {
        redirect_to: user.as_ref().map(landing_route),
        is_loading: state.session.is_loading(),
        user,
    })
}

/// Toasts raised since the last call, oldest first.
pub async fn notifications(State(state): State<AppState>) -> Json<Vec<Toast>> {
    Json(state.notifier.drain())
}

pub fn router(state: AppState) -> Router {
    let employee = Router::new()
        .route("/employee/attendance", get(attendance_http::handle))
        .route(
            "/employee/attendance/refresh",
            post(attendance_http::handle_refresh),
        )
        .route("/employee/clock-in", post(clock_in_http::handle))
        .route("/employee/clock-out", post(clock_out_http::handle))
        .route(
            "/employee/leave",
            get(list_leave_http::handle).post(submit_leave_http::handle),
        )
        .route_layer(from_fn_with_state(state.clone(), require_employee));

    let admin = Router::new()
        .route("/admin/dashboard", get(dashboard_http::handle))
        .route("/admin/activity", get(activity_http::handle))
        .route(
            "/admin/leave/{id}/approve",
            post(review_leave_http::handle_approve),
        )
        .route(
            "/admin/leave/{id}/reject",
            post(review_leave_http::handle_reject),
        )
        .route_layer(from_fn_with_state(state.clone(), require_admin));

    Router::new()
        .route("/login", post(login_http::handle))
        .route("/signup", post(signup_http::handle))
        .route("/logout", post(logout_http::handle))
        .route("/session", get(session))
        .route("/notifications", get(notifications))
        .route(GRAPHQL_PATH, get(graphiql).post(graphql))
        .merge(employee)
        .merge(admin)
        .layer(Extension(build_schema(state.clone())))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
