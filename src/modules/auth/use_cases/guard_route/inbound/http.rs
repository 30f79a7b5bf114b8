use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;

use crate::modules::auth::core::user::Role;
use crate::modules::auth::use_cases::guard_route::decide::{GuardDecision, decide_guard};
use crate::shell::state::AppState;

pub async fn require_employee(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    guard(Role::Employee, &state, request, next).await
}

pub async fn require_admin(State(state): State<AppState>, request: Request, next: Next) -> Response {
    guard(Role::Admin, &state, request, next).await
}

/// Allowed requests carry the session `User` as an extension.
async fn guard(required: Role, state: &AppState, mut request: Request, next: Next) -> Response {
    match decide_guard(required, state.session.current().as_ref()) {
        GuardDecision::Allow(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        GuardDecision::Redirect { to } => {
            debug!(path = %request.uri().path(), required = %required, "redirecting");
            Redirect::to(to).into_response()
        }
    }
}

#[cfg(test)]
mod guard_route_http_inbound_tests {
    use axum::{
        Extension, Router,
        body::Body,
        http::{Request, StatusCode, header},
        middleware::from_fn_with_state,
        routing::get,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::{require_admin, require_employee};
    use crate::modules::auth::core::user::User;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::app::make_test_state;
    use crate::tests::fixtures::users::{admin, sarah};

    async fn whoami(Extension(user): Extension<User>) -> String {
        user.name
    }

    fn app(state: AppState) -> Router {
        let employee = Router::new()
            .route("/employee", get(whoami))
            .route_layer(from_fn_with_state(state.clone(), require_employee));
        let admin = Router::new()
            .route("/admin", get(whoami))
            .route_layer(from_fn_with_state(state.clone(), require_admin));
        employee.merge(admin).with_state(state)
    }

    #[tokio::test]
    async fn it_should_redirect_an_employee_away_from_the_admin_route() {
        let state = make_test_state();
        state.session.sign_in(sarah(), false);

        let response = app(state)
            .oneshot(Request::get("/admin").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert!(bytes.is_empty(), "admin view must not render");
    }

    #[tokio::test]
    async fn it_should_redirect_an_anonymous_request() {
        let response = app(make_test_state())
            .oneshot(Request::get("/employee").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }

    #[tokio::test]
    async fn it_should_pass_the_session_user_to_the_route() {
        let state = make_test_state();
        state.session.sign_in(admin(), false);

        let response = app(state)
            .oneshot(Request::get("/admin").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"Muhammad Ahmad");
    }
}
