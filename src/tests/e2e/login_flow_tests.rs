use crate::modules::auth::core::session::SESSION_STORAGE_KEY;
use crate::modules::auth::core::user::User;
use crate::shared::core::primitives::FixedClock;
use crate::shared::infrastructure::durable_storage::DurableStorage;
use crate::shared::infrastructure::durable_storage::in_memory::InMemoryStorage;
use crate::shell::config::AppConfig;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::shell::workers::spawn_session_binding;
use crate::tests::fixtures::records::at;
use crate::tests::fixtures::users::sarah;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use http_body_util::BodyExt;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

fn state_on(storage: Arc<InMemoryStorage>) -> AppState {
    AppState::new(
        &AppConfig::default(),
        storage,
        Arc::new(FixedClock::new(at(8, 0))),
    )
    .unwrap()
}

fn login(email: &str, password: &str, remember: bool) -> Request<Body> {
    let body = serde_json::json!({ "email": email, "password": password, "remember": remember });
    Request::post("/login")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn remembered_login_survives_a_restart() {
    let storage = Arc::new(InMemoryStorage::new());
    let state = state_on(storage.clone());

    let response = router(state.clone())
        .oneshot(login("sarah@fruithub.com", "password123", true))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json(response).await;
    assert_eq!(json["user"]["id"], "2");
    assert_eq!(json["redirect_to"], "/employee");
    assert_eq!(state.session.current(), Some(sarah()));
    let stored: User =
        serde_json::from_str(&storage.get(SESSION_STORAGE_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(stored, sarah());
    assert_eq!(state.notifier.toasts()[0].title, "Login Berhasil");

    let restarted = state_on(storage);
    assert_eq!(restarted.session.current(), Some(sarah()));
    assert!(!restarted.session.is_loading());
}

#[tokio::test]
async fn wrong_password_leaves_the_session_empty() {
    let storage = Arc::new(InMemoryStorage::new());
    let state = state_on(storage.clone());

    let response = router(state.clone())
        .oneshot(login("sarah@fruithub.com", "wrongpass", true))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(state.session.current(), None);
    assert_eq!(storage.get(SESSION_STORAGE_KEY).unwrap(), None);
    assert_eq!(state.notifier.toasts()[0].title, "Login Gagal");
}

#[tokio::test]
async fn login_then_logout_binds_and_releases_attendance() {
    let state = state_on(Arc::new(InMemoryStorage::new()));
    let worker = spawn_session_binding(&state);
    let app = router(state.clone());

    app.clone()
        .oneshot(login("sarah@fruithub.com", "password123", false))
        .await
        .unwrap();
    let mut bound = None;
    for _ in 0..100 {
        bound = state.attendance.current_user().await;
        if bound.is_some() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    assert_eq!(bound.map(|u| u.id), Some("2".to_string()));

    let response = app
        .oneshot(Request::post("/logout").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    for _ in 0..100 {
        if state.attendance.current_user().await.is_none() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    assert_eq!(state.attendance.current_user().await, None);
    assert_eq!(state.session.current(), None);

    worker.abort();
}

#[tokio::test]
async fn signup_then_login_with_the_new_password() {
    let state = state_on(Arc::new(InMemoryStorage::new()));
    let app = router(state.clone());
    let signup = serde_json::json!({
        "name": "Dewi Lestari",
        "email": "dewi@fruithub.com",
        "password": "rahasia99",
        "role": "employee"
    });

    let response = app
        .clone()
        .oneshot(
            Request::post("/signup")
                .header("content-type", "application/json")
                .body(Body::from(signup.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = json(response).await;
    assert_eq!(created["employeeId"], "EMP003");
    assert_eq!(state.session.current(), None);

    let response = app
        .oneshot(login("dewi@fruithub.com", "rahasia99", false))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = json(response).await;
    assert_eq!(json["user"]["id"], created["id"]);
    assert_eq!(json["redirect_to"], "/employee");
    let titles: Vec<String> = state.notifier.toasts().into_iter().map(|t| t.title).collect();
    assert_eq!(titles, vec!["Registrasi Berhasil", "Login Berhasil"]);
}
