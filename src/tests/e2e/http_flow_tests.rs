use crate::shell::http::router;
use crate::tests::fixtures::app::make_clocked_test_state;
use crate::tests::fixtures::users::{admin, sarah};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use chrono::TimeDelta;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

async fn body(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn employee_day_from_clock_in_to_leave_request() {
    let (state, clock) = make_clocked_test_state();
    state.session.sign_in(sarah(), false);
    let app = router(state.clone());

    let response = send(
        &app,
        post_json("/employee/clock-in", json!({ "location": { "lat": -6.2, "lng": 106.8 } })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    clock.advance(TimeDelta::hours(8) + TimeDelta::minutes(50));
    let response = send(&app, post_json("/employee/clock-out", json!({}))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let refresh = Request::post("/employee/attendance/refresh")
        .body(Body::empty())
        .unwrap();
    let view = body(send(&app, refresh).await).await;
    assert_eq!(view["day"], "clocked_out");
    assert_eq!(view["today"]["location_lat"], -6.2);
    assert_eq!(view["history"].as_array().unwrap().len(), 1);
    assert_eq!(view["summary"]["worked"], "8 Jam 50 Menit");

    let response = send(
        &app,
        post_json(
            "/employee/leave",
            json!({
                "leave_type": "Cuti Sakit",
                "start_date": "2024-03-11",
                "end_date": "2024-03-12",
                "reason": "Demam dan flu"
            }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let leave = body(send(&app, get("/employee/leave")).await).await;
    assert_eq!(leave[0]["status_label"], "Menunggu");

    let toasts = body(send(&app, get("/notifications")).await).await;
    let titles: Vec<&str> = toasts
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|t| t["title"].as_str())
        .collect();
    assert_eq!(
        titles,
        ["Absen Masuk Berhasil", "Absen Keluar Berhasil", "Pengajuan Cuti Berhasil"]
    );
}

#[tokio::test]
async fn employee_is_redirected_away_from_admin_routes() {
    let (state, _) = make_clocked_test_state();
    state.session.sign_in(sarah(), false);
    let app = router(state);

    let response = send(&app, get("/admin/dashboard")).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
}

#[tokio::test]
async fn anonymous_requests_are_redirected_to_login() {
    let (state, _) = make_clocked_test_state();
    let app = router(state);

    let response = send(&app, post_json("/employee/clock-in", json!({}))).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
}

#[tokio::test]
async fn admin_reviews_leave_and_sees_the_dashboard() {
    let (state, _) = make_clocked_test_state();
    let app = router(state.clone());

    state.session.sign_in(sarah(), false);
    send(&app, post_json("/employee/clock-in", json!({}))).await;
    let created = body(
        send(
            &app,
            post_json(
                "/employee/leave",
                json!({
                    "leave_type": "Cuti Tahunan",
                    "start_date": "2024-04-01",
                    "end_date": "2024-04-05",
                    "reason": "Mudik"
                }),
            ),
        )
        .await,
    )
    .await;
    let leave_id = created["id"].as_str().unwrap().to_string();

    state.session.sign_in(admin(), false);
    let stats = body(send(&app, get("/admin/dashboard")).await).await;
    assert_eq!(stats["total_employees"], 2);
    assert_eq!(stats["present_today"], 1);
    assert_eq!(stats["pending_leave"], 1);
    assert_eq!(stats["attendance_rate"], 50);
    let activity = body(send(&app, get("/admin/activity")).await).await;
    let actions: Vec<(&str, &str)> = activity
        .as_array()
        .unwrap()
        .iter()
        .map(|a| (a["action"].as_str().unwrap(), a["status"].as_str().unwrap()))
        .collect();
    assert_eq!(actions.len(), 2);
    assert!(actions.contains(&("Clock In", "success")));
    assert!(actions.contains(&("Leave Request", "pending")));

    let response = send(
        &app,
        post_json(
            &format!("/admin/leave/{leave_id}/reject"),
            json!({ "reason": "Stok opname" }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let stats = body(send(&app, get("/admin/dashboard")).await).await;
    assert_eq!(stats["pending_leave"], 0);
    let activity = body(send(&app, get("/admin/activity")).await).await;
    assert_eq!(activity.as_array().unwrap().len(), 1);
    assert_eq!(activity[0]["employee"], "Sarah Johnson");
}
