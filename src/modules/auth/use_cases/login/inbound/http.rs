use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::modules::auth::core::user::User;
use crate::modules::auth::use_cases::guard_route::decide::landing_route;
use crate::modules::auth::use_cases::login::command::Login;
use crate::modules::auth::use_cases::login::handler::LoginError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct LoginBody {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub remember: bool,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub user: User,
    pub redirect_to: &'static str,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<LoginBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = Login {
        email: body.email,
        password: body.password,
        remember: body.remember,
    };

    match state.login_handler.handle(command).await {
        Ok(user) => {
            let redirect_to = landing_route(&user);
            Json(LoginResponse { user, redirect_to }).into_response()
        }
        Err(LoginError::Validation(e)) => {
            (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() }))).into_response()
        }
        Err(LoginError::InvalidCredentials) => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Email atau password tidak valid" })),
        )
            .into_response(),
        Err(LoginError::Directory(_)) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
