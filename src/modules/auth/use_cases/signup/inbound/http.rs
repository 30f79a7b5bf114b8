use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;

use crate::modules::auth::core::user::Role;
use crate::modules::auth::use_cases::signup::command::Signup;
use crate::modules::auth::use_cases::signup::handler::SignupError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct SignupBody {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default = "default_role")]
    pub role: Role,
}

fn default_role() -> Role {
    Role::Employee
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<SignupBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = Signup {
        name: body.name,
        email: body.email,
        password: body.password,
        role: body.role,
    };

    match state.signup_handler.handle(command).await {
        Ok(user) => (StatusCode::CREATED, Json(user)).into_response(),
        Err(SignupError::Validation(e)) => {
            (StatusCode::BAD_REQUEST, Json(json!({ "error": e.to_string() }))).into_response()
        }
        Err(SignupError::EmailTaken) => (
            StatusCode::CONFLICT,
            Json(json!({ "error": "Email sudah terdaftar" })),
        )
            .into_response(),
        Err(SignupError::Directory(_)) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
