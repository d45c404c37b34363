use axum::{
    extract::State,
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::{error, info, instrument, warn};

use crate::auth::dto::{
    LoginRequest, PublicUser, RecoverRequest, RecoveryResponse, RegisterRequest,
};
use crate::auth::services::{self, LoginOutcome, RecoveryOutcome, RegistrationOutcome};
use crate::state::AppState;

/// Message the shell shows after a recovery request.
const RECOVERY_MESSAGE: &str = "Password recovery instructions have been sent to your email.";

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/recover", post(recover))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<PublicUser>), (StatusCode, String)> {
    match services::submit_registration(&state.db, payload).await {
        Ok(RegistrationOutcome::Success(user)) => {
            info!(user_id = user.id, email = %user.email, "user registered");
            Ok((StatusCode::CREATED, Json(PublicUser::from(user))))
        }
        Ok(RegistrationOutcome::MissingFields) => Err((
            StatusCode::BAD_REQUEST,
            "Please fill in all fields".into(),
        )),
        Ok(RegistrationOutcome::PasswordMismatch) => Err((
            StatusCode::BAD_REQUEST,
            "Passwords do not match".into(),
        )),
        Ok(RegistrationOutcome::EmailTaken) => Err((
            StatusCode::CONFLICT,
            "Email already registered".into(),
        )),
        Err(e) => {
            error!(error = %e, "register failed");
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<PublicUser>, (StatusCode, String)> {
    match services::submit_login(&state.db, &payload.email, &payload.password).await {
        Ok(LoginOutcome::Success(user)) => {
            info!(user_id = user.id, email = %user.email, "user logged in");
            Ok(Json(PublicUser::from(user)))
        }
        Ok(LoginOutcome::MissingFields) => Err((
            StatusCode::BAD_REQUEST,
            "Please enter your email and password".into(),
        )),
        Ok(LoginOutcome::InvalidCredentials) => {
            warn!(email = %payload.email, "login with invalid credentials");
            Err((StatusCode::UNAUTHORIZED, "Invalid credentials".into()))
        }
        Err(e) => {
            error!(error = %e, "login failed");
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

#[instrument(skip(payload))]
pub async fn recover(Json(payload): Json<RecoverRequest>) -> Json<RecoveryResponse> {
    match services::request_password_recovery(&payload.email) {
        RecoveryOutcome::Acknowledged => {
            info!(email = %payload.email, "password recovery requested");
            Json(RecoveryResponse {
                message: RECOVERY_MESSAGE.to_string(),
            })
        }
    }
}
