use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppError,
    models::user::{Credentials, User},
    AppState,
};

pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<Credentials>,
) -> Result<(StatusCode, Json<User>), AppError> {
    let user = state
        .auth
        .register(&payload.username, &payload.password)
        .await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Responds with the bare token string as the JSON body.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<Credentials>,
) -> Result<Json<String>, AppError> {
    let token = state
        .auth
        .issue_token(&payload.username, &payload.password)
        .await?;

    Ok(Json(token))
}
