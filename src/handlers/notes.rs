use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};

use crate::{
    auth::AuthUser,
    error::AppError,
    models::note::{CreateNote, NewNote, Note},
    AppState,
};

pub async fn create_note(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(payload): Json<CreateNote>,
) -> Result<(StatusCode, Json<Note>), AppError> {
    let due_date = chrono::DateTime::parse_from_rfc3339(&payload.due_date)
        .map_err(|_| AppError::BadDate)?
        .with_timezone(&chrono::Utc);

    let note = state
        .notes
        .create(NewNote {
            user_id: user.id,
            title: payload.title,
            description: payload.description,
            due_date,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(note)))
}

pub async fn list_notes(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Response, AppError> {
    let notes = state.notes.list(user.id).await?;

    if notes.is_empty() {
        return Ok(Json("note list is empty").into_response());
    }
    Ok(Json(notes).into_response())
}
