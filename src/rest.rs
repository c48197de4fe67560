use axum::{
    extract::{Request, State},
    http::header,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};

use crate::{error::AppError, handlers, AppState};

/// Bearer-token middleware for the note routes. Rejects the request before
/// the handler runs unless a valid token is presented, and stashes the
/// authenticated identity in the request extensions.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(AppError::Unauthenticated)?;

    let user = state.auth.validate_token(token)?;
    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}

pub fn router(state: AppState) -> Router {
    let auth_routes = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login));

    // Auth routes stay outside this layer by construction.
    let note_routes = Router::new()
        .route("/new", post(handlers::notes::create_note))
        .route("/list", get(handlers::notes::list_notes))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .nest("/auth", auth_routes)
        .nest("/notes", note_routes)
        .with_state(state)
}
