//! Page routes.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::routes::auth::is_authenticated;
use crate::AppState;

/// GET /
/// Serves the app shell. Redirects to the login page when a password is
/// configured and the session is missing.
pub async fn index(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if !is_authenticated(&state, &headers) {
        return Redirect::to("/login").into_response();
    }

    let path = state.config.static_dir.join("index.html");
    match tokio::fs::read_to_string(&path).await {
        Ok(content) => Html(content).into_response(),
        Err(_) => (
            StatusCode::NOT_FOUND,
            format!("{} not found", path.display()),
        )
            .into_response(),
    }
}
