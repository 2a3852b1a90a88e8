//! Cookie-session authentication: login/logout pages and the API guard.

use axum::{
    body::Body,
    extract::{Request, State},
    http::{
        header::{COOKIE, SET_COOKIE},
        HeaderMap,
    },
    middleware::Next,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::AppState;

pub const SESSION_COOKIE: &str = "session_token";

const SESSION_MAX_AGE_SECS: u32 = 7 * 86400;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub password: String,
}

/// Middleware guarding the API routes. Everything is open when no
/// password is configured.
pub async fn require_session(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Result<Response> {
    if !state.config.auth_enabled() {
        return Ok(next.run(request).await);
    }

    let authenticated = session_token(request.headers())
        .map(|token| state.sessions.validate(&token))
        .unwrap_or(false);

    if !authenticated {
        return Err(ApiError::Unauthorized("Not authenticated".to_string()));
    }

    Ok(next.run(request).await)
}

/// Whether the request carries a live session (or auth is disabled).
pub fn is_authenticated(state: &AppState, headers: &HeaderMap) -> bool {
    if !state.config.auth_enabled() {
        return true;
    }
    session_token(headers)
        .map(|token| state.sessions.validate(&token))
        .unwrap_or(false)
}

/// GET /login
pub async fn login_page(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if !state.config.auth_enabled() || is_authenticated(&state, &headers) {
        return Redirect::to("/").into_response();
    }
    Html(render_login_page(None)).into_response()
}

/// POST /login
pub async fn login(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Response {
    if !state.config.auth_enabled() {
        return Redirect::to("/").into_response();
    }

    if verify_password(&form.password, &state.config.app_password) {
        let token = state.sessions.issue();
        tracing::info!("User logged in");
        let cookie = session_cookie(&token, &state.config);
        ([(SET_COOKIE, cookie)], Redirect::to("/")).into_response()
    } else {
        tracing::warn!("Failed login attempt");
        Html(render_login_page(Some("Invalid password"))).into_response()
    }
}

/// GET /logout
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(token) = session_token(&headers) {
        state.sessions.revoke(&token);
    }
    let expired = format!("{SESSION_COOKIE}=; Path=/; HttpOnly; Max-Age=0");
    ([(SET_COOKIE, expired)], Redirect::to("/login")).into_response()
}

/// Extract the session token from the Cookie header, if present.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    headers.get_all(COOKIE).iter().find_map(|value| {
        value.to_str().ok().and_then(|cookies| {
            cookies.split(';').find_map(|pair| {
                let (name, token) = pair.trim().split_once('=')?;
                (name == SESSION_COOKIE).then(|| token.to_string())
            })
        })
    })
}

/// Compare fixed-length digests so equality does not short-circuit on the
/// raw password bytes.
fn verify_password(provided: &str, expected: &str) -> bool {
    Sha256::digest(provided.as_bytes()) == Sha256::digest(expected.as_bytes())
}

fn session_cookie(token: &str, config: &Config) -> String {
    let mut cookie = format!(
        "{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={SESSION_MAX_AGE_SECS}"
    );
    if !config.debug {
        cookie.push_str("; Secure");
    }
    cookie
}

const LOGIN_PAGE_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Login - VietCards</title>
    <script src="https://cdn.tailwindcss.com"></script>
</head>
<body class="bg-gray-100 min-h-screen flex items-center justify-center">
    <div class="bg-white p-8 rounded-xl shadow-lg w-full max-w-sm">
        <h1 class="text-2xl font-bold text-center mb-6">VietCards</h1>
        {error}
        <form method="POST" action="/login" class="space-y-4">
            <div>
                <label class="block text-sm font-medium text-gray-700 mb-1">Password</label>
                <input
                    type="password"
                    name="password"
                    class="w-full px-3 py-2 border border-gray-300 rounded focus:border-blue-500 focus:outline-none"
                    autofocus
                    required
                >
            </div>
            <button
                type="submit"
                class="w-full bg-blue-600 text-white py-2 rounded font-medium hover:bg-blue-700"
            >
                Login
            </button>
        </form>
    </div>
</body>
</html>
"#;

fn render_login_page(error: Option<&str>) -> String {
    let error_html = error
        .map(|e| format!(r#"<div class="bg-red-100 text-red-800 p-3 rounded mb-4 text-sm">{e}</div>"#))
        .unwrap_or_default();
    LOGIN_PAGE_HTML.replace("{error}", &error_html)
}
