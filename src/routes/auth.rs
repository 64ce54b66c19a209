use crate::services::controller::{AppState, SessionSet};
use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::{IntoResponse, Redirect},
};
use tracing::info;
use uuid::Uuid;

const SESSION_COOKIE: &str = "sid";

/// Extracts the session id from the request cookies, if any.
pub fn session_id(headers: &HeaderMap) -> Option<Uuid> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|part| {
        part.trim()
            .strip_prefix("sid=")
            .and_then(|value| Uuid::parse_str(value).ok())
    })
}

/// Binary access check: a request is authenticated exactly when it
/// carries a session id this process has seen complete the login
/// redirect. There are no roles beyond this.
pub fn is_authenticated(headers: &HeaderMap, sessions: &SessionSet) -> bool {
    match session_id(headers) {
        Some(id) => sessions.lock().unwrap().contains(&id),
        None => false,
    }
}

/// GET /auth/login
///
/// Hands the browser to the identity provider, which redirects back to
/// /auth/callback on success.
pub async fn login(State(app): State<AppState>) -> Redirect {
    let target = format!(
        "{}/authorize?redirect_uri={}/auth/callback",
        app.auth.provider_url, app.auth.public_url
    );
    Redirect::to(&target)
}

/// GET /auth/callback
///
/// The provider's return leg. Reaching it is trusted as provider
/// success; the token lifecycle itself lives with the provider.
pub async fn callback(State(app): State<AppState>) -> impl IntoResponse {
    let id = Uuid::new_v4();
    app.sessions.lock().unwrap().insert(id);
    info!("session {} authenticated", id);

    (
        [(
            header::SET_COOKIE,
            format!("{}={}; Path=/; HttpOnly", SESSION_COOKIE, id),
        )],
        Redirect::to("/"),
    )
}

/// GET /auth/logout
///
/// Drops the session and sends the browser to the provider logout with
/// this service as the post-logout return URL.
pub async fn logout(State(app): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    if let Some(id) = session_id(&headers) {
        app.sessions.lock().unwrap().remove(&id);
        info!("session {} logged out", id);
    }

    let target = format!(
        "{}/logout?returnTo={}",
        app.auth.provider_url, app.auth.public_url
    );
    (
        [(
            header::SET_COOKIE,
            format!("{}=; Path=/; Max-Age=0", SESSION_COOKIE),
        )],
        Redirect::to(&target),
    )
}
