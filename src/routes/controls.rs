use crate::models::page::SortMode;
use crate::routes::auth::is_authenticated;
use crate::services::controller::{run_load_cycle, AppState};
use axum::{
    extract::{Form, State},
    http::HeaderMap,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LimitForm {
    pub value: usize,
}

#[derive(Debug, Deserialize)]
pub struct SortForm {
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct AuthorForm {
    pub author: String,
}

/// POST /controls/next
pub async fn next_page(State(app): State<AppState>, headers: HeaderMap) -> Response {
    if !is_authenticated(&headers, &app.sessions) {
        return Redirect::to("/").into_response();
    }
    {
        app.dashboard.lock().unwrap().view.next_page();
    }
    run_load_cycle(&app.dashboard, &app.backend).await;
    Redirect::to("/").into_response()
}

/// POST /controls/prev
pub async fn prev_page(State(app): State<AppState>, headers: HeaderMap) -> Response {
    if !is_authenticated(&headers, &app.sessions) {
        return Redirect::to("/").into_response();
    }
    {
        app.dashboard.lock().unwrap().view.prev_page();
    }
    run_load_cycle(&app.dashboard, &app.backend).await;
    Redirect::to("/").into_response()
}

/// POST /controls/limit
pub async fn change_limit(
    State(app): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<LimitForm>,
) -> Response {
    if !is_authenticated(&headers, &app.sessions) {
        return Redirect::to("/").into_response();
    }
    {
        app.dashboard.lock().unwrap().view.set_limit(form.value);
    }
    run_load_cycle(&app.dashboard, &app.backend).await;
    Redirect::to("/").into_response()
}

/// POST /controls/sort
pub async fn change_sort(
    State(app): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<SortForm>,
) -> Response {
    if !is_authenticated(&headers, &app.sessions) {
        return Redirect::to("/").into_response();
    }
    {
        app.dashboard
            .lock()
            .unwrap()
            .view
            .set_sort(SortMode::from_param(&form.value));
    }
    run_load_cycle(&app.dashboard, &app.backend).await;
    Redirect::to("/").into_response()
}

/// POST /controls/author
pub async fn change_author_filter(
    State(app): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<AuthorForm>,
) -> Response {
    if !is_authenticated(&headers, &app.sessions) {
        return Redirect::to("/").into_response();
    }
    {
        app.dashboard
            .lock()
            .unwrap()
            .view
            .set_author_filter(form.author);
    }
    run_load_cycle(&app.dashboard, &app.backend).await;
    Redirect::to("/").into_response()
}
