use crate::models::responses::{merge_rows, StateResponse};
use crate::routes::auth::is_authenticated;
use crate::services::controller::AppState;
use crate::utils::csv::page_to_csv;
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Json, Redirect, Response},
};

/// GET /export/csv
///
/// Serializes the currently loaded page (never the full result set) and
/// serves it as a `books.csv` download.
pub async fn export_csv(State(app): State<AppState>, headers: HeaderMap) -> Response {
    if !is_authenticated(&headers, &app.sessions) {
        return Redirect::to("/").into_response();
    }

    let csv = {
        let state = app.dashboard.lock().unwrap();
        page_to_csv(&merge_rows(&state.books, &state.authors, state.view.offset))
    };

    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"books.csv\"",
            ),
        ],
        csv,
    )
        .into_response()
}

/// GET /api/state
///
/// JSON view of the merged page, mirroring what the HTML table shows.
pub async fn api_state(
    State(app): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<StateResponse>, StatusCode> {
    if !is_authenticated(&headers, &app.sessions) {
        return Err(StatusCode::UNAUTHORIZED);
    }

    let state = app.dashboard.lock().unwrap();
    let rows = merge_rows(&state.books, &state.authors, state.view.offset);

    Ok(Json(StateResponse {
        count: rows.len(),
        total: state.view.total,
        offset: state.view.offset,
        limit: state.view.limit,
        sort: state.view.sort,
        author_filter: state.view.author_filter.clone(),
        loading: state.loading,
        rows,
    }))
}
