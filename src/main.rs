use axum::{
    routing::{get, post},
    Router,
};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use dashboard_service::routes::{
    auth::{callback, login, logout},
    controls::{change_author_filter, change_limit, change_sort, next_page, prev_page},
    dashboard::dashboard_page,
    export::{api_state, export_csv},
    health::health_check,
};
use dashboard_service::services::controller::{
    run_load_cycle, AppState, AuthConfig, DashboardState,
};
use dashboard_service::services::openlibrary::{OpenLibraryClient, SearchBackend, DEFAULT_BASE_URL};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("dashboard_service=info,tower_http=info")
        .init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "7004".to_string());
    let base_url =
        std::env::var("OPENLIBRARY_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let provider_url = std::env::var("AUTH_PROVIDER_URL")
        .unwrap_or_else(|_| "https://dashboard.example.auth0.com".to_string());
    let public_url =
        std::env::var("PUBLIC_URL").unwrap_or_else(|_| format!("http://localhost:{}", port));

    let backend: Arc<dyn SearchBackend + Send + Sync> =
        Arc::new(OpenLibraryClient::new(base_url));
    let app_state = AppState {
        dashboard: Arc::new(Mutex::new(DashboardState::new())),
        sessions: Arc::new(Mutex::new(HashSet::new())),
        backend,
        auth: AuthConfig {
            provider_url,
            public_url,
        },
    };

    // First page load so the dashboard opens populated.
    {
        let dashboard = app_state.dashboard.clone();
        let backend = app_state.backend.clone();
        tokio::spawn(async move {
            run_load_cycle(&dashboard, &backend).await;
        });
    }

    let app = Router::new()
        .route("/", get(dashboard_page))
        .route("/status", get(health_check))
        .route("/auth/login", get(login))
        .route("/auth/callback", get(callback))
        .route("/auth/logout", get(logout))
        .route("/controls/next", post(next_page))
        .route("/controls/prev", post(prev_page))
        .route("/controls/limit", post(change_limit))
        .route("/controls/sort", post(change_sort))
        .route("/controls/author", post(change_author_filter))
        .route("/export/csv", get(export_csv))
        .route("/api/state", get(api_state))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(app_state);

    let addr = format!("0.0.0.0:{}", port);

    info!("Dashboard service starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
