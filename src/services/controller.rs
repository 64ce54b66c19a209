use crate::models::page::PageState;
use crate::models::records::{AuthorDetail, BookDoc};
use crate::services::enrichment::enrich_authors;
use crate::services::openlibrary::SearchBackend;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use tracing::{error, warn};
use uuid::Uuid;

/// Everything the dashboard currently shows. Books, authors and total
/// are only ever replaced together, under a single lock acquisition per
/// completed load cycle.
#[derive(Debug, Default)]
pub struct DashboardState {
    pub view: PageState,
    pub books: Vec<BookDoc>,
    pub authors: HashMap<String, AuthorDetail>,
    pub loading: bool,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }
}

pub type SharedDashboard = Arc<Mutex<DashboardState>>;
pub type SessionSet = Arc<Mutex<HashSet<Uuid>>>;

/// External identity provider endpoints and this service's own origin,
/// used to build the login/logout redirects.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub provider_url: String,
    pub public_url: String,
}

#[derive(Clone)]
pub struct AppState {
    pub dashboard: SharedDashboard,
    pub sessions: SessionSet,
    pub backend: Arc<dyn SearchBackend + Send + Sync>,
    pub auth: AuthConfig,
}

/// Runs one fetch+enrich cycle against the current view state and
/// commits the merged result.
///
/// The view is snapshotted up front and the lock is not held across the
/// remote calls. Overlapping cycles are not sequenced or cancelled, so
/// completions commit in arrival order. Any book-search failure leaves
/// the previously committed page on screen; an enrichment failure
/// commits the fresh books with an empty author map. Both are logged and
/// otherwise silent.
pub async fn run_load_cycle(
    dashboard: &SharedDashboard,
    backend: &Arc<dyn SearchBackend + Send + Sync>,
) {
    let view = {
        let mut state = dashboard.lock().unwrap();
        state.loading = true;
        state.view.clone()
    };

    let page = match backend.search_books(&view).await {
        Ok(page) => page,
        Err(e) => {
            error!("book search failed: {}", e);
            dashboard.lock().unwrap().loading = false;
            return;
        }
    };

    let authors = match enrich_authors(backend, &page.docs).await {
        Ok(authors) => authors,
        Err(e) => {
            warn!("author enrichment abandoned: {}", e);
            HashMap::new()
        }
    };

    let mut state = dashboard.lock().unwrap();
    state.books = page.docs;
    state.authors = authors;
    state.view.total = page.num_found;
    state.loading = false;
}
