//! Integration tests for the fetch+enrich load cycle, driven against an
//! in-memory search backend.

use async_trait::async_trait;
use dashboard_service::models::records::{AuthorDetail, AuthorDoc, BookDoc, BookPage};
use dashboard_service::services::controller::{run_load_cycle, DashboardState, SharedDashboard};
use dashboard_service::services::enrichment::enrich_authors;
use dashboard_service::services::openlibrary::{FetchError, SearchBackend};
use dashboard_service::models::page::PageState;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

fn book(title: &str, authors: &[&str]) -> BookDoc {
    BookDoc {
        title: Some(title.to_string()),
        author_name: if authors.is_empty() {
            None
        } else {
            Some(authors.iter().map(|name| name.to_string()).collect())
        },
        first_publish_year: Some(2022),
        subject: None,
        ratings_average: Some(4.0),
    }
}

struct FakeBackend {
    books: Vec<BookDoc>,
    num_found: usize,
    author_calls: AtomicUsize,
    fail_books: bool,
    /// Author name whose lookup fails, to exercise the fail-closed path.
    fail_author: Option<String>,
    /// Name the author endpoint reports back, when it should differ from
    /// the queried one.
    canonical_name: Option<String>,
}

impl FakeBackend {
    fn with_books(books: Vec<BookDoc>) -> Self {
        let num_found = books.len();
        Self {
            books,
            num_found,
            author_calls: AtomicUsize::new(0),
            fail_books: false,
            fail_author: None,
            canonical_name: None,
        }
    }
}

#[async_trait]
impl SearchBackend for FakeBackend {
    async fn search_books(&self, _view: &PageState) -> Result<BookPage, FetchError> {
        if self.fail_books {
            return Err(FetchError::Api(500));
        }
        Ok(BookPage {
            docs: self.books.clone(),
            num_found: self.num_found,
        })
    }

    async fn search_author(&self, name: &str) -> Result<Option<AuthorDoc>, FetchError> {
        self.author_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_author.as_deref() == Some(name) {
            return Err(FetchError::Api(500));
        }
        Ok(Some(AuthorDoc {
            name: self
                .canonical_name
                .clone()
                .unwrap_or_else(|| name.to_string()),
            birth_date: Some(format!("{} birth date", name)),
            top_work: Some(format!("{} top work", name)),
        }))
    }
}

fn shared(state: DashboardState) -> SharedDashboard {
    Arc::new(Mutex::new(state))
}

#[tokio::test]
async fn duplicate_authors_issue_one_call_per_record_but_one_map_entry() {
    let fake = Arc::new(FakeBackend::with_books(vec![
        book("One", &["Alice"]),
        book("Two", &["Alice"]),
        book("Three", &["Bob"]),
        book("Anonymous", &[]),
    ]));
    let backend: Arc<dyn SearchBackend + Send + Sync> = fake.clone();

    let books = fake.books.clone();
    let authors = enrich_authors(&backend, &books).await.unwrap();

    // one call per authored record, no deduplication; the authorless
    // record contributes no call
    assert_eq!(fake.author_calls.load(Ordering::SeqCst), 3);

    // but the map converges to one entry per distinct name
    assert_eq!(authors.len(), 2);
    assert!(authors.contains_key("Alice"));
    assert!(authors.contains_key("Bob"));
}

#[tokio::test]
async fn single_lookup_failure_abandons_whole_enrichment() {
    let mut fake = FakeBackend::with_books(vec![
        book("One", &["Alice"]),
        book("Two", &["Bob"]),
        book("Three", &["Carol"]),
    ]);
    fake.fail_author = Some("Bob".to_string());
    let fake = Arc::new(fake);
    let backend: Arc<dyn SearchBackend + Send + Sync> = fake.clone();

    let books = fake.books.clone();
    assert!(enrich_authors(&backend, &books).await.is_err());
}

#[tokio::test]
async fn map_is_keyed_by_the_name_the_remote_returns() {
    let mut fake = FakeBackend::with_books(vec![book("One", &["J R R Tolkien"])]);
    fake.canonical_name = Some("J.R.R. Tolkien".to_string());
    let fake = Arc::new(fake);
    let backend: Arc<dyn SearchBackend + Send + Sync> = fake.clone();

    let books = fake.books.clone();
    let authors = enrich_authors(&backend, &books).await.unwrap();

    assert!(authors.contains_key("J.R.R. Tolkien"));
    assert!(!authors.contains_key("J R R Tolkien"));
}

#[tokio::test]
async fn load_cycle_commits_books_total_and_authors_together() {
    let fake = Arc::new(FakeBackend::with_books(vec![
        book("One", &["Alice"]),
        book("Two", &["Bob"]),
    ]));
    let backend: Arc<dyn SearchBackend + Send + Sync> = fake.clone();
    let dashboard = shared(DashboardState::new());

    run_load_cycle(&dashboard, &backend).await;

    let state = dashboard.lock().unwrap();
    assert_eq!(state.books.len(), 2);
    assert_eq!(state.view.total, 2);
    assert_eq!(state.authors.len(), 2);
    assert!(!state.loading);
}

#[tokio::test]
async fn enrichment_failure_renders_fresh_books_without_detail() {
    let mut fake = FakeBackend::with_books(vec![book("One", &["Alice"]), book("Two", &["Bob"])]);
    fake.fail_author = Some("Bob".to_string());
    let fake = Arc::new(fake);
    let backend: Arc<dyn SearchBackend + Send + Sync> = fake.clone();

    // stale detail from a previous page must not survive the commit
    let mut previous = DashboardState::new();
    previous.authors.insert(
        "Stale".to_string(),
        AuthorDetail {
            birth_date: None,
            top_work: None,
        },
    );
    let dashboard = shared(previous);

    run_load_cycle(&dashboard, &backend).await;

    let state = dashboard.lock().unwrap();
    assert_eq!(state.books.len(), 2);
    assert!(state.authors.is_empty());
    assert!(!state.loading);
}

#[tokio::test]
async fn search_failure_keeps_previously_loaded_page() {
    let mut fake = FakeBackend::with_books(vec![book("New", &["Alice"])]);
    fake.fail_books = true;
    let fake = Arc::new(fake);
    let backend: Arc<dyn SearchBackend + Send + Sync> = fake.clone();

    let mut previous = DashboardState::new();
    previous.books = vec![book("Old", &["Bob"])];
    previous.authors = HashMap::from([(
        "Bob".to_string(),
        AuthorDetail {
            birth_date: Some("1950".to_string()),
            top_work: Some("Old".to_string()),
        },
    )]);
    previous.view.total = 1;
    let dashboard = shared(previous);

    run_load_cycle(&dashboard, &backend).await;

    let state = dashboard.lock().unwrap();
    assert_eq!(state.books.len(), 1);
    assert_eq!(state.books[0].title.as_deref(), Some("Old"));
    assert_eq!(state.authors.len(), 1);
    assert_eq!(state.view.total, 1);
    assert!(!state.loading);
}
