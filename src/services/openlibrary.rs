use crate::models::page::PageState;
use crate::models::records::{AuthorDoc, AuthorSearchResponse, BookPage, SearchResponse};
use async_trait::async_trait;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://openlibrary.org";

/// Fixed projection requested from the search endpoint.
const SEARCH_FIELDS: &str = "title,author_name,first_publish_year,subject,ratings_average";

/// Year range the dashboard is scoped to.
const YEAR_RANGE_CLAUSE: &str = "publish_year:[2020 TO 2024]";

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("unexpected API status {0}")]
    Api(u16),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("author lookup task failed: {0}")]
    Task(String),
}

/// Seam between the load cycle and the remote API. Production uses
/// [`OpenLibraryClient`]; the integration tests substitute an in-memory
/// fake.
#[async_trait]
pub trait SearchBackend {
    /// Fetches one page of books plus the total match count.
    async fn search_books(&self, view: &PageState) -> Result<BookPage, FetchError>;

    /// Looks up an author by display name, keeping only the first
    /// candidate the remote returns.
    async fn search_author(&self, name: &str) -> Result<Option<AuthorDoc>, FetchError>;
}

/// Translates the view state into the remote search endpoint's query
/// parameters. Pure transformation, no side effects.
pub fn build_search_query(view: &PageState) -> Vec<(&'static str, String)> {
    let mut query = String::from(YEAR_RANGE_CLAUSE);
    if !view.author_filter.is_empty() {
        query.push_str(&format!(" AND author:\"{}\"", view.author_filter));
    }

    vec![
        ("q", query),
        ("fields", SEARCH_FIELDS.to_string()),
        ("sort", view.sort.as_query_token().to_string()),
        ("offset", view.offset.to_string()),
        ("limit", view.limit.to_string()),
    ]
}

/// HTTP client for the Open Library search and author endpoints.
///
/// No retries and no timeout are configured; a hung request hangs the
/// whole load cycle.
pub struct OpenLibraryClient {
    client: reqwest::Client,
    base_url: String,
}

impl OpenLibraryClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).query(params).send().await?;

        if !response.status().is_success() {
            return Err(FetchError::Api(response.status().as_u16()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl SearchBackend for OpenLibraryClient {
    async fn search_books(&self, view: &PageState) -> Result<BookPage, FetchError> {
        let params = build_search_query(view);
        let response: SearchResponse = self.get_json("/search.json", &params).await?;
        Ok(response.into())
    }

    async fn search_author(&self, name: &str) -> Result<Option<AuthorDoc>, FetchError> {
        let params = [("q", name.to_string())];
        let response: AuthorSearchResponse =
            self.get_json("/search/authors.json", &params).await?;
        Ok(response.docs.into_iter().next())
    }
}
