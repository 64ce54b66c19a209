use crate::models::records::{AuthorDetail, BookDoc};
use crate::services::openlibrary::{FetchError, SearchBackend};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Fetches author details for one page of books and builds the lookup
/// map keyed by the name the remote returned.
///
/// One lookup is issued per record that has a first author. Duplicate
/// authors across records are not deduplicated, so a page of N authored
/// books always issues N calls. The tasks run in parallel and
/// are joined in issue order; the first result per name wins. If any
/// single lookup fails the whole map is abandoned and the caller renders
/// the page without author detail.
pub async fn enrich_authors(
    backend: &Arc<dyn SearchBackend + Send + Sync>,
    books: &[BookDoc],
) -> Result<HashMap<String, AuthorDetail>, FetchError> {
    let mut lookups: Vec<JoinHandle<_>> = Vec::new();

    for book in books {
        let Some(name) = book.primary_author() else {
            continue;
        };
        let backend = Arc::clone(backend);
        let name = name.to_string();
        lookups.push(tokio::spawn(
            async move { backend.search_author(&name).await },
        ));
    }

    let mut authors = HashMap::new();
    for lookup in lookups {
        let candidate = lookup
            .await
            .map_err(|e| FetchError::Task(e.to_string()))??;
        if let Some(doc) = candidate {
            authors
                .entry(doc.name.clone())
                .or_insert_with(|| AuthorDetail::from(doc));
        }
    }

    Ok(authors)
}
