use crate::models::page::SortMode;
use crate::models::records::{AuthorDetail, BookDoc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Placeholder rendered for every absent optional field.
pub const MISSING_FIELD: &str = "N/A";

#[derive(Deserialize, Serialize, Debug)]
pub struct HealthResponse {
    pub service: String,
    pub status: String,
}

/// One fully merged dashboard row. The same row feeds the HTML table,
/// the CSV export and the JSON state view, so all three agree on
/// formatting and placeholders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookRow {
    pub id: usize,
    pub rating: String,
    pub author: String,
    pub title: String,
    pub first_publish_year: String,
    pub subjects: String,
    pub author_birth_date: String,
    pub author_top_work: String,
}

impl BookRow {
    /// Merges one book with its enrichment lookup. `index` is the
    /// position within the current page; the visible ID is 1-based and
    /// continues across pages.
    pub fn build(
        index: usize,
        offset: usize,
        book: &BookDoc,
        authors: &HashMap<String, AuthorDetail>,
    ) -> Self {
        let detail = book
            .primary_author()
            .and_then(|name| authors.get(name));

        Self {
            id: index + 1 + offset,
            rating: book
                .ratings_average
                .map(|rating| rating.to_string())
                .unwrap_or_else(|| MISSING_FIELD.to_string()),
            author: book
                .author_name
                .as_deref()
                .map(|names| names.join(", "))
                .unwrap_or_else(|| MISSING_FIELD.to_string()),
            title: book
                .title
                .clone()
                .unwrap_or_else(|| MISSING_FIELD.to_string()),
            first_publish_year: book
                .first_publish_year
                .map(|year| year.to_string())
                .unwrap_or_else(|| MISSING_FIELD.to_string()),
            subjects: book
                .subject
                .as_deref()
                .map(|subjects| subjects.join(", "))
                .unwrap_or_else(|| MISSING_FIELD.to_string()),
            author_birth_date: detail
                .and_then(|detail| detail.birth_date.clone())
                .unwrap_or_else(|| MISSING_FIELD.to_string()),
            author_top_work: detail
                .and_then(|detail| detail.top_work.clone())
                .unwrap_or_else(|| MISSING_FIELD.to_string()),
        }
    }
}

/// Builds the merged rows for the currently loaded page.
pub fn merge_rows(
    books: &[BookDoc],
    authors: &HashMap<String, AuthorDetail>,
    offset: usize,
) -> Vec<BookRow> {
    books
        .iter()
        .enumerate()
        .map(|(index, book)| BookRow::build(index, offset, book, authors))
        .collect()
}

/// JSON view of the current dashboard state, the service-facing twin of
/// the HTML table.
#[derive(Debug, Serialize, Deserialize)]
pub struct StateResponse {
    pub count: usize,
    pub total: usize,
    pub offset: usize,
    pub limit: usize,
    pub sort: SortMode,
    pub author_filter: String,
    pub loading: bool,
    pub rows: Vec<BookRow>,
}
