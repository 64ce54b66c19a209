use serde::{Deserialize, Serialize};

/// One book document as returned by the Open Library search endpoint.
/// Every field is optional in the remote schema; absent values render as
/// `N/A` rather than failing the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookDoc {
    pub title: Option<String>,
    pub author_name: Option<Vec<String>>,
    pub first_publish_year: Option<i32>,
    pub subject: Option<Vec<String>>,
    pub ratings_average: Option<f64>,
}

impl BookDoc {
    /// First listed author, used as the enrichment lookup key.
    /// Records with no (or blank) author list are not enriched.
    pub fn primary_author(&self) -> Option<&str> {
        self.author_name
            .as_deref()
            .and_then(|names| names.first())
            .map(|name| name.as_str())
            .filter(|name| !name.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub docs: Vec<BookDoc>,
    #[serde(rename = "numFound")]
    pub num_found: usize,
}

/// One page of book results plus the total match count.
#[derive(Debug, Clone)]
pub struct BookPage {
    pub docs: Vec<BookDoc>,
    pub num_found: usize,
}

impl From<SearchResponse> for BookPage {
    fn from(response: SearchResponse) -> Self {
        Self {
            docs: response.docs,
            num_found: response.num_found,
        }
    }
}

/// One author document as returned by the author search endpoint.
/// Only the first candidate of a response is ever kept; ambiguous names
/// are not disambiguated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorDoc {
    pub name: String,
    pub birth_date: Option<String>,
    pub top_work: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorSearchResponse {
    pub docs: Vec<AuthorDoc>,
}

/// Author metadata retained per distinct name after enrichment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorDetail {
    pub birth_date: Option<String>,
    pub top_work: Option<String>,
}

impl From<AuthorDoc> for AuthorDetail {
    fn from(doc: AuthorDoc) -> Self {
        Self {
            birth_date: doc.birth_date,
            top_work: doc.top_work,
        }
    }
}
