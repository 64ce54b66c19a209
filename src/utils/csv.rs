use crate::models::responses::BookRow;

pub const CSV_HEADER: [&str; 8] = [
    "ID",
    "Rating",
    "Author",
    "Title",
    "First Publish Year",
    "Subjects",
    "Author Birth Date",
    "Author Top Work",
];

/// Serializes the currently loaded page (never the full result set) as
/// comma-joined rows under the fixed header.
// TODO: quote fields containing commas; joined author/subject lists
// currently break the column count for consumers that split on commas.
pub fn page_to_csv(rows: &[BookRow]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(CSV_HEADER.join(","));

    for row in rows {
        lines.push(
            [
                row.id.to_string(),
                row.rating.clone(),
                row.author.clone(),
                row.title.clone(),
                row.first_publish_year.clone(),
                row.subjects.clone(),
                row.author_birth_date.clone(),
                row.author_top_work.clone(),
            ]
            .join(","),
        );
    }

    lines.join("\n")
}
