use crate::models::page::{PageState, SortMode, PAGE_SIZES};
use crate::models::responses::merge_rows;
use crate::routes::auth::is_authenticated;
use crate::services::controller::{AppState, DashboardState};
use axum::{
    extract::State,
    http::HeaderMap,
    response::Html,
};

/// GET /
///
/// Landing panel for anonymous visitors, dashboard for authenticated
/// sessions.
pub async fn dashboard_page(State(app): State<AppState>, headers: HeaderMap) -> Html<String> {
    if !is_authenticated(&headers, &app.sessions) {
        return Html(render_landing());
    }

    let state = app.dashboard.lock().unwrap();
    Html(render_dashboard(&state))
}

const PAGE_STYLE: &str = r#"
        body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; margin: 0; background-color: #f5f3ee; color: #222; }
        header { background-color: #2c3e50; color: #fff; padding: 16px 24px; display: flex; justify-content: space-between; align-items: center; }
        header h1 { margin: 0; font-size: 22px; }
        .container { padding: 24px; }
        .controls { display: flex; gap: 16px; align-items: center; flex-wrap: wrap; margin-bottom: 16px; }
        .controls form { display: inline-flex; gap: 6px; align-items: center; }
        table { border-collapse: collapse; width: 100%; background-color: #fff; }
        th, td { border: 1px solid #d0ccc2; padding: 6px 10px; text-align: left; font-size: 14px; }
        th { background-color: #e8e4da; }
        button { cursor: pointer; }
        button:disabled { cursor: default; opacity: 0.5; }
        .pagination { margin-top: 12px; display: flex; gap: 8px; }
        .spinner { margin: 40px auto; text-align: center; color: #666; }
        .features-list { line-height: 1.8; }
"#;

fn render_landing() -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Open Library Books</title>
    <style>{style}</style>
</head>
<body>
    <header><h1>Open Library Books</h1></header>
    <div class="container">
        <h2>Admins Dashboard</h2>
        <ul class="features-list">
            <li>Books Rating</li>
            <li>Book Title</li>
            <li>First Publish Year</li>
            <li>Author Birth Date</li>
            <li>Author Top Work</li>
            <li>Sort the books according to newest, oldest, ratings, etc.</li>
            <li>Download the data in CSV file</li>
            <li>Search the books by Author Names</li>
        </ul>
        <hr>
        <p><a href="/auth/login"><button>SignUp/SignIn for Dashboard</button></a></p>
    </div>
</body>
</html>"#,
        style = PAGE_STYLE,
    )
}

fn render_dashboard(state: &DashboardState) -> String {
    let body = if state.loading {
        "<div class=\"spinner\">Loading…</div>".to_string()
    } else {
        format!(
            "{table}\n{pagination}",
            table = render_table(state),
            pagination = render_pagination(&state.view),
        )
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Open Library Books</title>
    <style>{style}</style>
</head>
<body>
    <header>
        <h1>Open Library Books</h1>
        <a href="/auth/logout"><button>Log Out</button></a>
    </header>
    <div class="container">
        {controls}
        {body}
    </div>
</body>
</html>"#,
        style = PAGE_STYLE,
        controls = render_controls(&state.view),
        body = body,
    )
}

fn render_controls(view: &PageState) -> String {
    let limit_options: String = PAGE_SIZES
        .iter()
        .map(|size| {
            format!(
                "<option value=\"{size}\"{selected}>{size}</option>",
                size = size,
                selected = if *size == view.limit { " selected" } else { "" },
            )
        })
        .collect();

    let sort_options: String = SortMode::OPTIONS
        .iter()
        .map(|(value, label)| {
            format!(
                "<option value=\"{value}\"{selected}>{label}</option>",
                value = value,
                label = label,
                selected = if *value == view.sort.as_param() {
                    " selected"
                } else {
                    ""
                },
            )
        })
        .collect();

    format!(
        r#"<div class="controls">
            <form method="post" action="/controls/limit">
                <label>Items per page: <select name="value">{limit_options}</select></label>
                <button type="submit">Apply</button>
            </form>
            <form method="post" action="/controls/sort">
                <label>Sort by: <select name="value">{sort_options}</select></label>
                <button type="submit">Apply</button>
            </form>
            <form method="post" action="/controls/author">
                <label>Search by Author: <input type="text" name="author" value="{filter}"></label>
                <button type="submit">Search</button>
            </form>
            <a href="/export/csv"><button type="button">Download as CSV</button></a>
        </div>"#,
        limit_options = limit_options,
        sort_options = sort_options,
        filter = view.author_filter,
    )
}

fn render_table(state: &DashboardState) -> String {
    let rows: String = merge_rows(&state.books, &state.authors, state.view.offset)
        .iter()
        .map(|row| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                row.id,
                row.rating,
                row.author,
                row.title,
                row.first_publish_year,
                row.subjects,
                row.author_birth_date,
                row.author_top_work,
            )
        })
        .collect();

    format!(
        r#"<table>
            <thead>
                <tr><th>ID</th><th>Rating</th><th>Author</th><th>Title</th><th>First Publish Year</th><th>Subjects</th><th>Author Birth Date</th><th>Author Top Work</th></tr>
            </thead>
            <tbody>
            {rows}
            </tbody>
        </table>"#,
        rows = rows,
    )
}

fn render_pagination(view: &PageState) -> String {
    format!(
        r#"<div class="pagination">
            <form method="post" action="/controls/prev"><button type="submit"{prev}>Previous</button></form>
            <form method="post" action="/controls/next"><button type="submit"{next}>Next</button></form>
        </div>"#,
        prev = if view.can_go_prev() { "" } else { " disabled" },
        next = if view.can_go_next() { "" } else { " disabled" },
    )
}
