use serde::{Deserialize, Serialize};

/// Page sizes the limit selector offers.
pub const PAGE_SIZES: [usize; 3] = [5, 10, 15];

/// Sort modes understood by the dashboard controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    None,
    Newest,
    Oldest,
    Title,
    RatingAsc,
    RatingDesc,
}

impl SortMode {
    /// (control value, display label) pairs, in selector order.
    pub const OPTIONS: [(&'static str, &'static str); 6] = [
        ("", "None"),
        ("new", "Newest"),
        ("old", "Oldest"),
        ("title", "Title"),
        ("rating_asc", "Low Rating"),
        ("rating_desc", "High Rating"),
    ];

    /// Maps a control value to a sort mode. Anything unrecognized falls
    /// back to `None` (remote default ordering), not an error.
    pub fn from_param(value: &str) -> Self {
        match value {
            "new" => SortMode::Newest,
            "old" => SortMode::Oldest,
            "title" => SortMode::Title,
            "rating_asc" => SortMode::RatingAsc,
            "rating_desc" => SortMode::RatingDesc,
            _ => SortMode::None,
        }
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            SortMode::None => "",
            SortMode::Newest => "new",
            SortMode::Oldest => "old",
            SortMode::Title => "title",
            SortMode::RatingAsc => "rating_asc",
            SortMode::RatingDesc => "rating_desc",
        }
    }

    /// The `sort` token the remote search endpoint expects. The rating
    /// modes sort on `ratings_sortable`, a numeric key distinct from the
    /// projected fields.
    pub fn as_query_token(&self) -> &'static str {
        match self {
            SortMode::None => "",
            SortMode::Newest => "new",
            SortMode::Oldest => "old",
            SortMode::Title => "title",
            SortMode::RatingAsc => "ratings_sortable asc",
            SortMode::RatingDesc => "ratings_sortable desc",
        }
    }
}

/// Pagination and query state of the dashboard. Mutated only through the
/// transition methods below, each of which corresponds to one user
/// control.
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub offset: usize,
    pub limit: usize,
    pub total: usize,
    pub sort: SortMode,
    pub author_filter: String,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: PAGE_SIZES[0],
            total: 0,
            sort: SortMode::None,
            author_filter: String::new(),
        }
    }
}

impl PageState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn can_go_next(&self) -> bool {
        self.offset + self.limit < self.total
    }

    pub fn can_go_prev(&self) -> bool {
        self.offset > 0
    }

    /// Advances one page. A no-op at the last page; the button is
    /// rendered disabled in the same condition.
    pub fn next_page(&mut self) {
        if self.can_go_next() {
            self.offset += self.limit;
        }
    }

    /// Goes back one page, clamped at the first.
    pub fn prev_page(&mut self) {
        self.offset = self.offset.saturating_sub(self.limit);
    }

    /// Switches the page size and returns to the first page. Values
    /// outside the selector set are ignored.
    pub fn set_limit(&mut self, limit: usize) {
        if PAGE_SIZES.contains(&limit) {
            self.limit = limit;
            self.offset = 0;
        }
    }

    /// Switches the sort mode and returns to the first page.
    pub fn set_sort(&mut self, sort: SortMode) {
        self.sort = sort;
        self.offset = 0;
    }

    /// Replaces the author filter text and returns to the first page.
    pub fn set_author_filter(&mut self, filter: String) {
        self.author_filter = filter;
        self.offset = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_disabled_exactly_when_page_reaches_total() {
        let mut state = PageState::new();
        state.limit = 5;
        state.total = 12;

        assert!(state.can_go_next()); // 0 + 5 < 12
        state.next_page();
        assert_eq!(state.offset, 5);
        assert!(state.can_go_next()); // 5 + 5 < 12
        state.next_page();
        assert_eq!(state.offset, 10);
        assert!(!state.can_go_next()); // 10 + 5 >= 12

        // next is a no-op once disabled
        state.next_page();
        assert_eq!(state.offset, 10);
    }

    #[test]
    fn next_disabled_at_exact_boundary() {
        let mut state = PageState::new();
        state.limit = 5;
        state.total = 10;
        state.offset = 5;
        assert!(!state.can_go_next()); // 5 + 5 >= 10
    }

    #[test]
    fn prev_disabled_only_on_first_page() {
        let mut state = PageState::new();
        state.limit = 5;
        state.total = 20;
        assert!(!state.can_go_prev());

        state.next_page();
        assert!(state.can_go_prev());

        state.prev_page();
        assert_eq!(state.offset, 0);
        assert!(!state.can_go_prev());

        // clamped even if offset drifts out of step with limit
        state.offset = 3;
        state.prev_page();
        assert_eq!(state.offset, 0);
    }

    #[test]
    fn limit_change_resets_offset() {
        let mut state = PageState::new();
        state.total = 100;
        state.offset = 20;
        state.set_limit(10);
        assert_eq!(state.limit, 10);
        assert_eq!(state.offset, 0);
    }

    #[test]
    fn limit_outside_selector_set_is_ignored() {
        let mut state = PageState::new();
        state.total = 100;
        state.offset = 20;
        state.set_limit(7);
        assert_eq!(state.limit, 5);
        assert_eq!(state.offset, 20);
    }

    #[test]
    fn sort_change_resets_offset() {
        let mut state = PageState::new();
        state.total = 100;
        state.offset = 15;
        state.set_sort(SortMode::Title);
        assert_eq!(state.offset, 0);
        assert_eq!(state.sort, SortMode::Title);
    }

    #[test]
    fn filter_change_resets_offset() {
        let mut state = PageState::new();
        state.total = 100;
        state.offset = 15;
        state.set_author_filter("Tolkien".to_string());
        assert_eq!(state.offset, 0);
        assert_eq!(state.author_filter, "Tolkien");
    }

    #[test]
    fn unknown_sort_param_falls_back_to_none() {
        assert_eq!(SortMode::from_param("rating)_asc"), SortMode::None);
        assert_eq!(SortMode::from_param("shuffled"), SortMode::None);
        assert_eq!(SortMode::from_param(""), SortMode::None);
    }

    #[test]
    fn sort_params_round_trip() {
        for (value, _) in SortMode::OPTIONS {
            assert_eq!(SortMode::from_param(value).as_param(), value);
        }
    }
}
