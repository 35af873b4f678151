//! Client-side list querying: filter, sort, paginate.
//!
//! The pipeline is pure and deterministic; callers re-run it from source
//! data on every change instead of mutating cached results.

use std::fmt;

use nestegg_domain::{GoalStatus, SavingGoal};

/// Coarse status filter rendered as tabs above the goal list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusTab {
    #[default]
    All,
    InProgress,
    Completed,
}

impl StatusTab {
    pub const ALL: [StatusTab; 3] = [StatusTab::All, StatusTab::InProgress, StatusTab::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusTab::All => "all",
            StatusTab::InProgress => "in-progress",
            StatusTab::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusTab::All => "All Goals",
            StatusTab::InProgress => "In Progress",
            StatusTab::Completed => "Completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|tab| tab.as_str() == value.trim())
    }

    fn admits(&self, status: GoalStatus) -> bool {
        match self {
            StatusTab::All => true,
            StatusTab::InProgress => status == GoalStatus::InProgress,
            StatusTab::Completed => status == GoalStatus::Completed,
        }
    }
}

/// Sort order applied after filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Newest,
    Oldest,
    ProgressHigh,
    ProgressLow,
    AmountHigh,
    AmountLow,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::Newest,
        SortKey::Oldest,
        SortKey::ProgressHigh,
        SortKey::ProgressLow,
        SortKey::AmountHigh,
        SortKey::AmountLow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::ProgressHigh => "progress-high",
            SortKey::ProgressLow => "progress-low",
            SortKey::AmountHigh => "amount-high",
            SortKey::AmountLow => "amount-low",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Newest => "Newest first",
            SortKey::Oldest => "Oldest first",
            SortKey::ProgressHigh => "Progress (high to low)",
            SortKey::ProgressLow => "Progress (low to high)",
            SortKey::AmountHigh => "Amount (high to low)",
            SortKey::AmountLow => "Amount (low to high)",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == value.trim())
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// User-controlled query parameters held in view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalQuery {
    pub tab: StatusTab,
    pub search: String,
    pub sort: SortKey,
    pub page_size: usize,
    pub page: usize,
}

impl Default for GoalQuery {
    fn default() -> Self {
        Self {
            tab: StatusTab::All,
            search: String::new(),
            sort: SortKey::Newest,
            page_size: 8,
            page: 1,
        }
    }
}

/// One page of query results plus the counts the view needs.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalPage {
    pub items: Vec<SavingGoal>,
    pub total_count: usize,
    pub total_pages: usize,
    pub start_index: usize,
}

/// Runs the fixed filter → search → sort → paginate pipeline.
pub fn run_query(goals: &[SavingGoal], query: &GoalQuery) -> GoalPage {
    let needle = query.search.trim().to_lowercase();
    let mut matched: Vec<&SavingGoal> = goals
        .iter()
        .filter(|goal| query.tab.admits(goal.status()))
        .filter(|goal| needle.is_empty() || goal.name.to_lowercase().contains(&needle))
        .collect();

    // Vec::sort_by is stable; ties keep their original relative order.
    match query.sort {
        SortKey::Newest => matched.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortKey::Oldest => matched.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortKey::ProgressHigh => matched.sort_by(|a, b| b.progress.cmp(&a.progress)),
        SortKey::ProgressLow => matched.sort_by(|a, b| a.progress.cmp(&b.progress)),
        SortKey::AmountHigh => matched.sort_by(|a, b| b.target_amount.cmp(&a.target_amount)),
        SortKey::AmountLow => matched.sort_by(|a, b| a.target_amount.cmp(&b.target_amount)),
    }

    let page_size = query.page_size.max(1);
    let total_count = matched.len();
    let total_pages = total_count.div_ceil(page_size);
    let start_index = (query.page.max(1) - 1) * page_size;
    let items = matched
        .into_iter()
        .skip(start_index)
        .take(page_size)
        .cloned()
        .collect();

    GoalPage {
        items,
        total_count,
        total_pages,
        start_index,
    }
}

/// Wraps a [`GoalQuery`] so every filter change resets the visible page
/// to 1. The reset is product policy, not an accident of the UI.
#[derive(Debug, Clone, Default)]
pub struct QueryState {
    query: GoalQuery,
}

impl QueryState {
    pub fn query(&self) -> &GoalQuery {
        &self.query
    }

    pub fn set_tab(&mut self, tab: StatusTab) {
        self.query.tab = tab;
        self.query.page = 1;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
        self.query.page = 1;
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.query.sort = sort;
        self.query.page = 1;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.query.page_size = page_size.max(1);
        self.query.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.query.page = page.max(1);
    }
}

/// An entry in the rendered pagination strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    Page(usize),
    Ellipsis,
}

/// Computes the pagination strip for the current position.
///
/// Five or fewer pages enumerate fully. Beyond that the strip always
/// carries page 1 and the last page, a window around the current page
/// (widened to four pages at either extremity), and ellipsis markers
/// wherever the window does not touch the edges.
pub fn page_markers(current: usize, total: usize) -> Vec<PageMarker> {
    let mut markers = Vec::new();

    if total <= 5 {
        markers.extend((1..=total).map(PageMarker::Page));
        return markers;
    }

    markers.push(PageMarker::Page(1));

    let mut window_start = current.saturating_sub(1).max(2);
    let mut window_end = (current + 1).min(total - 1);
    if current <= 3 {
        window_end = 4;
    }
    if current + 2 >= total {
        window_start = total - 3;
    }

    if window_start > 2 {
        markers.push(PageMarker::Ellipsis);
    }
    markers.extend((window_start..=window_end).map(PageMarker::Page));
    if window_end < total - 1 {
        markers.push(PageMarker::Ellipsis);
    }

    markers.push(PageMarker::Page(total));
    markers
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageMarker::{Ellipsis, Page};

    #[test]
    fn enumerates_small_page_counts() {
        assert_eq!(page_markers(1, 0), vec![]);
        assert_eq!(page_markers(1, 1), vec![Page(1)]);
        assert_eq!(
            page_markers(3, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
    }

    #[test]
    fn widens_the_window_near_the_start() {
        assert_eq!(
            page_markers(1, 9),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(9)]
        );
        assert_eq!(
            page_markers(3, 9),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(9)]
        );
    }

    #[test]
    fn centers_the_window_in_the_middle() {
        assert_eq!(
            page_markers(5, 9),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(9)]
        );
    }

    #[test]
    fn widens_the_window_near_the_end() {
        assert_eq!(
            page_markers(8, 9),
            vec![Page(1), Ellipsis, Page(6), Page(7), Page(8), Page(9)]
        );
        assert_eq!(
            page_markers(9, 9),
            vec![Page(1), Ellipsis, Page(6), Page(7), Page(8), Page(9)]
        );
    }

    #[test]
    fn filter_changes_reset_the_page() {
        let mut state = QueryState::default();
        state.set_page(2);
        assert_eq!(state.query().page, 2);

        state.set_sort(SortKey::AmountHigh);
        assert_eq!(state.query().page, 1);

        state.set_page(3);
        state.set_search("fund");
        assert_eq!(state.query().page, 1);

        state.set_page(2);
        state.set_tab(StatusTab::Completed);
        assert_eq!(state.query().page, 1);

        state.set_page(2);
        state.set_page_size(4);
        assert_eq!(state.query().page, 1);
    }
}
