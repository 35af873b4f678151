//! The saving-goals list screen: tabs, search, sort, pagination.

use nestegg_core::{page_markers, GoalQuery, GoalService, PageMarker, StatusTab};

use crate::app::App;
use crate::ui::progress::labeled_bar;
use crate::ui::style;
use crate::ui::table::{Table, TableColumn};

pub fn render(app: &App, query: &GoalQuery) -> String {
    let page = GoalService::list(&app.store, query);
    let mut out = Vec::new();

    out.push(style::header("Saving Goals"));
    out.push(tabs_line(query.tab));
    out.push(filters_line(query));
    out.push(String::new());

    if page.items.is_empty() {
        out.push(style::dim(empty_message(query.tab)));
    } else {
        let mut table = Table::new(vec![
            TableColumn::new("ID").right_aligned(),
            TableColumn::new("Name"),
            TableColumn::new("Status"),
            TableColumn::new("Progress"),
            TableColumn::new("Target").right_aligned(),
            TableColumn::new("Created"),
        ]);
        for goal in &page.items {
            table.push_row(vec![
                goal.id.to_string(),
                goal.name.clone(),
                style::badge(goal.status()),
                labeled_bar(goal.progress.into(), 10),
                app.money(goal.target_amount),
                goal.created_at.format("%Y-%m-%d").to_string(),
            ]);
        }
        out.push(table.render());
    }

    if page.total_pages > 0 {
        let page_size = query.page_size.max(1);
        let shown_to = (page.start_index + page_size).min(page.total_count);
        out.push(String::new());
        out.push(style::dim(&format!(
            "Showing {}-{} of {} goals",
            page.start_index + 1,
            shown_to,
            page.total_count
        )));
        out.push(markers_line(query.page, page.total_pages));
    }

    out.join("\n")
}

fn tabs_line(active: StatusTab) -> String {
    StatusTab::ALL
        .iter()
        .map(|tab| {
            if *tab == active {
                style::section(&format!("[{}]", tab.label()))
            } else {
                style::dim(tab.label())
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

fn filters_line(query: &GoalQuery) -> String {
    let search = if query.search.trim().is_empty() {
        "—".to_string()
    } else {
        format!("\"{}\"", query.search.trim())
    };
    style::dim(&format!(
        "Search: {}   Sort: {}   Per page: {}",
        search,
        query.sort.label(),
        query.page_size
    ))
}

fn empty_message(tab: StatusTab) -> &'static str {
    match tab {
        StatusTab::All => "No saving goals found",
        StatusTab::InProgress => "No in-progress goals found",
        StatusTab::Completed => "No completed goals found",
    }
}

fn markers_line(current: usize, total: usize) -> String {
    let strip = page_markers(current, total)
        .into_iter()
        .map(|marker| match marker {
            PageMarker::Page(page) if page == current => style::section(&format!("[{page}]")),
            PageMarker::Page(page) => page.to_string(),
            PageMarker::Ellipsis => "…".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ");
    format!("Pages: {strip}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use nestegg_core::{Config, Locale, QueryState, SortKey, Store};

    fn app() -> App {
        colored::control::set_override(false);
        App {
            store: Store::seeded(),
            config: Config::default(),
            locale: Locale::default(),
        }
    }

    #[test]
    fn first_page_shows_eight_of_twelve() {
        let app = app();
        let rendered = render(&app, &GoalQuery::default());
        assert!(rendered.contains("Showing 1-8 of 12 goals"));
        assert!(rendered.contains("Pages: [1] 2"));
        assert!(rendered.contains("Home Renovation"));
    }

    #[test]
    fn completed_tab_renders_only_completed_goals() {
        let app = app();
        let mut state = QueryState::default();
        state.set_tab(StatusTab::Completed);
        let rendered = render(&app, state.query());
        assert!(rendered.contains("Emergency Fund"));
        assert!(!rendered.contains("Wedding"));
        assert!(rendered.contains("Showing 1-4 of 4 goals"));
    }

    #[test]
    fn unmatched_search_shows_the_empty_state() {
        let app = app();
        let mut state = QueryState::default();
        state.set_search("zzz");
        let rendered = render(&app, state.query());
        assert!(rendered.contains("No saving goals found"));
        assert!(!rendered.contains("Showing"));
    }

    #[test]
    fn sort_label_appears_in_the_filter_line() {
        let app = app();
        let mut state = QueryState::default();
        state.set_sort(SortKey::AmountHigh);
        let rendered = render(&app, state.query());
        assert!(rendered.contains("Amount (high to low)"));
    }
}
