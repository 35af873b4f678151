use nestegg_core::{
    page_markers, run_query, GoalQuery, GoalService, PageMarker, QueryState, SortKey, StatusTab,
    Store,
};
use nestegg_domain::GoalStatus;

fn seeded_query() -> (Store, GoalQuery) {
    (Store::seeded(), GoalQuery::default())
}

#[test]
fn completed_tab_keeps_only_completed_goals() {
    let (store, mut query) = seeded_query();
    query.tab = StatusTab::Completed;
    let page = run_query(store.goals(), &query);
    assert_eq!(page.total_count, 4);
    assert!(page
        .items
        .iter()
        .all(|goal| goal.status() == GoalStatus::Completed));
}

#[test]
fn search_matches_names_case_insensitively() {
    let (store, mut query) = seeded_query();
    query.search = "fund".into();
    let page = run_query(store.goals(), &query);
    let mut names: Vec<&str> = page.items.iter().map(|goal| goal.name.as_str()).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["Emergency Fund", "Investment Fund", "Vacation Fund"]);

    query.search = "FUND".into();
    assert_eq!(run_query(store.goals(), &query).total_count, 3);

    query.search = String::new();
    assert_eq!(run_query(store.goals(), &query).total_count, 12);
}

#[test]
fn amount_high_sorts_non_increasing_and_stays_stable() {
    let (store, mut query) = seeded_query();
    query.sort = SortKey::AmountHigh;
    query.page_size = 12;
    let page = run_query(store.goals(), &query);
    let amounts: Vec<i64> = page.items.iter().map(|goal| goal.target_amount).collect();
    assert!(amounts.windows(2).all(|pair| pair[0] >= pair[1]));

    // Wedding and Investment Fund tie at 100M; the earlier seed entry
    // must stay first.
    let tied: Vec<u32> = page
        .items
        .iter()
        .filter(|goal| goal.target_amount == 100_000_000)
        .map(|goal| goal.id)
        .collect();
    assert_eq!(tied, vec![5, 12]);
}

#[test]
fn newest_sort_leads_with_the_latest_created_goal() {
    let (store, query) = seeded_query();
    let page = run_query(store.goals(), &query);
    assert_eq!(page.items[0].name, "Home Renovation");
    assert!(page
        .items
        .windows(2)
        .all(|pair| pair[0].created_at >= pair[1].created_at));
}

#[test]
fn twelve_items_split_into_pages_of_eight_and_four() {
    let (store, mut query) = seeded_query();
    let first = run_query(store.goals(), &query);
    assert_eq!(first.items.len(), 8);
    assert_eq!(first.total_pages, 2);
    assert_eq!(first.start_index, 0);

    query.page = 2;
    let second = run_query(store.goals(), &query);
    assert_eq!(second.items.len(), 4);
    assert_eq!(second.total_count, 12);
    assert_eq!(second.start_index, 8);

    // No overlap between the two slices.
    let first_ids: Vec<u32> = first.items.iter().map(|goal| goal.id).collect();
    assert!(second.items.iter().all(|goal| !first_ids.contains(&goal.id)));
}

#[test]
fn filter_changes_pull_the_view_back_to_page_one() {
    let store = Store::seeded();
    let mut state = QueryState::default();
    state.set_page(2);
    assert_eq!(run_query(store.goals(), state.query()).items.len(), 4);

    state.set_search("fund");
    let page = run_query(store.goals(), state.query());
    assert_eq!(state.query().page, 1);
    assert_eq!(page.total_count, 3);

    state.set_page(2);
    state.set_sort(SortKey::AmountLow);
    assert_eq!(state.query().page, 1);
}

#[test]
fn service_list_matches_the_raw_pipeline() {
    let (store, query) = seeded_query();
    assert_eq!(GoalService::list(&store, &query), run_query(store.goals(), &query));
}

#[test]
fn marker_strip_shapes_match_the_page_position() {
    use PageMarker::{Ellipsis, Page};

    assert_eq!(page_markers(2, 2), vec![Page(1), Page(2)]);
    assert_eq!(
        page_markers(6, 12),
        vec![Page(1), Ellipsis, Page(5), Page(6), Page(7), Ellipsis, Page(12)]
    );
    assert_eq!(
        page_markers(11, 12),
        vec![Page(1), Ellipsis, Page(9), Page(10), Page(11), Page(12)]
    );
}
