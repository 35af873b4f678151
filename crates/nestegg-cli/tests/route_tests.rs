use assert_cmd::Command;
use predicates::prelude::*;

fn nestegg() -> Command {
    Command::cargo_bin("nestegg").expect("binary builds")
}

#[test]
fn budgets_route_renders_the_dashboard() {
    nestegg()
        .arg("/budgets")
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly Budget"))
        .stdout(predicate::str::contains("8.000.000 VND"))
        .stdout(predicate::str::contains("61% used"))
        .stdout(predicate::str::contains("Housing"));
}

#[test]
fn budgets_route_applies_the_search_flag() {
    nestegg()
        .args(["/budgets", "--search", "food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("Entertainment").not());
}

#[test]
fn goals_route_lists_the_first_page() {
    nestegg()
        .arg("/saving-goals")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saving Goals"))
        .stdout(predicate::str::contains("Showing 1-8 of 12 goals"))
        .stdout(predicate::str::contains("Home Renovation"));
}

#[test]
fn goals_route_paginates() {
    nestegg()
        .args(["/saving-goals", "--page", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 9-12 of 12 goals"));
}

#[test]
fn completed_tab_filters_the_list() {
    nestegg()
        .args(["/saving-goals", "--tab", "completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Emergency Fund"))
        .stdout(predicate::str::contains("Showing 1-4 of 4 goals"))
        .stdout(predicate::str::contains("Wedding").not());
}

#[test]
fn search_flag_is_case_insensitive() {
    nestegg()
        .args(["/saving-goals", "--search", "FUND"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Vacation Fund"))
        .stdout(predicate::str::contains("Investment Fund"))
        .stdout(predicate::str::contains("Showing 1-3 of 3 goals"));
}

#[test]
fn bad_flag_values_fail_with_usage_errors() {
    nestegg()
        .args(["/saving-goals", "--tab", "archived"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown tab `archived`"));

    nestegg()
        .args(["/saving-goals", "--sort", "alphabetical"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown sort key"));
}

#[test]
fn detail_route_shows_the_goal_and_contributions() {
    nestegg()
        .arg("/saving-goals/1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Vacation Fund"))
        .stdout(predicate::str::contains("Contributions"))
        .stdout(predicate::str::contains("Hangout with friends"));
}

#[test]
fn missing_goal_falls_through_to_not_found() {
    nestegg()
        .arg("/saving-goals/404")
        .assert()
        .success()
        .stdout(predicate::str::contains("Page Not Found"));
}

#[test]
fn unknown_paths_redirect_to_not_found_with_a_hint() {
    nestegg()
        .arg("/budget")
        .assert()
        .success()
        .stdout(predicate::str::contains("does not match any route"))
        .stdout(predicate::str::contains("Did you mean /budgets?"));
}
