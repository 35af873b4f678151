//! The monthly budget dashboard.

use chrono::Month;

use nestegg_core::BudgetService;

use crate::app::App;
use crate::ui::progress::{bar, labeled_bar};
use crate::ui::style;
use crate::ui::table::{Table, TableColumn};

pub fn render(app: &App, month: Month, search: &str) -> String {
    let categories = app.store.categories();
    let totals = BudgetService::totals(categories);
    let mut out = Vec::new();

    out.push(style::header("Monthly Budget"));
    out.push(String::new());
    out.push(format!(
        "{}  {}  {}",
        style::section("Total Budget:"),
        app.money(totals.budget),
        style::dim(&format!("(budget for {})", month.name()))
    ));
    out.push(format!(
        "{}   {}  {}",
        style::section("Total Spent:"),
        app.money(totals.spent),
        style::warning(&format!("{}% used", totals.percent_used))
    ));
    out.push(format!(
        "{}     {}",
        style::section("Remaining:"),
        app.money(totals.remaining)
    ));
    out.push(String::new());

    out.push(style::section("Budget Overview"));
    out.push(format!(
        "{} {}",
        bar(totals.percent_used, 30),
        style::dim(&format!("{}% used", totals.percent_used))
    ));
    out.push(String::new());

    let matched = BudgetService::search(categories, search);
    if !search.trim().is_empty() {
        out.push(style::dim(&format!(
            "Search: \"{}\" — {} of {} categories",
            search.trim(),
            matched.len(),
            categories.len()
        )));
    }
    if matched.is_empty() {
        out.push(style::dim("No categories found"));
    } else {
        let mut table = Table::new(vec![
            TableColumn::new("Category"),
            TableColumn::new("Budgeted").right_aligned(),
            TableColumn::new("Spent").right_aligned(),
            TableColumn::new("Remaining").right_aligned(),
            TableColumn::new("Used"),
        ]);
        for category in matched {
            table.push_row(vec![
                format!(
                    "{} {}",
                    category.icon,
                    style::tag_label(&category.name, category.color)
                ),
                app.money(category.amount),
                app.money(category.spent),
                app.money(category.remaining()),
                labeled_bar(category.percent_used(), 10),
            ]);
        }
        out.push(table.render());
    }

    out.join("\n")
}
