//! Detail screen for one saving goal.

use nestegg_core::GoalDetail;

use crate::app::App;
use crate::ui::progress::labeled_bar;
use crate::ui::style;
use crate::ui::table::{Table, TableColumn};

pub fn render(app: &App, detail: &GoalDetail) -> String {
    let goal = &detail.goal;
    let mut out = Vec::new();

    out.push(style::breadcrumb(&["Saving Goals", &goal.name]));
    out.push(style::header(&goal.name));
    out.push(format!(
        "{}  {}",
        style::badge(goal.status()),
        style::dim(&format!("{}% Complete", goal.progress))
    ));
    out.push(labeled_bar(goal.progress.into(), 24));
    out.push(String::new());

    out.push(format!(
        "{} {}",
        style::section("Type:"),
        goal.goal_type
    ));
    out.push(format!(
        "{} {}",
        style::section("Category:"),
        goal.category
    ));
    out.push(format!(
        "{} {}",
        style::section("Start date:"),
        goal.start_date.format("%Y-%m-%d")
    ));
    out.push(format!(
        "{} {}",
        style::section("End date:"),
        goal.end_date
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "—".into())
    ));
    out.push(format!(
        "{} {} / {}",
        style::section("Saved:"),
        app.money(goal.current_amount),
        app.money(goal.target_amount)
    ));
    out.push(format!(
        "{} {}",
        style::section("Remaining:"),
        app.money(goal.remaining_amount())
    ));
    if let Some(description) = &goal.description {
        out.push(format!("{} {}", style::section("Notes:"), description));
    }
    out.push(String::new());

    out.push(style::section("Contributions"));
    if detail.contributions.is_empty() {
        out.push(style::dim("No contributions recorded yet"));
    } else {
        let mut table = Table::new(vec![
            TableColumn::new("ID").right_aligned(),
            TableColumn::new("Date"),
            TableColumn::new("Amount").right_aligned(),
            TableColumn::new("Note").with_max_width(32),
            TableColumn::new("Category"),
        ]);
        for contribution in &detail.contributions {
            table.push_row(vec![
                contribution.id.to_string(),
                contribution.date.format("%Y-%m-%d").to_string(),
                app.money(contribution.amount),
                contribution.note.clone(),
                contribution.category.clone(),
            ]);
        }
        out.push(table.render());
    }

    out.join("\n")
}
