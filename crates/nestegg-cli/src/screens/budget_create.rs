//! Interactive wizard for assembling a monthly budget.

use chrono::{Datelike, Month, NaiveDate};
use dialoguer::{theme::ColorfulTheme, Input, Select};

use nestegg_core::{digits_only, BudgetDraft, BudgetService};

use crate::app::{App, CliError};
use crate::ui::progress::bar;
use crate::ui::style;

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

pub fn run(app: &mut App, today: NaiveDate) -> Result<(), CliError> {
    println!(
        "{}",
        style::breadcrumb(&["Budgets", "Create Monthly Budget"])
    );
    println!("{}", style::header("Create Monthly Budget"));
    println!();

    let theme = ColorfulTheme::default();
    let year = today.year();
    let month = prompt_month(&theme, today.month0() as usize)?;
    let total = prompt_amount(app, &theme, "Total budget", "8000000")?;
    let mut draft = BudgetDraft::new(month, year, total);

    loop {
        println!();
        print_summary(app, &draft);
        println!();

        let mut actions = vec!["Add category"];
        if !draft.budget().allocations.is_empty() {
            actions.push("Remove category");
        }
        actions.extend(["Change total budget", "Change month", "Save budget", "Cancel"]);
        let choice = Select::with_theme(&theme)
            .with_prompt("Budget details")
            .items(&actions)
            .default(0)
            .interact()?;

        match actions[choice] {
            "Add category" => add_category(app, &theme, &mut draft)?,
            "Remove category" => remove_category(&theme, &mut draft)?,
            "Change total budget" => {
                let current = draft.budget().total_budget.to_string();
                let total = prompt_amount(app, &theme, "Total budget", &current)?;
                draft.set_total(total);
            }
            "Change month" => {
                let current = draft.budget().month.number_from_month() as usize - 1;
                let month = prompt_month(&theme, current)?;
                draft.set_month(month, year);
            }
            "Save budget" => {
                if draft.budget().allocations.is_empty() {
                    println!(
                        "{}",
                        style::error_line("Add at least one category before saving.")
                    );
                    continue;
                }
                if draft.summary().over_allocated {
                    println!(
                        "{}",
                        style::error_line("You've allocated more than your total budget")
                    );
                    continue;
                }
                println!("{}", style::dim("Saving..."));
                match BudgetService::save(draft.budget()) {
                    Ok(()) => {
                        println!("{}", style::success("Budget created."));
                        println!("{}", style::dim("Redirecting to budgets..."));
                        return Ok(());
                    }
                    Err(err) => {
                        tracing::error!(%err, "budget save failed");
                        println!(
                            "{}",
                            style::error_line("Failed to create budget. Please try again.")
                        );
                    }
                }
            }
            _ => {
                println!("{}", style::dim("Budget creation cancelled."));
                return Ok(());
            }
        }
    }
}

fn prompt_month(theme: &ColorfulTheme, default_idx: usize) -> Result<Month, CliError> {
    let labels: Vec<&str> = MONTHS.iter().map(|month| month.name()).collect();
    let idx = Select::with_theme(theme)
        .with_prompt("Month")
        .items(&labels)
        .default(default_idx.min(11))
        .interact()?;
    Ok(MONTHS[idx])
}

fn prompt_amount(
    app: &App,
    theme: &ColorfulTheme,
    prompt: &str,
    initial: &str,
) -> Result<i64, CliError> {
    let raw: String = Input::with_theme(theme)
        .with_prompt(format!("{prompt} ({})", app.config.currency))
        .with_initial_text(initial.to_string())
        .validate_with(|input: &String| {
            let digits = digits_only(input);
            if digits.is_empty() {
                return Err("Please enter a valid amount");
            }
            digits
                .parse::<i64>()
                .map(|_| ())
                .map_err(|_| "Please enter a valid amount")
        })
        .interact_text()?;
    Ok(digits_only(&raw).parse::<i64>().unwrap_or(0))
}

fn add_category(
    app: &App,
    theme: &ColorfulTheme,
    draft: &mut BudgetDraft,
) -> Result<(), CliError> {
    let templates = draft.available_templates();
    if templates.is_empty() {
        println!(
            "{}",
            style::dim("Every category is already in this budget.")
        );
        return Ok(());
    }
    let labels: Vec<String> = templates
        .iter()
        .map(|template| format!("{} {}", template.icon, template.name))
        .collect();
    let idx = Select::with_theme(theme)
        .with_prompt("Category")
        .items(&labels)
        .default(0)
        .interact()?;
    let slug = templates[idx].slug;

    let raw: String = Input::with_theme(theme)
        .with_prompt(format!("Amount ({})", app.config.currency))
        .allow_empty(true)
        .interact_text()?;
    if let Err(err) = draft.add_allocation(slug, &digits_only(&raw)) {
        println!("{}", style::error_line(&err.to_string()));
    }
    Ok(())
}

fn remove_category(theme: &ColorfulTheme, draft: &mut BudgetDraft) -> Result<(), CliError> {
    let shares = draft.summary().shares;
    let labels: Vec<String> = shares
        .iter()
        .map(|share| format!("{} {}", share.icon, share.name))
        .collect();
    let idx = Select::with_theme(theme)
        .with_prompt("Remove which category?")
        .items(&labels)
        .default(0)
        .interact()?;
    draft.remove_allocation(&shares[idx].slug);
    Ok(())
}

fn print_summary(app: &App, draft: &BudgetDraft) {
    let budget = draft.budget();
    let summary = draft.summary();

    println!("{}", style::section("Budget Summary"));
    println!(
        "{} {} {} {}",
        style::dim("Month:"),
        budget.month.name(),
        budget.year,
        style::dim(&format!(
            "({} – {})",
            budget.start_date.format("%Y-%m-%d"),
            budget.end_date.format("%Y-%m-%d")
        ))
    );
    println!(
        "{} {}   {} {}",
        style::dim("Total budget:"),
        app.money(summary.total_budget),
        style::dim("Categories:"),
        summary.shares.len()
    );
    let remaining = app.money(summary.remaining);
    println!(
        "{} {}   {} {}",
        style::dim("Allocated:"),
        app.money(summary.allocated),
        style::dim("Remaining:"),
        if summary.remaining < 0 {
            style::error_line(&remaining)
        } else {
            remaining
        }
    );
    println!(
        "{} {} {}%",
        style::dim("Allocation progress:"),
        bar(summary.percent_allocated, 20),
        summary.percent_allocated
    );
    if summary.over_allocated {
        println!(
            "{}",
            style::warning("You've allocated more than your total budget")
        );
    }
    if !summary.shares.is_empty() {
        println!("{}", style::section("Category Breakdown"));
        for share in &summary.shares {
            println!(
                "  {} {}  {}  {}%",
                share.icon,
                share.name,
                app.money(share.amount),
                share.percent
            );
        }
    }
}
