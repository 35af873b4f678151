//! Interactive wizard for creating a saving goal.
//!
//! Prompts collect raw text into a `GoalDraft`; the core validator runs
//! after every pass and on submit, and the wizard re-prompts with the
//! previous answers until the draft is accepted.

use chrono::{Months, NaiveDate};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use nestegg_core::{digits_only, format_currency, validate, GoalDraft, GoalService};
use nestegg_domain::{GoalCategory, GoalType};

use crate::app::{App, CliError};
use crate::ui::style;

pub fn run(app: &mut App, today: NaiveDate) -> Result<(), CliError> {
    println!(
        "{}",
        style::breadcrumb(&["Saving Goals", "Create New Saving Goal"])
    );
    println!("{}", style::header("Create New Saving Goal"));
    println!(
        "{}",
        style::dim("Enter the details of your saving goal to help you track your progress.")
    );
    println!();

    let theme = ColorfulTheme::default();
    let mut draft = GoalDraft {
        goal_type: GoalType::TargetDate.as_str().into(),
        start_date: Some(today),
        ..GoalDraft::default()
    };

    loop {
        draft = prompt_fields(app, &theme, draft, today)?;

        if let Err(errors) = validate(&draft) {
            println!();
            println!("{}", style::error_line("Please fix the following:"));
            for error in errors.iter() {
                println!(
                    "{}",
                    style::error_line(&format!("  • {}: {}", error.field, error.message))
                );
            }
            println!();
            continue;
        }

        if !Confirm::with_theme(&theme)
            .with_prompt("Save this goal?")
            .default(true)
            .interact()?
        {
            println!("{}", style::dim("Goal creation cancelled."));
            return Ok(());
        }

        println!("{}", style::dim("Saving..."));
        match GoalService::create(&mut app.store, &draft, today) {
            Ok(goal) => match GoalService::save(&goal) {
                Ok(()) => {
                    println!(
                        "{}",
                        style::success("Success! Your saving goal has been created.")
                    );
                    println!("{}", style::dim("Redirecting to saving goals..."));
                    return Ok(());
                }
                Err(err) => {
                    tracing::error!(%err, "goal save failed");
                    println!(
                        "{}",
                        style::error_line("Failed to save goal. Please try again.")
                    );
                }
            },
            Err(errors) => {
                for error in errors.iter() {
                    println!("{}", style::error_line(&error.to_string()));
                }
            }
        }
    }
}

fn prompt_fields(
    app: &App,
    theme: &ColorfulTheme,
    mut draft: GoalDraft,
    today: NaiveDate,
) -> Result<GoalDraft, CliError> {
    draft.name = Input::with_theme(theme)
        .with_prompt("Goal name (e.g., Vacation Fund, New Laptop)")
        .with_initial_text(draft.name)
        .allow_empty(true)
        .interact_text()?;

    let amount_raw: String = Input::with_theme(theme)
        .with_prompt(format!("Target amount ({})", app.config.currency))
        .with_initial_text(draft.target_amount)
        .allow_empty(true)
        .interact_text()?;
    draft.target_amount = digits_only(&amount_raw);
    if !draft.target_amount.is_empty() {
        println!(
            "  {}",
            style::dim(&format!(
                "= {} {}",
                format_currency(&draft.target_amount, &app.locale),
                app.config.currency
            ))
        );
    }

    draft.description = Input::with_theme(theme)
        .with_prompt("Description (optional)")
        .with_initial_text(draft.description)
        .allow_empty(true)
        .interact_text()?;

    let type_labels: Vec<String> = [GoalType::TargetDate, GoalType::Ongoing]
        .iter()
        .map(ToString::to_string)
        .collect();
    let type_default = match GoalType::parse(&draft.goal_type) {
        Some(GoalType::Ongoing) => 1,
        _ => 0,
    };
    let type_idx = Select::with_theme(theme)
        .with_prompt("Goal type")
        .items(&type_labels)
        .default(type_default)
        .interact()?;
    let goal_type = if type_idx == 1 {
        GoalType::Ongoing
    } else {
        GoalType::TargetDate
    };
    draft.goal_type = goal_type.as_str().into();

    let start_raw: String = Input::with_theme(theme)
        .with_prompt("Start date")
        .with_initial_text(
            draft
                .start_date
                .unwrap_or(today)
                .format("%Y-%m-%d")
                .to_string(),
        )
        .validate_with(|input: &String| parse_date(input).map(|_| ()))
        .interact_text()?;
    draft.start_date = parse_date(&start_raw).ok();

    draft.end_date = match goal_type {
        GoalType::Ongoing => None,
        GoalType::TargetDate => {
            let fallback = draft
                .end_date
                .or_else(|| today.checked_add_months(Months::new(1)));
            let end_raw: String = Input::with_theme(theme)
                .with_prompt("End date")
                .with_initial_text(
                    fallback
                        .map(|date| date.format("%Y-%m-%d").to_string())
                        .unwrap_or_default(),
                )
                .allow_empty(true)
                .validate_with(|input: &String| {
                    if input.trim().is_empty() {
                        Ok(())
                    } else {
                        parse_date(input).map(|_| ())
                    }
                })
                .interact_text()?;
            if end_raw.trim().is_empty() {
                None
            } else {
                parse_date(&end_raw).ok()
            }
        }
    };

    let category_labels: Vec<&str> = GoalCategory::ALL.iter().map(|c| c.label()).collect();
    let category_default = GoalCategory::from_slug(&draft.category)
        .and_then(|current| GoalCategory::ALL.iter().position(|c| *c == current))
        .unwrap_or(0);
    let category_idx = Select::with_theme(theme)
        .with_prompt("Category")
        .items(&category_labels)
        .default(category_default)
        .interact()?;
    draft.category = GoalCategory::ALL[category_idx].slug().into();

    Ok(draft)
}

fn parse_date(input: &str) -> Result<NaiveDate, &'static str> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|_| "Use YYYY-MM-DD format")
}
