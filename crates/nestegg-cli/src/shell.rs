//! Interactive shell loop: renders the current screen, reads a command,
//! navigates.

use std::io;

use chrono::{Datelike, Local, Month, NaiveDate};
use crossterm::{
    cursor, execute,
    terminal::{self, ClearType},
};
use rustyline::{error::ReadlineError, DefaultEditor};
use strsim::levenshtein;

use nestegg_core::{GoalService, QueryState, SortKey, StatusTab};

use crate::app::{App, CliError};
use crate::router::{resolve, Route};
use crate::screens;
use crate::ui::style;

const GLOBAL_COMMANDS: [&str; 6] = ["budgets", "goals", "back", "help", "exit", "quit"];
const GOALS_COMMANDS: [&str; 9] = [
    "tab", "search", "sort", "per-page", "page", "next", "prev", "open", "create",
];
const BUDGETS_COMMANDS: [&str; 3] = ["search", "month", "create"];

pub fn run(mut app: App) -> Result<(), CliError> {
    let mut editor = DefaultEditor::new()?;
    let today = Local::now().date_naive();
    let mut route = Route::Budgets;
    let mut goals_state = QueryState::default();
    goals_state.set_page_size(app.config.page_size);
    let mut budget_month = month_of(today);
    let mut budget_search = String::new();
    let mut notice: Option<String> = None;

    loop {
        // Create screens are wizards, not render-and-wait views; run them
        // and bounce back to their list.
        match route {
            Route::GoalCreate => {
                clear_screen()?;
                screens::goal_create::run(&mut app, today)?;
                route = Route::Goals;
                continue;
            }
            Route::BudgetCreate => {
                clear_screen()?;
                screens::budget_create::run(&mut app, today)?;
                route = Route::Budgets;
                continue;
            }
            _ => {}
        }

        clear_screen()?;
        if let Some(message) = notice.take() {
            println!("{message}");
            println!();
        }
        render_current(&app, &route, &goals_state, budget_month, &budget_search);
        println!();
        println!("{}", style::dim(hint_for(&route)));

        let line = match editor.readline("nestegg> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        };
        let _ = editor.add_history_entry(line.as_str());

        let tokens = match shell_words::split(&line) {
            Ok(tokens) => tokens,
            Err(_) => {
                notice = Some(style::error_line("Unbalanced quotes in command"));
                continue;
            }
        };
        let Some(head) = tokens.first().map(String::as_str) else {
            continue;
        };
        let rest = &tokens[1..];

        // Typed paths navigate directly, like the address bar.
        if head.starts_with('/') {
            route = resolve(head);
            continue;
        }

        match head {
            "exit" | "quit" => break,
            "budgets" | "home" => route = Route::Budgets,
            "goals" => route = Route::Goals,
            "back" => route = parent_of(&route),
            "help" => notice = Some(help_text(&route)),
            "create" => match route {
                Route::Budgets => route = Route::BudgetCreate,
                Route::Goals => route = Route::GoalCreate,
                _ => notice = Some(unknown_command(head, &route)),
            },
            "search" => match route {
                Route::Goals => goals_state.set_search(rest.join(" ")),
                Route::Budgets => budget_search = rest.join(" "),
                _ => notice = Some(unknown_command(head, &route)),
            },
            "tab" if route == Route::Goals => match rest.first().map(|s| StatusTab::parse(s)) {
                Some(Some(tab)) => goals_state.set_tab(tab),
                _ => {
                    notice = Some(style::error_line(
                        "Usage: tab <all | in-progress | completed>",
                    ))
                }
            },
            "sort" if route == Route::Goals => match rest.first().map(|s| SortKey::parse(s)) {
                Some(Some(sort)) => goals_state.set_sort(sort),
                _ => notice = Some(style::error_line(&sort_usage())),
            },
            "per-page" if route == Route::Goals => match rest.first().map(|s| s.parse::<usize>()) {
                Some(Ok(size)) if size > 0 => goals_state.set_page_size(size),
                _ => notice = Some(style::error_line("Usage: per-page <number>")),
            },
            "page" if route == Route::Goals => match rest.first().map(|s| s.parse::<usize>()) {
                Some(Ok(page)) if page > 0 => {
                    goals_state.set_page(clamp_page(&app, &goals_state, page))
                }
                _ => notice = Some(style::error_line("Usage: page <number>")),
            },
            "next" if route == Route::Goals => {
                let current = goals_state.query().page;
                goals_state.set_page(clamp_page(&app, &goals_state, current + 1));
            }
            "prev" if route == Route::Goals => {
                let current = goals_state.query().page;
                goals_state.set_page(current.saturating_sub(1).max(1));
            }
            "open" if route == Route::Goals => match rest.first().map(|s| s.parse::<u32>()) {
                Some(Ok(id)) => route = Route::GoalDetail(id),
                _ => notice = Some(style::error_line("Usage: open <goal id>")),
            },
            "month" if route == Route::Budgets => {
                match rest.first().and_then(|s| s.parse::<Month>().ok()) {
                    Some(month) => budget_month = month,
                    None => notice = Some(style::error_line("Usage: month <January..December>")),
                }
            }
            other => notice = Some(unknown_command(other, &route)),
        }
    }

    Ok(())
}

fn render_current(
    app: &App,
    route: &Route,
    goals_state: &QueryState,
    budget_month: Month,
    budget_search: &str,
) {
    match route {
        Route::Budgets => println!(
            "{}",
            screens::budgets::render(app, budget_month, budget_search)
        ),
        Route::Goals => println!("{}", screens::goals::render(app, goals_state.query())),
        Route::GoalDetail(id) => match GoalService::get(&app.store, *id) {
            Ok(detail) => println!("{}", screens::goal_detail::render(app, &detail)),
            Err(_) => println!(
                "{}",
                screens::not_found::render(&format!("/saving-goals/{id}"))
            ),
        },
        Route::NotFound(path) => println!("{}", screens::not_found::render(path)),
        // Wizard routes never reach the renderer.
        Route::BudgetCreate | Route::GoalCreate => {}
    }
}

fn parent_of(route: &Route) -> Route {
    match route {
        Route::GoalDetail(_) | Route::GoalCreate => Route::Goals,
        _ => Route::Budgets,
    }
}

fn month_of(today: NaiveDate) -> Month {
    Month::try_from(today.month() as u8).unwrap_or(Month::January)
}

fn clamp_page(app: &App, state: &QueryState, wanted: usize) -> usize {
    let total = GoalService::list(&app.store, state.query()).total_pages;
    wanted.min(total.max(1))
}

fn clear_screen() -> Result<(), io::Error> {
    execute!(
        io::stdout(),
        terminal::Clear(ClearType::All),
        cursor::MoveTo(0, 0)
    )
}

fn commands_for(route: &Route) -> Vec<&'static str> {
    let mut commands: Vec<&'static str> = GLOBAL_COMMANDS.to_vec();
    match route {
        Route::Goals => commands.extend(GOALS_COMMANDS),
        Route::Budgets => commands.extend(BUDGETS_COMMANDS),
        _ => {}
    }
    commands
}

fn unknown_command(input: &str, route: &Route) -> String {
    let suggestion = commands_for(route)
        .into_iter()
        .map(|candidate| (levenshtein(input, candidate), candidate))
        .filter(|(distance, _)| *distance <= 2)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate);
    match suggestion {
        Some(candidate) => style::error_line(&format!(
            "Unknown command `{input}`. Did you mean `{candidate}`?"
        )),
        None => style::error_line(&format!(
            "Unknown command `{input}`. Type `help` for commands."
        )),
    }
}

fn sort_usage() -> String {
    let keys: Vec<&str> = SortKey::ALL.iter().map(|key| key.as_str()).collect();
    format!("Usage: sort <{}>", keys.join(" | "))
}

fn hint_for(route: &Route) -> &'static str {
    match route {
        Route::Goals => {
            "Commands: tab · search · sort · per-page · page · next · prev · open <id> · create · back · help"
        }
        Route::Budgets => "Commands: search · month · create · goals · help · exit",
        Route::GoalDetail(_) => "Commands: back · goals · budgets · help · exit",
        _ => "Type a path (e.g. /budgets) or `help`.",
    }
}

fn help_text(route: &Route) -> String {
    let mut lines = vec![
        style::section("Navigation"),
        "  /budgets              Monthly budget dashboard".to_string(),
        "  /budgets/create       Create a monthly budget".to_string(),
        "  /saving-goals         Saving goals list".to_string(),
        "  /saving-goals/create  Create a saving goal".to_string(),
        "  /saving-goals/<id>    Goal detail".to_string(),
        "  back · budgets · goals · exit".to_string(),
    ];
    match route {
        Route::Goals => {
            lines.push(style::section("Goal list"));
            lines.push("  tab <all|in-progress|completed>   filter by status".to_string());
            lines.push("  search <text>                     filter by name".to_string());
            lines.push(format!("  {}", sort_usage().trim_start_matches("Usage: ")));
            lines.push("  per-page <n> · page <n> · next · prev".to_string());
            lines.push("  open <id> · create".to_string());
        }
        Route::Budgets => {
            lines.push(style::section("Budget dashboard"));
            lines.push("  search <text> · month <name> · create".to_string());
        }
        _ => {}
    }
    lines.join("\n")
}
