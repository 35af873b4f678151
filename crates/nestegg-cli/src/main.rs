//! nestegg — budget and saving-goal tracking in the terminal.
//!
//! With no arguments the interactive shell opens at `/budgets`. A path
//! argument renders that screen once and exits, e.g.
//! `nestegg /saving-goals --tab completed --sort amount-high`.

mod app;
mod router;
mod screens;
mod shell;
mod ui;

use std::collections::HashMap;
use std::{env, process};

use chrono::{Datelike, Local, Month};

use nestegg_core::{GoalService, QueryState, SortKey, StatusTab};

use crate::app::{App, CliError};
use crate::router::{resolve, Route};

fn main() {
    nestegg_core::init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut app = App::load();
    if args.is_empty() {
        return shell::run(app);
    }
    render_once(&mut app, &args)
}

fn render_once(app: &mut App, args: &[String]) -> Result<(), CliError> {
    let today = Local::now().date_naive();
    let flags = parse_flags(&args[1..])?;

    match resolve(&args[0]) {
        Route::Budgets => {
            ensure_known(&flags, &["search"])?;
            let month = Month::try_from(today.month() as u8).unwrap_or(Month::January);
            let search = flags.get("search").map(String::as_str).unwrap_or("");
            println!("{}", screens::budgets::render(app, month, search));
        }
        Route::Goals => {
            ensure_known(&flags, &["tab", "search", "sort", "per-page", "page"])?;
            let state = goals_state(app, &flags)?;
            println!("{}", screens::goals::render(app, state.query()));
        }
        Route::GoalDetail(id) => {
            ensure_known(&flags, &[])?;
            match GoalService::get(&app.store, id) {
                Ok(detail) => println!("{}", screens::goal_detail::render(app, &detail)),
                Err(_) => println!(
                    "{}",
                    screens::not_found::render(&format!("/saving-goals/{id}"))
                ),
            }
        }
        Route::GoalCreate => {
            ensure_known(&flags, &[])?;
            screens::goal_create::run(app, today)?;
        }
        Route::BudgetCreate => {
            ensure_known(&flags, &[])?;
            screens::budget_create::run(app, today)?;
        }
        Route::NotFound(path) => println!("{}", screens::not_found::render(&path)),
    }
    Ok(())
}

fn parse_flags(args: &[String]) -> Result<HashMap<String, String>, CliError> {
    let mut flags = HashMap::new();
    let mut iter = args.iter();
    while let Some(token) = iter.next() {
        let Some(name) = token.strip_prefix("--") else {
            return Err(CliError::Usage(format!("unexpected argument `{token}`")));
        };
        if let Some((key, value)) = name.split_once('=') {
            flags.insert(key.to_string(), value.to_string());
        } else {
            let value = iter
                .next()
                .ok_or_else(|| CliError::Usage(format!("missing value for --{name}")))?;
            flags.insert(name.to_string(), value.clone());
        }
    }
    Ok(flags)
}

fn ensure_known(flags: &HashMap<String, String>, allowed: &[&str]) -> Result<(), CliError> {
    for key in flags.keys() {
        if !allowed.contains(&key.as_str()) {
            return Err(CliError::Usage(format!("unknown flag --{key}")));
        }
    }
    Ok(())
}

fn goals_state(app: &App, flags: &HashMap<String, String>) -> Result<QueryState, CliError> {
    let mut state = QueryState::default();
    state.set_page_size(app.config.page_size);

    if let Some(raw) = flags.get("per-page") {
        let size: usize = raw
            .parse()
            .ok()
            .filter(|size| *size > 0)
            .ok_or_else(|| CliError::Usage(format!("invalid --per-page value `{raw}`")))?;
        state.set_page_size(size);
    }
    if let Some(raw) = flags.get("tab") {
        let tab = StatusTab::parse(raw).ok_or_else(|| {
            CliError::Usage(format!(
                "unknown tab `{raw}` (expected all, in-progress, completed)"
            ))
        })?;
        state.set_tab(tab);
    }
    if let Some(raw) = flags.get("sort") {
        let sort = SortKey::parse(raw).ok_or_else(|| {
            let keys: Vec<&str> = SortKey::ALL.iter().map(|key| key.as_str()).collect();
            CliError::Usage(format!(
                "unknown sort key `{raw}` (expected {})",
                keys.join(", ")
            ))
        })?;
        state.set_sort(sort);
    }
    if let Some(raw) = flags.get("search") {
        state.set_search(raw.clone());
    }
    // The page flag comes last so an explicit page survives the resets
    // above.
    if let Some(raw) = flags.get("page") {
        let page: usize = raw
            .parse()
            .ok()
            .filter(|page| *page > 0)
            .ok_or_else(|| CliError::Usage(format!("invalid --page value `{raw}`")))?;
        state.set_page(page);
    }
    Ok(state)
}
