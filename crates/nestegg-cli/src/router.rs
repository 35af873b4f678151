//! Fixed route table mapping path patterns to screens.

use strsim::levenshtein;

/// Every navigable screen in the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Budgets,
    BudgetCreate,
    Goals,
    GoalCreate,
    GoalDetail(u32),
    /// Catch-all; carries the path that failed to resolve.
    NotFound(String),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Budgets => "/budgets".into(),
            Route::BudgetCreate => "/budgets/create".into(),
            Route::Goals => "/saving-goals".into(),
            Route::GoalCreate => "/saving-goals/create".into(),
            Route::GoalDetail(id) => format!("/saving-goals/{id}"),
            Route::NotFound(_) => "/not-found".into(),
        }
    }
}

/// The static paths offered in navigation help and suggestions.
pub const KNOWN_PATHS: [&str; 5] = [
    "/budgets",
    "/budgets/create",
    "/saving-goals",
    "/saving-goals/create",
    "/saving-goals/{id}",
];

/// Resolves a typed path against the route table. Anything that does not
/// match falls through to the not-found redirect.
pub fn resolve(path: &str) -> Route {
    let trimmed = path.trim();
    let normalized = trimmed.trim_end_matches('/');
    match normalized {
        "" | "/budgets" => Route::Budgets,
        "/budgets/create" => Route::BudgetCreate,
        "/saving-goals" => Route::Goals,
        "/saving-goals/create" => Route::GoalCreate,
        _ => match normalized
            .strip_prefix("/saving-goals/")
            .and_then(|id| id.parse::<u32>().ok())
        {
            Some(id) => Route::GoalDetail(id),
            None => Route::NotFound(trimmed.to_string()),
        },
    }
}

/// Nearest known path, for "did you mean" hints on bad input.
pub fn suggest(path: &str) -> Option<&'static str> {
    KNOWN_PATHS
        .iter()
        .map(|candidate| (levenshtein(path.trim(), candidate), *candidate))
        .filter(|(distance, _)| *distance <= 3)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_paths_resolve() {
        assert_eq!(resolve("/budgets"), Route::Budgets);
        assert_eq!(resolve("/budgets/create"), Route::BudgetCreate);
        assert_eq!(resolve("/saving-goals"), Route::Goals);
        assert_eq!(resolve("/saving-goals/create"), Route::GoalCreate);
        assert_eq!(resolve("/saving-goals/"), Route::Goals);
    }

    #[test]
    fn detail_paths_carry_their_id() {
        assert_eq!(resolve("/saving-goals/7"), Route::GoalDetail(7));
        assert_eq!(
            resolve("/saving-goals/abc"),
            Route::NotFound("/saving-goals/abc".into())
        );
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(
            resolve("/transactions"),
            Route::NotFound("/transactions".into())
        );
        assert_eq!(resolve(""), Route::Budgets);
    }

    #[test]
    fn near_misses_get_a_suggestion() {
        assert_eq!(suggest("/budget"), Some("/budgets"));
        assert_eq!(suggest("/saving-goal"), Some("/saving-goals"));
        assert_eq!(suggest("/completely/else"), None);
    }
}
