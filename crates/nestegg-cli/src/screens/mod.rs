pub mod budget_create;
pub mod budgets;
pub mod goal_create;
pub mod goal_detail;
pub mod goals;
pub mod not_found;
