//! nestegg-domain
//!
//! Pure domain models (SavingGoal, BudgetCategory, Budget, etc.).
//! No I/O, no CLI, no storage. Only data types and core enums.

pub mod budget;
pub mod common;
pub mod goal;

pub use budget::*;
pub use common::*;
pub use goal::*;
