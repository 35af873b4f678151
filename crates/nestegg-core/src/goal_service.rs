//! Saving-goal operations over the in-memory store.

use std::thread;
use std::time::Duration;

use chrono::NaiveDate;

use nestegg_domain::{Contribution, SavingGoal};

use crate::error::CoreError;
use crate::query::{run_query, GoalPage, GoalQuery};
use crate::store::Store;
use crate::validate::{validate, FieldErrors, GoalDraft};

/// Stand-in latency for the backend call a future release will make.
const SAVE_DELAY: Duration = Duration::from_millis(1500);

/// A goal plus the records its detail screen renders.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalDetail {
    pub goal: SavingGoal,
    pub contributions: Vec<Contribution>,
}

pub struct GoalService;

impl GoalService {
    /// Runs the query pipeline over the stored goals.
    pub fn list(store: &Store, query: &GoalQuery) -> GoalPage {
        run_query(store.goals(), query)
    }

    pub fn get(store: &Store, id: u32) -> Result<GoalDetail, CoreError> {
        let goal = store.goal(id)?.clone();
        let contributions = store.contributions(id).to_vec();
        Ok(GoalDetail {
            goal,
            contributions,
        })
    }

    /// Validates the draft and stores the resulting goal.
    ///
    /// New goals start at zero progress with the next sequential id.
    pub fn create(
        store: &mut Store,
        draft: &GoalDraft,
        today: NaiveDate,
    ) -> Result<SavingGoal, FieldErrors> {
        let valid = validate(draft)?;
        let goal = SavingGoal {
            id: store.next_goal_id(),
            name: valid.name,
            target_amount: valid.target_amount,
            current_amount: 0,
            description: valid.description,
            goal_type: valid.goal_type,
            start_date: valid.start_date,
            end_date: valid.end_date,
            category: valid.category,
            progress: 0,
            created_at: today,
        };
        store.insert_goal(goal.clone());
        tracing::info!(id = goal.id, name = %goal.name, "saving goal created");
        Ok(goal)
    }

    /// Simulates the network round-trip of a future backend save. Always
    /// succeeds after a fixed delay; the error arm exists so the UI's
    /// catch-all path is real.
    pub fn save(goal: &SavingGoal) -> Result<(), CoreError> {
        thread::sleep(SAVE_DELAY);
        tracing::debug!(id = goal.id, "simulated goal save completed");
        Ok(())
    }
}
