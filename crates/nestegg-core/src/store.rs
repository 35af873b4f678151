//! In-memory data store seeded with mock records.
//!
//! Nothing here survives process exit; the store stands in for the
//! backend a future release would talk to.

use chrono::NaiveDate;
use once_cell::sync::Lazy;

use nestegg_domain::{
    BudgetCategory, ColorTag, Contribution, GoalCategory, GoalType, SavingGoal,
};

use crate::error::CoreError;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

#[allow(clippy::too_many_arguments)]
fn seed_goal(
    id: u32,
    name: &str,
    progress: u8,
    target_amount: i64,
    current_amount: i64,
    created_at: NaiveDate,
    category: GoalCategory,
    end_date: Option<NaiveDate>,
) -> SavingGoal {
    let goal_type = if end_date.is_some() {
        GoalType::TargetDate
    } else {
        GoalType::Ongoing
    };
    SavingGoal {
        id,
        name: name.into(),
        target_amount,
        current_amount,
        description: None,
        goal_type,
        start_date: created_at,
        end_date,
        category,
        progress,
        created_at,
    }
}

static SEED_GOALS: Lazy<Vec<SavingGoal>> = Lazy::new(|| {
    vec![
        seed_goal(
            1,
            "Vacation Fund",
            38,
            10_000_000,
            3_800_000,
            date(2025, 1, 1),
            GoalCategory::Travel,
            Some(date(2025, 8, 1)),
        ),
        seed_goal(
            2,
            "New Laptop",
            65,
            25_000_000,
            16_250_000,
            date(2025, 1, 15),
            GoalCategory::Other,
            Some(date(2025, 9, 30)),
        ),
        seed_goal(
            3,
            "Emergency Fund",
            100,
            50_000_000,
            50_000_000,
            date(2024, 10, 5),
            GoalCategory::Emergency,
            None,
        ),
        seed_goal(
            4,
            "Home Down Payment",
            25,
            200_000_000,
            50_000_000,
            date(2024, 11, 20),
            GoalCategory::Housing,
            Some(date(2026, 12, 31)),
        ),
        seed_goal(
            5,
            "Wedding",
            45,
            100_000_000,
            45_000_000,
            date(2024, 12, 1),
            GoalCategory::Other,
            Some(date(2025, 11, 15)),
        ),
        seed_goal(
            6,
            "Car Repair",
            100,
            15_000_000,
            15_000_000,
            date(2024, 9, 15),
            GoalCategory::Transportation,
            Some(date(2024, 12, 31)),
        ),
        seed_goal(
            7,
            "Holiday Gifts",
            70,
            5_000_000,
            3_500_000,
            date(2024, 11, 1),
            GoalCategory::Other,
            Some(date(2024, 12, 24)),
        ),
        seed_goal(
            8,
            "Education",
            50,
            30_000_000,
            15_000_000,
            date(2024, 10, 10),
            GoalCategory::Education,
            None,
        ),
        seed_goal(
            9,
            "New Phone",
            100,
            20_000_000,
            20_000_000,
            date(2024, 8, 20),
            GoalCategory::Other,
            Some(date(2025, 1, 31)),
        ),
        seed_goal(
            10,
            "Fitness Equipment",
            30,
            8_000_000,
            2_400_000,
            date(2025, 1, 5),
            GoalCategory::Other,
            Some(date(2025, 6, 30)),
        ),
        seed_goal(
            11,
            "Home Renovation",
            15,
            150_000_000,
            22_500_000,
            date(2025, 2, 1),
            GoalCategory::Housing,
            Some(date(2026, 3, 31)),
        ),
        seed_goal(
            12,
            "Investment Fund",
            100,
            100_000_000,
            100_000_000,
            date(2024, 7, 15),
            GoalCategory::Retirement,
            None,
        ),
    ]
});

fn seed_category(
    id: u32,
    name: &str,
    amount: i64,
    spent: i64,
    color: ColorTag,
    icon: &str,
) -> BudgetCategory {
    BudgetCategory {
        id,
        name: name.into(),
        amount,
        spent,
        color,
        icon: icon.into(),
    }
}

static SEED_CATEGORIES: Lazy<Vec<BudgetCategory>> = Lazy::new(|| {
    vec![
        seed_category(1, "Social Fund", 1_200_000, 600_000, ColorTag::Blue, "👥"),
        seed_category(2, "Food", 1_500_000, 900_000, ColorTag::Green, "🍔"),
        seed_category(3, "Housing", 3_000_000, 2_500_000, ColorTag::Purple, "🏠"),
        seed_category(4, "Entertainment", 1_000_000, 300_000, ColorTag::Pink, "🎬"),
        seed_category(5, "Transportation", 800_000, 400_000, ColorTag::Yellow, "🚗"),
        seed_category(6, "Misc", 500_000, 200_000, ColorTag::Gray, "📦"),
    ]
});

static SEED_CONTRIBUTIONS: Lazy<Vec<Contribution>> = Lazy::new(|| {
    (1..=4)
        .map(|id| Contribution {
            id,
            date: date(2025, 4, 15),
            amount: 100_000,
            note: "Hangout with friends".into(),
            category: "Saving".into(),
        })
        .collect()
});

/// Holds every record the app can display or create.
#[derive(Debug, Clone)]
pub struct Store {
    goals: Vec<SavingGoal>,
    categories: Vec<BudgetCategory>,
    contributions: Vec<Contribution>,
}

impl Store {
    /// A store pre-populated with the mock data set.
    pub fn seeded() -> Self {
        Self {
            goals: SEED_GOALS.clone(),
            categories: SEED_CATEGORIES.clone(),
            contributions: SEED_CONTRIBUTIONS.clone(),
        }
    }

    pub fn empty() -> Self {
        Self {
            goals: Vec::new(),
            categories: Vec::new(),
            contributions: Vec::new(),
        }
    }

    pub fn goals(&self) -> &[SavingGoal] {
        &self.goals
    }

    pub fn goal(&self, id: u32) -> Result<&SavingGoal, CoreError> {
        self.goals
            .iter()
            .find(|goal| goal.id == id)
            .ok_or(CoreError::GoalNotFound(id))
    }

    /// Ids are sequential; the next one follows the current maximum.
    pub fn next_goal_id(&self) -> u32 {
        self.goals.iter().map(|goal| goal.id).max().unwrap_or(0) + 1
    }

    pub fn insert_goal(&mut self, goal: SavingGoal) {
        self.goals.push(goal);
    }

    pub fn categories(&self) -> &[BudgetCategory] {
        &self.categories
    }

    /// The mock data set records the same contribution history for every
    /// goal.
    pub fn contributions(&self, _goal_id: u32) -> &[Contribution] {
        &self.contributions
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nestegg_domain::GoalStatus;

    #[test]
    fn seed_contains_twelve_goals_with_sequential_ids() {
        let store = Store::seeded();
        assert_eq!(store.goals().len(), 12);
        let ids: Vec<u32> = store.goals().iter().map(|goal| goal.id).collect();
        assert_eq!(ids, (1..=12).collect::<Vec<u32>>());
        assert_eq!(store.next_goal_id(), 13);
    }

    #[test]
    fn completed_seed_goals_report_completed_status() {
        let store = Store::seeded();
        let completed: Vec<&str> = store
            .goals()
            .iter()
            .filter(|goal| goal.status() == GoalStatus::Completed)
            .map(|goal| goal.name.as_str())
            .collect();
        assert_eq!(
            completed,
            vec!["Emergency Fund", "Car Repair", "New Phone", "Investment Fund"]
        );
    }

    #[test]
    fn seed_budget_has_six_categories() {
        let store = Store::seeded();
        assert_eq!(store.categories().len(), 6);
        let total: i64 = store.categories().iter().map(|c| c.amount).sum();
        assert_eq!(total, 8_000_000);
    }

    #[test]
    fn unknown_goal_id_errors() {
        let store = Store::seeded();
        assert!(matches!(store.goal(99), Err(CoreError::GoalNotFound(99))));
        assert_eq!(store.goal(1).unwrap().name, "Vacation Fund");
    }

    #[test]
    fn contributions_back_the_detail_screen() {
        let store = Store::seeded();
        assert_eq!(store.contributions(1).len(), 4);
    }
}
