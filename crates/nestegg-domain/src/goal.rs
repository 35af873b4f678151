//! Domain types representing saving goals.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::*;

/// A savings target tracked toward completion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavingGoal {
    pub id: u32,
    pub name: String,
    pub target_amount: i64,
    pub current_amount: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub goal_type: GoalType,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub category: GoalCategory,
    pub progress: u8,
    pub created_at: NaiveDate,
}

impl SavingGoal {
    /// Status is derived from progress, never stored.
    pub fn status(&self) -> GoalStatus {
        if self.progress >= 100 {
            GoalStatus::Completed
        } else {
            GoalStatus::InProgress
        }
    }

    pub fn remaining_amount(&self) -> i64 {
        (self.target_amount - self.current_amount).max(0)
    }
}

impl Identifiable for SavingGoal {
    fn id(&self) -> u32 {
        self.id
    }
}

impl NamedEntity for SavingGoal {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for SavingGoal {
    fn display_label(&self) -> String {
        format!("{} ({}%)", self.name, self.progress)
    }
}

/// Whether a goal runs toward a deadline or indefinitely.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum GoalType {
    TargetDate,
    Ongoing,
}

impl GoalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalType::TargetDate => "target-date",
            GoalType::Ongoing => "ongoing",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "target-date" => Some(GoalType::TargetDate),
            "ongoing" => Some(GoalType::Ongoing),
            _ => None,
        }
    }
}

impl fmt::Display for GoalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GoalType::TargetDate => "Target date",
            GoalType::Ongoing => "Ongoing",
        };
        f.write_str(label)
    }
}

/// Derived goal state surfaced in lists and badges.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GoalStatus {
    InProgress,
    Completed,
}

impl fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GoalStatus::InProgress => "In Progress",
            GoalStatus::Completed => "Completed",
        };
        f.write_str(label)
    }
}

/// Fixed set of goal categories offered by the creation form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GoalCategory {
    Travel,
    Education,
    Housing,
    Transportation,
    Emergency,
    Retirement,
    Other,
}

impl GoalCategory {
    pub const ALL: [GoalCategory; 7] = [
        GoalCategory::Travel,
        GoalCategory::Education,
        GoalCategory::Housing,
        GoalCategory::Transportation,
        GoalCategory::Emergency,
        GoalCategory::Retirement,
        GoalCategory::Other,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            GoalCategory::Travel => "travel",
            GoalCategory::Education => "education",
            GoalCategory::Housing => "housing",
            GoalCategory::Transportation => "transportation",
            GoalCategory::Emergency => "emergency",
            GoalCategory::Retirement => "retirement",
            GoalCategory::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GoalCategory::Travel => "Travel",
            GoalCategory::Education => "Education",
            GoalCategory::Housing => "Housing",
            GoalCategory::Transportation => "Transportation",
            GoalCategory::Emergency => "Emergency Fund",
            GoalCategory::Retirement => "Retirement",
            GoalCategory::Other => "Other",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.slug() == slug.trim())
    }
}

impl fmt::Display for GoalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single saved amount recorded against a goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contribution {
    pub id: u32,
    pub date: NaiveDate,
    pub amount: i64,
    pub note: String,
    pub category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal(progress: u8) -> SavingGoal {
        SavingGoal {
            id: 1,
            name: "Vacation Fund".into(),
            target_amount: 10_000_000,
            current_amount: 3_800_000,
            description: None,
            goal_type: GoalType::TargetDate,
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 8, 1),
            category: GoalCategory::Travel,
            progress,
            created_at: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        }
    }

    #[test]
    fn status_is_derived_from_progress() {
        assert_eq!(goal(38).status(), GoalStatus::InProgress);
        assert_eq!(goal(100).status(), GoalStatus::Completed);
        assert_eq!(goal(100).status().to_string(), "Completed");
        assert_eq!(goal(0).status().to_string(), "In Progress");
    }

    #[test]
    fn entity_traits_expose_identity_and_labels() {
        let goal = goal(38);
        assert_eq!(Identifiable::id(&goal), 1);
        assert_eq!(goal.name(), "Vacation Fund");
        assert_eq!(goal.display_label(), "Vacation Fund (38%)");
        assert_eq!(goal.remaining_amount(), 6_200_000);
    }

    #[test]
    fn goal_type_round_trips_through_slug() {
        assert_eq!(GoalType::parse("target-date"), Some(GoalType::TargetDate));
        assert_eq!(GoalType::parse("ongoing"), Some(GoalType::Ongoing));
        assert_eq!(GoalType::parse("weekly"), None);
        assert_eq!(GoalType::TargetDate.as_str(), "target-date");
    }

    #[test]
    fn category_slugs_resolve() {
        assert_eq!(GoalCategory::from_slug("emergency"), Some(GoalCategory::Emergency));
        assert_eq!(GoalCategory::Emergency.label(), "Emergency Fund");
        assert_eq!(GoalCategory::from_slug("unknown"), None);
    }

    #[test]
    fn serde_uses_kebab_case_goal_type() {
        let json = serde_json::to_string(&GoalType::TargetDate).unwrap();
        assert_eq!(json, "\"target-date\"");
    }
}
