//! Saving-goal form validation.
//!
//! The creation form collects raw text; `validate` evaluates every rule
//! against the draft and collects all violations as field-scoped messages
//! instead of stopping at the first. It never panics on malformed input.

use std::fmt;

use chrono::NaiveDate;

use nestegg_domain::{GoalCategory, GoalType};

/// Fields of the saving-goal form that can carry an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalField {
    Name,
    TargetAmount,
    GoalType,
    StartDate,
    EndDate,
    Category,
}

impl GoalField {
    pub fn label(&self) -> &'static str {
        match self {
            GoalField::Name => "Goal Name",
            GoalField::TargetAmount => "Target Amount",
            GoalField::GoalType => "Goal Type",
            GoalField::StartDate => "Start Date",
            GoalField::EndDate => "End Date",
            GoalField::Category => "Category",
        }
    }
}

impl fmt::Display for GoalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: GoalField,
    pub message: String,
}

impl FieldError {
    pub fn new(field: GoalField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// All violations collected from one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn push(&mut self, field: GoalField, message: impl Into<String>) {
        self.0.push(FieldError::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Messages attached to one field, in rule order.
    pub fn for_field(&self, field: GoalField) -> Vec<&str> {
        self.0
            .iter()
            .filter(|error| error.field == field)
            .map(|error| error.message.as_str())
            .collect()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, error) in self.0.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

/// Raw form input prior to validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoalDraft {
    pub name: String,
    pub target_amount: String,
    pub description: String,
    pub goal_type: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub category: String,
}

/// A fully-typed goal accepted by the validator.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidGoal {
    pub name: String,
    pub target_amount: i64,
    pub description: Option<String>,
    pub goal_type: GoalType,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub category: GoalCategory,
}

/// Validates a draft, collecting every violation.
pub fn validate(draft: &GoalDraft) -> Result<ValidGoal, FieldErrors> {
    let mut errors = FieldErrors::default();

    let name = draft.name.trim();
    let name_len = name.chars().count();
    if name_len < 3 {
        errors.push(GoalField::Name, "Goal name must be at least 3 characters");
    } else if name_len > 50 {
        errors.push(GoalField::Name, "Goal name must not exceed 50 characters");
    }

    let target_amount = validate_amount(&draft.target_amount, &mut errors);

    let goal_type = match GoalType::parse(&draft.goal_type) {
        Some(kind) => Some(kind),
        None => {
            errors.push(GoalField::GoalType, "Please select a goal type");
            None
        }
    };

    let start_date = match draft.start_date {
        Some(date) => Some(date),
        None => {
            errors.push(GoalField::StartDate, "Please select a start date");
            None
        }
    };

    let category = match GoalCategory::from_slug(&draft.category) {
        Some(category) => Some(category),
        None => {
            errors.push(GoalField::Category, "Please select a category");
            None
        }
    };

    // Cross-field rules, both attached to the end-date field.
    if goal_type == Some(GoalType::TargetDate) && draft.end_date.is_none() {
        errors.push(
            GoalField::EndDate,
            "Please select an end date for time-bound goals",
        );
    }
    if let (Some(start), Some(end)) = (start_date, draft.end_date) {
        if end <= start {
            errors.push(GoalField::EndDate, "End date must be after start date");
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    let (Some(target_amount), Some(goal_type), Some(start_date), Some(category)) =
        (target_amount, goal_type, start_date, category)
    else {
        return Err(errors);
    };

    let description = draft.description.trim();
    Ok(ValidGoal {
        name: name.to_string(),
        target_amount,
        description: (!description.is_empty()).then(|| description.to_string()),
        goal_type,
        start_date,
        end_date: draft.end_date,
        category,
    })
}

fn validate_amount(raw: &str, errors: &mut FieldErrors) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        errors.push(GoalField::TargetAmount, "Please enter a target amount");
        return None;
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        if value > 0 {
            return Some(value);
        }
        errors.push(GoalField::TargetAmount, "Amount must be greater than 0");
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => {
            if value > 0.0 {
                // Amounts are whole currency units; fractional input
                // still counts as a number and rounds to at least one
                // unit.
                Some((value.round() as i64).max(1))
            } else {
                errors.push(GoalField::TargetAmount, "Amount must be greater than 0");
                None
            }
        }
        _ => {
            errors.push(GoalField::TargetAmount, "Amount must be a number");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> GoalDraft {
        GoalDraft {
            name: "Vacation Fund".into(),
            target_amount: "10000000".into(),
            description: "Beach trip".into(),
            goal_type: "target-date".into(),
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1),
            end_date: NaiveDate::from_ymd_opt(2025, 8, 1),
            category: "travel".into(),
        }
    }

    #[test]
    fn accepts_a_complete_draft() {
        let goal = validate(&draft()).expect("valid draft");
        assert_eq!(goal.name, "Vacation Fund");
        assert_eq!(goal.target_amount, 10_000_000);
        assert_eq!(goal.goal_type, GoalType::TargetDate);
        assert_eq!(goal.category, GoalCategory::Travel);
        assert_eq!(goal.description.as_deref(), Some("Beach trip"));
    }

    #[test]
    fn rejects_short_and_long_names() {
        let mut short = draft();
        short.name = "Ab".into();
        let errors = validate(&short).expect_err("too short");
        assert_eq!(
            errors.for_field(GoalField::Name),
            vec!["Goal name must be at least 3 characters"]
        );

        let mut long = draft();
        long.name = "x".repeat(51);
        let errors = validate(&long).expect_err("too long");
        assert_eq!(
            errors.for_field(GoalField::Name),
            vec!["Goal name must not exceed 50 characters"]
        );
    }

    #[test]
    fn rejects_bad_amounts() {
        for (raw, message) in [
            ("", "Please enter a target amount"),
            ("abc", "Amount must be a number"),
            ("0", "Amount must be greater than 0"),
            ("-500", "Amount must be greater than 0"),
        ] {
            let mut input = draft();
            input.target_amount = raw.into();
            let errors = validate(&input).expect_err("invalid amount");
            assert_eq!(errors.for_field(GoalField::TargetAmount), vec![message]);
        }
    }

    #[test]
    fn fractional_amounts_round_to_whole_units() {
        let mut input = draft();
        input.target_amount = "12.5".into();
        let goal = validate(&input).expect("fractional amounts are numbers");
        assert_eq!(goal.target_amount, 13);
    }

    #[test]
    fn requires_end_date_for_time_bound_goals() {
        let mut input = draft();
        input.end_date = None;
        let errors = validate(&input).expect_err("missing end date");
        assert_eq!(
            errors.for_field(GoalField::EndDate),
            vec!["Please select an end date for time-bound goals"]
        );

        let mut ongoing = input;
        ongoing.goal_type = "ongoing".into();
        assert!(validate(&ongoing).is_ok(), "ongoing goals need no end date");
    }

    #[test]
    fn end_date_must_follow_start_date() {
        let mut input = draft();
        input.end_date = input.start_date;
        let errors = validate(&input).expect_err("equal dates");
        assert_eq!(
            errors.for_field(GoalField::EndDate),
            vec!["End date must be after start date"]
        );
    }

    #[test]
    fn collects_every_violation_at_once() {
        let input = GoalDraft {
            name: "Hi".into(),
            target_amount: "nope".into(),
            description: String::new(),
            goal_type: "target-date".into(),
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1),
            end_date: None,
            category: String::new(),
        };
        let errors = validate(&input).expect_err("many violations");
        assert_eq!(errors.len(), 4);
        assert!(!errors.for_field(GoalField::Name).is_empty());
        assert!(!errors.for_field(GoalField::TargetAmount).is_empty());
        assert!(!errors.for_field(GoalField::EndDate).is_empty());
        assert!(!errors.for_field(GoalField::Category).is_empty());
    }
}
