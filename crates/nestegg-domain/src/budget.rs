//! Domain types representing monthly budgets and their categories.

use std::fmt;

use chrono::{Month, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::common::*;

/// A named bucket of planned spending inside the monthly budget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetCategory {
    pub id: u32,
    pub name: String,
    pub amount: i64,
    pub spent: i64,
    pub color: ColorTag,
    pub icon: String,
}

impl BudgetCategory {
    /// Displayed, never stored.
    pub fn remaining(&self) -> i64 {
        self.amount - self.spent
    }

    pub fn percent_used(&self) -> u32 {
        percent_of(self.spent, self.amount)
    }
}

impl Identifiable for BudgetCategory {
    fn id(&self) -> u32 {
        self.id
    }
}

impl NamedEntity for BudgetCategory {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for BudgetCategory {
    fn display_label(&self) -> String {
        format!("{} {}", self.icon, self.name)
    }
}

/// Accent color associated with a budget category card.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Blue,
    Green,
    Purple,
    Pink,
    Yellow,
    Gray,
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ColorTag::Blue => "blue",
            ColorTag::Green => "green",
            ColorTag::Purple => "purple",
            ColorTag::Pink => "pink",
            ColorTag::Yellow => "yellow",
            ColorTag::Gray => "gray",
        };
        f.write_str(label)
    }
}

/// One (category, amount) pair inside a budget draft or saved budget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Allocation {
    pub category: String,
    pub amount: i64,
}

/// A monthly budget: a total plus ordered, unique category allocations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    pub month: Month,
    pub year: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_budget: i64,
    pub allocations: Vec<Allocation>,
}

impl Budget {
    pub fn new(month: Month, year: i32, total_budget: i64) -> Self {
        let (start_date, end_date) = month_window(year, month);
        Self {
            month,
            year,
            start_date,
            end_date,
            total_budget,
            allocations: Vec::new(),
        }
    }

    pub fn allocated(&self) -> i64 {
        self.allocations.iter().map(|a| a.amount).sum()
    }
}

/// A selectable category offered by the budget creation form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTemplate {
    pub slug: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
}

/// The fixed set of categories a budget can allocate to.
pub const CATEGORY_TEMPLATES: [CategoryTemplate; 14] = [
    CategoryTemplate { slug: "housing", name: "Housing", icon: "🏠" },
    CategoryTemplate { slug: "food", name: "Food", icon: "🍔" },
    CategoryTemplate { slug: "transportation", name: "Transportation", icon: "🚗" },
    CategoryTemplate { slug: "entertainment", name: "Entertainment", icon: "🎬" },
    CategoryTemplate { slug: "utilities", name: "Utilities", icon: "💡" },
    CategoryTemplate { slug: "healthcare", name: "Healthcare", icon: "🏥" },
    CategoryTemplate { slug: "shopping", name: "Shopping", icon: "🛍️" },
    CategoryTemplate { slug: "education", name: "Education", icon: "📚" },
    CategoryTemplate { slug: "personal", name: "Personal Care", icon: "💇" },
    CategoryTemplate { slug: "travel", name: "Travel", icon: "✈️" },
    CategoryTemplate { slug: "gifts", name: "Gifts & Donations", icon: "🎁" },
    CategoryTemplate { slug: "savings", name: "Savings", icon: "💰" },
    CategoryTemplate { slug: "debt", name: "Debt Payments", icon: "💳" },
    CategoryTemplate { slug: "misc", name: "Miscellaneous", icon: "📦" },
];

pub fn category_template(slug: &str) -> Option<&'static CategoryTemplate> {
    CATEGORY_TEMPLATES
        .iter()
        .find(|template| template.slug == slug.trim())
}
