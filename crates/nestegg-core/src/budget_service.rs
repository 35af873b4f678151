//! Budget dashboard figures and the budget-creation draft.

use std::thread;
use std::time::Duration;

use chrono::Month;
use thiserror::Error;

use nestegg_domain::{
    category_template, month_window, percent_of, Allocation, Budget, BudgetCategory,
    CategoryTemplate,
};

use crate::error::CoreError;

const SAVE_DELAY: Duration = Duration::from_millis(1000);

/// Aggregate figures shown on the dashboard cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetTotals {
    pub budget: i64,
    pub spent: i64,
    pub remaining: i64,
    pub percent_used: u32,
}

pub struct BudgetService;

impl BudgetService {
    pub fn totals(categories: &[BudgetCategory]) -> BudgetTotals {
        let budget: i64 = categories.iter().map(|c| c.amount).sum();
        let spent: i64 = categories.iter().map(|c| c.spent).sum();
        BudgetTotals {
            budget,
            spent,
            remaining: budget - spent,
            percent_used: percent_of(spent, budget),
        }
    }

    /// Case-insensitive category name search; empty query matches all.
    pub fn search<'a>(categories: &'a [BudgetCategory], query: &str) -> Vec<&'a BudgetCategory> {
        let needle = query.trim().to_lowercase();
        categories
            .iter()
            .filter(|category| needle.is_empty() || category.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Simulates the backend save of a submitted budget.
    pub fn save(budget: &Budget) -> Result<(), CoreError> {
        thread::sleep(SAVE_DELAY);
        tracing::debug!(month = ?budget.month, "simulated budget save completed");
        Ok(())
    }
}

/// Rejections produced while assembling a budget draft.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("Please select a category")]
    MissingCategory,
    #[error("Please enter a valid amount")]
    InvalidAmount,
    #[error("This category already exists in your budget")]
    DuplicateCategory,
}

/// One category's share of the draft, for the summary breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationShare {
    pub slug: String,
    pub name: &'static str,
    pub icon: &'static str,
    pub amount: i64,
    pub percent: u32,
}

/// Derived view of the draft rendered beside the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationSummary {
    pub total_budget: i64,
    pub allocated: i64,
    pub remaining: i64,
    pub percent_allocated: u32,
    pub over_allocated: bool,
    pub shares: Vec<AllocationShare>,
}

/// Working state of the budget-creation form.
///
/// Allocations may exceed the total; the summary flags it and
/// `can_submit` refuses it, but nothing blocks adding the allocation.
#[derive(Debug, Clone)]
pub struct BudgetDraft {
    budget: Budget,
}

impl BudgetDraft {
    pub fn new(month: Month, year: i32, total_budget: i64) -> Self {
        Self {
            budget: Budget::new(month, year, total_budget),
        }
    }

    pub fn budget(&self) -> &Budget {
        &self.budget
    }

    /// Switching month recomputes the draft's date window.
    pub fn set_month(&mut self, month: Month, year: i32) {
        self.budget.month = month;
        self.budget.year = year;
        let (start, end) = month_window(year, month);
        self.budget.start_date = start;
        self.budget.end_date = end;
    }

    pub fn set_total(&mut self, total_budget: i64) {
        self.budget.total_budget = total_budget;
    }

    pub fn add_allocation(&mut self, slug: &str, raw_amount: &str) -> Result<(), DraftError> {
        let slug = slug.trim();
        if slug.is_empty() || category_template(slug).is_none() {
            return Err(DraftError::MissingCategory);
        }
        let amount = raw_amount
            .trim()
            .parse::<i64>()
            .map_err(|_| DraftError::InvalidAmount)?;
        if amount <= 0 {
            return Err(DraftError::InvalidAmount);
        }
        if self.budget.allocations.iter().any(|a| a.category == slug) {
            return Err(DraftError::DuplicateCategory);
        }
        self.budget.allocations.push(Allocation {
            category: slug.to_string(),
            amount,
        });
        Ok(())
    }

    pub fn remove_allocation(&mut self, slug: &str) -> bool {
        let before = self.budget.allocations.len();
        self.budget.allocations.retain(|a| a.category != slug.trim());
        self.budget.allocations.len() != before
    }

    /// Templates not yet allocated, in menu order.
    pub fn available_templates(&self) -> Vec<&'static CategoryTemplate> {
        nestegg_domain::CATEGORY_TEMPLATES
            .iter()
            .filter(|template| {
                !self
                    .budget
                    .allocations
                    .iter()
                    .any(|a| a.category == template.slug)
            })
            .collect()
    }

    pub fn summary(&self) -> AllocationSummary {
        let total_budget = self.budget.total_budget;
        let allocated = self.budget.allocated();
        let shares = self
            .budget
            .allocations
            .iter()
            .map(|allocation| {
                let template = category_template(&allocation.category);
                AllocationShare {
                    slug: allocation.category.clone(),
                    name: template.map(|t| t.name).unwrap_or("Unknown"),
                    icon: template.map(|t| t.icon).unwrap_or("📊"),
                    amount: allocation.amount,
                    percent: percent_of(allocation.amount, total_budget),
                }
            })
            .collect();
        AllocationSummary {
            total_budget,
            allocated,
            remaining: total_budget - allocated,
            percent_allocated: percent_of(allocated, total_budget),
            over_allocated: allocated > total_budget,
            shares,
        }
    }

    /// Submission needs at least one allocation and no over-allocation.
    pub fn can_submit(&self) -> bool {
        !self.budget.allocations.is_empty() && self.budget.allocated() <= self.budget.total_budget
    }
}
