//! Budget rollups.
//!
//! Per-category spend is derived by summing the event's transactions, so
//! the rollup is a pure function of its inputs; with the maintained
//! `spent_amount` counter intact the two agree. Over-budget is a plain
//! comparison; what to do about it is the caller's business.

use crate::db::{budget_categories, transactions};
use crate::errors::Result;
use crate::models::{BudgetCategory, Event, Transaction};
use crate::store::Store;

/// One category's slice of the rollup.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRollup {
    pub category: BudgetCategory,
    /// Sum of transaction amounts filed under this category.
    pub spent: f64,
    /// Spend as a percentage of the allocation; zero when nothing is
    /// allocated.
    pub percent_used: f64,
    pub over_budget: bool,
}

/// Event-level budget totals plus the per-category breakdown.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetRollup {
    pub categories: Vec<CategoryRollup>,
    pub total_allocated: f64,
    pub total_spent: f64,
    /// Event total budget minus total spend.
    pub remaining: f64,
    /// Event total budget minus the allocation sum.
    pub unallocated: f64,
}

/// Computes the rollup from already-loaded records.
#[must_use]
pub fn compute_budget_rollup(
    total_budget: f64,
    categories: &[BudgetCategory],
    event_transactions: &[Transaction],
) -> BudgetRollup {
    let mut rollups = Vec::with_capacity(categories.len());
    let mut total_allocated = 0.0;
    let mut total_spent = 0.0;
    for category in categories {
        let spent: f64 = event_transactions
            .iter()
            .filter(|t| t.budget_category_id == category.id)
            .map(|t| t.amount)
            .sum();
        let percent_used = if category.allocated_amount == 0.0 {
            0.0
        } else {
            (spent / category.allocated_amount) * 100.0
        };
        total_allocated += category.allocated_amount;
        total_spent += spent;
        rollups.push(CategoryRollup {
            spent,
            percent_used,
            over_budget: spent > category.allocated_amount,
            category: category.clone(),
        });
    }
    BudgetRollup {
        categories: rollups,
        total_allocated,
        total_spent,
        remaining: total_budget - total_spent,
        unallocated: total_budget - total_allocated,
    }
}

/// Loads one event's categories and transactions and computes its rollup.
///
/// # Errors
///
/// Propagates engine errors unchanged.
pub async fn event_budget_rollup(store: &Store, event: &Event) -> Result<BudgetRollup> {
    let categories = budget_categories::get_event_budget_categories(store, &event.id).await?;
    let event_transactions = transactions::get_event_transactions(store, &event.id).await?;
    Ok(compute_budget_rollup(
        event.total_budget,
        &categories,
        &event_transactions,
    ))
}
