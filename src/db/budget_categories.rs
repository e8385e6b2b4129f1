//! Budget categories.
//!
//! `spent_amount` belongs to the transactions repository; nothing here
//! recomputes it. Deleting a category does not cascade to its transactions:
//! historical spend records outlive the bucket they were filed under.

use crate::errors::Result;
use crate::models::BudgetCategory;
use crate::store::{Store, collections, new_record_id};
use chrono::Utc;
use tracing::{info, instrument};

/// Caller-supplied fields for a new budget category.
#[derive(Debug, Clone)]
pub struct NewBudgetCategory {
    pub event_id: String,
    pub name: String,
    pub allocated_amount: f64,
    pub spent_amount: f64,
    pub color: String,
}

/// Creates a budget category and returns the stored record.
///
/// # Errors
///
/// Propagates engine errors unchanged.
#[instrument(skip(store, input), fields(event_id = %input.event_id, name = %input.name))]
pub async fn create_budget_category(
    store: &Store,
    input: NewBudgetCategory,
) -> Result<BudgetCategory> {
    let category = BudgetCategory {
        id: new_record_id(),
        event_id: input.event_id,
        name: input.name,
        allocated_amount: input.allocated_amount,
        spent_amount: input.spent_amount,
        color: input.color,
        created_at: Utc::now(),
    };
    store.insert(collections::BUDGET_CATEGORIES, &category).await?;
    info!(
        "Created budget category {} ('{}') for event {}",
        category.id, category.name, category.event_id
    );
    Ok(category)
}

/// Looks a budget category up by id.
///
/// # Errors
///
/// Propagates engine errors unchanged.
pub async fn get_budget_category(store: &Store, id: &str) -> Result<Option<BudgetCategory>> {
    store.get_by_id(collections::BUDGET_CATEGORIES, id).await
}

/// Returns the budget categories of one event.
///
/// # Errors
///
/// Propagates engine errors unchanged.
pub async fn get_event_budget_categories(
    store: &Store,
    event_id: &str,
) -> Result<Vec<BudgetCategory>> {
    store
        .get_by_index(collections::BUDGET_CATEGORIES, "eventId", event_id)
        .await
}

/// Replaces a budget category wholesale.
///
/// # Errors
///
/// Propagates engine errors unchanged.
#[instrument(skip(store, category), fields(category_id = %category.id))]
pub async fn update_budget_category(
    store: &Store,
    category: BudgetCategory,
) -> Result<BudgetCategory> {
    store.upsert(collections::BUDGET_CATEGORIES, &category).await?;
    Ok(category)
}

/// Removes a budget category. Its transactions stay behind.
///
/// # Errors
///
/// Propagates engine errors unchanged.
#[instrument(skip(store))]
pub async fn delete_budget_category(store: &Store, id: &str) -> Result<bool> {
    let removed = store.delete(collections::BUDGET_CATEGORIES, id).await?;
    if removed {
        info!("Deleted budget category {}", id);
    }
    Ok(removed)
}
