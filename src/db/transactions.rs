//! Budget transactions.
//!
//! Creating or deleting a transaction adjusts the owning category's
//! `spent_amount` as a second, best-effort write, mirroring the way booking
//! writes maintain `booked_count`: a failed adjustment after the primary
//! write has committed is logged and swallowed, never rolled back.

use crate::db::budget_categories::{get_budget_category, update_budget_category};
use crate::errors::Result;
use crate::models::{Transaction, TransactionKind};
use crate::store::{Store, collections, new_record_id};
use chrono::{NaiveDate, Utc};
use tracing::{debug, info, instrument, warn};

/// Caller-supplied fields for a new transaction.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub event_id: String,
    pub budget_category_id: String,
    pub vendor_id: Option<String>,
    pub description: String,
    pub amount: f64,
    pub kind: TransactionKind,
    pub date: NaiveDate,
}

/// Records a transaction, then adds its amount to the owning category's
/// `spent_amount`.
///
/// # Errors
///
/// Propagates engine errors from the transaction insert unchanged. A failed
/// counter adjustment is logged and swallowed.
#[instrument(skip(store, input), fields(category_id = %input.budget_category_id))]
pub async fn create_transaction(store: &Store, input: NewTransaction) -> Result<Transaction> {
    let transaction = Transaction {
        id: new_record_id(),
        event_id: input.event_id,
        budget_category_id: input.budget_category_id,
        vendor_id: input.vendor_id,
        description: input.description,
        amount: input.amount,
        kind: input.kind,
        date: input.date,
        created_at: Utc::now(),
    };
    store.insert(collections::TRANSACTIONS, &transaction).await?;
    info!(
        "Created transaction {} for category {}: amount={}",
        transaction.id, transaction.budget_category_id, transaction.amount
    );

    adjust_spent_amount(store, &transaction.budget_category_id, transaction.amount).await;
    Ok(transaction)
}

/// Looks a transaction up by id.
///
/// # Errors
///
/// Propagates engine errors unchanged.
pub async fn get_transaction(store: &Store, id: &str) -> Result<Option<Transaction>> {
    store.get_by_id(collections::TRANSACTIONS, id).await
}

/// Returns the transactions recorded against one event.
///
/// # Errors
///
/// Propagates engine errors unchanged.
pub async fn get_event_transactions(store: &Store, event_id: &str) -> Result<Vec<Transaction>> {
    store
        .get_by_index(collections::TRANSACTIONS, "eventId", event_id)
        .await
}

/// Returns the transactions filed under one budget category.
///
/// # Errors
///
/// Propagates engine errors unchanged.
pub async fn get_category_transactions(
    store: &Store,
    category_id: &str,
) -> Result<Vec<Transaction>> {
    store
        .get_by_index(collections::TRANSACTIONS, "budgetCategoryId", category_id)
        .await
}

/// Removes a transaction and backs its amount out of the owning category's
/// `spent_amount`, flooring at zero.
///
/// # Errors
///
/// Propagates engine errors from the lookup and delete unchanged. A failed
/// counter adjustment is logged and swallowed.
#[instrument(skip(store))]
pub async fn delete_transaction(store: &Store, id: &str) -> Result<bool> {
    let Some(transaction) = get_transaction(store, id).await? else {
        return Ok(false);
    };
    let removed = store.delete(collections::TRANSACTIONS, id).await?;
    if removed {
        info!(
            "Deleted transaction {} for category {}",
            id, transaction.budget_category_id
        );
        adjust_spent_amount(
            store,
            &transaction.budget_category_id,
            -transaction.amount,
        )
        .await;
    }
    Ok(removed)
}

async fn adjust_spent_amount(store: &Store, category_id: &str, delta: f64) {
    let outcome: Result<()> = async {
        let Some(mut category) = get_budget_category(store, category_id).await? else {
            debug!(
                "Category {} not found while adjusting spent amount",
                category_id
            );
            return Ok(());
        };
        category.spent_amount = (category.spent_amount + delta).max(0.0);
        update_budget_category(store, category).await?;
        Ok(())
    }
    .await;
    if let Err(e) = outcome {
        warn!(
            "Spent amount adjustment for category {} failed after transaction write: {}",
            category_id, e
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::budget_categories::create_budget_category;
    use crate::db::test_utils::{
        init_test_tracing, sample_category, sample_transaction, setup_test_store,
    };

    #[tokio::test]
    async fn spent_amount_tracks_transaction_writes() {
        init_test_tracing();
        let store = setup_test_store().await.unwrap();
        let category = create_budget_category(&store, sample_category("e1", 1000.0))
            .await
            .unwrap();
        assert_eq!(category.spent_amount, 0.0);

        let first = create_transaction(&store, sample_transaction("e1", &category.id, 250.0))
            .await
            .unwrap();
        let loaded = get_budget_category(&store, &category.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(loaded.spent_amount, 250.0);

        create_transaction(&store, sample_transaction("e1", &category.id, 900.0))
            .await
            .unwrap();
        let loaded = get_budget_category(&store, &category.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(loaded.spent_amount, 1150.0);

        assert!(delete_transaction(&store, &first.id).await.unwrap());
        let loaded = get_budget_category(&store, &category.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(loaded.spent_amount, 900.0);
    }

    #[tokio::test]
    async fn deleting_more_than_was_spent_floors_at_zero() {
        init_test_tracing();
        let store = setup_test_store().await.unwrap();
        let category = create_budget_category(&store, sample_category("e1", 1000.0))
            .await
            .unwrap();
        let transaction = create_transaction(&store, sample_transaction("e1", &category.id, 300.0))
            .await
            .unwrap();

        // Knock the stored counter out from under the transaction.
        let mut stale = get_budget_category(&store, &category.id)
            .await
            .unwrap()
            .unwrap();
        stale.spent_amount = 100.0;
        update_budget_category(&store, stale).await.unwrap();

        delete_transaction(&store, &transaction.id).await.unwrap();
        let loaded = get_budget_category(&store, &category.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(loaded.spent_amount, 0.0);
    }

    #[tokio::test]
    async fn transaction_against_a_missing_category_still_succeeds() {
        init_test_tracing();
        let store = setup_test_store().await.unwrap();

        let transaction =
            create_transaction(&store, sample_transaction("e1", "no-such-category", 50.0))
                .await
                .unwrap();
        assert_eq!(
            get_transaction(&store, &transaction.id).await.unwrap(),
            Some(transaction)
        );
    }

    #[tokio::test]
    async fn transactions_are_listed_per_event_and_per_category() {
        init_test_tracing();
        let store = setup_test_store().await.unwrap();
        let food = create_budget_category(&store, sample_category("e1", 1000.0))
            .await
            .unwrap();
        let decor = create_budget_category(&store, sample_category("e1", 500.0))
            .await
            .unwrap();

        create_transaction(&store, sample_transaction("e1", &food.id, 100.0))
            .await
            .unwrap();
        create_transaction(&store, sample_transaction("e1", &decor.id, 200.0))
            .await
            .unwrap();
        create_transaction(&store, sample_transaction("e2", &decor.id, 300.0))
            .await
            .unwrap();

        assert_eq!(get_event_transactions(&store, "e1").await.unwrap().len(), 2);
        assert_eq!(
            get_category_transactions(&store, &decor.id)
                .await
                .unwrap()
                .len(),
            2
        );
    }
}
