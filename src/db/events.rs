//! Events.
//!
//! `booked_count` always starts at zero; only the bookings repository moves
//! it afterwards. Deleting an event removes nothing else: bookings, guests,
//! budget categories, and transactions keep their dangling `eventId`, and
//! callers that want cleanup do it explicitly.

use crate::errors::Result;
use crate::models::{Event, EventCategory, EventStatus};
use crate::store::{Store, collections, new_record_id};
use chrono::{NaiveDate, Utc};
use tracing::{info, instrument};

/// Caller-supplied fields for a new event.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub category: EventCategory,
    pub date: NaiveDate,
    pub time: Option<String>,
    pub location: Option<String>,
    pub venue: Option<String>,
    pub currency: String,
    pub capacity: u32,
    pub total_budget: f64,
    pub estimated_guests: Option<u32>,
    pub cover_image_url: Option<String>,
    pub status: EventStatus,
}

/// Creates an event and returns the stored record.
///
/// # Errors
///
/// Propagates engine errors unchanged.
#[instrument(skip(store, input), fields(title = %input.title))]
pub async fn create_event(store: &Store, input: NewEvent) -> Result<Event> {
    let now = Utc::now();
    let event = Event {
        id: new_record_id(),
        user_id: input.user_id,
        title: input.title,
        description: input.description,
        category: input.category,
        date: input.date,
        time: input.time,
        location: input.location,
        venue: input.venue,
        currency: input.currency,
        capacity: input.capacity,
        booked_count: 0,
        total_budget: input.total_budget,
        estimated_guests: input.estimated_guests,
        cover_image_url: input.cover_image_url,
        status: input.status,
        created_at: now,
        updated_at: now,
    };
    store.insert(collections::EVENTS, &event).await?;
    info!("Created event {} ('{}')", event.id, event.title);
    Ok(event)
}

/// Looks an event up by id.
///
/// # Errors
///
/// Propagates engine errors unchanged.
pub async fn get_event(store: &Store, id: &str) -> Result<Option<Event>> {
    store.get_by_id(collections::EVENTS, id).await
}

/// Returns every event in the store.
///
/// # Errors
///
/// Propagates engine errors unchanged.
pub async fn get_all_events(store: &Store) -> Result<Vec<Event>> {
    store.get_all(collections::EVENTS).await
}

/// Returns the events owned by one planner.
///
/// # Errors
///
/// Propagates engine errors unchanged.
pub async fn get_user_events(store: &Store, user_id: &str) -> Result<Vec<Event>> {
    store
        .get_by_index(collections::EVENTS, "userId", user_id)
        .await
}

/// Replaces an event wholesale, refreshing its `updated_at` stamp.
///
/// # Errors
///
/// Propagates engine errors unchanged.
#[instrument(skip(store, event), fields(event_id = %event.id))]
pub async fn update_event(store: &Store, mut event: Event) -> Result<Event> {
    event.updated_at = Utc::now();
    store.upsert(collections::EVENTS, &event).await?;
    Ok(event)
}

/// Removes an event. Child records are left in place.
///
/// # Errors
///
/// Propagates engine errors unchanged.
#[instrument(skip(store))]
pub async fn delete_event(store: &Store, id: &str) -> Result<bool> {
    let removed = store.delete(collections::EVENTS, id).await?;
    if removed {
        info!("Deleted event {}", id);
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_utils::{
        init_test_tracing, sample_booking, sample_event, sample_guest, setup_test_store,
    };
    use crate::db::{bookings, guests};

    #[tokio::test]
    async fn create_event_starts_with_zero_booked_count() {
        init_test_tracing();
        let store = setup_test_store().await.unwrap();

        let before = Utc::now();
        let event = create_event(&store, sample_event("planner-1")).await.unwrap();

        assert!(!event.id.is_empty());
        assert_eq!(event.booked_count, 0);
        assert!(event.created_at >= before && event.created_at <= Utc::now());
        assert_eq!(event.created_at, event.updated_at);
    }

    #[tokio::test]
    async fn events_are_listed_per_owner() {
        init_test_tracing();
        let store = setup_test_store().await.unwrap();

        create_event(&store, sample_event("planner-1")).await.unwrap();
        create_event(&store, sample_event("planner-1")).await.unwrap();
        create_event(&store, sample_event("planner-2")).await.unwrap();

        assert_eq!(get_user_events(&store, "planner-1").await.unwrap().len(), 2);
        assert_eq!(get_user_events(&store, "planner-2").await.unwrap().len(), 1);
        assert_eq!(get_all_events(&store).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn update_event_refreshes_updated_at() {
        init_test_tracing();
        let store = setup_test_store().await.unwrap();

        let mut event = create_event(&store, sample_event("planner-1")).await.unwrap();
        let created_at = event.created_at;

        event.title = "Renamed celebration".to_string();
        let updated = update_event(&store, event).await.unwrap();

        assert_eq!(updated.created_at, created_at);
        assert!(updated.updated_at >= created_at);

        let reloaded = get_event(&store, &updated.id).await.unwrap().unwrap();
        assert_eq!(reloaded.title, "Renamed celebration");
        assert_eq!(reloaded, updated);
    }

    #[tokio::test]
    async fn delete_event_leaves_children_orphaned() {
        init_test_tracing();
        let store = setup_test_store().await.unwrap();

        let event = create_event(&store, sample_event("planner-1")).await.unwrap();
        bookings::create_booking(&store, sample_booking(&event.id, 2))
            .await
            .unwrap();
        guests::create_guest(&store, sample_guest(&event.id, "Ngozi"))
            .await
            .unwrap();

        assert!(delete_event(&store, &event.id).await.unwrap());
        assert!(get_event(&store, &event.id).await.unwrap().is_none());

        // No cascade: children keep their dangling eventId.
        assert_eq!(
            bookings::get_event_bookings(&store, &event.id)
                .await
                .unwrap()
                .len(),
            1
        );
        assert_eq!(
            guests::get_event_guests(&store, &event.id)
                .await
                .unwrap()
                .len(),
            1
        );
    }

    #[tokio::test]
    async fn delete_event_reports_absence() {
        init_test_tracing();
        let store = setup_test_store().await.unwrap();
        assert!(!delete_event(&store, "missing").await.unwrap());
    }
}
