//! Bookings.
//!
//! Creating or deleting a booking adjusts the parent event's `booked_count`
//! as a second, best-effort write: if the adjustment fails after the booking
//! write has committed, the failure is logged and swallowed. There is no
//! multi-collection transaction to roll back to, so the counter can briefly
//! go stale; the invariant is restored by the next successful adjustment.
//! Updating a booking never touches the counter.

use crate::db::events::{get_event, update_event};
use crate::errors::Result;
use crate::models::{Booking, BookingStatus, PaymentStatus};
use crate::store::{Store, collections, new_record_id};
use chrono::Utc;
use tracing::{debug, info, instrument, warn};

/// Caller-supplied fields for a new booking.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub event_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub number_of_guests: u32,
    pub total_amount: f64,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
    pub special_requests: Option<String>,
}

/// Creates a booking, then bumps the parent event's `booked_count` by the
/// booked guest count.
///
/// # Errors
///
/// Propagates engine errors from the booking insert unchanged. A failed
/// counter adjustment is logged and swallowed.
#[instrument(skip(store, input), fields(event_id = %input.event_id))]
pub async fn create_booking(store: &Store, input: NewBooking) -> Result<Booking> {
    let now = Utc::now();
    let booking = Booking {
        id: new_record_id(),
        event_id: input.event_id,
        customer_name: input.customer_name,
        customer_email: input.customer_email,
        customer_phone: input.customer_phone,
        number_of_guests: input.number_of_guests,
        total_amount: input.total_amount,
        status: input.status,
        payment_status: input.payment_status,
        special_requests: input.special_requests,
        created_at: now,
        updated_at: now,
    };
    store.insert(collections::BOOKINGS, &booking).await?;
    info!(
        "Created booking {} for event {} ({} guests)",
        booking.id, booking.event_id, booking.number_of_guests
    );

    add_to_booked_count(store, &booking.event_id, booking.number_of_guests).await;
    Ok(booking)
}

/// Looks a booking up by id.
///
/// # Errors
///
/// Propagates engine errors unchanged.
pub async fn get_booking(store: &Store, id: &str) -> Result<Option<Booking>> {
    store.get_by_id(collections::BOOKINGS, id).await
}

/// Returns every booking in the store.
///
/// # Errors
///
/// Propagates engine errors unchanged.
pub async fn get_all_bookings(store: &Store) -> Result<Vec<Booking>> {
    store.get_all(collections::BOOKINGS).await
}

/// Returns the bookings made against one event.
///
/// # Errors
///
/// Propagates engine errors unchanged.
pub async fn get_event_bookings(store: &Store, event_id: &str) -> Result<Vec<Booking>> {
    store
        .get_by_index(collections::BOOKINGS, "eventId", event_id)
        .await
}

/// Replaces a booking wholesale, refreshing its `updated_at` stamp.
///
/// Status and guest-count edits deliberately leave the event counter alone;
/// only create and delete move it.
///
/// # Errors
///
/// Propagates engine errors unchanged.
#[instrument(skip(store, booking), fields(booking_id = %booking.id))]
pub async fn update_booking(store: &Store, mut booking: Booking) -> Result<Booking> {
    booking.updated_at = Utc::now();
    store.upsert(collections::BOOKINGS, &booking).await?;
    Ok(booking)
}

/// Removes a booking and releases its guests from the parent event's
/// `booked_count`, flooring the counter at zero.
///
/// # Errors
///
/// Propagates engine errors from the lookup and delete unchanged. A failed
/// counter adjustment is logged and swallowed.
#[instrument(skip(store))]
pub async fn delete_booking(store: &Store, id: &str) -> Result<bool> {
    let Some(booking) = get_booking(store, id).await? else {
        return Ok(false);
    };
    let removed = store.delete(collections::BOOKINGS, id).await?;
    if removed {
        info!("Deleted booking {} for event {}", id, booking.event_id);
        subtract_from_booked_count(store, &booking.event_id, booking.number_of_guests).await;
    }
    Ok(removed)
}

async fn add_to_booked_count(store: &Store, event_id: &str, guests: u32) {
    let outcome: Result<()> = async {
        let Some(mut event) = get_event(store, event_id).await? else {
            debug!("Event {} not found while adding to booked count", event_id);
            return Ok(());
        };
        event.booked_count = event.booked_count.saturating_add(guests);
        update_event(store, event).await?;
        Ok(())
    }
    .await;
    if let Err(e) = outcome {
        warn!(
            "Booked count increase for event {} failed after booking write: {}",
            event_id, e
        );
    }
}

async fn subtract_from_booked_count(store: &Store, event_id: &str, guests: u32) {
    let outcome: Result<()> = async {
        let Some(mut event) = get_event(store, event_id).await? else {
            debug!(
                "Event {} not found while subtracting from booked count",
                event_id
            );
            return Ok(());
        };
        event.booked_count = event.booked_count.saturating_sub(guests);
        update_event(store, event).await?;
        Ok(())
    }
    .await;
    if let Err(e) = outcome {
        warn!(
            "Booked count decrease for event {} failed after booking delete: {}",
            event_id, e
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::events::create_event;
    use crate::db::test_utils::{
        init_test_tracing, sample_booking, sample_event, setup_test_store,
    };

    #[tokio::test]
    async fn booking_lifecycle_moves_the_event_counter() {
        init_test_tracing();
        let store = setup_test_store().await.unwrap();
        let event = create_event(&store, sample_event("planner-1")).await.unwrap();
        assert_eq!(event.booked_count, 0);

        let booking = create_booking(&store, sample_booking(&event.id, 3))
            .await
            .unwrap();
        let after_create = get_event(&store, &event.id).await.unwrap().unwrap();
        assert_eq!(after_create.booked_count, 3);

        assert!(delete_booking(&store, &booking.id).await.unwrap());
        let after_delete = get_event(&store, &event.id).await.unwrap().unwrap();
        assert_eq!(after_delete.booked_count, 0);
    }

    #[tokio::test]
    async fn counter_tracks_the_sum_of_current_bookings() {
        init_test_tracing();
        let store = setup_test_store().await.unwrap();
        let event = create_event(&store, sample_event("planner-1")).await.unwrap();

        let first = create_booking(&store, sample_booking(&event.id, 2))
            .await
            .unwrap();
        create_booking(&store, sample_booking(&event.id, 4))
            .await
            .unwrap();
        create_booking(&store, sample_booking(&event.id, 1))
            .await
            .unwrap();

        let loaded = get_event(&store, &event.id).await.unwrap().unwrap();
        assert_eq!(loaded.booked_count, 7);

        delete_booking(&store, &first.id).await.unwrap();
        let loaded = get_event(&store, &event.id).await.unwrap().unwrap();
        let remaining: u32 = get_event_bookings(&store, &event.id)
            .await
            .unwrap()
            .iter()
            .map(|b| b.number_of_guests)
            .sum();
        assert_eq!(loaded.booked_count, remaining);
    }

    #[tokio::test]
    async fn over_deleting_floors_the_counter_at_zero() {
        init_test_tracing();
        let store = setup_test_store().await.unwrap();
        let event = create_event(&store, sample_event("planner-1")).await.unwrap();
        let booking = create_booking(&store, sample_booking(&event.id, 5))
            .await
            .unwrap();

        // Knock the stored counter out from under the booking, as a crash
        // between the two writes would.
        let mut stale = get_event(&store, &event.id).await.unwrap().unwrap();
        stale.booked_count = 2;
        update_event(&store, stale).await.unwrap();

        delete_booking(&store, &booking.id).await.unwrap();
        let loaded = get_event(&store, &event.id).await.unwrap().unwrap();
        assert_eq!(loaded.booked_count, 0);
    }

    #[tokio::test]
    async fn booking_against_a_missing_event_still_succeeds() {
        init_test_tracing();
        let store = setup_test_store().await.unwrap();

        let booking = create_booking(&store, sample_booking("no-such-event", 2))
            .await
            .unwrap();
        assert_eq!(
            get_booking(&store, &booking.id).await.unwrap(),
            Some(booking)
        );
    }

    #[tokio::test]
    async fn update_booking_leaves_the_counter_alone() {
        init_test_tracing();
        let store = setup_test_store().await.unwrap();
        let event = create_event(&store, sample_event("planner-1")).await.unwrap();
        let mut booking = create_booking(&store, sample_booking(&event.id, 3))
            .await
            .unwrap();

        booking.status = BookingStatus::Cancelled;
        booking.number_of_guests = 1;
        update_booking(&store, booking).await.unwrap();

        let loaded = get_event(&store, &event.id).await.unwrap().unwrap();
        assert_eq!(loaded.booked_count, 3);
    }

    #[tokio::test]
    async fn delete_booking_reports_absence() {
        init_test_tracing();
        let store = setup_test_store().await.unwrap();
        assert!(!delete_booking(&store, "missing").await.unwrap());
    }
}
