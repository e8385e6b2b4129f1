//! Guest lists.

use crate::errors::Result;
use crate::models::{Guest, RsvpStatus};
use crate::store::{Store, collections, new_record_id};
use chrono::{DateTime, Utc};
use tracing::{info, instrument};

/// Caller-supplied fields for a new guest.
#[derive(Debug, Clone)]
pub struct NewGuest {
    pub event_id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub rsvp_status: RsvpStatus,
    pub plus_ones: i32,
    pub dietary_notes: Option<String>,
    pub table_number: Option<u32>,
    pub rsvp_at: Option<DateTime<Utc>>,
}

/// Adds a guest to an event's list and returns the stored record.
///
/// Bulk import is just this call in the importer's loop; there is no
/// separate bulk verb.
///
/// # Errors
///
/// Propagates engine errors unchanged.
#[instrument(skip(store, input), fields(event_id = %input.event_id))]
pub async fn create_guest(store: &Store, input: NewGuest) -> Result<Guest> {
    let guest = Guest {
        id: new_record_id(),
        event_id: input.event_id,
        name: input.name,
        email: input.email,
        phone: input.phone,
        rsvp_status: input.rsvp_status,
        plus_ones: input.plus_ones,
        dietary_notes: input.dietary_notes,
        table_number: input.table_number,
        rsvp_at: input.rsvp_at,
        created_at: Utc::now(),
    };
    store.insert(collections::GUESTS, &guest).await?;
    info!("Created guest {} for event {}", guest.id, guest.event_id);
    Ok(guest)
}

/// Looks a guest up by id.
///
/// # Errors
///
/// Propagates engine errors unchanged.
pub async fn get_guest(store: &Store, id: &str) -> Result<Option<Guest>> {
    store.get_by_id(collections::GUESTS, id).await
}

/// Returns the guest list of one event.
///
/// # Errors
///
/// Propagates engine errors unchanged.
pub async fn get_event_guests(store: &Store, event_id: &str) -> Result<Vec<Guest>> {
    store
        .get_by_index(collections::GUESTS, "eventId", event_id)
        .await
}

/// Replaces a guest record wholesale.
///
/// # Errors
///
/// Propagates engine errors unchanged.
#[instrument(skip(store, guest), fields(guest_id = %guest.id))]
pub async fn update_guest(store: &Store, guest: Guest) -> Result<Guest> {
    store.upsert(collections::GUESTS, &guest).await?;
    Ok(guest)
}

/// Removes a guest from the list.
///
/// # Errors
///
/// Propagates engine errors unchanged.
#[instrument(skip(store))]
pub async fn delete_guest(store: &Store, id: &str) -> Result<bool> {
    store.delete(collections::GUESTS, id).await
}
