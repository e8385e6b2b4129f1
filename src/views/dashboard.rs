//! Dashboard statistics.
//!
//! "This month" is whatever month the caller's `now` falls in, so repeated
//! calls across a month boundary legitimately change the result.

use crate::db::{bookings, events, guests, messages, transactions};
use crate::errors::Result;
use crate::models::{Booking, BookingStatus, Event, PaymentStatus, RsvpStatus};
use crate::store::Store;
use chrono::{DateTime, Datelike, Utc};

/// Aggregates for the public booking site's admin dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingDashboard {
    pub total_events: usize,
    pub upcoming_events: usize,
    pub total_bookings: usize,
    pub pending_bookings: usize,
    /// Sum over bookings whose payment status is paid.
    pub total_revenue: f64,
    /// Paid bookings created since the first of the caller's current month.
    pub this_month_revenue: f64,
}

/// Computes booking-site statistics from already-loaded records.
#[must_use]
pub fn compute_booking_dashboard(
    all_events: &[Event],
    all_bookings: &[Booking],
    now: DateTime<Utc>,
) -> BookingDashboard {
    let today = now.date_naive();
    let month_start = today.with_day(1).unwrap_or(today);

    let upcoming_events = all_events.iter().filter(|e| e.date >= today).count();
    let pending_bookings = all_bookings
        .iter()
        .filter(|b| b.status == BookingStatus::Pending)
        .count();
    let paid: Vec<&Booking> = all_bookings
        .iter()
        .filter(|b| b.payment_status == PaymentStatus::Paid)
        .collect();
    let total_revenue = paid.iter().map(|b| b.total_amount).sum();
    let this_month_revenue = paid
        .iter()
        .filter(|b| b.created_at.date_naive() >= month_start)
        .map(|b| b.total_amount)
        .sum();

    BookingDashboard {
        total_events: all_events.len(),
        upcoming_events,
        total_bookings: all_bookings.len(),
        pending_bookings,
        total_revenue,
        this_month_revenue,
    }
}

/// Loads every event and booking and computes the booking-site dashboard.
///
/// # Errors
///
/// Propagates engine errors unchanged.
pub async fn booking_dashboard(store: &Store, now: DateTime<Utc>) -> Result<BookingDashboard> {
    let all_events = events::get_all_events(store).await?;
    let all_bookings = bookings::get_all_bookings(store).await?;
    Ok(compute_booking_dashboard(&all_events, &all_bookings, now))
}

/// Aggregates for one planner's dashboard home.
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerDashboard {
    pub total_events: usize,
    /// Events whose date has not passed yet.
    pub active_events: usize,
    pub total_budget: f64,
    /// Sum of transaction amounts across the planner's events.
    pub total_spent: f64,
    pub total_guests: usize,
    pub confirmed_guests: usize,
    pub unread_messages: usize,
}

/// Computes one planner's dashboard by reading their events and everything
/// that hangs off them.
///
/// # Errors
///
/// Propagates engine errors unchanged.
pub async fn planner_dashboard(
    store: &Store,
    user_id: &str,
    now: DateTime<Utc>,
) -> Result<PlannerDashboard> {
    let today = now.date_naive();
    let user_events = events::get_user_events(store, user_id).await?;

    let mut active_events = 0;
    let mut total_budget = 0.0;
    let mut total_spent = 0.0;
    let mut total_guests = 0;
    let mut confirmed_guests = 0;
    for event in &user_events {
        if event.date >= today {
            active_events += 1;
        }
        total_budget += event.total_budget;

        let event_guests = guests::get_event_guests(store, &event.id).await?;
        total_guests += event_guests.len();
        confirmed_guests += event_guests
            .iter()
            .filter(|g| g.rsvp_status == RsvpStatus::Attending)
            .count();

        let event_transactions = transactions::get_event_transactions(store, &event.id).await?;
        total_spent += event_transactions.iter().map(|t| t.amount).sum::<f64>();
    }

    let unread_messages = messages::get_user_messages(store, user_id)
        .await?
        .iter()
        .filter(|m| m.receiver_id == user_id && !m.read)
        .count();

    Ok(PlannerDashboard {
        total_events: user_events.len(),
        active_events,
        total_budget,
        total_spent,
        total_guests,
        confirmed_guests,
        unread_messages,
    })
}
