#![allow(dead_code)]
use crate::db::bookings::NewBooking;
use crate::db::budget_categories::NewBudgetCategory;
use crate::db::events::NewEvent;
use crate::db::guests::NewGuest;
use crate::db::messages::NewMessage;
use crate::db::transactions::NewTransaction;
use crate::db::vendors::NewVendor;
use crate::errors::Result;
use crate::models::{
    BookingStatus, EventCategory, EventStatus, PaymentStatus, RsvpStatus, TransactionKind,
    VendorCategory,
};
use crate::store::{Store, planner_schema};
use chrono::NaiveDate;
use tracing_subscriber::EnvFilter;

pub(crate) fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();
}

// Fresh in-memory store with the full planner schema for each test.
pub(crate) async fn setup_test_store() -> Result<Store> {
    Store::open_in_memory(planner_schema()).await
}

pub(crate) fn sample_event(user_id: &str) -> NewEvent {
    NewEvent {
        user_id: user_id.to_string(),
        title: "Test Owambe".to_string(),
        description: None,
        category: EventCategory::Owambe,
        date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        time: Some("16:00".to_string()),
        location: Some("Lagos, Nigeria".to_string()),
        venue: None,
        currency: "NGN".to_string(),
        capacity: 100,
        total_budget: 100_000.0,
        estimated_guests: Some(80),
        cover_image_url: None,
        status: EventStatus::Planning,
    }
}

pub(crate) fn sample_booking(event_id: &str, guests: u32) -> NewBooking {
    NewBooking {
        event_id: event_id.to_string(),
        customer_name: "Test Customer".to_string(),
        customer_email: "customer@example.com".to_string(),
        customer_phone: "+2348000000000".to_string(),
        number_of_guests: guests,
        total_amount: 25_000.0,
        status: BookingStatus::Pending,
        payment_status: PaymentStatus::Pending,
        special_requests: None,
    }
}

pub(crate) fn sample_vendor(user_id: &str) -> NewVendor {
    NewVendor {
        user_id: user_id.to_string(),
        business_name: "Test Catering Co".to_string(),
        description: "Catering for tests".to_string(),
        categories: vec![VendorCategory::Catering],
        price_range_min: 500.0,
        price_range_max: 2000.0,
        currency: "CAD".to_string(),
        location: "Toronto, ON".to_string(),
        portfolio_images: vec![],
        rating: 4.5,
        review_count: 10,
        verified: false,
    }
}

pub(crate) fn sample_category(event_id: &str, allocated: f64) -> NewBudgetCategory {
    NewBudgetCategory {
        event_id: event_id.to_string(),
        name: "Catering".to_string(),
        allocated_amount: allocated,
        spent_amount: 0.0,
        color: "#f97316".to_string(),
    }
}

pub(crate) fn sample_transaction(
    event_id: &str,
    category_id: &str,
    amount: f64,
) -> NewTransaction {
    NewTransaction {
        event_id: event_id.to_string(),
        budget_category_id: category_id.to_string(),
        vendor_id: None,
        description: "Deposit".to_string(),
        amount,
        kind: TransactionKind::Expense,
        date: NaiveDate::from_ymd_opt(2025, 5, 10).unwrap(),
    }
}

pub(crate) fn sample_guest(event_id: &str, name: &str) -> NewGuest {
    NewGuest {
        event_id: event_id.to_string(),
        name: name.to_string(),
        email: None,
        phone: None,
        rsvp_status: RsvpStatus::Pending,
        plus_ones: 0,
        dietary_notes: None,
        table_number: None,
        rsvp_at: None,
    }
}

pub(crate) fn sample_message(sender: &str, receiver: &str, content: &str) -> NewMessage {
    NewMessage {
        sender_id: sender.to_string(),
        receiver_id: receiver.to_string(),
        event_id: None,
        content: content.to_string(),
        read: false,
    }
}
