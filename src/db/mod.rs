//! Domain repositories.
//!
//! One module per entity, each built entirely from engine operations. A
//! repository owns id generation and timestamping for its entity; the only
//! cross-collection side effects in the crate are the two counter pairs
//! (booking writes adjust `Event::booked_count`, transaction writes adjust
//! `BudgetCategory::spent_amount`). Deletes never cascade beyond those two
//! pairs, and no repository validates its input.

pub mod bookings;
pub mod budget_categories;
pub mod events;
pub mod guests;
pub mod messages;
pub mod seed;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod transactions;
pub mod users;
pub mod vendors;

pub use bookings::{
    NewBooking, create_booking, delete_booking, get_all_bookings, get_booking,
    get_event_bookings, update_booking,
};
pub use budget_categories::{
    NewBudgetCategory, create_budget_category, delete_budget_category, get_budget_category,
    get_event_budget_categories, update_budget_category,
};
pub use events::{
    NewEvent, create_event, delete_event, get_all_events, get_event, get_user_events,
    update_event,
};
pub use guests::{NewGuest, create_guest, delete_guest, get_event_guests, get_guest, update_guest};
pub use messages::{
    NewMessage, create_message, get_conversation_messages, get_user_messages,
    mark_conversation_read, mark_message_read,
};
pub use seed::seed_demo_data;
pub use transactions::{
    NewTransaction, create_transaction, delete_transaction, get_category_transactions,
    get_event_transactions, get_transaction,
};
pub use users::{NewUser, create_user, get_user, get_user_by_email};
pub use vendors::{
    NewVendor, create_vendor, get_all_vendors, get_vendor, get_vendor_by_user, update_vendor,
};
