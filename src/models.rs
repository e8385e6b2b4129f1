//! Entity records persisted by the store.
//!
//! Every record is a flat, JSON-serializable document with a string primary
//! key and RFC 3339 timestamp fields. Records reference each other only by
//! id strings; there is no referential-integrity enforcement in the storage
//! layer. Field names serialize in camelCase so the persisted documents keep
//! the logical schema the rest of the product family shares.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Account role of a registered user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Plans celebrations and hires vendors.
    Planner,
    /// Offers services to planners.
    Vendor,
}

/// Category of a celebration. Unrecognized labels fall back to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum EventCategory {
    Wedding,
    Owambe,
    Birthday,
    Naming,
    Corporate,
    Funeral,
    Graduation,
    Retirement,
    Traditional,
    Other,
}

impl From<String> for EventCategory {
    fn from(value: String) -> Self {
        match value.as_str() {
            "wedding" => Self::Wedding,
            "owambe" => Self::Owambe,
            "birthday" => Self::Birthday,
            "naming" => Self::Naming,
            "corporate" => Self::Corporate,
            "funeral" => Self::Funeral,
            "graduation" => Self::Graduation,
            "retirement" => Self::Retirement,
            "traditional" => Self::Traditional,
            _ => Self::Other,
        }
    }
}

impl EventCategory {
    /// Human-readable label for display layers.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Wedding => "Wedding",
            Self::Owambe => "Owambe Party",
            Self::Birthday => "Birthday",
            Self::Naming => "Naming Ceremony",
            Self::Corporate => "Corporate",
            Self::Funeral => "Funeral/Celebration of Life",
            Self::Graduation => "Graduation",
            Self::Retirement => "Retirement",
            Self::Traditional => "Traditional Ceremony",
            Self::Other => "Other",
        }
    }
}

/// Lifecycle status of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    Planning,
    Upcoming,
    Ongoing,
    Confirmed,
    Completed,
    Cancelled,
}

/// Status of a booking against a public event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

/// Payment state of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Refunded,
}

/// Service category of a vendor. Unrecognized labels fall back to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum VendorCategory {
    Catering,
    Photography,
    Videography,
    Mc,
    Dj,
    Decoration,
    Venue,
    Fashion,
    Makeup,
    Transport,
    Entertainment,
    Cake,
    Invitation,
    Other,
}

impl From<String> for VendorCategory {
    fn from(value: String) -> Self {
        match value.as_str() {
            "catering" => Self::Catering,
            "photography" => Self::Photography,
            "videography" => Self::Videography,
            "mc" => Self::Mc,
            "dj" => Self::Dj,
            "decoration" => Self::Decoration,
            "venue" => Self::Venue,
            "fashion" => Self::Fashion,
            "makeup" => Self::Makeup,
            "transport" => Self::Transport,
            "entertainment" => Self::Entertainment,
            "cake" => Self::Cake,
            "invitation" => Self::Invitation,
            _ => Self::Other,
        }
    }
}

impl VendorCategory {
    /// Human-readable label for display layers.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Catering => "Catering",
            Self::Photography => "Photography",
            Self::Videography => "Videography",
            Self::Mc => "MC/Host",
            Self::Dj => "DJ/Music",
            Self::Decoration => "Decoration",
            Self::Venue => "Venue",
            Self::Fashion => "Fashion/Asoebi",
            Self::Makeup => "Makeup/Beauty",
            Self::Transport => "Transport",
            Self::Entertainment => "Entertainment",
            Self::Cake => "Cake/Pastry",
            Self::Invitation => "Invitation Cards",
            Self::Other => "Other",
        }
    }
}

/// RSVP response of an invited guest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RsvpStatus {
    Pending,
    Attending,
    NotAttending,
    Maybe,
}

/// Direction of a budget transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Expense,
    Payment,
}

/// A registered planner or vendor account. Created with get-or-create
/// semantics on first login attempt for a given email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    /// Unique; the login lookup key.
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub phone: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A planned or bookable event.
///
/// `booked_count` is a derived-but-stored counter maintained incrementally
/// by the bookings repository, not recomputed on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    /// Owning planner.
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
    pub booked_count: u32,
    pub total_budget: f64,
    pub estimated_guests: Option<u32>,
    pub cover_image_url: Option<String>,
    pub status: EventStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A customer booking against an event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub event_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub number_of_guests: u32,
    pub total_amount: f64,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
    pub special_requests: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A vendor's business profile. One profile per user account, enforced by a
/// unique secondary index on `userId`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    pub id: String,
    pub user_id: String,
    pub business_name: String,
    pub description: String,
    pub categories: Vec<VendorCategory>,
    pub price_range_min: f64,
    pub price_range_max: f64,
    pub currency: String,
    pub location: String,
    /// Ordered portfolio image URLs.
    pub portfolio_images: Vec<String>,
    pub rating: f64,
    pub review_count: u32,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A named slice of an event's budget.
///
/// `spent_amount` is maintained by the transactions repository: every
/// transaction insert/delete adjusts it by the transaction amount, floored
/// at zero on delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetCategory {
    pub id: String,
    pub event_id: String,
    pub name: String,
    pub allocated_amount: f64,
    pub spent_amount: f64,
    pub color: String,
    pub created_at: DateTime<Utc>,
}

/// An expense or vendor payment recorded against a budget category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub event_id: String,
    pub budget_category_id: String,
    pub vendor_id: Option<String>,
    pub description: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// An invited guest on an event's list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub id: String,
    pub event_id: String,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub rsvp_status: RsvpStatus,
    pub plus_ones: i32,
    pub dietary_notes: Option<String>,
    pub table_number: Option<u32>,
    pub rsvp_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// A chat message between two participants. Content is immutable once
/// stored; only the read flag is ever mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub event_id: Option<String>,
    pub content: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_enums_serialize_as_snake_case_labels() {
        assert_eq!(
            serde_json::to_string(&RsvpStatus::NotAttending).unwrap(),
            "\"not_attending\""
        );
        assert_eq!(
            serde_json::to_string(&PaymentStatus::Paid).unwrap(),
            "\"paid\""
        );
        assert_eq!(
            serde_json::to_string(&TransactionKind::Expense).unwrap(),
            "\"expense\""
        );
    }

    #[test]
    fn unknown_category_labels_fall_back_to_other() {
        let category: EventCategory = serde_json::from_str("\"galactic_gala\"").unwrap();
        assert_eq!(category, EventCategory::Other);
        assert_eq!(category.label(), "Other");

        let vendor: VendorCategory = serde_json::from_str("\"balloon_art\"").unwrap();
        assert_eq!(vendor, VendorCategory::Other);
    }

    #[test]
    fn records_serialize_with_camel_case_keys() {
        let message = Message {
            id: "m1".to_string(),
            sender_id: "u1".to_string(),
            receiver_id: "u2".to_string(),
            event_id: None,
            content: "hello".to_string(),
            read: false,
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(&message).unwrap();
        assert!(value.get("senderId").is_some());
        assert!(value.get("receiverId").is_some());
        assert!(value.get("createdAt").is_some());
    }
}
