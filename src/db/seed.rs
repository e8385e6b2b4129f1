//! Demo data seeding.
//!
//! Safe to run on every start: each canned batch is inserted only when its
//! collection has no rows yet, so the second and every later run is a no-op.

use crate::db::events::{NewEvent, create_event, get_all_events};
use crate::db::vendors::{NewVendor, create_vendor, get_all_vendors};
use crate::errors::Result;
use crate::models::{EventCategory, EventStatus, VendorCategory};
use crate::store::Store;
use chrono::NaiveDate;
use tracing::{info, instrument};

/// Seeds the demo vendors and events, skipping any collection that already
/// has rows.
///
/// # Errors
///
/// Propagates engine errors unchanged.
#[instrument(skip(store))]
pub async fn seed_demo_data(store: &Store) -> Result<()> {
    seed_vendors(store).await?;
    seed_events(store).await?;
    Ok(())
}

async fn seed_vendors(store: &Store) -> Result<()> {
    if !get_all_vendors(store).await?.is_empty() {
        info!("Vendors already present, skipping vendor seeding");
        return Ok(());
    }
    let vendors = demo_vendors();
    let count = vendors.len();
    for vendor in vendors {
        create_vendor(store, vendor).await?;
    }
    info!("Seeded {} demo vendors", count);
    Ok(())
}

async fn seed_events(store: &Store) -> Result<()> {
    if !get_all_events(store).await?.is_empty() {
        info!("Events already present, skipping event seeding");
        return Ok(());
    }
    let events = demo_events();
    let count = events.len();
    for event in events {
        create_event(store, event).await?;
    }
    info!("Seeded {} demo events", count);
    Ok(())
}

fn demo_vendors() -> Vec<NewVendor> {
    vec![
        NewVendor {
            user_id: "vendor-1".to_string(),
            business_name: "Mama Ngozi Catering".to_string(),
            description: "Authentic Nigerian cuisine for all celebrations. Jollof rice, \
                          pounded yam, and more!"
                .to_string(),
            categories: vec![VendorCategory::Catering],
            price_range_min: 800.0,
            price_range_max: 5000.0,
            currency: "CAD".to_string(),
            location: "Hamilton, ON".to_string(),
            portfolio_images: vec![
                "https://images.unsplash.com/photo-1555939594-58d7cb561ad1?w=400".to_string(),
            ],
            rating: 4.8,
            review_count: 124,
            verified: true,
        },
        NewVendor {
            user_id: "vendor-2".to_string(),
            business_name: "Chisom Photography".to_string(),
            description: "Capturing your special moments with style and elegance.".to_string(),
            categories: vec![VendorCategory::Photography, VendorCategory::Videography],
            price_range_min: 1200.0,
            price_range_max: 4500.0,
            currency: "CAD".to_string(),
            location: "Toronto, ON".to_string(),
            portfolio_images: vec![
                "https://images.unsplash.com/photo-1537633552985-df8429e8048b?w=400".to_string(),
            ],
            rating: 4.9,
            review_count: 89,
            verified: true,
        },
        NewVendor {
            user_id: "vendor-3".to_string(),
            business_name: "DJ Abiodun".to_string(),
            description: "The party never stops when DJ Abiodun is on the decks!".to_string(),
            categories: vec![VendorCategory::Dj, VendorCategory::Entertainment],
            price_range_min: 400.0,
            price_range_max: 1500.0,
            currency: "CAD".to_string(),
            location: "Mississauga, ON".to_string(),
            portfolio_images: vec![
                "https://images.unsplash.com/photo-1571266028243-3716f02e2818?w=400".to_string(),
            ],
            rating: 4.7,
            review_count: 67,
            verified: true,
        },
        NewVendor {
            user_id: "vendor-4".to_string(),
            business_name: "Adunni Decor".to_string(),
            description: "Transform your venue into a paradise. Traditional and modern designs."
                .to_string(),
            categories: vec![VendorCategory::Decoration],
            price_range_min: 1500.0,
            price_range_max: 8000.0,
            currency: "CAD".to_string(),
            location: "Brampton, ON".to_string(),
            portfolio_images: vec![
                "https://images.unsplash.com/photo-1478146059778-26028b07395a?w=400".to_string(),
            ],
            rating: 4.9,
            review_count: 156,
            verified: true,
        },
    ]
}

fn demo_events() -> Vec<NewEvent> {
    vec![
        NewEvent {
            user_id: "demo-planner".to_string(),
            title: "Adebayo & Chidinma's Wedding".to_string(),
            description: Some(
                "A grand traditional and white wedding ceremony. Expect an unforgettable \
                 owambe experience!"
                    .to_string(),
            ),
            category: EventCategory::Wedding,
            date: NaiveDate::from_ymd_opt(2025, 2, 14).unwrap_or_default(),
            time: Some("10:00".to_string()),
            location: Some("Lagos, Nigeria".to_string()),
            venue: Some("Eko Hotel & Suites, Victoria Island".to_string()),
            currency: "NGN".to_string(),
            capacity: 500,
            total_budget: 5_000_000.0,
            estimated_guests: Some(500),
            cover_image_url: Some(
                "https://images.unsplash.com/photo-1519741497674-611481863552?w=800".to_string(),
            ),
            status: EventStatus::Upcoming,
        },
        NewEvent {
            user_id: "demo-planner".to_string(),
            title: "Chief Okonkwo's 60th Birthday Owambe".to_string(),
            description: Some(
                "Six decades of excellence. An evening of music, dance, and the finest \
                 Nigerian hospitality."
                    .to_string(),
            ),
            category: EventCategory::Owambe,
            date: NaiveDate::from_ymd_opt(2025, 3, 8).unwrap_or_default(),
            time: Some("16:00".to_string()),
            location: Some("Abuja, Nigeria".to_string()),
            venue: Some("International Conference Centre".to_string()),
            currency: "NGN".to_string(),
            capacity: 300,
            total_budget: 2_500_000.0,
            estimated_guests: Some(300),
            cover_image_url: Some(
                "https://images.unsplash.com/photo-1530103862676-de8c9debad1d?w=800".to_string(),
            ),
            status: EventStatus::Upcoming,
        },
        NewEvent {
            user_id: "demo-planner".to_string(),
            title: "Baby Adaeze's Naming Ceremony".to_string(),
            description: Some(
                "A beautiful traditional ceremony followed by refreshments.".to_string(),
            ),
            category: EventCategory::Naming,
            date: NaiveDate::from_ymd_opt(2025, 1, 25).unwrap_or_default(),
            time: Some("11:00".to_string()),
            location: Some("Enugu, Nigeria".to_string()),
            venue: Some("Nnamdi Family Compound".to_string()),
            currency: "NGN".to_string(),
            capacity: 150,
            total_budget: 400_000.0,
            estimated_guests: Some(150),
            cover_image_url: None,
            status: EventStatus::Upcoming,
        },
    ]
}
