//! Vendor profiles.
//!
//! One profile per user account: the unique `userId` index makes a second
//! `create_vendor` for the same user fail with a duplicate-key error, which
//! callers resolve by updating the existing profile instead.

use crate::errors::Result;
use crate::models::{Vendor, VendorCategory};
use crate::store::{Store, collections, new_record_id};
use chrono::Utc;
use tracing::{info, instrument};

/// Caller-supplied fields for a new vendor profile.
#[derive(Debug, Clone)]
pub struct NewVendor {
    pub user_id: String,
    pub business_name: String,
    pub description: String,
    pub categories: Vec<VendorCategory>,
    pub price_range_min: f64,
    pub price_range_max: f64,
    pub currency: String,
    pub location: String,
    pub portfolio_images: Vec<String>,
    pub rating: f64,
    pub review_count: u32,
    pub verified: bool,
}

/// Creates a vendor profile and returns the stored record.
///
/// # Errors
///
/// Returns `Error::DuplicateKey` if the user already has a profile, and
/// engine errors unchanged.
#[instrument(skip(store, input), fields(user_id = %input.user_id))]
pub async fn create_vendor(store: &Store, input: NewVendor) -> Result<Vendor> {
    let now = Utc::now();
    let vendor = Vendor {
        id: new_record_id(),
        user_id: input.user_id,
        business_name: input.business_name,
        description: input.description,
        categories: input.categories,
        price_range_min: input.price_range_min,
        price_range_max: input.price_range_max,
        currency: input.currency,
        location: input.location,
        portfolio_images: input.portfolio_images,
        rating: input.rating,
        review_count: input.review_count,
        verified: input.verified,
        created_at: now,
        updated_at: now,
    };
    store.insert(collections::VENDORS, &vendor).await?;
    info!(
        "Created vendor {} ('{}') for user {}",
        vendor.id, vendor.business_name, vendor.user_id
    );
    Ok(vendor)
}

/// Looks a vendor profile up by id.
///
/// # Errors
///
/// Propagates engine errors unchanged.
pub async fn get_vendor(store: &Store, id: &str) -> Result<Option<Vendor>> {
    store.get_by_id(collections::VENDORS, id).await
}

/// Returns every vendor profile in the store.
///
/// # Errors
///
/// Propagates engine errors unchanged.
pub async fn get_all_vendors(store: &Store) -> Result<Vec<Vendor>> {
    store.get_all(collections::VENDORS).await
}

/// Looks the vendor profile up that belongs to one user account.
///
/// # Errors
///
/// Propagates engine errors unchanged.
pub async fn get_vendor_by_user(store: &Store, user_id: &str) -> Result<Option<Vendor>> {
    let mut vendors: Vec<Vendor> = store
        .get_by_index(collections::VENDORS, "userId", user_id)
        .await?;
    Ok(vendors.pop())
}

/// Replaces a vendor profile wholesale, refreshing its `updated_at` stamp.
///
/// # Errors
///
/// Propagates engine errors unchanged.
#[instrument(skip(store, vendor), fields(vendor_id = %vendor.id))]
pub async fn update_vendor(store: &Store, mut vendor: Vendor) -> Result<Vendor> {
    vendor.updated_at = Utc::now();
    store.upsert(collections::VENDORS, &vendor).await?;
    Ok(vendor)
}
