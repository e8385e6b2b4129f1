//! `OwambeStore` - local structured storage for the Owambe event apps
//!
//! This crate provides the persistence core shared by the public event-booking
//! site and the Owambe Planner dashboard: a small document-store engine with
//! named collections and secondary indexes, per-entity repositories layered on
//! top of it, derived read-only views (dashboards, conversation threads,
//! budget rollups), and an idempotent demo-data seeder.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    unsafe_code,
    unsafe_op_in_unsafe_fn,
    unreachable_code,
    unreachable_patterns,
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,
    clippy::all,
    clippy::dbg_macro,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,
    future_incompatible,
    rust_2018_idioms,
)]
#![allow(
    clippy::module_name_repetitions,  // Common pattern in Rust
)]

/// Configuration loading for the storage path
pub mod config;
/// Per-entity repositories built on the store engine
pub mod db;
/// Unified error types and result handling
pub mod errors;
/// Entity records and their status/category enums
pub mod models;
/// The generic document-store engine
pub mod store;
/// Derived, read-only views over repository data
pub mod views;
