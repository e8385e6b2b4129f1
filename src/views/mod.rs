//! Derived, read-only views.
//!
//! Each builder composes repository reads into an aggregate the UI renders
//! directly. None of them write: two calls with no repository write in
//! between return identical output.

/// Budget spend-vs-allocation rollups for one event
pub mod budget;
/// Conversation threads grouped from flat message records
pub mod conversations;
/// Dashboard statistics for the booking site and the planner dashboard
pub mod dashboard;

pub use budget::{BudgetRollup, CategoryRollup, compute_budget_rollup, event_budget_rollup};
pub use conversations::{Conversation, ParticipantKind, user_conversations};
pub use dashboard::{
    BookingDashboard, PlannerDashboard, booking_dashboard, compute_booking_dashboard,
    planner_dashboard,
};
