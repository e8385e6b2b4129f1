use chrono::Utc;
use dotenvy::dotenv;
use owambe_store::config;
use owambe_store::db;
use owambe_store::errors::Result;
use owambe_store::store::{Store, planner_schema};
use owambe_store::views;
use std::path::Path;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file, non-fatal since env vars can be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Resolve where the store lives
    let app_config = config::load_app_configuration()?;
    if let Some(parent) = Path::new(&app_config.database_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    // 4. Open the store; first open sets the schema up
    let store = Store::open(&app_config.database_path, planner_schema())
        .await
        .inspect(|_| info!("Store initialized successfully."))
        .inspect_err(|e| error!("Failed to initialize store: {}", e))?;

    // 5. Seed demo data (no-op after the first successful run)
    db::seed_demo_data(&store)
        .await
        .inspect(|_| info!("Demo data seeding complete."))
        .inspect_err(|e| error!("Failed to seed demo data: {}", e))?;

    // 6. Log a dashboard summary as a smoke signal
    let stats = views::booking_dashboard(&store, Utc::now()).await?;
    info!(
        "Dashboard: {} events ({} upcoming), {} bookings ({} pending), revenue {:.2} ({:.2} this month)",
        stats.total_events,
        stats.upcoming_events,
        stats.total_bookings,
        stats.pending_bookings,
        stats.total_revenue,
        stats.this_month_revenue
    );

    let vendors = db::get_all_vendors(&store).await?;
    info!("{} vendors available in the marketplace.", vendors.len());

    Ok(())
}
