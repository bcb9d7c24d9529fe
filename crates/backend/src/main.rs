use backend::{dashboards, shared};
use contracts::dashboards::d400_sales_report::ReportPeriod;

fn main() -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Log directory next to the build artifacts
    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file_path = log_dir.join("backend.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    let config = shared::config::load_config()?;
    let state = shared::state::AppState::bootstrap(&config);

    tracing::info!(
        pending = state.queue.pending_len(),
        closed = state.queue.history_len(),
        next_number = state.queue.next_number(),
        flavors = state.catalog.flavors.len(),
        add_ons = state.catalog.add_ons.len(),
        "pizzeria state loaded"
    );

    let report = dashboards::d400_sales_report::service::sales_report(&state, &ReportPeriod::LastDay);
    tracing::info!(
        "sales over the last 24h: {} orders, revenue {:.2}",
        report.total_count,
        report.total_revenue
    );

    Ok(())
}
