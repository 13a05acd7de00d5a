use std::time::Duration;

use chrono::Local;
use color_eyre::eyre::{Result, WrapErr};
use dotenv::dotenv;
use ministry_backend::connection::ConnectionConfig;
use ministry_backend::store::ScheduleStore;
use ministry_core::dashboard::build_view;
use ministry_core::models::dashboard::{DashboardView, StatusFilter};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Prints the dashboard once. Takes an optional status filter argument
/// (`all`, `active`, `upcoming`, `past`).
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Logs go to stderr so the report can be piped or mailed
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load environment variables
    dotenv().ok();

    let filter = std::env::args()
        .nth(1)
        .unwrap_or_default()
        .parse::<StatusFilter>()
        .wrap_err("Unknown status filter")?;

    let connection = ConnectionConfig::from_env();
    // The report does not need the demo backend's simulated delay.
    let backend = connection.backend(&reqwest::Client::new(), Duration::ZERO)?;

    let store = ScheduleStore::new();
    store.refresh(backend.as_ref()).await?;
    info!("Loaded schedules for report");

    let view = build_view(&store.snapshot().await, Local::now().date_naive(), filter, None);
    print!("{}", render(&view));

    Ok(())
}

fn render(view: &DashboardView) -> String {
    let mut out = String::new();
    let stats = &view.stats;

    out.push_str(&format!("Ministry schedule for {} ({})\n\n", view.today, view.filter));
    out.push_str(&format!(
        "Total {}  Active {}  Upcoming {}  Past {}\n",
        stats.total, stats.active, stats.upcoming, stats.past
    ));

    if !view.notices.is_empty() {
        out.push_str("\n[Notices]\n");
        for notice in &view.notices {
            out.push_str(&format!(
                "  {} ~ {}  {}\n",
                notice.start_date, notice.end_date, notice.content
            ));
        }
    }

    for group in &view.groups {
        out.push_str(&format!("\n{}.{:02}  {}\n", group.year, group.month, group.theme));
        for item in &group.items {
            out.push_str(&format!(
                "  [{}] {} ~ {}  {} ({})\n",
                item.label, item.entry.start_date, item.entry.end_date, item.entry.content, item.entry.priority
            ));
        }
    }

    if view.groups.is_empty() {
        out.push_str("\nNo schedules to show.\n");
    }

    out
}
