//! Load the USD→CAD dashboard once and print what it would render.
//!
//! ```bash
//! RUST_LOG=dollar_price=debug cargo run --example dashboard -- http://localhost:8080/api/v1
//! ```

use std::time::Duration;

use dollar_price::dashboard::view::Panel;
use dollar_price::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("dollar_price=info".parse()?))
        .with_target(true)
        .init();

    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    let client = DollarPriceClient::builder().base_url(&base_url).build()?;

    match client.health().get().await {
        Ok(health) => tracing::info!(status = %health.status, "backend health"),
        Err(e) => tracing::warn!(error = %e, "health check failed"),
    }

    let mut dashboard = Dashboard::new(client);
    let mut updates = dashboard.subscribe();
    dashboard.activate();

    tokio::time::timeout(
        Duration::from_secs(35),
        updates.wait_for(|view| !view.state().is_loading()),
    )
    .await??;

    let view = dashboard.view();
    println!("{}", view.title);
    println!("{}", view.subtitle);
    println!();

    match view.panel {
        Panel::Loading { text } => println!("{text}"),
        Panel::Error {
            message,
            retry_label,
        } => println!("{message} [{retry_label}]"),
        Panel::Loaded { chart, stats } => {
            println!("{} / {}", chart.x_axis_title, chart.y_axis_title);
            for (label, value) in chart.series.labels.iter().zip(&chart.series.data) {
                println!("  {label:>12}  {value:.4}");
            }
            if let Some(stats) = stats {
                println!();
                println!("Current Rate:  {}", stats.current_rate);
                println!("7-Day Average: {}", stats.average_rate);
                println!("Last Updated:  {}", stats.last_updated);
            }
        }
    }

    dashboard.deactivate();
    Ok(())
}
