//! m2calendar CLI entry point.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use m2calendar::backend::{HttpBackend, MockBackend};
use m2calendar::cli::Cli;
use m2calendar::clock::{Clock, SystemClock};
use m2calendar::host::{select_host, ConsoleHost};
use m2calendar::output::format_projection;
use m2calendar::{interactive, CalendarApp, Config};
use m2calendar_core::backend::EventBackend;
use m2calendar_core::host::NotificationHost;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so that printed projections stay clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "m2calendar=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = Config::from_env();
    if let Some(user_id) = cli.user_id.clone() {
        config.user_id = user_id;
    }
    if let Some(url) = cli.backend_url.clone() {
        config.backend_url = Some(url);
    }

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let backend: Arc<dyn EventBackend> = match &config.backend_url {
        Some(url) => {
            tracing::info!(url = %url, "Using HTTP backend");
            let backend = HttpBackend::new(url.clone());
            match &config.api_token {
                Some(token) => Arc::new(backend.with_token(token.clone())),
                None => Arc::new(backend),
            }
        }
        None => {
            tracing::info!("Using sample data");
            Arc::new(MockBackend::with_sample_data(clock.today()).with_latency(config.mock_latency()))
        }
    };

    let console: Arc<dyn NotificationHost> = Arc::new(ConsoleHost::new(config.confirm_default));
    let host = select_host(cli.bridge_addr.as_deref(), console).await;

    let mut app = CalendarApp::new(&config, clock, host, backend, cli.view.into());
    if let Some(date) = cli.date {
        app.go_to_date(date);
    }

    // Load failures are already reported; the calendar still opens empty
    let _ = app.load_events().await;

    if cli.interactive {
        interactive::run(&mut app).await?;
    } else {
        println!("{}", format_projection(&app.projection(), cli.format));
    }

    Ok(())
}
