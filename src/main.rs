use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use trip_view::config::{
    DEFAULT_API_BASE_URL, DEFAULT_PORT, ON_TIME_WINDOW_MINUTES, STALE_AFTER_MINUTES,
};
use trip_view::server::{self, AppState};
use trip_view::{Thresholds, TripClient};

#[derive(Parser)]
#[command(name = "trip-view")]
#[command(about = "Serves live bus trips as map-ready JSON")]
struct Args {
    /// Port to run the HTTP server on
    #[arg(short, long, env = "SERVER_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Base URL of the upstream trips API
    #[arg(long, env = "TRIP_API_URL", default_value = DEFAULT_API_BASE_URL)]
    api_base_url: String,

    /// Minutes either side of the schedule still shown as on time
    #[arg(
        long,
        env = "ON_TIME_WINDOW_MINUTES",
        default_value_t = ON_TIME_WINDOW_MINUTES,
        value_parser = clap::value_parser!(i64).range(0..)
    )]
    on_time_window: i64,

    /// Age in minutes at which a GPS fix is shown as outdated
    #[arg(
        long,
        env = "STALE_AFTER_MINUTES",
        default_value_t = STALE_AFTER_MINUTES,
        value_parser = clap::value_parser!(i64).range(1..)
    )]
    stale_after: i64,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();

    let client = TripClient::new(&args.api_base_url).context("configuring trips API client")?;
    let thresholds = Thresholds {
        on_time_window_minutes: args.on_time_window,
        stale_after_minutes: args.stale_after,
    };

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", args.port))
        .await
        .with_context(|| format!("binding port {}", args.port))?;

    server::serve(listener, AppState { client, thresholds }).await.context("serving")
}
