//! Journal Engine Binary
//!
//! Starts the trading-journal ledger engine.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin journal-engine
//! ```
//!
//! # Environment Variables
//!
//! ## Optional
//! - `JOURNAL_ENGINE_PORT`: HTTP server port (default: 3017)
//! - `JOURNAL_INITIAL_CAPITAL`: Starting capital for ledger snapshots (default: 25000)
//! - `RUST_LOG`: Log level (default: info)

use std::net::SocketAddr;

use journal_engine::server::{AppState, create_router};
use rust_decimal::Decimal;
use tokio::net::TcpListener;
use tokio::signal;

/// Default HTTP server port.
const DEFAULT_HTTP_PORT: u16 = 3017;

/// Default starting capital when none is configured.
const DEFAULT_INITIAL_CAPITAL: Decimal = Decimal::from_parts(25_000, 0, 0, false, 0);

/// Parsed configuration from environment variables.
struct EngineConfig {
    /// HTTP server port.
    http_port: u16,
    /// Starting capital for ledger snapshots.
    initial_capital: Decimal,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();
    init_tracing();

    tracing::info!("Starting Journal Engine");

    let config = parse_config()?;
    log_config(&config);

    let state = AppState::new(config.initial_capital);
    let app = create_router(state);

    let http_addr: SocketAddr = format!("0.0.0.0:{}", config.http_port).parse()?;

    tracing::info!(%http_addr, "HTTP server starting");
    tracing::info!("Endpoints:");
    tracing::info!("  GET    /health");
    tracing::info!("  GET    /api/v1/trades");
    tracing::info!("  POST   /api/v1/trades");
    tracing::info!("  DELETE /api/v1/trades");
    tracing::info!("  GET    /api/v1/trades/{{id}}");
    tracing::info!("  DELETE /api/v1/trades/{{id}}");
    tracing::info!("  GET    /api/v1/trades/{{id}}/images");
    tracing::info!("  GET    /api/v1/snapshot");
    tracing::info!("  GET    /api/v1/snapshot/csv");
    tracing::info!("  GET    /api/v1/capital");
    tracing::info!("  PUT    /api/v1/capital");

    let listener = TcpListener::bind(http_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Journal engine stopped");
    Ok(())
}

/// Load .env file from current or ancestor directories.
fn load_dotenv() {
    if dotenvy::dotenv().is_err() {
        load_dotenv_from_ancestors();
    }
}

/// Load .env file from any ancestor directory.
fn load_dotenv_from_ancestors() {
    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}

/// Initialize the tracing subscriber with environment filter.
///
/// Uses static directive strings that are compile-time constants guaranteed to parse.
#[allow(clippy::expect_used)]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                "journal_engine=info"
                    .parse()
                    .expect("static directive 'journal_engine=info' is valid"),
            ),
        )
        .init();
}

/// Parse configuration from environment variables.
fn parse_config() -> anyhow::Result<EngineConfig> {
    let http_port = std::env::var("JOURNAL_ENGINE_PORT")
        .unwrap_or_else(|_| DEFAULT_HTTP_PORT.to_string())
        .parse::<u16>()?;

    let initial_capital = std::env::var("JOURNAL_INITIAL_CAPITAL")
        .unwrap_or_else(|_| DEFAULT_INITIAL_CAPITAL.to_string())
        .parse::<Decimal>()?;

    Ok(EngineConfig {
        http_port,
        initial_capital,
    })
}

/// Log the parsed configuration.
fn log_config(config: &EngineConfig) {
    tracing::info!(
        http_port = config.http_port,
        initial_capital = %config.initial_capital,
        "Configuration loaded"
    );
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
///
/// # Panics
///
/// Panics if signal handlers cannot be installed. This is intentional because:
/// - Signal handlers are critical for graceful shutdown
/// - Failure to install handlers means the process cannot respond to termination signals
/// - It is better to fail fast during startup than to have an unresponsive process
#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }
}
