//! # avgpx-runner
//!
//! Main entry point for the BTC/USD average price service.
//!
//! Loads an optional JSON configuration file, builds the aggregation cycle
//! for the enabled providers, starts the scheduler, and serves the current
//! average over HTTP until Ctrl+C.
//!
//! # Usage
//!
//! ```bash
//! avgpx-runner config.json --log-level info
//! avgpx-runner --once            # one cycle, print JSON, exit
//! ```

mod server;

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::{Context, Result, bail};
use avgpx_core::{
    AverageResponse, CycleResult,
    config::{AppConfig, load_config},
};
use avgpx_feed::{PublishedState, Scheduler, registry};
use clap::Parser;
use tracing::{error, info};

/// BTC/USD Multi-Provider Average Price Service.
#[derive(Parser)]
#[command(name = "avgpx-runner", version, about = "BTC/USD Multi-Provider Average Price Service")]
struct Cli {
    /// Configuration file path (JSON). Built-in defaults when omitted.
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Optional log directory for file output.
    #[arg(long)]
    log_dir: Option<String>,

    /// Emit console logs as JSON.
    #[arg(long)]
    log_json: bool,

    /// Run a single cycle, print the result, and exit.
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Initialize logging
    let _guard =
        avgpx_core::logging::init_logging(&cli.log_level, cli.log_dir.as_deref(), "avgpx-runner", cli.log_json);

    info!(
        "avgpx-runner starting: config={}, log_level={}",
        cli.config.as_ref().map_or_else(|| "<defaults>".to_string(), |p| p.display().to_string()),
        cli.log_level
    );

    // 2. Load and validate configuration
    let config = match load_app_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("config error: {e:#}");
            return Err(e);
        }
    };
    info!(
        "config loaded: {} provider(s), interval={:?}, mode={:?}",
        config.enabled_providers().len(),
        config.effective_interval(),
        config.effective_fetch_mode()
    );

    // 3. Build adapters via the registry
    let cycle = registry::build_cycle(&config)?;
    let state = Arc::new(PublishedState::new());
    let mut scheduler = Scheduler::new(cycle, Arc::clone(&state), config.effective_interval());

    if cli.once {
        let line = render_once(scheduler.run_once().await)?;
        println!("{line}");
        return Ok(());
    }

    // 4. Start the scheduler
    scheduler.start();

    // 5. Serve HTTP
    let addr = config.effective_listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await.with_context(|| format!("failed to bind {addr}"))?;
    let app = server::router(server::AppState { state, monitor: scheduler.monitor() });
    info!("listening on {addr}, press Ctrl+C to stop");

    // 6. Wait for shutdown signal
    let served = axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("failed to listen for shutdown signal: {e}");
            }
            info!("shutdown signal received");
        })
        .await;
    if let Err(e) = &served {
        error!("http server error: {e}");
    }

    // 7. Stop the scheduler
    scheduler.stop().await;
    info!("goodbye");
    served.context("http server failed")
}

/// Config from `path`, or the built-in defaults when no file is given.
fn load_app_config(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(path) => load_config(path),
        None => {
            let config = AppConfig::default();
            config.validate()?;
            Ok(config)
        }
    }
}

/// The line `--once` prints: the same read model `GET /` serves.
fn render_once(result: Option<CycleResult>) -> Result<String> {
    let Some(result) = result else {
        bail!("no provider returned a valid price");
    };
    Ok(serde_json::to_string(&AverageResponse::from(Some(result)))?)
}
