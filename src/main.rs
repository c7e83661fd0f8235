//! Localized route generator.
//!
//! # Architecture Overview
//!
//! ```text
//!   i18n.toml ──▶ config::loader ──▶ I18nConfig ──┐
//!                                                 ▼
//!   routes.json ─▶ Route[] ────────────▶ routing::setup_pages ──▶ localized Route[] ──▶ stdout (JSON)
//!                                                 ▲
//!   --watch: config::watcher ──▶ new I18nConfig ──┘ (RouteTable::reload)
//! ```

use std::path::PathBuf;

use clap::Parser;

use route_i18n::config::loader::{load_config, load_routes};
use route_i18n::config::watcher::ConfigWatcher;
use route_i18n::observability::logging::init_logging;
use route_i18n::routing::route::Route;
use route_i18n::routing::table::RouteTable;

#[derive(Parser)]
#[command(name = "route-i18n")]
#[command(about = "Generate locale-aware variants of a route tree", long_about = None)]
struct Cli {
    /// Path to the i18n configuration (TOML).
    #[arg(short, long, default_value = "i18n.toml")]
    config: PathBuf,

    /// Path to the route tree (JSON array of routes).
    #[arg(short, long)]
    routes: PathBuf,

    /// Pretty-print the output.
    #[arg(long)]
    pretty: bool,

    /// Keep running and regenerate on configuration change.
    #[arg(long)]
    watch: bool,

    /// Override the configured log level.
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_config(&cli.config)?;
    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.observability.log_level.clone());
    init_logging(&level);

    tracing::info!(
        default_locale = %config.default_locale,
        locales = ?config.locales,
        strategy = %config.strategy,
        "Configuration loaded"
    );

    let routes = load_routes(&cli.routes)?;
    tracing::info!(routes = routes.len(), path = ?cli.routes, "Route tree loaded");

    let table = RouteTable::build(routes, &config);
    print_routes(&table.snapshot(), cli.pretty)?;

    if !cli.watch {
        return Ok(());
    }

    let (watcher, mut updates) = ConfigWatcher::new(&cli.config);
    let _watcher = watcher.run()?;

    loop {
        tokio::select! {
            update = updates.recv() => {
                let Some(new_config) = update else { break };
                table.reload(&new_config);
                print_routes(&table.snapshot(), cli.pretty)?;
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted, stopping watcher");
                break;
            }
        }
    }

    Ok(())
}

fn print_routes(routes: &[Route], pretty: bool) -> Result<(), serde_json::Error> {
    let output = if pretty {
        serde_json::to_string_pretty(routes)?
    } else {
        serde_json::to_string(routes)?
    };
    println!("{output}");
    Ok(())
}
