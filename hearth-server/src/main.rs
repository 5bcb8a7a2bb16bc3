//! # Hearth Server
//!
//! Public listing API for the Hearth real-estate platform.
//!
//! ## Overview
//!
//! The server exposes the public side of the catalog:
//!
//! - **Catalog browsing**: filtered, sorted, paginated summary cards
//! - **Listing details**: a single home merged with its extended details
//! - **Submissions**: contact messages and visit requests
//!
//! ## Architecture
//!
//! The server is built on Axum and uses:
//! - PostgreSQL for persistent storage (sqlx, embedded migrations)
//! - `hearth-core` for query normalization, projections and validation
//! - `hearth-config` for environment-driven configuration

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{
    http::{HeaderValue, Method},
    routing::get,
};
use clap::Parser;
use sqlx::postgres::PgPoolOptions;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hearth_config::{Config, ConfigLoader, CorsConfig};
use hearth_server::{AppState, handlers, routes};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "hearth-server")]
#[command(about = "Public listing API for the Hearth real-estate platform")]
struct Cli {
    /// Server host (overrides config)
    #[arg(long, env = "HEARTH_HOST")]
    host: Option<String>,

    /// Server port (overrides config)
    #[arg(short, long, env = "HEARTH_PORT")]
    port: Option<u16>,

    /// PostgreSQL connection URL (overrides config)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let mut config = ConfigLoader::from_env().context("failed to load configuration")?;
    apply_cli_overrides(&mut config, cli)?;

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await
        .context("failed to connect to PostgreSQL")?;

    hearth_core::MIGRATOR
        .run(&pool)
        .await
        .context("failed to run database migrations")?;

    let cors = build_cors_layer(&config.cors)?;
    let config = Arc::new(config);
    let state = AppState::new(pool, config.clone());

    let app = routes::create_api_router()
        .route("/health", get(handlers::health::health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("invalid server host/port")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("hearth-server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

fn apply_cli_overrides(config: &mut Config, cli: Cli) -> anyhow::Result<()> {
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(url) = cli.database_url {
        config.database.url = hearth_config::loader::resolve_database_url(Some(url))
            .context("invalid --database-url")?;
    }
    Ok(())
}

fn build_cors_layer(cors: &CorsConfig) -> anyhow::Result<CorsLayer> {
    if cors.is_wildcard_included() {
        return Ok(CorsLayer::new()
            .allow_origin(AllowOrigin::any())
            .allow_methods(AllowMethods::any())
            .allow_headers(AllowHeaders::any()));
    }

    let origins = cors
        .allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|e| anyhow::anyhow!("invalid CORS origin {origin:?}: {e}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(AllowHeaders::any()))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for shutdown signal: {e}");
    }
}
