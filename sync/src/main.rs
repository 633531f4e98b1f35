use std::future::IntoFuture;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::prelude::*;

use splice_sync::http::{AppState, router};
use splice_sync::{Config, Hub, Relay, SpriteCache, connection};

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = Config::parse();
    config.validate()?;

    let cache = Arc::new(SpriteCache::new(
        config.sprite_dirs.clone(),
        config.cache_ttl(),
    ));
    let fusions = cache
        .index()
        .await
        .context("Failed to build initial sprite index")?
        .total_fusions();

    let http = TcpListener::bind(config.http_addr)
        .await
        .with_context(|| format!("Failed to bind HTTP listener on {}", config.http_addr))?;
    let socket = TcpListener::bind(config.socket_addr)
        .await
        .with_context(|| format!("Failed to bind socket listener on {}", config.socket_addr))?;

    info!(
        http = %config.http_addr,
        socket = %config.socket_addr,
        dirs = ?config.sprite_dirs,
        fusions,
        "fusion sync service listening"
    );

    let app = router(AppState::new(cache.clone(), config.pack.clone()));
    let relay = Relay::new(Hub::new(), cache);

    tokio::select! {
        result = axum::serve(http, app).into_future() => {
            result.context("HTTP server failed")?;
        }
        () = connection::serve(socket, relay) => {}
    }

    Ok(())
}
