use std::process;
use std::sync::Arc;

use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use mergington_activities::config::AppConfig;
use mergington_activities::database::ActivityRegistry;
use mergington_activities::web;

#[tokio::main]
async fn main() {
    // Load .env if present
    dotenv().ok();

    // 1. Logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // 2. Config
    let config = match AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Configuration error: {}", e);
            process::exit(1);
        }
    };

    // 3. Seed the activity registry and build the app
    let registry = Arc::new(ActivityRegistry::seeded());
    info!(activities = registry.len(), "activity registry seeded");
    let app = web::build_router(registry, &config.static_dir);

    // 4. Bind (falls back to PORT + 1 when the port is taken)
    let listener = match bind(&config).await {
        Ok(l) => l,
        Err(e) => {
            error!("Could not bind listener: {}", e);
            process::exit(1);
        }
    };

    match listener.local_addr() {
        Ok(addr) => info!("Server running on http://{}", addr),
        Err(e) => warn!("Could not read bound address: {}", e),
    }

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        process::exit(1);
    }
}

async fn bind(config: &AppConfig) -> Result<TcpListener, Box<dyn std::error::Error>> {
    let addr = config.addr()?;
    match TcpListener::bind(addr).await {
        Ok(l) => Ok(l),
        Err(e) => {
            let fallback = config.fallback_addr()?;
            warn!("Could not bind on {}: {}. Trying fallback {}", addr, e, fallback);
            Ok(TcpListener::bind(fallback).await?)
        }
    }
}
