//! Care API binary.
//!
//! # Startup sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `vivarium.yaml` (defaults if absent)
//! 3. Build the store, clock, and pet service
//! 4. Build the router and serve until terminated

use std::path::Path;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;
use vivarium_api::{AppState, build_router};
use vivarium_engine::{Clock, EngineConfig, PetService, SystemClock};
use vivarium_store::{MemoryPetStore, PetStore};

/// Default configuration file path, overridable via `VIVARIUM_CONFIG`.
const DEFAULT_CONFIG_PATH: &str = "vivarium.yaml";

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("vivarium-api starting");

    // 2. Load configuration.
    let config = load_config()?;
    info!(bind_addr = config.server.bind_addr, "configuration loaded");

    // 3. Build the engine. The in-process store is the reference
    // implementation of the seam; a database-backed store plugs in here
    // without touching anything above it.
    let store: Arc<dyn PetStore> = Arc::new(MemoryPetStore::new());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let service = Arc::new(PetService::new(store, clock, config.balance));
    info!("pet service initialized");

    // 4. Serve.
    let state = Arc::new(AppState::new(service));
    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(&config.server.bind_addr).await?;
    info!(addr = %config.server.bind_addr, "listening");
    axum::serve(listener, router).await?;

    Ok(())
}

/// Load `vivarium.yaml`, falling back to defaults when the file is absent.
///
/// A present-but-invalid file is a hard error -- silently ignoring a typo
/// in production balance numbers would be worse than refusing to start.
fn load_config() -> Result<EngineConfig, anyhow::Error> {
    let path = std::env::var("VIVARIUM_CONFIG")
        .unwrap_or_else(|_| String::from(DEFAULT_CONFIG_PATH));
    let path = Path::new(&path);
    if path.exists() {
        Ok(EngineConfig::from_file(path)?)
    } else {
        info!(path = %path.display(), "config file absent, using defaults");
        Ok(EngineConfig::default())
    }
}
