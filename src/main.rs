use std::error::Error;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shift_engine::api::{AppState, create_router};
use shift_engine::config::ConfigLoader;

const DEFAULT_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_CONFIG_DIR: &str = "./config/ips_virtual";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_dir =
        std::env::var("SHIFT_ENGINE_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.into());
    let addr = std::env::var("SHIFT_ENGINE_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.into());

    let config = ConfigLoader::load(&config_dir)?;
    info!(
        catalog = %config.metadata().name,
        version = %config.metadata().version,
        templates = config.templates().len(),
        "Loaded shift template catalog"
    );

    let app = create_router(AppState::new(config));

    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
