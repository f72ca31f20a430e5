use anyhow::Result;
use tokio::net::TcpListener;
use tracing::info;

use clinic_backend::config::ClinicConfig;
use clinic_backend::{create_router, initialize_backend, logging};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ClinicConfig::load()?;
    logging::init(&config.log_level)?;

    info!("Starting clinic backend");
    let app_state = initialize_backend(&config).await?;
    let app = create_router(app_state, &config)?;

    let listener = TcpListener::bind(config.bind_address).await?;
    info!("Listening on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
