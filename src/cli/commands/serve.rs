use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{debug, info, trace};

use crate::config::{AppConfig, initialize_app_state};
use crate::router::create_router;

/// Serves the report until the listener fails.
pub async fn serve(config: AppConfig) -> Result<()> {
    trace!("Entering serve function");
    let bind_address = config.bind_address.clone();
    debug!(timeout_secs = config.request_timeout_secs, "Serving with {:?}", config.image_path);

    let state = initialize_app_state(config).context("Failed to initialize application state")?;
    let app = create_router(state);

    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_address))?;

    info!("Report available at http://{}", bind_address);
    info!("Swagger UI available at http://{}/swagger-ui", bind_address);

    axum::serve(listener, app).await.context("Server error")?;

    info!("Server shutdown gracefully");
    Ok(())
}
