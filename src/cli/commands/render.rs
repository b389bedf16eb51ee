use std::path::Path;

use anyhow::{Context, Result};
use report::{RenderOutcome, render_html_page};
use tracing::{debug, info, trace, warn};

use crate::config::{AppConfig, initialize_app_state};

/// Renders the report once and writes the page to `output`.
pub async fn render(config: AppConfig, output: &Path) -> Result<()> {
    trace!("Entering render function");
    let state = initialize_app_state(config)?;

    let (page, outcome) = render_html_page(&state.renderer).context("Failed to render report")?;
    match outcome {
        RenderOutcome::ImageShown { bytes } => debug!("Embedded forecast plot ({} bytes)", bytes),
        RenderOutcome::PlaceholderShown => warn!(
            "Forecast plot '{}' not found, placeholder rendered instead",
            state.renderer.image_path().display()
        ),
    }

    tokio::fs::write(output, page.into_string())
        .await
        .with_context(|| format!("Failed to write report to {}", output.display()))?;

    info!("Report written to {}", output.display());
    Ok(())
}
