use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::content;
use crate::error::Result;
use crate::figure::Figure;
use crate::frames::{demand_estimates_frame, error_metrics_frame};
use crate::image::{DEFAULT_IMAGE_PATH, EmbeddedImage, ForecastImage, load_forecast_image};
use crate::surface::{Layout, PageConfig, Surface};

/// Which branch the visualization section took.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The forecast plot was embedded; `bytes` is the size of the file read
    ImageShown { bytes: usize },
    /// The plot was missing and the placeholder figure was drawn instead
    PlaceholderShown,
}

/// Emits the forecasting report to a [`Surface`].
///
/// Rendering has no state of its own; the only input that can change
/// between runs is the presence of the forecast image.
#[derive(Clone, Debug)]
pub struct ReportRenderer {
    image_path: PathBuf,
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_PATH)
    }
}

impl ReportRenderer {
    pub fn new(image_path: impl Into<PathBuf>) -> Self {
        ReportRenderer {
            image_path: image_path.into(),
        }
    }

    pub fn image_path(&self) -> &Path {
        &self.image_path
    }

    /// Renders every section in order. Surface errors abort the render.
    #[instrument(skip(self, surface), fields(image_path = %self.image_path.display()))]
    pub fn render<S: Surface>(&self, surface: &mut S) -> Result<RenderOutcome> {
        let selection = &model::SELECTION;
        let model_name = selection.selected_model_name();

        surface.set_page_config(&PageConfig {
            page_title: content::PAGE_TITLE.to_string(),
            layout: Layout::Wide,
        })?;

        surface.title(content::TITLE)?;
        surface.markdown(content::INTRODUCTION)?;

        surface.header(content::METHODOLOGY_HEADER)?;
        surface.markdown(content::METHODOLOGY)?;

        surface.header(content::RESULTS_HEADER)?;
        surface.markdown(content::RESULTS_INTRO)?;
        surface.table(&error_metrics_frame(&model::ERROR_METRICS)?)?;

        surface.header(content::SELECTION_HEADER)?;
        surface.markdown(&content::selection_sentence(model_name))?;
        surface.markdown(&content::reason_sentence(selection.reason_text))?;

        surface.header(content::DEMAND_HEADER)?;
        surface.markdown(&content::demand_intro(model_name))?;
        surface.table(&demand_estimates_frame(&model::DEMAND_ESTIMATES)?)?;

        surface.header(content::VISUALIZATION_HEADER)?;
        surface.markdown(content::VISUALIZATION_INTRO)?;
        let outcome = self.render_forecast_plot(surface)?;

        surface.header(content::CONCLUSION_HEADER)?;
        surface.markdown(content::CONCLUSION)?;

        info!(?outcome, "Report rendered");
        Ok(outcome)
    }

    fn render_forecast_plot<S: Surface>(&self, surface: &mut S) -> Result<RenderOutcome> {
        match load_forecast_image(&self.image_path) {
            ForecastImage::Loaded(bytes) => {
                debug!(bytes = bytes.len(), "Embedding forecast plot");
                let image = EmbeddedImage::png(&bytes);
                surface.image(&image, content::IMAGE_CAPTION, true)?;
                Ok(RenderOutcome::ImageShown { bytes: bytes.len() })
            }
            ForecastImage::Missing(reason) => {
                warn!(kind = ?reason.kind, "Falling back to placeholder plot");
                surface.warning(&content::missing_image_warning(&self.image_path))?;
                surface.figure(&Figure::placeholder())?;
                Ok(RenderOutcome::PlaceholderShown)
            }
        }
    }
}
