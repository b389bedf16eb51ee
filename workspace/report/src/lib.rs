//! Rendering of the electricity demand forecasting report.
//!
//! [`ReportRenderer`] walks the report sections in a fixed order and emits
//! them to any [`Surface`]. Two surfaces ship with the crate: [`HtmlSurface`]
//! produces a standalone page, [`RecordingSurface`] keeps the calls in memory.

pub mod content;
pub mod error;
pub mod figure;
pub mod frames;
pub mod image;
pub mod renderer;
pub mod surface;

pub use error::{ReportError, Result};
pub use figure::Figure;
pub use image::{DEFAULT_IMAGE_PATH, EmbeddedImage, ForecastImage, load_forecast_image};
pub use renderer::{RenderOutcome, ReportRenderer};
pub use surface::{Element, HtmlSurface, Layout, PageConfig, RecordingSurface, Surface};

use common::ReportElementDto;
use maud::Markup;

/// Renders the report as a complete HTML document.
pub fn render_html_page(renderer: &ReportRenderer) -> Result<(Markup, RenderOutcome)> {
    let mut surface = HtmlSurface::new();
    let outcome = renderer.render(&mut surface)?;
    Ok((surface.finish(), outcome))
}

/// Renders the report into memory and describes each emitted element.
pub fn render_elements(renderer: &ReportRenderer) -> Result<Vec<ReportElementDto>> {
    let mut surface = RecordingSurface::new();
    renderer.render(&mut surface)?;
    Ok(surface.elements().iter().map(Element::to_dto).collect())
}
