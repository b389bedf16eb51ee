//! The page-rendering surface contract.

pub mod html;
pub mod recording;

pub use html::HtmlSurface;
pub use recording::{Element, RecordingSurface};

use polars::prelude::DataFrame;

use crate::error::{ReportError, Result};
use crate::figure::Figure;
use crate::image::EmbeddedImage;

/// Page width behaviour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Layout {
    /// Content kept in a narrow, readable column
    #[default]
    Centered,
    /// Content spans the full window width
    Wide,
}

impl Layout {
    pub fn as_str(self) -> &'static str {
        match self {
            Layout::Centered => "centered",
            Layout::Wide => "wide",
        }
    }
}

/// Page-level settings applied before any content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageConfig {
    pub page_title: String,
    pub layout: Layout,
}

impl Default for PageConfig {
    fn default() -> Self {
        PageConfig {
            page_title: "wattcast".to_string(),
            layout: Layout::default(),
        }
    }
}

/// A target that receives render calls in order.
///
/// `set_page_config` may only be called once, before any other element.
pub trait Surface {
    fn set_page_config(&mut self, config: &PageConfig) -> Result<()>;
    fn title(&mut self, text: &str) -> Result<()>;
    fn header(&mut self, text: &str) -> Result<()>;
    fn markdown(&mut self, text: &str) -> Result<()>;
    /// Displays every column of `frame` in its stored order.
    fn table(&mut self, frame: &DataFrame) -> Result<()>;
    fn image(&mut self, image: &EmbeddedImage, caption: &str, use_column_width: bool) -> Result<()>;
    fn warning(&mut self, text: &str) -> Result<()>;
    fn figure(&mut self, figure: &Figure) -> Result<()>;
}

/// Tracks the page-config ordering rule for a surface.
#[derive(Clone, Copy, Debug, Default)]
pub struct PageGuard {
    configured: bool,
    has_content: bool,
}

impl PageGuard {
    pub fn configure(&mut self) -> Result<()> {
        if self.configured {
            return Err(ReportError::PageConfigRepeated);
        }
        if self.has_content {
            return Err(ReportError::PageConfigAfterContent);
        }
        self.configured = true;
        Ok(())
    }

    pub fn content(&mut self) {
        self.has_content = true;
    }
}
