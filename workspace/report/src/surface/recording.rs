//! In-memory surface that records every render call.

use common::{ReportElementDto, ReportElementKind};
use polars::prelude::DataFrame;

use super::{PageConfig, PageGuard, Surface};
use crate::error::Result;
use crate::figure::Figure;
use crate::image::EmbeddedImage;

/// One recorded render call.
#[derive(Clone, Debug)]
pub enum Element {
    PageConfig(PageConfig),
    Title(String),
    Header(String),
    Markdown(String),
    Table(DataFrame),
    Image {
        data_uri: String,
        caption: String,
        use_column_width: bool,
    },
    Warning(String),
    Figure(Figure),
}

impl Element {
    pub fn kind(&self) -> ReportElementKind {
        match self {
            Element::PageConfig(_) => ReportElementKind::PageConfig,
            Element::Title(_) => ReportElementKind::Title,
            Element::Header(_) => ReportElementKind::Header,
            Element::Markdown(_) => ReportElementKind::Markdown,
            Element::Table(_) => ReportElementKind::Table,
            Element::Image { .. } => ReportElementKind::Image,
            Element::Warning(_) => ReportElementKind::Warning,
            Element::Figure(_) => ReportElementKind::Figure,
        }
    }

    pub fn summary(&self) -> String {
        match self {
            Element::PageConfig(config) => format!("layout={}", config.layout.as_str()),
            Element::Title(text) | Element::Header(text) | Element::Warning(text) => text.clone(),
            Element::Markdown(text) => text.trim().lines().next().unwrap_or_default().to_string(),
            Element::Table(frame) => format!(
                "{} rows x {} columns",
                frame.height(),
                frame.width()
            ),
            Element::Image { caption, .. } => caption.clone(),
            Element::Figure(figure) => figure.title.clone(),
        }
    }

    pub fn to_dto(&self) -> ReportElementDto {
        ReportElementDto {
            kind: self.kind(),
            summary: self.summary(),
        }
    }
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    guard: PageGuard,
    elements: Vec<Element>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn tables(&self) -> Vec<&DataFrame> {
        self.elements
            .iter()
            .filter_map(|element| match element {
                Element::Table(frame) => Some(frame),
                _ => None,
            })
            .collect()
    }

    pub fn warnings(&self) -> Vec<&str> {
        self.elements
            .iter()
            .filter_map(|element| match element {
                Element::Warning(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn markdown_blocks(&self) -> Vec<&str> {
        self.elements
            .iter()
            .filter_map(|element| match element {
                Element::Markdown(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn figures(&self) -> Vec<&Figure> {
        self.elements
            .iter()
            .filter_map(|element| match element {
                Element::Figure(figure) => Some(figure),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, kind: ReportElementKind) -> usize {
        self.elements
            .iter()
            .filter(|element| element.kind() == kind)
            .count()
    }

    fn push(&mut self, element: Element) {
        self.guard.content();
        self.elements.push(element);
    }
}

impl Surface for RecordingSurface {
    fn set_page_config(&mut self, config: &PageConfig) -> Result<()> {
        self.guard.configure()?;
        self.elements.push(Element::PageConfig(config.clone()));
        Ok(())
    }

    fn title(&mut self, text: &str) -> Result<()> {
        self.push(Element::Title(text.to_string()));
        Ok(())
    }

    fn header(&mut self, text: &str) -> Result<()> {
        self.push(Element::Header(text.to_string()));
        Ok(())
    }

    fn markdown(&mut self, text: &str) -> Result<()> {
        self.push(Element::Markdown(text.to_string()));
        Ok(())
    }

    fn table(&mut self, frame: &DataFrame) -> Result<()> {
        self.push(Element::Table(frame.clone()));
        Ok(())
    }

    fn image(&mut self, image: &EmbeddedImage, caption: &str, use_column_width: bool) -> Result<()> {
        self.push(Element::Image {
            data_uri: image.data_uri(),
            caption: caption.to_string(),
            use_column_width,
        });
        Ok(())
    }

    fn warning(&mut self, text: &str) -> Result<()> {
        self.push(Element::Warning(text.to_string()));
        Ok(())
    }

    fn figure(&mut self, figure: &Figure) -> Result<()> {
        self.push(Element::Figure(figure.clone()));
        Ok(())
    }
}
