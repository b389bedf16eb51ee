//! Standalone HTML5 page surface.

use comrak::{Options, markdown_to_html};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use polars::prelude::DataFrame;
use tracing::trace;

use super::{PageConfig, PageGuard, Surface};
use crate::error::Result;
use crate::figure::Figure;
use crate::frames::{column_names, rows_as_text};
use crate::image::EmbeddedImage;

const STYLE: &str = r#"
body { font-family: "Source Sans Pro", system-ui, sans-serif; color: #31333f; margin: 0; }
main { padding: 3rem 1rem 6rem; margin: 0 auto; }
main.layout-wide { max-width: none; padding-left: 5rem; padding-right: 5rem; }
main.layout-centered { max-width: 46rem; }
h1 { font-size: 2.75rem; font-weight: 700; }
h2 { font-size: 2rem; font-weight: 600; margin-top: 2rem; }
table.report-table { border-collapse: collapse; margin: 1rem 0; }
table.report-table th, table.report-table td { border: 1px solid #e6e9ef; padding: 0.25rem 0.75rem; text-align: right; }
table.report-table th.index, table.report-table thead th { color: #808495; font-weight: 400; }
table.report-table td.text { text-align: left; }
figure.report-image { margin: 1rem 0; }
figure.report-image figcaption { color: #808495; font-size: 0.875rem; text-align: center; }
div.alert-warning { background: #fffce7; color: #926c05; border-radius: 0.5rem; padding: 1rem; margin: 1rem 0; }
div.report-figure svg { max-width: 100%; height: auto; }
"#;

/// Collects rendered elements and assembles them into one HTML document.
#[derive(Default)]
pub struct HtmlSurface {
    guard: PageGuard,
    config: PageConfig,
    body: Vec<Markup>,
}

impl HtmlSurface {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, markup: Markup) {
        self.guard.content();
        self.body.push(markup);
    }

    /// Wraps everything rendered so far into a complete page.
    pub fn finish(self) -> Markup {
        let layout_class = format!("layout-{}", self.config.layout.as_str());
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (self.config.page_title) }
                    style { (PreEscaped(STYLE)) }
                }
                body {
                    main class=(layout_class) {
                        @for element in &self.body {
                            (element)
                        }
                    }
                }
            }
        }
    }
}

impl Surface for HtmlSurface {
    fn set_page_config(&mut self, config: &PageConfig) -> Result<()> {
        self.guard.configure()?;
        trace!(layout = config.layout.as_str(), "Page configured");
        self.config = config.clone();
        Ok(())
    }

    fn title(&mut self, text: &str) -> Result<()> {
        self.push(html! { h1 { (text) } });
        Ok(())
    }

    fn header(&mut self, text: &str) -> Result<()> {
        self.push(html! { h2 { (text) } });
        Ok(())
    }

    fn markdown(&mut self, text: &str) -> Result<()> {
        let rendered = markdown_to_html(text, &Options::default());
        self.push(html! { div class="markdown" { (PreEscaped(rendered)) } });
        Ok(())
    }

    fn table(&mut self, frame: &DataFrame) -> Result<()> {
        let names = column_names(frame);
        let rows = rows_as_text(frame)?;
        let text_columns: Vec<bool> = frame
            .get_columns()
            .iter()
            .map(|column| column.dtype().is_string())
            .collect();

        self.push(html! {
            table class="report-table" {
                thead {
                    tr {
                        th class="index" {}
                        @for name in &names {
                            th scope="col" { (name) }
                        }
                    }
                }
                tbody {
                    @for (index, cells) in rows.iter().enumerate() {
                        tr {
                            th class="index" scope="row" { (index) }
                            @for (cell, is_text) in cells.iter().zip(&text_columns) {
                                td class=[is_text.then_some("text")] { (cell) }
                            }
                        }
                    }
                }
            }
        });
        Ok(())
    }

    fn image(&mut self, image: &EmbeddedImage, caption: &str, use_column_width: bool) -> Result<()> {
        let width = use_column_width.then_some("width:100%");
        self.push(html! {
            figure class="report-image" {
                img src=(image.data_uri()) alt=(caption) style=[width];
                figcaption { (caption) }
            }
        });
        Ok(())
    }

    fn warning(&mut self, text: &str) -> Result<()> {
        self.push(html! {
            div class="alert alert-warning" role="alert" { "⚠️ " (text) }
        });
        Ok(())
    }

    fn figure(&mut self, figure: &Figure) -> Result<()> {
        self.push(html! {
            div class="report-figure" { (figure.to_svg()) }
        });
        Ok(())
    }
}
