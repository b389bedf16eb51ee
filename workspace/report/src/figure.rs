//! Programmatic figures rendered as inline SVG.

use maud::{Markup, html};

/// Pixels per inch used when a figure is rasterized to SVG units.
const DPI: f64 = 100.0;
/// Axes box as fractions of the figure: left, bottom, right, top.
const AXES_BOUNDS: (f64, f64, f64, f64) = (0.125, 0.11, 0.9, 0.88);
const TITLE_FONT_PT: f64 = 12.0;
const TICK_FONT_PT: f64 = 10.0;
const TICKS: [f64; 6] = [0.0, 0.2, 0.4, 0.6, 0.8, 1.0];

/// A single-axes figure with a title and a block of text centered in the axes.
#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    pub title: String,
    /// Centered text; `\n` separates lines
    pub text: String,
    pub text_color: String,
    pub font_size_pt: f64,
    pub width_in: f64,
    pub height_in: f64,
}

impl Figure {
    /// Stand-in shown when the forecast plot has not been generated yet.
    pub fn placeholder() -> Self {
        Figure {
            title: "Placeholder Plot".to_string(),
            text: "Plot not available.\nRun the forecasting script to generate the image."
                .to_string(),
            text_color: "red".to_string(),
            font_size_pt: 14.0,
            width_in: 10.0,
            height_in: 6.0,
        }
    }

    pub fn width_px(&self) -> f64 {
        self.width_in * DPI
    }

    pub fn height_px(&self) -> f64 {
        self.height_in * DPI
    }

    /// Renders the figure as an `<svg>` element.
    pub fn to_svg(&self) -> Markup {
        let (width, height) = (self.width_px(), self.height_px());
        let (left, bottom, right, top) = AXES_BOUNDS;
        let axes_x = left * width;
        let axes_y = (1.0 - top) * height;
        let axes_w = (right - left) * width;
        let axes_h = (top - bottom) * height;
        let center_x = axes_x + axes_w / 2.0;
        let center_y = axes_y + axes_h / 2.0;

        let lines: Vec<&str> = self.text.lines().collect();
        let first_dy = -(lines.len().saturating_sub(1) as f64) * 0.6;

        html! {
            svg xmlns="http://www.w3.org/2000/svg"
                width=(width) height=(height)
                viewBox=(format!("0 0 {} {}", width, height))
                role="img" aria-label=(self.title) {
                rect x="0" y="0" width=(width) height=(height) fill="white" {}
                rect x=(axes_x) y=(axes_y) width=(axes_w) height=(axes_h)
                    fill="white" stroke="black" stroke-width="0.8" {}
                @for tick in TICKS {
                    text x=(axes_x + tick * axes_w) y=(axes_y + axes_h + pt_to_px(TICK_FONT_PT) * 1.4)
                        text-anchor="middle" font-size=(pt_to_px(TICK_FONT_PT)) fill="black" {
                        (format!("{:.1}", tick))
                    }
                    text x=(axes_x - 6.0) y=(axes_y + axes_h - tick * axes_h)
                        text-anchor="end" dominant-baseline="middle"
                        font-size=(pt_to_px(TICK_FONT_PT)) fill="black" {
                        (format!("{:.1}", tick))
                    }
                }
                text class="figure-title" x=(center_x) y=(axes_y - pt_to_px(6.0))
                    text-anchor="middle" font-size=(pt_to_px(TITLE_FONT_PT)) fill="black" {
                    (self.title)
                }
                text class="figure-text" x=(center_x) y=(center_y)
                    text-anchor="middle" dominant-baseline="middle"
                    font-size=(pt_to_px(self.font_size_pt)) fill=(self.text_color) {
                    @for (index, line) in lines.iter().enumerate() {
                        tspan x=(center_x) dy=(if index == 0 { format!("{}em", first_dy) } else { "1.2em".to_string() }) {
                            (line)
                        }
                    }
                }
            }
        }
    }
}

fn pt_to_px(points: f64) -> f64 {
    points * DPI / 72.0
}
