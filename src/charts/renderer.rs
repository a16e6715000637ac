//! Static Chart Renderer
//! Draws the allocation pie to a PNG file with plotters.
//!
//! Layout:
//! 1. Title centered in a band at the top
//! 2. Pie centered in the remaining square area, circular regardless of image size
//! 3. Holding labels outside each slice, percentage labels inside

use crate::charts::palette::slice_color;
use crate::charts::pie::{LabelAlign, PieLayout, LABEL_DISTANCE};
use crate::charts::ChartError;
use crate::config::{ChartConfig, TITLE};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

/// Arc steps for a full circle
const ARC_SEGMENTS: usize = 360;
/// Fraction of image height reserved for the title
const TITLE_BAND: f64 = 0.08;
/// Space left around the outer labels, as a fraction of the plot area
const LABEL_MARGIN: f64 = 0.15;

/// Pixel placement of the pie inside an image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieFrame {
    pub center: (f64, f64),
    pub radius: f64,
    pub title_y: i32,
}

impl PieFrame {
    /// Fit the pie (plus outer labels) into a `width` x `height` image.
    pub fn fit(width: u32, height: u32) -> Self {
        let (w, h) = (width as f64, height as f64);
        let title_h = h * TITLE_BAND;
        let plot_h = h - title_h;
        let side = w.min(plot_h);
        let radius = side * (1.0 - LABEL_MARGIN) / 2.0 / LABEL_DISTANCE;

        Self {
            center: (w / 2.0, title_h + plot_h / 2.0),
            radius,
            title_y: (title_h / 2.0).round() as i32,
        }
    }

    /// Map a unit-circle point (y up) to image pixels (y down).
    pub fn to_pixel(&self, point: [f64; 2]) -> (i32, i32) {
        (
            (self.center.0 + point[0] * self.radius).round() as i32,
            (self.center.1 - point[1] * self.radius).round() as i32,
        )
    }
}

pub struct StaticPieRenderer;

impl StaticPieRenderer {
    /// Render the pie chart to a PNG at `path`.
    pub fn render_png(
        layout: &PieLayout,
        config: &ChartConfig,
        path: &Path,
    ) -> Result<(), ChartError> {
        let (width, height) = config.pixel_size();
        let frame = PieFrame::fit(width, height);
        let scale = width.min(height) as f64 / 800.0;

        let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;

        // Title
        let title_style = TextStyle::from(("sans-serif", 24.0 * scale).into_font())
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Center));
        root.draw(&Text::new(
            TITLE,
            ((width / 2) as i32, frame.title_y),
            title_style,
        ))
        .map_err(render_err)?;

        // Wedges
        for (i, wedge) in layout.wedges().iter().enumerate() {
            let (r, g, b) = slice_color(i);
            let points: Vec<(i32, i32)> = wedge
                .outline(ARC_SEGMENTS)
                .into_iter()
                .map(|p| frame.to_pixel(p))
                .collect();

            root.draw(&Polygon::new(points.clone(), RGBColor(r, g, b).filled()))
                .map_err(render_err)?;

            let mut edge = points;
            edge.push(frame.to_pixel([0.0, 0.0]));
            root.draw(&PathElement::new(edge, WHITE.stroke_width(2)))
                .map_err(render_err)?;
        }

        // Labels
        let font_size = 16.0 * scale;
        for wedge in layout.wedges() {
            let h_pos = match wedge.label_align() {
                LabelAlign::Left => HPos::Left,
                LabelAlign::Right => HPos::Right,
            };
            let label_style = TextStyle::from(("sans-serif", font_size).into_font())
                .color(&BLACK)
                .pos(Pos::new(h_pos, VPos::Center));
            root.draw(&Text::new(
                wedge.label.clone(),
                frame.to_pixel(wedge.label_anchor()),
                label_style,
            ))
            .map_err(render_err)?;

            let pct_style = TextStyle::from(("sans-serif", font_size).into_font())
                .color(&BLACK)
                .pos(Pos::new(HPos::Center, VPos::Center));
            root.draw(&Text::new(
                wedge.percent_label(),
                frame.to_pixel(wedge.percent_anchor()),
                pct_style,
            ))
            .map_err(render_err)?;
        }

        root.present().map_err(render_err)?;
        tracing::info!("Chart written to {}", path.display());
        Ok(())
    }
}

fn render_err<E: std::fmt::Display>(e: E) -> ChartError {
    ChartError::Render(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PERCENT_PRECISION, START_ANGLE};
    use crate::data::{compute_values, labels, portfolio};
    use std::fs;

    fn portfolio_layout() -> PieLayout {
        let holdings = portfolio();
        PieLayout::new(
            &labels(&holdings),
            &compute_values(&holdings),
            START_ANGLE,
            PERCENT_PRECISION,
        )
        .unwrap()
    }

    #[test]
    fn test_render_png_writes_file() {
        let path = std::env::temp_dir().join(format!(
            "portfolio_chart_render_{}.png",
            std::process::id()
        ));
        fs::remove_file(&path).ok();

        let result = StaticPieRenderer::render_png(&portfolio_layout(), &ChartConfig::default(), &path);
        let written = path.exists();
        let size = fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
        fs::remove_file(&path).ok();

        assert!(result.is_ok(), "render failed: {:?}", result);
        assert!(written);
        assert!(size > 0);
    }

    #[test]
    fn test_render_png_unwritable_path() {
        let path = std::env::temp_dir()
            .join("portfolio_chart_missing_dir")
            .join("nested")
            .join("pie.png");

        let result = StaticPieRenderer::render_png(&portfolio_layout(), &ChartConfig::default(), &path);
        assert!(matches!(result, Err(ChartError::Render(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_frame_square_image() {
        let frame = PieFrame::fit(800, 800);
        assert_eq!(frame.center, (400.0, 432.0));
        assert_eq!(frame.title_y, 32);
        // Outer labels stay inside the plot area
        assert!(frame.center.0 + frame.radius * LABEL_DISTANCE < 800.0);
        assert!(frame.center.1 + frame.radius * LABEL_DISTANCE < 800.0);
        assert!(frame.center.1 - frame.radius * LABEL_DISTANCE > 64.0);
    }

    #[test]
    fn test_frame_stays_circular_on_wide_image() {
        let wide = PieFrame::fit(1600, 800);
        let square = PieFrame::fit(800, 800);
        assert_eq!(wide.radius, square.radius);
        assert_eq!(wide.center.0, 800.0);
    }

    #[test]
    fn test_to_pixel_flips_y() {
        let frame = PieFrame::fit(800, 800);
        let (cx, cy) = (frame.center.0 as i32, frame.center.1 as i32);
        let r = frame.radius.round() as i32;

        assert_eq!(frame.to_pixel([0.0, 0.0]), (cx, cy));
        assert_eq!(frame.to_pixel([1.0, 0.0]), (cx + r, cy));
        assert_eq!(frame.to_pixel([0.0, 1.0]), (cx, cy - r));
    }
}
