//! Chart Plotter Module
//! Draws the allocation pie inside an egui window using egui_plot.

use crate::charts::palette::slice_color;
use crate::charts::pie::{LabelAlign, PieLayout, LABEL_DISTANCE};
use egui::{Align2, Color32, RichText, Stroke};
use egui_plot::{Legend, Plot, PlotPoint, PlotPoints, Polygon, Text};

/// Arc steps for a full circle
const ARC_SEGMENTS: usize = 360;
/// Plot bounds padding beyond the outer labels
const BOUNDS: f64 = LABEL_DISTANCE + 0.45;

/// Convert a palette entry to an egui color.
pub fn to_color32((r, g, b): (u8, u8, u8)) -> Color32 {
    Color32::from_rgb(r, g, b)
}

/// Draws pie charts with egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Draw the pie filling the available space.
    ///
    /// `data_aspect(1.0)` keeps the pie circular whatever the window shape.
    pub fn draw_pie_chart(ui: &mut egui::Ui, layout: &PieLayout, font_size: f32) {
        Plot::new("allocation_pie")
            .data_aspect(1.0)
            .show_axes(false)
            .show_grid(false)
            .show_x(false)
            .show_y(false)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .allow_double_click_reset(false)
            .include_x(-BOUNDS)
            .include_x(BOUNDS)
            .include_y(-BOUNDS)
            .include_y(BOUNDS)
            .legend(Legend::default())
            .show(ui, |plot_ui| {
                for (i, wedge) in layout.wedges().iter().enumerate() {
                    let color = to_color32(slice_color(i));

                    plot_ui.polygon(
                        Polygon::new(PlotPoints::new(wedge.outline(ARC_SEGMENTS)))
                            .fill_color(color)
                            .stroke(Stroke::new(1.5, Color32::WHITE))
                            .name(&wedge.label),
                    );
                }

                for wedge in layout.wedges() {
                    let [lx, ly] = wedge.label_anchor();
                    let anchor = match wedge.label_align() {
                        LabelAlign::Left => Align2::LEFT_CENTER,
                        LabelAlign::Right => Align2::RIGHT_CENTER,
                    };
                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(lx, ly),
                            RichText::new(&wedge.label).size(font_size),
                        )
                        .color(Color32::BLACK)
                        .anchor(anchor),
                    );

                    let [px, py] = wedge.percent_anchor();
                    plot_ui.text(
                        Text::new(
                            PlotPoint::new(px, py),
                            RichText::new(wedge.percent_label()).size(font_size),
                        )
                        .color(Color32::BLACK),
                    );
                }
            });
    }
}
