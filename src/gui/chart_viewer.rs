//! Chart Viewer Widget
//! Central panel showing the chart title above the allocation pie.

use crate::charts::{ChartPlotter, PieLayout};
use egui::RichText;

const TITLE_SIZE: f32 = 20.0;
const LABEL_SIZE: f32 = 14.0;

/// Displays a single pie chart with its title.
pub struct ChartViewer {
    title: String,
    layout: PieLayout,
}

impl ChartViewer {
    pub fn new(title: impl Into<String>, layout: PieLayout) -> Self {
        Self {
            title: title.into(),
            layout,
        }
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new(&self.title).size(TITLE_SIZE).strong());
            ui.add_space(4.0);
        });

        ChartPlotter::draw_pie_chart(ui, &self.layout, LABEL_SIZE);
    }
}
