//! Portfolio Chart Window
//! Native window hosting the chart viewer until the user closes it.

use crate::charts::{ChartError, PieLayout};
use crate::config::{ChartConfig, TITLE};
use crate::gui::ChartViewer;
use eframe::egui;

const APP_NAME: &str = "Portfolio Chart";

/// Main application window.
pub struct PortfolioChartApp {
    chart_viewer: ChartViewer,
}

impl PortfolioChartApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, chart_viewer: ChartViewer) -> Self {
        Self { chart_viewer }
    }
}

impl eframe::App for PortfolioChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::WHITE))
            .show(ctx, |ui| {
                self.chart_viewer.show(ui);
            });
    }
}

/// Open the chart window and block until it is closed.
pub fn show(layout: PieLayout, config: &ChartConfig) -> Result<(), ChartError> {
    let (width, height) = config.pixel_size();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width as f32, height as f32])
            .with_title(TITLE),
        ..Default::default()
    };

    let viewer = ChartViewer::new(TITLE, layout);
    tracing::info!("Opening chart window ({}x{})", width, height);

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(PortfolioChartApp::new(cc, viewer)))
        }),
    )
    .map_err(|e| ChartError::Display(e.to_string()))?;

    tracing::info!("Chart window closed");
    Ok(())
}
