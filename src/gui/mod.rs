//! GUI module - Chart window

mod app;
mod chart_viewer;

pub use app::show;
pub use chart_viewer::ChartViewer;
