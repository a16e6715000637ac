//! Charts module - Pie layout and rendering

mod palette;
mod pie;
mod plotter;
mod renderer;

pub use pie::{ChartError, PieLayout};
pub use plotter::ChartPlotter;
pub use renderer::StaticPieRenderer;
