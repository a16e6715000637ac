//! Portfolio Chart - Allocation by Value
//!
//! Computes the value of each holding (units x last price) and renders a pie
//! chart of the portfolio's allocation, in a window and/or as a PNG.

mod charts;
mod config;
mod data;
mod gui;

use anyhow::{Context, Result};
use charts::{PieLayout, StaticPieRenderer};
use config::{ChartConfig, PERCENT_PRECISION, START_ANGLE};
use data::{compute_values, labels, portfolio, AllocationFrame};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=info", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(fmt::layer())
        .init();

    let config = ChartConfig::load().context("loading chart config")?;

    let holdings = portfolio();
    let values = compute_values(&holdings);

    let frame = AllocationFrame::from_holdings(&holdings).context("building allocation table")?;
    let shares = frame.percents()?;
    for ((holding, value), share) in holdings.iter().zip(&values).zip(&shares) {
        tracing::debug!(
            "{}: {} x {} = {:.2} ({:.2}%)",
            holding.name,
            holding.units,
            holding.last_price,
            value,
            share
        );
    }
    tracing::info!("Portfolio value: {:.2}", frame.total()?);
    println!("{}", frame.dataframe());

    let layout = PieLayout::new(
        &labels(&holdings),
        &values,
        START_ANGLE,
        PERCENT_PRECISION,
    )
    .context("laying out pie chart")?;

    if let Some(path) = &config.output {
        StaticPieRenderer::render_png(&layout, &config, path)
            .with_context(|| format!("rendering {}", path.display()))?;
    }

    if config.show_window {
        gui::show(layout, &config).context("displaying chart")?;
    }

    Ok(())
}
