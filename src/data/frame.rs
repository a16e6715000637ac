//! Allocation Frame Module
//! Builds the per-holding allocation table (value and share of total) using Polars.

use crate::data::Holding;
use polars::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrameError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// Allocation table with columns: [name, units, last_price, value, percent]
pub struct AllocationFrame {
    df: DataFrame,
}

impl AllocationFrame {
    /// Build the table from holdings, keeping input order.
    pub fn from_holdings(holdings: &[Holding]) -> Result<Self, FrameError> {
        let names: Vec<String> = holdings.iter().map(|h| h.name.clone()).collect();
        let units: Vec<f64> = holdings.iter().map(|h| h.units).collect();
        let prices: Vec<f64> = holdings.iter().map(|h| h.last_price).collect();

        let df = DataFrame::new(vec![
            Column::new("name".into(), names),
            Column::new("units".into(), units),
            Column::new("last_price".into(), prices),
        ])?;

        let df = df
            .lazy()
            .with_column((col("units") * col("last_price")).alias("value"))
            .with_column((col("value") / col("value").sum() * lit(100.0)).alias("percent"))
            .collect()?;

        Ok(Self { df })
    }

    /// Sum of the value column.
    pub fn total(&self) -> Result<f64, FrameError> {
        let values = self.df.column("value")?.f64()?;
        Ok(values.sum().unwrap_or(0.0))
    }

    /// Percent share of total in row order.
    pub fn percents(&self) -> Result<Vec<f64>, FrameError> {
        Self::float_column(&self.df, "percent")
    }

    pub fn dataframe(&self) -> &DataFrame {
        &self.df
    }

    fn float_column(df: &DataFrame, name: &str) -> Result<Vec<f64>, FrameError> {
        let ca = df.column(name)?.f64()?;
        Ok(ca.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{compute_values, portfolio};
    use approx::assert_relative_eq;

    #[test]
    fn test_frame_matches_compute_values() {
        let holdings = portfolio();
        let frame = AllocationFrame::from_holdings(&holdings).unwrap();
        let expected = compute_values(&holdings);

        let values = AllocationFrame::float_column(frame.dataframe(), "value").unwrap();
        assert_eq!(values.len(), holdings.len());
        for (v, e) in values.iter().zip(expected.iter()) {
            assert_relative_eq!(*v, *e, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_frame_total_and_percents() {
        let frame = AllocationFrame::from_holdings(&portfolio()).unwrap();
        assert_relative_eq!(frame.total().unwrap(), 114588.55, epsilon = 1e-6);

        let percents = frame.percents().unwrap();
        let rounded: Vec<f64> = percents.iter().map(|p| (p * 10.0).round() / 10.0).collect();
        assert_eq!(rounded, vec![55.0, 1.1, 2.7, 41.2]);
        assert_relative_eq!(percents.iter().sum::<f64>(), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_frame_column_layout() {
        let frame = AllocationFrame::from_holdings(&portfolio()).unwrap();
        let names: Vec<String> = frame
            .dataframe()
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(names, vec!["name", "units", "last_price", "value", "percent"]);
    }
}
