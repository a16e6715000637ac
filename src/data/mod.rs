//! Data module - Holdings and allocation table

mod frame;
mod holding;

pub use frame::AllocationFrame;
pub use holding::{compute_values, labels, portfolio, Holding};
