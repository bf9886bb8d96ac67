//! Cutting-stock optimization.

mod first_fit;

pub use first_fit::optimize_cuts;
