// File: crates/linechart-core/src/error.rs
// Summary: Error type for chart layout and touch resolution.

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error, PartialEq)]
pub enum ChartError {
    #[error("chart has no data lines")]
    NoData,

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: f64, height: f64 },
}
