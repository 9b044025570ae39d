//! # Trade Math
//!
//! Numeric building blocks shared by the series generator and the forecaster:
//! trailing moving averages, least-squares trend fitting, the seeded
//! pseudo-random function and decimal rounding.

use thiserror::Error;

pub mod forecasting;
pub mod moving_averages;
pub mod noise;

pub use forecasting::LinearRegression;
pub use moving_averages::{trailing_means, SimpleMovingAverage};
pub use noise::{deterministic_noise, ticker_seed, NoiseSite};

/// Errors that can occur in trading-related calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for trading math operations
pub type Result<T> = std::result::Result<T, MathError>;

/// Round `value` to `decimals` places, halves away from zero.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Round a price to cents.
pub fn round_price(value: f64) -> f64 {
    round_to(value, 2)
}
