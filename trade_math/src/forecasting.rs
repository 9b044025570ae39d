//! Least-squares trend fitting for time series prediction
//!
//! The regression treats the position of each value inside the window
//! (0, 1, 2, ...) as the independent variable.

use crate::{MathError, Result};

/// Ordinary least-squares fit of `value ~ index`
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRegression {
    slope: f64,
    y_mean: f64,
}

impl LinearRegression {
    /// Fit a line through `values`.
    ///
    /// A single value has zero variance in the index, which yields a flat
    /// line (slope 0) rather than an error.
    pub fn fit(values: &[f64]) -> Result<Self> {
        if values.is_empty() {
            return Err(MathError::InsufficientData(
                "Need at least 1 value for linear regression".to_string(),
            ));
        }

        let n = values.len() as f64;
        let x_mean = (n - 1.0) / 2.0;
        let y_mean = values.iter().sum::<f64>() / n;

        let mut numerator = 0.0;
        let mut denominator = 0.0;

        for (i, &y) in values.iter().enumerate() {
            let dx = i as f64 - x_mean;
            numerator += dx * (y - y_mean);
            denominator += dx * dx;
        }

        let slope = if denominator != 0.0 {
            numerator / denominator
        } else {
            0.0
        };

        Ok(Self { slope, y_mean })
    }

    /// Fit over the last `window` values (or all of them if there are fewer)
    pub fn fit_trailing(values: &[f64], window: usize) -> Result<Self> {
        if window == 0 {
            return Err(MathError::InvalidInput(
                "Regression window must be greater than zero".to_string(),
            ));
        }

        let start = values.len().saturating_sub(window);
        Self::fit(&values[start..])
    }

    /// Change in value per index step
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Mean of the fitted values
    pub fn y_mean(&self) -> f64 {
        self.y_mean
    }
}
