//! Trailing simple moving averages.
//!
//! The average is taken over however many values are available, up to the
//! configured period, so the first few outputs of a series use a shorter
//! window instead of being undefined.

use crate::{MathError, Result};
use std::collections::VecDeque;

/// Simple Moving Average (SMA) over a window of at most `period` values
#[derive(Debug, Clone)]
pub struct SimpleMovingAverage {
    period: usize,
    values: VecDeque<f64>,
}

impl SimpleMovingAverage {
    /// Create a new Simple Moving Average with the specified period
    pub fn new(period: usize) -> Result<Self> {
        if period == 0 {
            return Err(MathError::InvalidInput(
                "Period must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            period,
            values: VecDeque::with_capacity(period),
        })
    }

    /// Push a new value, evicting the oldest once the window is full
    pub fn update(&mut self, value: f64) {
        self.values.push_back(value);

        if self.values.len() > self.period {
            self.values.pop_front();
        }
    }

    /// Mean of the values currently in the window.
    ///
    /// Re-summed on every call; the result must equal a plain slice mean.
    pub fn value(&self) -> Result<f64> {
        if self.values.is_empty() {
            return Err(MathError::InsufficientData(
                "No values in the moving average window".to_string(),
            ));
        }

        Ok(self.values.iter().sum::<f64>() / self.values.len() as f64)
    }
}

/// Trailing mean at every index of `values`, over `max(0, i + 1 - period)..=i`.
pub fn trailing_means(values: &[f64], period: usize) -> Result<Vec<f64>> {
    let mut sma = SimpleMovingAverage::new(period)?;
    let mut means = Vec::with_capacity(values.len());

    for &value in values {
        sma.update(value);
        means.push(sma.value()?);
    }

    Ok(means)
}
