//! Accuracy metrics over the back-test segment

use serde::{Deserialize, Serialize};
use std::fmt;
use trade_math::round_to;

use crate::error::{ForecastError, Result};

/// Lowest reported accuracy
pub const ACCURACY_FLOOR: f64 = 85.0;
/// Highest reported accuracy
pub const ACCURACY_CEILING: f64 = 99.0;

/// Back-test accuracy.
///
/// `accuracy` is a display score clamped to `[85, 99]`, not a calibrated
/// statistic. Consumers treat anything at or below 90 as weak.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelMetrics {
    /// Mean Absolute Error
    pub mae: f64,
    /// Mean Squared Error
    pub mse: f64,
    /// Root Mean Squared Error
    pub rmse: f64,
    /// Coefficient of determination, clamped at 0
    pub r2: f64,
    /// Clamped accuracy score in percent
    pub accuracy: f64,
    /// Number of back-tested points the metrics were computed on
    pub samples: usize,
}

impl ModelMetrics {
    /// Metrics for an empty back-test: zero errors, zero fit, floor accuracy
    pub fn empty() -> Self {
        Self {
            mae: 0.0,
            mse: 0.0,
            rmse: 0.0,
            r2: 0.0,
            accuracy: ACCURACY_FLOOR,
            samples: 0,
        }
    }

    /// Score `predicted` against `actual`.
    ///
    /// `baseline_mean` is the mean of the regression window, used both as the
    /// reference level for r² and to scale MAE into the accuracy score.
    /// Results are rounded: errors to 2 places, r² to 4, accuracy to 1.
    pub fn evaluate(predicted: &[f64], actual: &[f64], baseline_mean: f64) -> Result<Self> {
        if predicted.len() != actual.len() {
            return Err(ForecastError::DataError(format!(
                "Predicted length ({}) doesn't match actual length ({})",
                predicted.len(),
                actual.len()
            )));
        }
        if predicted.is_empty() {
            return Ok(Self::empty());
        }

        let n = predicted.len() as f64;
        let errors: Vec<f64> = predicted
            .iter()
            .zip(actual)
            .map(|(p, a)| p - a)
            .collect();

        let mae = errors.iter().map(|e| e.abs()).sum::<f64>() / n;
        let ss_res = errors.iter().map(|e| e.powi(2)).sum::<f64>();
        let mse = ss_res / n;
        let rmse = mse.sqrt();

        let ss_tot = actual
            .iter()
            .map(|a| (a - baseline_mean).powi(2))
            .sum::<f64>();
        let divisor = if ss_tot != 0.0 { ss_tot } else { 1.0 };
        let r2 = (1.0 - ss_res / divisor).max(0.0);

        let accuracy = if baseline_mean > 0.0 {
            (100.0 - mae / baseline_mean * 100.0).clamp(ACCURACY_FLOOR, ACCURACY_CEILING)
        } else {
            ACCURACY_FLOOR
        };

        Ok(Self {
            mae: round_to(mae, 2),
            mse: round_to(mse, 2),
            rmse: round_to(rmse, 2),
            r2: round_to(r2, 4),
            accuracy: round_to(accuracy, 1),
            samples: predicted.len(),
        })
    }

    /// Accuracy strong enough to highlight
    pub fn accuracy_is_good(&self) -> bool {
        self.accuracy > 90.0
    }

    /// Fit strong enough to highlight
    pub fn r2_is_good(&self) -> bool {
        self.r2 > 0.8
    }
}

impl fmt::Display for ModelMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Model Performance Metrics ({} back-tested days):", self.samples)?;
        writeln!(f, "  Accuracy: {:.1}%", self.accuracy)?;
        writeln!(f, "  R²:       {:.4}", self.r2)?;
        writeln!(f, "  MAE:      ${:.2}", self.mae)?;
        writeln!(f, "  MSE:      {:.2}", self.mse)?;
        writeln!(f, "  RMSE:     ${:.2}", self.rmse)?;
        Ok(())
    }
}
