//! Model variants and their tuning profiles
//!
//! The three variants share one algorithm. The names are presentation labels;
//! each one only selects a different set of numeric tunables.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ForecastError;

/// Tunables applied by the forecaster
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VariantProfile {
    /// Amplitude of the seeded jitter on every prediction
    pub noise_factor: f64,
    /// Confidence half-width as a fraction of the predicted price
    pub confidence_width: f64,
    /// Multiplier on the fitted slope for forward steps
    pub trend_damp: f64,
}

/// Selectable forecast variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelVariant {
    #[default]
    Linear,
    RandomForest,
    Lstm,
}

impl ModelVariant {
    /// Every variant, in menu order
    pub const ALL: [ModelVariant; 3] = [
        ModelVariant::Linear,
        ModelVariant::RandomForest,
        ModelVariant::Lstm,
    ];

    /// Fixed tunables for this variant
    pub fn profile(self) -> VariantProfile {
        match self {
            ModelVariant::Linear => VariantProfile {
                noise_factor: 0.008,
                confidence_width: 0.03,
                trend_damp: 1.0,
            },
            ModelVariant::RandomForest => VariantProfile {
                noise_factor: 0.012,
                confidence_width: 0.025,
                trend_damp: 0.85,
            },
            ModelVariant::Lstm => VariantProfile {
                noise_factor: 0.006,
                confidence_width: 0.02,
                trend_damp: 0.95,
            },
        }
    }

    /// Machine key: "linear", "random_forest" or "lstm"
    pub fn key(self) -> &'static str {
        match self {
            ModelVariant::Linear => "linear",
            ModelVariant::RandomForest => "random_forest",
            ModelVariant::Lstm => "lstm",
        }
    }

    /// Menu label
    pub fn label(self) -> &'static str {
        match self {
            ModelVariant::Linear => "Linear Regression",
            ModelVariant::RandomForest => "Random Forest",
            ModelVariant::Lstm => "LSTM Neural Net",
        }
    }

    /// Short badge shown next to the label
    pub fn badge(self) -> &'static str {
        match self {
            ModelVariant::Linear => "Fast",
            ModelVariant::RandomForest => "Balanced",
            ModelVariant::Lstm => "Advanced",
        }
    }
}

impl fmt::Display for ModelVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ModelVariant {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        ModelVariant::ALL
            .into_iter()
            .find(|v| v.key() == wanted)
            .ok_or_else(|| {
                ForecastError::InvalidParameter(format!(
                    "Unknown model '{}', expected linear, random_forest or lstm",
                    s
                ))
            })
    }
}
