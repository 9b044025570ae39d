//! Forecast request parameters and engine settings

use serde::{Deserialize, Serialize};

use crate::error::{ForecastError, Result};
use crate::models::ModelVariant;

/// Horizons offered for quick selection, in trading days
pub const HORIZON_CHOICES: [u32; 5] = [3, 5, 7, 14, 30];

/// Horizon used when none is given
pub const DEFAULT_HORIZON: u32 = 7;

/// What to forecast
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Number of future days to predict
    pub horizon_days: u32,
    /// Parameter profile to use
    pub variant: ModelVariant,
}

impl ForecastConfig {
    /// Create a validated config
    pub fn new(horizon_days: u32, variant: ModelVariant) -> Result<Self> {
        let config = Self {
            horizon_days,
            variant,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the horizon is at least one day
    pub fn validate(&self) -> Result<()> {
        if self.horizon_days == 0 {
            return Err(ForecastError::InvalidParameter(
                "Forecast horizon must be at least 1 day".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            horizon_days: DEFAULT_HORIZON,
            variant: ModelVariant::default(),
        }
    }
}

/// Window sizes used by the forecaster
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecasterSettings {
    /// Number of trailing closes the trend line is fitted on
    pub trend_window: usize,
    /// Upper bound on the back-test segment length
    pub max_test_size: usize,
    /// Share of the history held out for the back-test
    pub test_ratio: f64,
}

impl ForecasterSettings {
    /// Reject settings the forecaster cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.trend_window == 0 {
            return Err(ForecastError::InvalidParameter(
                "Trend window must be at least 1".to_string(),
            ));
        }
        if !(0.0..1.0).contains(&self.test_ratio) {
            return Err(ForecastError::InvalidParameter(format!(
                "Test ratio must be in [0, 1), got {}",
                self.test_ratio
            )));
        }
        Ok(())
    }

    /// Back-test length for a history of `n` points
    pub fn test_size(&self, n: usize) -> usize {
        let by_ratio = (n as f64 * self.test_ratio).floor() as usize;
        self.max_test_size.min(by_ratio)
    }
}

impl Default for ForecasterSettings {
    fn default() -> Self {
        Self {
            trend_window: 30,
            max_test_size: 20,
            test_ratio: 0.2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_config() {
        let config = ForecastConfig::default();
        assert_eq!(config.horizon_days, 7);
        assert_eq!(config.variant, ModelVariant::Linear);
        assert!(HORIZON_CHOICES.contains(&config.horizon_days));
    }

    #[test]
    fn test_zero_horizon_rejected() {
        assert!(ForecastConfig::new(0, ModelVariant::Lstm).is_err());
        assert!(ForecastConfig::new(1, ModelVariant::Lstm).is_ok());
    }

    #[test]
    fn test_config_from_json() {
        let config = ForecastConfig::from_json_str(r#"{"variant": "random_forest"}"#).unwrap();
        assert_eq!(config.horizon_days, DEFAULT_HORIZON);
        assert_eq!(config.variant, ModelVariant::RandomForest);

        assert!(matches!(
            ForecastConfig::from_json_str(r#"{"horizon_days": 0}"#),
            Err(ForecastError::InvalidParameter(_))
        ));
        assert!(matches!(
            ForecastConfig::from_json_str(r#"{"variant": "garch"}"#),
            Err(ForecastError::Json(_))
        ));
    }

    #[rstest]
    #[case(1, 0)]
    #[case(4, 0)]
    #[case(5, 1)]
    #[case(30, 6)]
    #[case(99, 19)]
    #[case(100, 20)]
    #[case(180, 20)]
    fn test_test_size(#[case] n: usize, #[case] expected: usize) {
        assert_eq!(ForecasterSettings::default().test_size(n), expected);
    }

    #[test]
    fn test_settings_validation() {
        let mut settings = ForecasterSettings::default();
        assert!(settings.validate().is_ok());

        settings.test_ratio = 1.0;
        assert!(settings.validate().is_err());

        settings = ForecasterSettings {
            trend_window: 0,
            ..ForecasterSettings::default()
        };
        assert!(settings.validate().is_err());
    }
}
