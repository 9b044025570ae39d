//! # Forecast Engine
//!
//! Short-horizon price forecasts over daily bar histories.
//!
//! ## Features
//!
//! - Trend estimation by least squares over the trailing closes
//! - Back-test over a held-out tail with MAE, MSE, RMSE, r² and a clamped
//!   accuracy score
//! - Forward predictions with a confidence band that widens with distance
//! - Three model variants that select fixed tuning profiles
//! - CSV export of the combined prediction table
//!
//! Every output is a pure function of its inputs: the same history, horizon
//! and variant always give the same prediction.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use daily_series::SeriesGenerator;
//! use forecast_engine::{Forecaster, ModelVariant};
//!
//! let end = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();
//! let history = SeriesGenerator::default().generate_until("AAPL", 180, end)?;
//!
//! let prediction = Forecaster::new().predict(&history, 7, ModelVariant::Linear)?;
//! assert_eq!(prediction.future().count(), 7);
//! println!("{}", prediction.metrics);
//! # Ok::<(), forecast_engine::ForecastError>(())
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod forecaster;
pub mod metrics;
pub mod models;
pub mod prediction;

// Re-export commonly used types
pub use crate::config::{ForecastConfig, ForecasterSettings, DEFAULT_HORIZON, HORIZON_CHOICES};
pub use crate::error::{ForecastError, Result};
pub use crate::export::{export_csv_file, export_file_name, to_csv_string, write_csv};
pub use crate::forecaster::Forecaster;
pub use crate::metrics::ModelMetrics;
pub use crate::models::{ModelVariant, VariantProfile};
pub use crate::prediction::{ForecastPoint, Prediction, Segment};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
