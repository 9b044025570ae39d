//! Forecast output types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::metrics::ModelMetrics;

/// Which part of the output a point belongs to
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "segment", rename_all = "snake_case")]
pub enum Segment {
    /// Held-out historical day, carries the real close
    BackTest { actual: f64 },
    /// Day past the end of the history
    Future,
}

/// One day of model output.
///
/// `lower <= predicted <= upper` holds while the projected price stays
/// positive, which a history of positive closes with a moderate trend ensures.
/// A steep enough fall drives the projection below zero and inverts the band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub predicted: f64,
    pub lower: f64,
    pub upper: f64,
    #[serde(flatten)]
    pub segment: Segment,
}

impl ForecastPoint {
    /// Real close for back-tested days, `None` for future days
    pub fn actual(&self) -> Option<f64> {
        match self.segment {
            Segment::BackTest { actual } => Some(actual),
            Segment::Future => None,
        }
    }

    /// True for days past the end of the history
    pub fn is_future(&self) -> bool {
        matches!(self.segment, Segment::Future)
    }

    /// Width of the confidence band
    pub fn band_width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Back-test points followed by future points, plus back-test metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub predictions: Vec<ForecastPoint>,
    pub metrics: ModelMetrics,
}

impl Prediction {
    /// Points that carry an actual close
    pub fn back_test(&self) -> impl Iterator<Item = &ForecastPoint> {
        self.predictions.iter().filter(|p| !p.is_future())
    }

    /// Points past the end of the history
    pub fn future(&self) -> impl Iterator<Item = &ForecastPoint> {
        self.predictions.iter().filter(|p| p.is_future())
    }

    /// First forecast day after the history
    pub fn next_predicted(&self) -> Option<&ForecastPoint> {
        self.predictions.iter().find(|p| p.is_future())
    }

    /// Total number of points in both segments
    pub fn len(&self) -> usize {
        self.predictions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn point(day: u32, segment: Segment) -> ForecastPoint {
        ForecastPoint {
            date: NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
            predicted: 100.0,
            lower: 98.0,
            upper: 102.0,
            segment,
        }
    }

    #[test]
    fn test_segments() {
        let prediction = Prediction {
            predictions: vec![
                point(10, Segment::BackTest { actual: 99.5 }),
                point(11, Segment::BackTest { actual: 100.5 }),
                point(12, Segment::Future),
                point(13, Segment::Future),
            ],
            metrics: ModelMetrics::empty(),
        };

        assert_eq!(prediction.len(), 4);
        assert_eq!(prediction.back_test().count(), 2);
        assert_eq!(prediction.future().count(), 2);
        assert_eq!(prediction.next_predicted().unwrap().date.to_string(), "2024-06-12");
        assert_eq!(prediction.predictions[0].actual(), Some(99.5));
        assert_eq!(prediction.predictions[3].actual(), None);
        assert_eq!(prediction.predictions[3].band_width(), 4.0);
    }

    #[test]
    fn test_point_json_shape() {
        let back = serde_json::to_value(point(10, Segment::BackTest { actual: 99.5 })).unwrap();
        assert_eq!(back["segment"], "back_test");
        assert_eq!(back["actual"], 99.5);

        let future = serde_json::to_value(point(12, Segment::Future)).unwrap();
        assert_eq!(future["segment"], "future");
        assert!(future.get("actual").is_none());
    }

    #[test]
    fn test_point_json_round_trip() {
        let original = point(10, Segment::BackTest { actual: 99.5 });
        let text = serde_json::to_string(&original).unwrap();
        let parsed: ForecastPoint = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, original);
    }
}
