//! Trading-calendar helpers and history period presets

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::SeriesError;

/// True for Saturday and Sunday
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Advance `date` day by day until it is a weekday
pub fn roll_to_weekday(mut date: NaiveDate) -> NaiveDate {
    while is_weekend(date) {
        match date.checked_add_days(Days::new(1)) {
            Some(next) => date = next,
            None => break,
        }
    }
    date
}

/// Preset look-back lengths, in calendar days
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HistoryPeriod {
    #[serde(rename = "1M")]
    OneMonth,
    #[serde(rename = "3M")]
    ThreeMonths,
    #[default]
    #[serde(rename = "6M")]
    SixMonths,
    #[serde(rename = "1Y")]
    OneYear,
}

impl HistoryPeriod {
    /// All presets, shortest first
    pub const ALL: [HistoryPeriod; 4] = [
        HistoryPeriod::OneMonth,
        HistoryPeriod::ThreeMonths,
        HistoryPeriod::SixMonths,
        HistoryPeriod::OneYear,
    ];

    /// Calendar days covered by the preset
    pub fn days(self) -> u32 {
        match self {
            HistoryPeriod::OneMonth => 30,
            HistoryPeriod::ThreeMonths => 90,
            HistoryPeriod::SixMonths => 180,
            HistoryPeriod::OneYear => 365,
        }
    }

    /// Short label such as "6M"
    pub fn label(self) -> &'static str {
        match self {
            HistoryPeriod::OneMonth => "1M",
            HistoryPeriod::ThreeMonths => "3M",
            HistoryPeriod::SixMonths => "6M",
            HistoryPeriod::OneYear => "1Y",
        }
    }
}

impl fmt::Display for HistoryPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for HistoryPeriod {
    type Err = SeriesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HistoryPeriod::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                SeriesError::InvalidParameter(format!(
                    "Unknown history period '{}', expected one of 1M, 3M, 6M, 1Y",
                    s
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case(date(2024, 3, 16), true)] // Saturday
    #[case(date(2024, 3, 17), true)] // Sunday
    #[case(date(2024, 3, 18), false)] // Monday
    #[case(date(2024, 3, 15), false)] // Friday
    fn test_is_weekend(#[case] day: NaiveDate, #[case] expected: bool) {
        assert_eq!(is_weekend(day), expected);
    }

    #[rstest]
    #[case(date(2024, 3, 16), date(2024, 3, 18))]
    #[case(date(2024, 3, 17), date(2024, 3, 18))]
    #[case(date(2024, 3, 19), date(2024, 3, 19))]
    fn test_roll_to_weekday(#[case] from: NaiveDate, #[case] expected: NaiveDate) {
        assert_eq!(roll_to_weekday(from), expected);
    }

    #[rstest]
    #[case("1M", 30)]
    #[case("3m", 90)]
    #[case("6M", 180)]
    #[case(" 1y ", 365)]
    fn test_period_parse(#[case] text: &str, #[case] days: u32) {
        let period: HistoryPeriod = text.parse().unwrap();
        assert_eq!(period.days(), days);
    }

    #[test]
    fn test_period_defaults_and_errors() {
        assert_eq!(HistoryPeriod::default(), HistoryPeriod::SixMonths);
        assert!("2W".parse::<HistoryPeriod>().is_err());
        assert_eq!(HistoryPeriod::OneYear.to_string(), "1Y");
    }
}
