//! Per-symbol generation parameters

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::Result;

/// Symbols offered for quick selection
pub const POPULAR_TICKERS: [&str; 8] = [
    "AAPL", "TSLA", "GOOGL", "MSFT", "AMZN", "NVDA", "META", "NFLX",
];

const FALLBACK_BASE_PRICE: f64 = 100.0;
const FALLBACK_VOLATILITY: f64 = 0.02;
const FALLBACK_TREND_BIAS: f64 = 0.0002;

/// Price dynamics for one symbol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerProfile {
    /// Starting price before the first daily change is applied
    pub base_price: f64,
    /// Daily volatility as a fraction of price
    pub volatility: f64,
    /// Constant drift added to every daily change
    pub trend_bias: f64,
    /// Human readable company name
    pub display_name: String,
}

impl TickerProfile {
    /// Create a new profile
    pub fn new(base_price: f64, volatility: f64, trend_bias: f64, display_name: &str) -> Self {
        Self {
            base_price,
            volatility,
            trend_bias,
            display_name: display_name.to_string(),
        }
    }

    /// Generic dynamics for a symbol the table does not know
    pub fn fallback(ticker: &str) -> Self {
        Self::new(
            FALLBACK_BASE_PRICE,
            FALLBACK_VOLATILITY,
            FALLBACK_TREND_BIAS,
            ticker,
        )
    }
}

/// Immutable symbol → profile lookup. Keys are stored upper case.
#[derive(Debug, Clone, PartialEq)]
pub struct TickerTable {
    profiles: HashMap<String, TickerProfile>,
}

impl TickerTable {
    /// Build a table from `(symbol, profile)` pairs
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, TickerProfile)>,
        S: AsRef<str>,
    {
        let profiles = entries
            .into_iter()
            .map(|(symbol, profile)| (symbol.as_ref().to_uppercase(), profile))
            .collect();

        Self { profiles }
    }

    /// Parse a JSON object of symbol → profile
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: HashMap<String, TickerProfile> = serde_json::from_str(json)?;
        let table = Self::new(entries);
        if table.is_empty() {
            warn!("ticker table is empty, every symbol will use fallback dynamics");
        }
        Ok(table)
    }

    /// Load a JSON ticker table from disk
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Case-insensitive lookup
    pub fn get(&self, ticker: &str) -> Option<&TickerProfile> {
        self.profiles.get(&ticker.to_uppercase())
    }

    /// Profile for `ticker`, or generic dynamics named after the ticker as given.
    /// Never fails.
    pub fn resolve(&self, ticker: &str) -> TickerProfile {
        self.get(ticker)
            .cloned()
            .unwrap_or_else(|| TickerProfile::fallback(ticker))
    }

    /// Company name, or the upper-cased ticker when unknown
    pub fn display_name(&self, ticker: &str) -> String {
        match self.get(ticker) {
            Some(profile) => profile.display_name.clone(),
            None => ticker.to_uppercase(),
        }
    }

    /// Number of known symbols
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// True if no symbol is known
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Default for TickerTable {
    fn default() -> Self {
        Self::new([
            ("AAPL", TickerProfile::new(175.0, 0.018, 0.0003, "Apple Inc.")),
            ("TSLA", TickerProfile::new(240.0, 0.045, 0.0005, "Tesla, Inc.")),
            ("GOOGL", TickerProfile::new(140.0, 0.022, 0.0002, "Alphabet Inc.")),
            ("MSFT", TickerProfile::new(380.0, 0.016, 0.0004, "Microsoft Corp.")),
            ("AMZN", TickerProfile::new(185.0, 0.025, 0.0003, "Amazon.com, Inc.")),
            ("NVDA", TickerProfile::new(850.0, 0.038, 0.0008, "NVIDIA Corp.")),
            ("META", TickerProfile::new(505.0, 0.028, 0.0006, "Meta Platforms")),
            ("INFY", TickerProfile::new(18.0, 0.02, 0.0002, "Infosys Ltd.")),
            ("NFLX", TickerProfile::new(625.0, 0.032, 0.0004, "Netflix, Inc.")),
            ("SPY", TickerProfile::new(520.0, 0.012, 0.0002, "SPDR S&P 500 ETF")),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builtin_table() {
        let table = TickerTable::default();
        assert_eq!(table.len(), 10);

        let aapl = table.resolve("aapl");
        assert_eq!(aapl.base_price, 175.0);
        assert_eq!(aapl.volatility, 0.018);
        assert_eq!(aapl.display_name, "Apple Inc.");
    }

    #[test]
    fn test_popular_tickers_are_known() {
        let table = TickerTable::default();
        for symbol in POPULAR_TICKERS {
            assert!(table.get(symbol).is_some(), "{symbol} missing");
        }
    }

    #[test]
    fn test_unknown_ticker_falls_back() {
        let table = TickerTable::default();
        let profile = table.resolve("zzTop");

        assert_eq!(profile, TickerProfile::new(100.0, 0.02, 0.0002, "zzTop"));
        assert_eq!(table.display_name("zzTop"), "ZZTOP");
        assert_eq!(table.display_name("nvda"), "NVIDIA Corp.");
    }

    #[test]
    fn test_from_json_str_uppercases_keys() {
        let json = r#"{
            "abc": {
                "base_price": 10.0,
                "volatility": 0.05,
                "trend_bias": 0.001,
                "display_name": "ABC Corp"
            }
        }"#;
        let table = TickerTable::from_json_str(json).unwrap();

        assert_eq!(table.len(), 1);
        assert!(table.get("ABC").is_some());
        assert_eq!(table.resolve("Abc").base_price, 10.0);
    }

    #[test]
    fn test_from_json_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{"XYZ": {{"base_price": 55.5, "volatility": 0.01, "trend_bias": 0.0,
                "display_name": "Xyz"}}}}"#
        )
        .unwrap();

        let table = TickerTable::from_json_file(file.path()).unwrap();
        assert_eq!(table.display_name("xyz"), "Xyz");
    }

    #[test]
    fn test_empty_json_table() {
        let table = TickerTable::from_json_str("{}").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.resolve("AAPL").base_price, 100.0);
    }

    #[test]
    fn test_bad_json_is_error() {
        assert!(matches!(
            TickerTable::from_json_str("[1, 2]"),
            Err(crate::SeriesError::Json(_))
        ));
        assert!(matches!(
            TickerTable::from_json_file("/nonexistent/tickers.json"),
            Err(crate::SeriesError::Io(_))
        ));
    }
}
