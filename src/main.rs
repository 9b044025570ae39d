//! # Tickercast CLI
//!
//! Generates a synthetic history for a ticker, runs the forecaster over it and
//! prints the quote, accuracy metrics and prediction table.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use serde::Serialize;
use tracing::{info, Level};

use tickercast::{
    DailyBar, ForecastConfig, Forecaster, HistoryPeriod, ModelVariant, Prediction, QuoteSummary,
    SeriesGenerator, TickerTable,
};

/// Synthetic stock history and short-horizon forecast
#[derive(Parser, Debug)]
#[command(name = "tickercast")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Ticker symbol
    #[arg(short, long, default_value = "AAPL")]
    ticker: String,

    /// History period preset (1M, 3M, 6M, 1Y)
    #[arg(short, long, default_value = "6M")]
    period: HistoryPeriod,

    /// History length in calendar days, overrides --period
    #[arg(short, long)]
    days: Option<u32>,

    /// Number of future trading days to forecast
    #[arg(short = 'H', long, default_value_t = forecast_engine::DEFAULT_HORIZON)]
    horizon: u32,

    /// Model variant (linear, random_forest, lstm)
    #[arg(short, long, default_value = "linear")]
    model: ModelVariant,

    /// JSON ticker table replacing the built-in one
    #[arg(long)]
    tickers_file: Option<PathBuf>,

    /// Last history date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    as_of: Option<NaiveDate>,

    /// Write the prediction table as CSV to this path
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print a JSON report instead of tables
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    ticker: String,
    name: String,
    as_of: NaiveDate,
    trading_days: usize,
    summary: Option<QuoteSummary>,
    config: ForecastConfig,
    prediction: &'a Prediction,
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let tickers = match &cli.tickers_file {
        Some(path) => {
            let table = TickerTable::from_json_file(path)
                .with_context(|| format!("loading ticker table from {}", path.display()))?;
            info!(path = %path.display(), symbols = table.len(), "loaded ticker table");
            table
        }
        None => TickerTable::default(),
    };
    let generator = SeriesGenerator::new(tickers);

    let ticker = cli.ticker.trim().to_uppercase();
    let days = cli.days.unwrap_or_else(|| cli.period.days());
    let as_of = cli.as_of.unwrap_or_else(|| Local::now().date_naive());
    let config = ForecastConfig::new(cli.horizon, cli.model)?;

    let bars = generator.generate_until(&ticker, days, as_of)?;
    if bars.is_empty() {
        anyhow::bail!("no trading days in the {days} days up to {as_of}");
    }
    info!(ticker = %ticker, points = bars.len(), "history ready");

    let prediction = Forecaster::new().predict_with(&bars, &config)?;

    if let Some(path) = &cli.csv {
        forecast_engine::export_csv_file(&prediction, path)
            .with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), "prediction table exported");
    }

    let name = generator.display_name(&ticker);
    if cli.json {
        let report = Report {
            ticker,
            name,
            as_of,
            trading_days: bars.len(),
            summary: QuoteSummary::from_bars(&bars),
            config,
            prediction: &prediction,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&ticker, &name, &bars, &config, &prediction);
    }

    Ok(())
}

fn print_report(
    ticker: &str,
    name: &str,
    bars: &[DailyBar],
    config: &ForecastConfig,
    prediction: &Prediction,
) {
    println!("{name} ({ticker})");
    println!("{}", "=".repeat(name.len() + ticker.len() + 3));

    if let Some(summary) = QuoteSummary::from_bars(bars) {
        let arrow = if summary.is_positive() { "▲" } else { "▼" };
        println!(
            "Last close: ${:.2}  {arrow} {:+.2} ({:+.2}%)",
            summary.last_close, summary.change, summary.change_pct
        );
    }
    println!(
        "{} trading days · {} [{}] · {}-day horizon\n",
        bars.len(),
        config.variant.label(),
        config.variant.badge(),
        config.horizon_days
    );

    print!("{}", prediction.metrics);
    if !prediction.metrics.accuracy_is_good() {
        println!("  (accuracy below 90%)");
    }
    println!();

    if let Some(next) = prediction.next_predicted() {
        println!("Next predicted close: ${:.2} on {}\n", next.predicted, next.date);
    }

    println!(
        "{:<12}{:>12}{:>12}{:>12}{:>12}",
        "Date", "Predicted", "Lower", "Upper", "Actual"
    );
    for point in &prediction.predictions {
        let actual = point
            .actual()
            .map(|a| format!("{a:.2}"))
            .unwrap_or_else(|| "N/A".to_string());
        println!(
            "{:<12}{:>12.2}{:>12.2}{:>12.2}{:>12}",
            point.date.to_string(),
            point.predicted,
            point.lower,
            point.upper,
            actual
        );
    }
}
