use chrono::NaiveDate;
use daily_series::SeriesGenerator;
use forecast_engine::{Forecaster, ModelVariant};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Forecast Engine: Basic Forecasting Example");
    println!("==========================================\n");

    let generator = SeriesGenerator::default();
    let end = NaiveDate::from_ymd_opt(2024, 6, 12).ok_or("invalid date")?;
    let history = generator.generate_until("NVDA", 180, end)?;
    println!(
        "{}: {} trading days up to {}\n",
        generator.display_name("NVDA"),
        history.len(),
        end
    );

    let forecaster = Forecaster::new();
    for variant in ModelVariant::ALL {
        let prediction = forecaster.predict(&history, 5, variant)?;

        println!("{} [{}]", variant.label(), variant.badge());
        print!("{}", prediction.metrics);
        for point in prediction.future() {
            println!(
                "  {}: {:.2} ({:.2} - {:.2})",
                point.date, point.predicted, point.lower, point.upper
            );
        }
        println!();
    }

    Ok(())
}
