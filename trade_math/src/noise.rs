//! Seeded pseudo-random values.
//!
//! Nothing here is statistically random. Each call site has its own fixed
//! trigonometric formula; the variety is purely visual, and the formulas must
//! stay exactly as they are or every generated series and forecast changes.

/// Which formula to apply to a seed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoiseSite {
    /// Daily draws of the series generator, `frac(sin(seed + 1) * 10000)`,
    /// in `[0, 1)`
    SeriesDraw,
    /// Back-test jitter, `(sin(s) + sin(2.1 s) + sin(3.7 s)) / 3`, in `[-1, 1]`
    BackTest,
    /// Forward-step jitter, `(sin(s) + sin(1.7 s)) / 2`, in `[-1, 1]`
    ForwardStep,
}

/// Evaluate the formula for `site` at `seed`
pub fn deterministic_noise(site: NoiseSite, seed: f64) -> f64 {
    match site {
        NoiseSite::SeriesDraw => {
            let x = (seed + 1.0).sin() * 10000.0;
            x - x.floor()
        }
        NoiseSite::BackTest => (seed.sin() + (seed * 2.1).sin() + (seed * 3.7).sin()) / 3.0,
        NoiseSite::ForwardStep => (seed.sin() + (seed * 1.7).sin()) / 2.0,
    }
}

/// Seed for a ticker: the sum of its character code points
pub fn ticker_seed(ticker: &str) -> u64 {
    ticker.chars().map(|c| c as u64).sum()
}
