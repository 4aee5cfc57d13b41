//! Annualized historical (close-to-close) volatility.
//!
//! Rolling sample standard deviation of log returns ln(C[i]/C[i-1]),
//! annualized by sqrt(periods_per_year). The annualization constant is a
//! parameter: 365 for continuous markets, 252 for session-based markets.
//!
//! Bar 0 has no return, so the first defined value sits at bar n (needs n
//! returns); a window of 1 has no sample standard deviation and is
//! undefined everywhere.

use crate::domain::indicator::{IndicatorKind, IndicatorPoint, IndicatorSeries};
use crate::domain::series::PriceSeries;

pub fn calculate_historical_volatility(
    series: &PriceSeries,
    window: usize,
    periods_per_year: u32,
) -> IndicatorSeries {
    let kind = IndicatorKind::HistoricalVolatility { periods_per_year };
    if window <= 1 {
        return IndicatorSeries::undefined(kind, window, series);
    }

    let bars = series.bars();
    let mut returns: Vec<f64> = Vec::with_capacity(bars.len().saturating_sub(1));
    for i in 1..bars.len() {
        returns.push((bars[i].close / bars[i - 1].close).ln());
    }

    let annualizer = (periods_per_year as f64).sqrt();
    let mut points = Vec::with_capacity(bars.len());

    for i in 0..bars.len() {
        // returns[i-window..i] are the n returns ending at bar i
        let value = if i >= window {
            let trailing = &returns[i - window..i];
            let mean = trailing.iter().sum::<f64>() / window as f64;
            let variance = trailing
                .iter()
                .map(|r| {
                    let diff = r - mean;
                    diff * diff
                })
                .sum::<f64>()
                / (window - 1) as f64;
            Some(annualizer * variance.sqrt())
        } else {
            None
        };
        points.push(IndicatorPoint {
            timestamp: bars[i].timestamp,
            value,
        });
    }

    IndicatorSeries {
        kind,
        window,
        points,
    }
}
