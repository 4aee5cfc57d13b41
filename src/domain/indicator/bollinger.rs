//! Bollinger band width.
//!
//! Rolling mean `mid` and rolling sample standard deviation (divides by
//! n-1) over n closes; top/bot = mid ± mult*std; width = (top-bot)/mid.
//! Warmup: first (n-1) bars are undefined; a window of 1 has no sample
//! standard deviation and is undefined everywhere.
//!
//! The multiplier is carried as an integer scaled by 100 so the kind stays
//! hashable (200 => 2.0 standard deviations).

use crate::domain::indicator::{IndicatorKind, IndicatorPoint, IndicatorSeries};
use crate::domain::series::PriceSeries;

pub fn calculate_bollinger_width(
    series: &PriceSeries,
    window: usize,
    stddev_mult_x100: u32,
) -> IndicatorSeries {
    let kind = IndicatorKind::BollingerWidth { stddev_mult_x100 };
    if window <= 1 {
        return IndicatorSeries::undefined(kind, window, series);
    }

    let bars = series.bars();
    let mult = stddev_mult_x100 as f64 / 100.0;
    let mut points = Vec::with_capacity(bars.len());

    for i in 0..bars.len() {
        let value = if i + 1 >= window {
            let trailing = &bars[i + 1 - window..=i];
            let mid = trailing.iter().map(|b| b.close).sum::<f64>() / window as f64;
            let variance = trailing
                .iter()
                .map(|b| {
                    let diff = b.close - mid;
                    diff * diff
                })
                .sum::<f64>()
                / (window - 1) as f64;
            let stddev = variance.sqrt();

            // (top - bot) / mid with top/bot = mid ± mult*stddev
            Some(2.0 * mult * stddev / mid)
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
