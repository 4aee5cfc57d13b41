//! Commodity Channel Index.
//!
//! CCI(n)[i] = (TP[i] - SMA(TP, n)[i]) / (0.015 * mean_dev), where TP is
//! the typical price and mean_dev is the mean absolute deviation of the
//! trailing n typical prices from their SMA. A flat window has zero mean
//! deviation; the value is undefined there, never an arithmetic error.
//! Warmup: first (n-1) bars are undefined.

use crate::domain::indicator::{IndicatorKind, IndicatorPoint, IndicatorSeries};
use crate::domain::series::PriceSeries;

const LAMBERT_CONSTANT: f64 = 0.015;

pub fn calculate_cci(series: &PriceSeries, window: usize) -> IndicatorSeries {
    if window == 0 {
        return IndicatorSeries::undefined(IndicatorKind::Cci, window, series);
    }

    let bars = series.bars();
    let typical: Vec<f64> = bars.iter().map(|b| b.typical_price()).collect();
    let mut points = Vec::with_capacity(bars.len());

    for i in 0..bars.len() {
        let value = if i + 1 >= window {
            let trailing = &typical[i + 1 - window..=i];
            let sma = trailing.iter().sum::<f64>() / window as f64;
            let mean_dev =
                trailing.iter().map(|tp| (sma - tp).abs()).sum::<f64>() / window as f64;

            if mean_dev == 0.0 {
                None
            } else {
                Some((typical[i] - sma) / (LAMBERT_CONSTANT * mean_dev))
            }
        } else {
            None
        };
        points.push(IndicatorPoint {
            timestamp: bars[i].timestamp,
            value,
        });
    }

    IndicatorSeries {
        kind: IndicatorKind::Cci,
        window,
        points,
    }
}
