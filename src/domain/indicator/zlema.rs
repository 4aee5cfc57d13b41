//! Zero-Lag Exponential Moving Average.
//!
//! The EMA recurrence applied to the de-lagged price
//! D[i] = 2*C[i] - C[i-lag], where lag = (n-1)/2 (integer division).
//! Seed with the SMA of the first n de-lagged prices; the recurrence
//! anchor is therefore bar lag + n - 1.

use crate::domain::indicator::{IndicatorKind, IndicatorPoint, IndicatorSeries};
use crate::domain::series::PriceSeries;

pub fn calculate_zlema(series: &PriceSeries, window: usize) -> IndicatorSeries {
    if window == 0 {
        return IndicatorSeries::undefined(IndicatorKind::Zlema, window, series);
    }

    let bars = series.bars();
    let lag = (window - 1) / 2;
    let anchor = lag + window - 1;
    let k = 2.0 / (window as f64 + 1.0);

    let mut points = Vec::with_capacity(bars.len());
    let mut zlema = 0.0;
    let mut sum = 0.0;

    for (i, bar) in bars.iter().enumerate() {
        let value = if i < lag {
            None
        } else {
            let delagged = 2.0 * bar.close - bars[i - lag].close;
            if i < anchor {
                sum += delagged;
                None
            } else if i == anchor {
                sum += delagged;
                zlema = sum / window as f64;
                Some(zlema)
            } else {
                zlema = delagged * k + zlema * (1.0 - k);
                Some(zlema)
            }
        };
        points.push(IndicatorPoint {
            timestamp: bar.timestamp,
            value,
        });
    }

    IndicatorSeries {
        kind: IndicatorKind::Zlema,
        window,
        points,
    }
}
