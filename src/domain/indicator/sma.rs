//! Simple Moving Average.
//!
//! SMA(n)[i] = mean of the trailing n closes ending at bar i.
//! Warmup: first (n-1) bars are undefined.

use crate::domain::indicator::{IndicatorKind, IndicatorPoint, IndicatorSeries};
use crate::domain::series::PriceSeries;

pub fn calculate_sma(series: &PriceSeries, window: usize) -> IndicatorSeries {
    if window == 0 {
        return IndicatorSeries::undefined(IndicatorKind::Sma, window, series);
    }

    let bars = series.bars();
    let mut points = Vec::with_capacity(bars.len());

    for i in 0..bars.len() {
        let value = if i + 1 >= window {
            let trailing = &bars[i + 1 - window..=i];
            Some(trailing.iter().map(|b| b.close).sum::<f64>() / window as f64)
        } else {
            None
        };
        points.push(IndicatorPoint {
            timestamp: bars[i].timestamp,
            value,
        });
    }

    IndicatorSeries {
        kind: IndicatorKind::Sma,
        window,
        points,
    }
}
