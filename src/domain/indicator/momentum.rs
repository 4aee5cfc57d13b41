//! Momentum.
//!
//! MOMENTUM(n)[i] = C[i] - C[i-(n-1)], the absolute price change over the
//! n-bar rolling window. Warmup: first (n-1) bars are undefined.

use crate::domain::indicator::{IndicatorKind, IndicatorPoint, IndicatorSeries};
use crate::domain::series::PriceSeries;

pub fn calculate_momentum(series: &PriceSeries, window: usize) -> IndicatorSeries {
    if window == 0 {
        return IndicatorSeries::undefined(IndicatorKind::Momentum, window, series);
    }

    let bars = series.bars();
    let shift = window - 1;
    let mut points = Vec::with_capacity(bars.len());

    for i in 0..bars.len() {
        let value = if i >= shift {
            Some(bars[i].close - bars[i - shift].close)
        } else {
            None
        };
        points.push(IndicatorPoint {
            timestamp: bars[i].timestamp,
            value,
        });
    }

    IndicatorSeries {
        kind: IndicatorKind::Momentum,
        window,
        points,
    }
}
