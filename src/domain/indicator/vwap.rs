//! Rolling Volume Weighted Average Price.
//!
//! VWAP(n)[i] = sum(TP*V over trailing n bars) / sum(V over trailing n
//! bars), with TP the typical price. A window of all zero-volume bars has
//! no weighted average and is undefined.
//! Warmup: first (n-1) bars are undefined.

use crate::domain::indicator::{IndicatorKind, IndicatorPoint, IndicatorSeries};
use crate::domain::series::PriceSeries;

pub fn calculate_vwap(series: &PriceSeries, window: usize) -> IndicatorSeries {
    if window == 0 {
        return IndicatorSeries::undefined(IndicatorKind::Vwap, window, series);
    }

    let bars = series.bars();
    let mut points = Vec::with_capacity(bars.len());

    for i in 0..bars.len() {
        let value = if i + 1 >= window {
            let trailing = &bars[i + 1 - window..=i];
            let weighted_sum: f64 = trailing
                .iter()
                .map(|b| b.typical_price() * b.volume)
                .sum();
            let volume_sum: f64 = trailing.iter().map(|b| b.volume).sum();

            if volume_sum == 0.0 {
                None
            } else {
                Some(weighted_sum / volume_sum)
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
        kind: IndicatorKind::Vwap,
        window,
        points,
    }
}
