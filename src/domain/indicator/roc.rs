//! Rate of Change.
//!
//! ROC(n)[i] = (C[i] - C[i-(n-1)]) / C[i-(n-1)], a fraction, measured
//! against the close n-1 bars prior so that the change spans exactly the
//! n-bar rolling window. Warmup: first (n-1) bars are undefined.

use crate::domain::indicator::{IndicatorKind, IndicatorPoint, IndicatorSeries};
use crate::domain::series::PriceSeries;

pub fn calculate_roc(series: &PriceSeries, window: usize) -> IndicatorSeries {
    if window == 0 {
        return IndicatorSeries::undefined(IndicatorKind::Roc, window, series);
    }

    let bars = series.bars();
    let shift = window - 1;
    let mut points = Vec::with_capacity(bars.len());

    for i in 0..bars.len() {
        let value = if i >= shift {
            let reference = bars[i - shift].close;
            Some((bars[i].close - reference) / reference)
        } else {
            None
        };
        points.push(IndicatorPoint {
            timestamp: bars[i].timestamp,
            value,
        });
    }

    IndicatorSeries {
        kind: IndicatorKind::Roc,
        window,
        points,
    }
}
