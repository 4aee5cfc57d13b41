//! Money Flow Index.
//!
//! Volume-weighted RSI variant. Raw money flow = typical_price * volume;
//! a bar's flow counts as positive when the typical price is at or above
//! the previous bar's (change >= 0), negative otherwise. Bar 0 has no
//! change and contributes zero to both sides. The ratio of positive to
//! negative flow sums over the trailing window feeds 100 - 100/(1+ratio).
//!
//! Zero negative flow with nonzero positive flow saturates at 100; both
//! sums zero (all zero-volume bars) is undefined.
//! Warmup: first (n-1) bars are undefined.

use crate::domain::indicator::{IndicatorKind, IndicatorPoint, IndicatorSeries};
use crate::domain::series::PriceSeries;

pub fn calculate_mfi(series: &PriceSeries, window: usize) -> IndicatorSeries {
    if window == 0 {
        return IndicatorSeries::undefined(IndicatorKind::Mfi, window, series);
    }

    let bars = series.bars();
    let typical: Vec<f64> = bars.iter().map(|b| b.typical_price()).collect();

    let mut positive = vec![0.0; bars.len()];
    let mut negative = vec![0.0; bars.len()];
    for i in 1..bars.len() {
        let raw_flow = typical[i] * bars[i].volume;
        if typical[i] - typical[i - 1] >= 0.0 {
            positive[i] = raw_flow;
        } else {
            negative[i] = raw_flow;
        }
    }

    let mut points = Vec::with_capacity(bars.len());
    for i in 0..bars.len() {
        let value = if i + 1 >= window {
            let start = i + 1 - window;
            let positive_sum: f64 = positive[start..=i].iter().sum();
            let negative_sum: f64 = negative[start..=i].iter().sum();

            if positive_sum == 0.0 && negative_sum == 0.0 {
                None
            } else if negative_sum == 0.0 {
                Some(100.0)
            } else {
                let ratio = positive_sum / negative_sum;
                Some(100.0 - 100.0 / (1.0 + ratio))
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
        kind: IndicatorKind::Mfi,
        window,
        points,
    }
}
