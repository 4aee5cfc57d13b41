//! Chande Momentum Oscillator.
//!
//! CMO(n)[i] = 100 * (sum_up - sum_down) / (sum_up + sum_down) over the
//! trailing n bars, where up-moves are close changes >= 0 and down-moves
//! are the absolute value of negative changes. Bar 0 has no change and
//! contributes zero to both sums. Both sums zero (flat window spanning
//! only bar 0, or no movement) is undefined.
//! Warmup: first (n-1) bars are undefined.

use crate::domain::indicator::{IndicatorKind, IndicatorPoint, IndicatorSeries};
use crate::domain::series::PriceSeries;

pub fn calculate_cmo(series: &PriceSeries, window: usize) -> IndicatorSeries {
    if window == 0 {
        return IndicatorSeries::undefined(IndicatorKind::Cmo, window, series);
    }

    let bars = series.bars();
    let mut up_moves = vec![0.0; bars.len()];
    let mut down_moves = vec![0.0; bars.len()];
    for i in 1..bars.len() {
        let change = bars[i].close - bars[i - 1].close;
        if change >= 0.0 {
            up_moves[i] = change;
        } else {
            down_moves[i] = -change;
        }
    }

    let mut points = Vec::with_capacity(bars.len());
    for i in 0..bars.len() {
        let value = if i + 1 >= window {
            let start = i + 1 - window;
            let sum_up: f64 = up_moves[start..=i].iter().sum();
            let sum_down: f64 = down_moves[start..=i].iter().sum();

            if sum_up + sum_down == 0.0 {
                None
            } else {
                Some(100.0 * (sum_up - sum_down) / (sum_up + sum_down))
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
        kind: IndicatorKind::Cmo,
        window,
        points,
    }
}
