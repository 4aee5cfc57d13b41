//! Relative Strength Index with Wilder's smoothing.
//!
//! Bar-over-bar close changes split into gains and losses. Seed average
//! gain/loss is the simple mean of the first n changes, making bar n the
//! recurrence anchor (the first defined value); thereafter
//! avg = (prev_avg*(n-1) + current)/n.
//!
//! RSI = 100 - 100/(1 + avg_gain/avg_loss); when avg_loss == 0 the value
//! is 100, never a division error.

use crate::domain::indicator::{IndicatorKind, IndicatorPoint, IndicatorSeries};
use crate::domain::series::PriceSeries;

pub fn calculate_rsi(series: &PriceSeries, window: usize) -> IndicatorSeries {
    if window == 0 || series.len() < 2 {
        return IndicatorSeries::undefined(IndicatorKind::Rsi, window, series);
    }

    let bars = series.bars();
    let mut gains: Vec<f64> = Vec::with_capacity(bars.len() - 1);
    let mut losses: Vec<f64> = Vec::with_capacity(bars.len() - 1);
    for i in 1..bars.len() {
        let change = bars[i].close - bars[i - 1].close;
        gains.push(if change > 0.0 { change } else { 0.0 });
        losses.push(if change < 0.0 { -change } else { 0.0 });
    }

    let mut points = Vec::with_capacity(bars.len());
    points.push(IndicatorPoint {
        timestamp: bars[0].timestamp,
        value: None,
    });

    let mut avg_gain = 0.0;
    let mut avg_loss = 0.0;

    for (i, bar) in bars.iter().enumerate().skip(1) {
        let change_idx = i - 1;

        let value = if change_idx < window - 1 {
            None
        } else if change_idx == window - 1 {
            avg_gain = gains[..window].iter().sum::<f64>() / window as f64;
            avg_loss = losses[..window].iter().sum::<f64>() / window as f64;
            Some(rsi_from_averages(avg_gain, avg_loss))
        } else {
            avg_gain = (avg_gain * (window - 1) as f64 + gains[change_idx]) / window as f64;
            avg_loss = (avg_loss * (window - 1) as f64 + losses[change_idx]) / window as f64;
            Some(rsi_from_averages(avg_gain, avg_loss))
        };
        points.push(IndicatorPoint {
            timestamp: bar.timestamp,
            value,
        });
    }

    IndicatorSeries {
        kind: IndicatorKind::Rsi,
        window,
        points,
    }
}

fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        100.0
    } else {
        100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::indicator::test_support::series_from_closes;

    #[test]
    fn rsi_empty_series() {
        let series = series_from_closes(&[]);
        let rsi = calculate_rsi(&series, 14);
        assert_eq!(rsi.len(), 0);
    }

    #[test]
    fn rsi_single_bar() {
        let series = series_from_closes(&[100.0]);
        let rsi = calculate_rsi(&series, 14);
        assert_eq!(rsi.len(), 1);
        assert!(rsi.value(0).is_none());
    }

    #[test]
    fn rsi_anchor_at_window() {
        // needs `window` changes: first defined value at bar index `window`
        let closes: Vec<f64> = (0..15).map(|i| 100.0 + (i % 5) as f64).collect();
        let series = series_from_closes(&closes);
        let rsi = calculate_rsi(&series, 14);

        assert_eq!(rsi.len(), 15);
        for i in 0..14 {
            assert!(rsi.value(i).is_none(), "bar {} should be undefined", i);
        }
        assert!(rsi.value(14).is_some());
    }

    #[test]
    fn rsi_all_gains_is_100() {
        let closes: Vec<f64> = (0..15).map(|i| 100.0 + i as f64).collect();
        let series = series_from_closes(&closes);
        let rsi = calculate_rsi(&series, 14);

        assert!((rsi.value(14).unwrap() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rsi_stays_100_while_losses_remain_zero() {
        // seeded gains [1,1,1,1], losses [0,0,0,0] over window 4
        let series = series_from_closes(&[100.0, 101.0, 102.0, 103.0, 104.0, 105.0, 106.0]);
        let rsi = calculate_rsi(&series, 4);

        assert!((rsi.value(4).unwrap() - 100.0).abs() < f64::EPSILON);
        assert!((rsi.value(5).unwrap() - 100.0).abs() < f64::EPSILON);
        assert!((rsi.value(6).unwrap() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rsi_all_losses_is_0() {
        let closes: Vec<f64> = (0..15).map(|i| 100.0 - i as f64 / 2.0).collect();
        let series = series_from_closes(&closes);
        let rsi = calculate_rsi(&series, 14);

        assert!((rsi.value(14).unwrap() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rsi_in_range() {
        let closes: Vec<f64> = (0..30)
            .map(|i| 100.0 + ((i % 7) as f64 - 3.0) * 2.0)
            .collect();
        let series = series_from_closes(&closes);
        let rsi = calculate_rsi(&series, 14);

        for point in &rsi.points {
            if let Some(v) = point.value {
                assert!((0.0..=100.0).contains(&v), "RSI {} out of range", v);
            }
        }
    }

    #[test]
    fn rsi_wilder_recurrence() {
        // window 3: seed over changes [+2, -1, +3], then one smoothed step
        let series = series_from_closes(&[100.0, 102.0, 101.0, 104.0, 103.0]);
        let rsi = calculate_rsi(&series, 3);

        let seed_gain = (2.0 + 0.0 + 3.0) / 3.0;
        let seed_loss = (0.0 + 1.0 + 0.0) / 3.0;
        let expected_seed = 100.0 - 100.0 / (1.0 + seed_gain / seed_loss);
        assert!((rsi.value(3).unwrap() - expected_seed).abs() < 1e-9);

        let avg_gain = (seed_gain * 2.0 + 0.0) / 3.0;
        let avg_loss = (seed_loss * 2.0 + 1.0) / 3.0;
        let expected = 100.0 - 100.0 / (1.0 + avg_gain / avg_loss);
        assert!((rsi.value(4).unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn rsi_window_zero_all_undefined() {
        let series = series_from_closes(&[100.0, 101.0]);
        let rsi = calculate_rsi(&series, 0);
        assert_eq!(rsi.len(), 2);
        assert!(rsi.points.iter().all(|p| p.value.is_none()));
    }
}
