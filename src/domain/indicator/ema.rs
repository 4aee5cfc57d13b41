//! Exponential Moving Average.
//!
//! k = 2/(n+1); seed with the SMA of the first n closes at bar n-1 (the
//! recurrence anchor), then EMA[i] = C[i]*k + EMA[i-1]*(1-k).
//! Warmup: first (n-1) bars are undefined.

use crate::domain::indicator::{IndicatorKind, IndicatorPoint, IndicatorSeries};
use crate::domain::series::PriceSeries;

pub fn calculate_ema(series: &PriceSeries, window: usize) -> IndicatorSeries {
    if window == 0 {
        return IndicatorSeries::undefined(IndicatorKind::Ema, window, series);
    }

    let bars = series.bars();
    let mut points = Vec::with_capacity(bars.len());
    let k = 2.0 / (window as f64 + 1.0);
    let mut ema = 0.0;
    let mut sum = 0.0;

    for (i, bar) in bars.iter().enumerate() {
        let value = if i < window - 1 {
            sum += bar.close;
            None
        } else if i == window - 1 {
            sum += bar.close;
            ema = sum / window as f64;
            Some(ema)
        } else {
            ema = bar.close * k + ema * (1.0 - k);
            Some(ema)
        };
        points.push(IndicatorPoint {
            timestamp: bar.timestamp,
            value,
        });
    }

    IndicatorSeries {
        kind: IndicatorKind::Ema,
        window,
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::indicator::test_support::series_from_closes;

    #[test]
    fn ema_warmup() {
        let series = series_from_closes(&[10.0, 20.0, 30.0, 40.0, 50.0]);
        let ema = calculate_ema(&series, 3);

        assert!(ema.value(0).is_none());
        assert!(ema.value(1).is_none());
        assert!(ema.value(2).is_some());
        assert!(ema.value(3).is_some());
        assert!(ema.value(4).is_some());
    }

    #[test]
    fn ema_seed_is_sma() {
        let series = series_from_closes(&[10.0, 20.0, 30.0]);
        let ema = calculate_ema(&series, 3);

        let expected_sma = (10.0 + 20.0 + 30.0) / 3.0;
        assert!((ema.value(2).unwrap() - expected_sma).abs() < f64::EPSILON);
    }

    #[test]
    fn ema_recursive_calculation() {
        let series = series_from_closes(&[10.0, 20.0, 30.0, 40.0, 50.0]);
        let ema = calculate_ema(&series, 3);

        let k = 2.0 / 4.0;
        let sma = (10.0 + 20.0 + 30.0) / 3.0;
        let ema_3 = 40.0 * k + sma * (1.0 - k);
        let ema_4 = 50.0 * k + ema_3 * (1.0 - k);

        assert!((ema.value(3).unwrap() - ema_3).abs() < f64::EPSILON);
        assert!((ema.value(4).unwrap() - ema_4).abs() < f64::EPSILON);
    }

    #[test]
    fn ema_window_one_tracks_close() {
        let series = series_from_closes(&[10.0, 20.0, 30.0]);
        let ema = calculate_ema(&series, 1);

        assert!((ema.value(0).unwrap() - 10.0).abs() < f64::EPSILON);
        assert!((ema.value(1).unwrap() - 20.0).abs() < f64::EPSILON);
        assert!((ema.value(2).unwrap() - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn ema_flat_series_stays_flat() {
        let series = series_from_closes(&[100.0, 100.0, 100.0, 100.0, 100.0]);
        let ema = calculate_ema(&series, 3);

        for i in 2..5 {
            assert!((ema.value(i).unwrap() - 100.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn ema_window_zero_all_undefined() {
        let series = series_from_closes(&[10.0, 20.0]);
        let ema = calculate_ema(&series, 0);
        assert_eq!(ema.len(), 2);
        assert!(ema.points.iter().all(|p| p.value.is_none()));
    }
}
