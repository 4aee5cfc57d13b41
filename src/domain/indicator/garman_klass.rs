//! Garman-Klass volatility.
//!
//! Per-bar term 0.5*ln(H/L)^2 + (2*ln2 - 1)*ln(C/O)^2, rolling mean over
//! the window, square-rooted. Uses intrabar range information rather than
//! close-to-close changes only. Warmup: first (n-1) bars are undefined.

use crate::domain::indicator::{IndicatorKind, IndicatorPoint, IndicatorSeries};
use crate::domain::series::PriceSeries;

pub fn calculate_garman_klass(series: &PriceSeries, window: usize) -> IndicatorSeries {
    if window == 0 {
        return IndicatorSeries::undefined(IndicatorKind::GarmanKlass, window, series);
    }

    let constant = 2.0 * std::f64::consts::LN_2 - 1.0;
    let bars = series.bars();
    let terms: Vec<f64> = bars
        .iter()
        .map(|b| {
            let hl = (b.high / b.low).ln();
            let co = (b.close / b.open).ln();
            0.5 * hl * hl + constant * co * co
        })
        .collect();

    let mut points = Vec::with_capacity(bars.len());
    for i in 0..bars.len() {
        let value = if i + 1 >= window {
            let mean = terms[i + 1 - window..=i].iter().sum::<f64>() / window as f64;
            Some(mean.sqrt())
        } else {
            None
        };
        points.push(IndicatorPoint {
            timestamp: bars[i].timestamp,
            value,
        });
    }

    IndicatorSeries {
        kind: IndicatorKind::GarmanKlass,
        window,
        points,
    }
}
