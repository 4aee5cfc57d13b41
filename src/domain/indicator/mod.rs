//! Technical indicator library.
//!
//! Every indicator is a pure function from a [`PriceSeries`] and a rolling
//! window to an [`IndicatorSeries`] of equal length. Positions that cannot
//! be computed — insufficient lookback, flat windows, zero-volume windows —
//! carry `None` instead of a fabricated number. The only path-dependent
//! recurrences are the EMA family and Wilder's RSI smoothing; their anchor
//! bars are documented in the respective modules.

pub mod bollinger;
pub mod cci;
pub mod cmo;
pub mod ema;
pub mod garman_klass;
pub mod mfi;
pub mod momentum;
pub mod roc;
pub mod rsi;
pub mod sma;
pub mod volatility;
pub mod vwap;
pub mod zlema;

use crate::domain::series::PriceSeries;
use chrono::NaiveDateTime;
use std::fmt;

/// A single point in an indicator time series. `value` is `None` where the
/// indicator is not computable at this bar.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorPoint {
    pub timestamp: NaiveDateTime,
    pub value: Option<f64>,
}

/// Indicator identity plus non-window parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorKind {
    Sma,
    Ema,
    Zlema,
    Cci,
    Rsi,
    BollingerWidth { stddev_mult_x100: u32 },
    Roc,
    Momentum,
    Mfi,
    Cmo,
    HistoricalVolatility { periods_per_year: u32 },
    GarmanKlass,
    Vwap,
}

impl IndicatorKind {
    /// Human-readable label for this indicator at a given window,
    /// e.g. `CCI(200)` or `BBWIDTH(20,2)`.
    pub fn describe(&self, window: usize) -> String {
        match self {
            IndicatorKind::Sma => format!("SMA({})", window),
            IndicatorKind::Ema => format!("EMA({})", window),
            IndicatorKind::Zlema => format!("ZLEMA({})", window),
            IndicatorKind::Cci => format!("CCI({})", window),
            IndicatorKind::Rsi => format!("RSI({})", window),
            IndicatorKind::BollingerWidth { stddev_mult_x100 } => {
                let mult = *stddev_mult_x100 as f64 / 100.0;
                format!("BBWIDTH({},{})", window, mult)
            }
            IndicatorKind::Roc => format!("ROC({})", window),
            IndicatorKind::Momentum => format!("MOMENTUM({})", window),
            IndicatorKind::Mfi => format!("MFI({})", window),
            IndicatorKind::Cmo => format!("CMO({})", window),
            IndicatorKind::HistoricalVolatility { periods_per_year } => {
                format!("HVOL({},{})", window, periods_per_year)
            }
            IndicatorKind::GarmanKlass => format!("GKVOL({})", window),
            IndicatorKind::Vwap => format!("VWAP({})", window),
        }
    }
}

impl fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IndicatorKind::Sma => "SMA",
            IndicatorKind::Ema => "EMA",
            IndicatorKind::Zlema => "ZLEMA",
            IndicatorKind::Cci => "CCI",
            IndicatorKind::Rsi => "RSI",
            IndicatorKind::BollingerWidth { .. } => "BBWIDTH",
            IndicatorKind::Roc => "ROC",
            IndicatorKind::Momentum => "MOMENTUM",
            IndicatorKind::Mfi => "MFI",
            IndicatorKind::Cmo => "CMO",
            IndicatorKind::HistoricalVolatility { .. } => "HVOL",
            IndicatorKind::GarmanKlass => "GKVOL",
            IndicatorKind::Vwap => "VWAP",
        };
        write!(f, "{}", name)
    }
}

/// An indicator time series aligned 1:1 by index with the source series.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorSeries {
    pub kind: IndicatorKind,
    pub window: usize,
    pub points: Vec<IndicatorPoint>,
}

impl IndicatorSeries {
    /// All-undefined series of the same length as `series`. Used for
    /// degenerate parameters (window 0, windows a sample statistic cannot
    /// be formed over).
    pub(crate) fn undefined(kind: IndicatorKind, window: usize, series: &PriceSeries) -> Self {
        let points = series
            .bars()
            .iter()
            .map(|b| IndicatorPoint {
                timestamp: b.timestamp,
                value: None,
            })
            .collect();
        Self {
            kind,
            window,
            points,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn value(&self, index: usize) -> Option<f64> {
        self.points.get(index).and_then(|p| p.value)
    }
}

/// Compute the indicator named by `kind` over `series` with the given
/// rolling window.
pub fn compute(series: &PriceSeries, kind: IndicatorKind, window: usize) -> IndicatorSeries {
    match kind {
        IndicatorKind::Sma => sma::calculate_sma(series, window),
        IndicatorKind::Ema => ema::calculate_ema(series, window),
        IndicatorKind::Zlema => zlema::calculate_zlema(series, window),
        IndicatorKind::Cci => cci::calculate_cci(series, window),
        IndicatorKind::Rsi => rsi::calculate_rsi(series, window),
        IndicatorKind::BollingerWidth { stddev_mult_x100 } => {
            bollinger::calculate_bollinger_width(series, window, stddev_mult_x100)
        }
        IndicatorKind::Roc => roc::calculate_roc(series, window),
        IndicatorKind::Momentum => momentum::calculate_momentum(series, window),
        IndicatorKind::Mfi => mfi::calculate_mfi(series, window),
        IndicatorKind::Cmo => cmo::calculate_cmo(series, window),
        IndicatorKind::HistoricalVolatility { periods_per_year } => {
            volatility::calculate_historical_volatility(series, window, periods_per_year)
        }
        IndicatorKind::GarmanKlass => garman_klass::calculate_garman_klass(series, window),
        IndicatorKind::Vwap => vwap::calculate_vwap(series, window),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::domain::series::{PriceBar, PriceSeries};
    use chrono::{Duration, NaiveDate, NaiveDateTime};

    pub fn base_timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    /// Series of flat bars (open = high = low = close) from a close list.
    pub fn series_from_closes(closes: &[f64]) -> PriceSeries {
        let bars = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| PriceBar {
                timestamp: base_timestamp() + Duration::hours(i as i64),
                open: close,
                high: close,
                low: close,
                close,
                volume: 1_000.0,
            })
            .collect();
        PriceSeries::new(bars).unwrap()
    }

    /// Series from (open, high, low, close, volume) tuples.
    pub fn series_from_ohlcv(rows: &[(f64, f64, f64, f64, f64)]) -> PriceSeries {
        let bars = rows
            .iter()
            .enumerate()
            .map(|(i, &(open, high, low, close, volume))| PriceBar {
                timestamp: base_timestamp() + Duration::hours(i as i64),
                open,
                high,
                low,
                close,
                volume,
            })
            .collect();
        PriceSeries::new(bars).unwrap()
    }
}
