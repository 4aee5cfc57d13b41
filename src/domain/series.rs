//! OHLCV bar and validated price series.

use crate::domain::error::SatstackerError;
use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq)]
pub struct PriceBar {
    pub timestamp: NaiveDateTime,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl PriceBar {
    /// (high + low + close) / 3
    pub fn typical_price(&self) -> f64 {
        (self.high + self.low + self.close) / 3.0
    }
}

/// Ordered OHLCV series with strictly increasing timestamps, positive
/// prices and non-negative volume.
///
/// The constructor rejects structural violations up front, so every
/// `PriceSeries` in circulation satisfies the invariant and downstream
/// indicator/backtest code never has to re-check it.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    pub fn new(bars: Vec<PriceBar>) -> Result<Self, SatstackerError> {
        for (i, bar) in bars.iter().enumerate() {
            for (field, value) in [
                ("open", bar.open),
                ("high", bar.high),
                ("low", bar.low),
                ("close", bar.close),
            ] {
                if !value.is_finite() || value <= 0.0 {
                    return Err(SatstackerError::MalformedSeries {
                        reason: format!("bar {i}: {field} must be a positive finite number"),
                    });
                }
            }
            if !bar.volume.is_finite() || bar.volume < 0.0 {
                return Err(SatstackerError::MalformedSeries {
                    reason: format!("bar {i}: volume must be a non-negative finite number"),
                });
            }
            if i > 0 && bar.timestamp <= bars[i - 1].timestamp {
                return Err(SatstackerError::MalformedSeries {
                    reason: format!(
                        "bar {i}: timestamp {} is not strictly after {}",
                        bar.timestamp,
                        bars[i - 1].timestamp
                    ),
                });
            }
        }
        Ok(Self { bars })
    }

    pub fn empty() -> Self {
        Self { bars: Vec::new() }
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn first_timestamp(&self) -> Option<NaiveDateTime> {
        self.bars.first().map(|b| b.timestamp)
    }

    pub fn last_timestamp(&self) -> Option<NaiveDateTime> {
        self.bars.last().map(|b| b.timestamp)
    }
}
