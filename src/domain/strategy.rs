//! Strategy definitions and definition-time validation.

use crate::domain::error::SatstackerError;
use crate::domain::indicator::IndicatorKind;
use std::fmt;

/// Comparison applied between a defined indicator value and the strategy
/// threshold. Every builtin strategy buys below its threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Below,
    Above,
}

impl Comparison {
    pub fn holds(&self, value: f64, threshold: f64) -> bool {
        match self {
            Comparison::Below => value < threshold,
            Comparison::Above => value > threshold,
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparison::Below => write!(f, "<"),
            Comparison::Above => write!(f, ">"),
        }
    }
}

/// An immutable rule: one indicator at one lookback, compared against a
/// threshold. Created once at configuration time.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyDefinition {
    pub name: String,
    pub description: String,
    pub indicator: IndicatorKind,
    pub lookback: usize,
    pub comparison: Comparison,
    pub threshold: f64,
}

impl StrategyDefinition {
    /// `CCI(200)`-style label for the definition's indicator.
    pub fn label(&self) -> String {
        self.indicator.describe(self.lookback)
    }

    /// Rejects definitions whose threshold cannot sit on the indicator's
    /// scale; scale mismatches are caught here, never at evaluation time.
    pub fn validate(&self) -> Result<(), SatstackerError> {
        if self.lookback == 0 {
            return Err(self.invalid("lookback must be at least 1"));
        }
        if !self.threshold.is_finite() {
            return Err(self.invalid("threshold must be finite"));
        }

        match self.indicator {
            IndicatorKind::Rsi | IndicatorKind::Mfi => {
                if !(0.0..=100.0).contains(&self.threshold) {
                    return Err(self.invalid("threshold outside indicator range [0, 100]"));
                }
            }
            IndicatorKind::Cmo => {
                if !(-100.0..=100.0).contains(&self.threshold) {
                    return Err(self.invalid("threshold outside indicator range [-100, 100]"));
                }
            }
            IndicatorKind::BollingerWidth { .. }
            | IndicatorKind::HistoricalVolatility { .. }
            | IndicatorKind::GarmanKlass => {
                if self.threshold < 0.0 {
                    return Err(self.invalid("threshold must be non-negative for a volatility-scale indicator"));
                }
            }
            IndicatorKind::Sma
            | IndicatorKind::Ema
            | IndicatorKind::Zlema
            | IndicatorKind::Vwap => {
                if self.threshold <= 0.0 {
                    return Err(self.invalid("threshold must be positive for a price-scale indicator"));
                }
            }
            // CCI, ROC and momentum are unbounded oscillators
            IndicatorKind::Cci | IndicatorKind::Roc | IndicatorKind::Momentum => {}
        }

        Ok(())
    }

    fn invalid(&self, reason: &str) -> SatstackerError {
        SatstackerError::StrategyInvalid {
            name: self.name.clone(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for StrategyDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {} {}",
            self.name,
            self.label(),
            self.comparison,
            self.threshold
        )
    }
}
