#![allow(dead_code)]

use chrono::{Duration, NaiveDate, NaiveDateTime};
use satstacker::domain::backtest::RunParams;
use satstacker::domain::error::SatstackerError;
use satstacker::domain::indicator::IndicatorKind;
use satstacker::domain::series::{PriceBar, PriceSeries};
use satstacker::domain::strategy::{Comparison, StrategyDefinition};
use satstacker::ports::data_port::DataPort;
use std::collections::HashMap;

pub fn base_timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

pub fn make_bar(hour_offset: i64, close: f64) -> PriceBar {
    PriceBar {
        timestamp: base_timestamp() + Duration::hours(hour_offset),
        open: close,
        high: close,
        low: close,
        close,
        volume: 1_000.0,
    }
}

pub fn make_series(closes: &[f64]) -> PriceSeries {
    let bars = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| make_bar(i as i64, close))
        .collect();
    PriceSeries::new(bars).unwrap()
}

pub fn sample_params() -> RunParams {
    RunParams {
        cutoff: base_timestamp(),
        starting_capital: 10_000.0,
        bet: 100.0,
    }
}

pub fn momentum_dips(name: &str, lookback: usize) -> StrategyDefinition {
    StrategyDefinition {
        name: name.to_string(),
        description: "buy on any downward move".to_string(),
        indicator: IndicatorKind::Momentum,
        lookback,
        comparison: Comparison::Below,
        threshold: 0.0,
    }
}

pub struct MockDataPort {
    pub series: HashMap<String, Vec<PriceBar>>,
    pub errors: HashMap<String, String>,
}

impl MockDataPort {
    pub fn new() -> Self {
        Self {
            series: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_bars(mut self, source: &str, bars: Vec<PriceBar>) -> Self {
        self.series.insert(source.to_string(), bars);
        self
    }

    pub fn with_error(mut self, source: &str, reason: &str) -> Self {
        self.errors.insert(source.to_string(), reason.to_string());
        self
    }
}

impl DataPort for MockDataPort {
    fn fetch_series(
        &self,
        source: &str,
        cutoff: NaiveDateTime,
    ) -> Result<PriceSeries, SatstackerError> {
        if let Some(reason) = self.errors.get(source) {
            return Err(SatstackerError::Data {
                source_id: source.to_string(),
                reason: reason.clone(),
            });
        }
        let bars = self
            .series
            .get(source)
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .filter(|b| b.timestamp >= cutoff)
            .collect();
        PriceSeries::new(bars)
    }
}
