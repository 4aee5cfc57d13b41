//! Accumulation engine: turns per-bar actions into cumulative invested
//! capital and cumulative asset received.
//!
//! Every Buy deploys a fixed bet (currency units) and receives
//! bet / close units of the asset. Positive closes are the PriceSeries
//! invariant, enforced at construction, so the division needs no guard
//! here.

use crate::domain::evaluator::{Action, ActionSeries};
use crate::domain::series::PriceSeries;
use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq)]
pub struct AccumulationPoint {
    pub timestamp: NaiveDateTime,
    pub capital_invested: f64,
    pub rolling_capital_invested: f64,
    pub asset_received: f64,
    pub rolling_asset_received: f64,
}

/// Result of replaying an [`ActionSeries`] with a fixed bet size.
/// Computed once per (series, strategy) pair; immutable thereafter.
#[derive(Debug, Clone, PartialEq)]
pub struct AccumulationResult {
    pub bet: f64,
    pub buy_count: usize,
    pub points: Vec<AccumulationPoint>,
}

impl AccumulationResult {
    pub fn total_capital_invested(&self) -> f64 {
        self.points
            .last()
            .map(|p| p.rolling_capital_invested)
            .unwrap_or(0.0)
    }

    pub fn final_asset_balance(&self) -> f64 {
        self.points
            .last()
            .map(|p| p.rolling_asset_received)
            .unwrap_or(0.0)
    }
}

pub fn accumulate(series: &PriceSeries, actions: &ActionSeries, bet: f64) -> AccumulationResult {
    let mut points = Vec::with_capacity(series.len());
    let mut rolling_capital = 0.0;
    let mut rolling_asset = 0.0;
    let mut buy_count = 0;

    for (bar, point) in series.bars().iter().zip(&actions.points) {
        let (capital, asset) = match point.action {
            Action::Buy => {
                buy_count += 1;
                (bet, bet / bar.close)
            }
            Action::NoAction => (0.0, 0.0),
        };
        rolling_capital += capital;
        rolling_asset += asset;

        points.push(AccumulationPoint {
            timestamp: bar.timestamp,
            capital_invested: capital,
            rolling_capital_invested: rolling_capital,
            asset_received: asset,
            rolling_asset_received: rolling_asset,
        });
    }

    AccumulationResult {
        bet,
        buy_count,
        points,
    }
}
