//! Backtest run parameters and per-strategy execution.

use crate::domain::accumulation::{self, AccumulationResult};
use crate::domain::evaluator::{self, ActionSeries};
use crate::domain::series::PriceSeries;
use crate::domain::strategy::StrategyDefinition;
use chrono::NaiveDateTime;

/// General run parameters shared by every strategy in a run.
/// `starting_capital` is reported but does not gate buys; the original
/// system deploys the bet on every signal regardless of remaining capital.
#[derive(Debug, Clone, PartialEq)]
pub struct RunParams {
    pub cutoff: NaiveDateTime,
    pub starting_capital: f64,
    pub bet: f64,
}

/// One strategy's complete backtest output.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyBacktest {
    pub definition: StrategyDefinition,
    pub actions: ActionSeries,
    pub accumulation: AccumulationResult,
}

/// Summary attributes handed to reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategySummary {
    pub name: String,
    pub description: String,
    pub label: String,
    pub lookback: usize,
    pub threshold: f64,
    pub buy_count: usize,
    pub capital_invested: f64,
    pub final_asset_balance: f64,
}

impl StrategyBacktest {
    pub fn summary(&self) -> StrategySummary {
        StrategySummary {
            name: self.definition.name.clone(),
            description: self.definition.description.clone(),
            label: self.definition.label(),
            lookback: self.definition.lookback,
            threshold: self.definition.threshold,
            buy_count: self.accumulation.buy_count,
            capital_invested: self.accumulation.total_capital_invested(),
            final_asset_balance: self.accumulation.final_asset_balance(),
        }
    }
}

/// Everything reporting needs for one run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub params: RunParams,
    pub strategies: Vec<StrategyBacktest>,
}

pub fn run_strategy(
    series: &PriceSeries,
    definition: &StrategyDefinition,
    params: &RunParams,
) -> StrategyBacktest {
    let actions = evaluator::evaluate(series, definition);
    let accumulation = accumulation::accumulate(series, &actions, params.bet);
    StrategyBacktest {
        definition: definition.clone(),
        actions,
        accumulation,
    }
}

/// Run each definition independently against a read-only view of the base
/// series. Results are position-aligned with `definitions` and do not
/// depend on evaluation order.
pub fn run_family(
    series: &PriceSeries,
    definitions: &[StrategyDefinition],
    params: &RunParams,
) -> Vec<StrategyBacktest> {
    definitions
        .iter()
        .map(|definition| run_strategy(series, definition, params))
        .collect()
}
