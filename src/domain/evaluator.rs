//! Strategy evaluation: indicator + threshold rule to per-bar actions.
//!
//! Evaluation is a pure function of the series and the definition; it
//! holds no state, so independent strategies can be evaluated concurrently
//! over the same series.

use crate::domain::indicator;
use crate::domain::series::PriceSeries;
use crate::domain::strategy::StrategyDefinition;
use chrono::NaiveDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Buy,
    NoAction,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActionPoint {
    pub timestamp: NaiveDateTime,
    pub action: Action,
}

/// Per-bar actions aligned 1:1 with the source series.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionSeries {
    pub points: Vec<ActionPoint>,
}

impl ActionSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn action(&self, index: usize) -> Option<Action> {
        self.points.get(index).map(|p| p.action)
    }

    pub fn buy_count(&self) -> usize {
        self.points
            .iter()
            .filter(|p| p.action == Action::Buy)
            .count()
    }
}

/// Apply a strategy to a series. A bar buys exactly when its indicator
/// value is defined and satisfies the comparison; every undefined value
/// (warmup, degenerate window, series shorter than the lookback) yields
/// NoAction.
pub fn evaluate(series: &PriceSeries, definition: &StrategyDefinition) -> ActionSeries {
    let indicator = indicator::compute(series, definition.indicator, definition.lookback);

    let points = series
        .bars()
        .iter()
        .zip(&indicator.points)
        .map(|(bar, point)| {
            let action = match point.value {
                Some(v) if definition.comparison.holds(v, definition.threshold) => Action::Buy,
                _ => Action::NoAction,
            };
            ActionPoint {
                timestamp: bar.timestamp,
                action,
            }
        })
        .collect();

    ActionSeries { points }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::indicator::IndicatorKind;
    use crate::domain::indicator::test_support::series_from_closes;
    use crate::domain::strategy::Comparison;

    fn momentum_below(lookback: usize, threshold: f64) -> StrategyDefinition {
        StrategyDefinition {
            name: "test_momentum".into(),
            description: "test".into(),
            indicator: IndicatorKind::Momentum,
            lookback,
            comparison: Comparison::Below,
            threshold,
        }
    }

    #[test]
    fn actions_align_with_series() {
        let series = series_from_closes(&[100.0, 101.0, 102.0, 103.0]);
        let actions = evaluate(&series, &momentum_below(2, 0.0));
        assert_eq!(actions.len(), 4);
    }

    #[test]
    fn buy_iff_defined_and_below_threshold() {
        // momentum(2) = close[i] - close[i-1]
        let series = series_from_closes(&[100.0, 99.0, 101.0, 100.0]);
        let actions = evaluate(&series, &momentum_below(2, 0.0));

        assert_eq!(actions.action(0), Some(Action::NoAction)); // warmup
        assert_eq!(actions.action(1), Some(Action::Buy)); // -1 < 0
        assert_eq!(actions.action(2), Some(Action::NoAction)); // +2
        assert_eq!(actions.action(3), Some(Action::Buy)); // -1 < 0
        assert_eq!(actions.buy_count(), 2);
    }

    #[test]
    fn threshold_boundary_is_no_action() {
        // momentum exactly equal to the threshold must not buy
        let series = series_from_closes(&[100.0, 100.0]);
        let actions = evaluate(&series, &momentum_below(2, 0.0));
        assert_eq!(actions.action(1), Some(Action::NoAction));
    }

    #[test]
    fn insufficient_history_is_all_no_action() {
        let series = series_from_closes(&[100.0, 99.0, 98.0, 97.0, 96.0]);
        let actions = evaluate(&series, &momentum_below(200, 0.0));

        assert_eq!(actions.len(), 5);
        assert!(
            actions
                .points
                .iter()
                .all(|p| p.action == Action::NoAction)
        );
    }

    #[test]
    fn degenerate_indicator_is_no_action() {
        // flat series: CCI undefined at every bar, threshold irrelevant
        let series = series_from_closes(&[100.0; 6]);
        let def = StrategyDefinition {
            name: "flat_cci".into(),
            description: String::new(),
            indicator: IndicatorKind::Cci,
            lookback: 3,
            comparison: Comparison::Below,
            threshold: 1_000_000.0,
        };
        let actions = evaluate(&series, &def);
        assert!(
            actions
                .points
                .iter()
                .all(|p| p.action == Action::NoAction)
        );
    }

    #[test]
    fn above_comparison_buys_above_threshold() {
        let series = series_from_closes(&[100.0, 103.0, 101.0]);
        let def = StrategyDefinition {
            comparison: Comparison::Above,
            ..momentum_below(2, 1.0)
        };
        let actions = evaluate(&series, &def);

        assert_eq!(actions.action(1), Some(Action::Buy)); // +3 > 1
        assert_eq!(actions.action(2), Some(Action::NoAction)); // -2
    }

    #[test]
    fn evaluation_is_deterministic() {
        let series = series_from_closes(&[100.0, 99.0, 101.0, 100.0, 98.0]);
        let def = momentum_below(2, 0.0);

        let first = evaluate(&series, &def);
        let second = evaluate(&series, &def);
        assert_eq!(first, second);
    }
}
