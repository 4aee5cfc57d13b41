//! Plain-text report adapter.
//!
//! Renders the run parameters and per-strategy summaries into an aligned
//! text document. Rendering is separated from writing so it can be tested
//! without touching the filesystem.

use crate::domain::backtest::RunReport;
use crate::domain::error::SatstackerError;
use crate::ports::report_port::ReportPort;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

pub struct TextReportAdapter;

impl TextReportAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextReportAdapter {
    fn default() -> Self {
        Self::new()
    }
}

pub fn render(report: &RunReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "satstacker backtest report");
    let _ = writeln!(out, "==========================");
    let _ = writeln!(out);
    let _ = writeln!(out, "Time history cutoff:  {}", report.params.cutoff);
    let _ = writeln!(
        out,
        "Starting capital:     ${:.2}",
        report.params.starting_capital
    );
    let _ = writeln!(out, "Bet per signal:       ${:.2}", report.params.bet);
    let _ = writeln!(out, "Strategies evaluated: {}", report.strategies.len());

    for backtest in &report.strategies {
        let summary = backtest.summary();
        let _ = writeln!(out);
        let _ = writeln!(out, "--- {} ---", summary.name);
        if !summary.description.is_empty() {
            let _ = writeln!(out, "{}", summary.description);
        }
        let _ = writeln!(
            out,
            "Rule:                {} {} {}",
            summary.label,
            backtest.definition.comparison,
            summary.threshold
        );
        let _ = writeln!(out, "Lookback:            {} bars", summary.lookback);
        let _ = writeln!(out, "Buy signals:         {}", summary.buy_count);
        let _ = writeln!(out, "Capital invested:    ${:.2}", summary.capital_invested);
        let _ = writeln!(
            out,
            "Final asset balance: {:.8}",
            summary.final_asset_balance
        );
    }

    out
}

impl ReportPort for TextReportAdapter {
    fn write(&self, report: &RunReport, output_path: &Path) -> Result<(), SatstackerError> {
        fs::write(output_path, render(report)).map_err(|e| SatstackerError::Report {
            reason: format!("failed to write {}: {}", output_path.display(), e),
        })
    }
}
