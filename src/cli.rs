//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::console_notify_adapter::ConsoleNotifyAdapter;
use crate::adapters::csv_adapter::CsvDataAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::text_report_adapter::TextReportAdapter;
use crate::domain::backtest::{RunParams, RunReport, run_family};
use crate::domain::config_validation::{parse_cutoff, parse_list, validate_run_config};
use crate::domain::error::SatstackerError;
use crate::domain::registry::StrategyRegistry;
use crate::domain::strategy::StrategyDefinition;
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::DataPort;
use crate::ports::notify_port::NotifyPort;
use crate::ports::report_port::ReportPort;

#[derive(Parser, Debug)]
#[command(name = "satstacker", about = "Offline accumulation-strategy backtester")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run backtests for a strategy family
    Backtest {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(long)]
        dry_run: bool,
    },
    /// Validate a run configuration
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// List registered strategy families and definitions
    ListStrategies {
        #[arg(long)]
        family: Option<String>,
    },
    /// Show bar count and timestamp range for the configured series
    Info {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Backtest {
            config,
            output,
            dry_run,
        } => run_backtest(&config, output, dry_run),
        Command::Validate { config } => run_validate(&config),
        Command::ListStrategies { family } => run_list_strategies(family.as_deref()),
        Command::Info { config } => run_info(&config),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = SatstackerError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

pub fn build_run_params(config: &dyn ConfigPort) -> Result<RunParams, SatstackerError> {
    let cutoff_str = config.get_string("backtest", "cutoff_date").ok_or_else(|| {
        SatstackerError::ConfigMissing {
            section: "backtest".into(),
            key: "cutoff_date".into(),
        }
    })?;
    let cutoff = parse_cutoff(&cutoff_str).ok_or_else(|| SatstackerError::ConfigInvalid {
        section: "backtest".into(),
        key: "cutoff_date".into(),
        reason: "expected YYYY-MM-DD or YYYY-MM-DD HH:MM:SS".into(),
    })?;

    Ok(RunParams {
        cutoff,
        starting_capital: config.get_double("backtest", "starting_capital", 10_000.0),
        bet: config.get_double("backtest", "bet", 100.0),
    })
}

fn require_source(config: &dyn ConfigPort) -> Result<String, SatstackerError> {
    config
        .get_string("backtest", "source")
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| SatstackerError::ConfigMissing {
            section: "backtest".into(),
            key: "source".into(),
        })
}

fn resolve_family(config: &dyn ConfigPort) -> String {
    config
        .get_string("strategies", "family")
        .unwrap_or_else(|| "cci".to_string())
}

fn resolve_run_list(config: &dyn ConfigPort) -> Result<Option<Vec<String>>, SatstackerError> {
    match config.get_string("strategies", "run_list") {
        Some(value) => parse_list(&value)
            .map(Some)
            .map_err(|reason| SatstackerError::ConfigInvalid {
                section: "strategies".into(),
                key: "run_list".into(),
                reason,
            }),
        None => Ok(None),
    }
}

fn resolve_recipients(config: &dyn ConfigPort) -> Result<Vec<String>, SatstackerError> {
    match config.get_string("email", "recipients") {
        Some(value) => parse_list(&value).map_err(|reason| SatstackerError::ConfigInvalid {
            section: "email".into(),
            key: "recipients".into(),
            reason,
        }),
        None => Ok(Vec::new()),
    }
}

fn select_strategies(
    config: &dyn ConfigPort,
) -> Result<(String, Vec<StrategyDefinition>), SatstackerError> {
    let registry = StrategyRegistry::with_builtins();
    let family = resolve_family(config);
    let run_list = resolve_run_list(config)?;
    let definitions = registry.select(&family, run_list.as_deref())?;
    Ok((family, definitions))
}

fn run_backtest(config_path: &PathBuf, output: Option<PathBuf>, dry_run: bool) -> ExitCode {
    // Stage 1: Load and validate config
    eprintln!("Loading config from {}", config_path.display());
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };
    if let Err(e) = validate_run_config(&config) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    // Stage 2: Resolve strategies and run parameters
    let (family, definitions) = match select_strategies(&config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    let params = match build_run_params(&config) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    if dry_run {
        eprintln!("\nFamily: {family}");
        eprintln!("Strategies to run:");
        for definition in &definitions {
            eprintln!("  {definition}");
        }
        eprintln!(
            "Cutoff: {} | starting capital: ${:.2} | bet: ${:.2}",
            params.cutoff, params.starting_capital, params.bet
        );
        eprintln!("\nDry run complete: configuration is valid");
        return ExitCode::SUCCESS;
    }

    // Stage 3: Load the price series
    let base_path = config
        .get_string("backtest", "data_path")
        .unwrap_or_else(|| ".".to_string());
    let source = match require_source(&config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let data_port = CsvDataAdapter::new(PathBuf::from(base_path));
    eprintln!("Loading {} (cutoff {})", source, params.cutoff);
    let series = match data_port.fetch_series(&source, params.cutoff) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    eprintln!("  {} bars loaded", series.len());

    // Stage 4: Evaluate every strategy against the shared series
    eprintln!("Evaluating {} {} strategies...", definitions.len(), family);
    let results = run_family(&series, &definitions, &params);

    // Stage 5: Console summary
    for backtest in &results {
        let summary = backtest.summary();
        eprintln!("\n=== {} ===", summary.name);
        eprintln!(
            "  Rule:                {} {} {}",
            summary.label, backtest.definition.comparison, summary.threshold
        );
        eprintln!("  Buy signals:         {}", summary.buy_count);
        eprintln!("  Capital invested:    ${:.2}", summary.capital_invested);
        eprintln!(
            "  Final asset balance: {:.8}",
            summary.final_asset_balance
        );
    }

    // Stage 6: Write the report
    let output_path = output.unwrap_or_else(|| {
        config
            .get_string("report", "output_path")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("report.txt"))
    });

    let report = RunReport {
        params,
        strategies: results,
    };
    if let Err(e) = TextReportAdapter::new().write(&report, &output_path) {
        eprintln!("error: {e}");
        return (&e).into();
    }
    eprintln!("\nReport written to: {}", output_path.display());

    // Stage 7: Hand the artifact to the notification collaborator
    let recipients = match resolve_recipients(&config) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    if !recipients.is_empty() {
        if let Err(e) = ConsoleNotifyAdapter::new().send(&output_path, &recipients) {
            eprintln!("error: {e}");
            return (&e).into();
        }
    }

    println!("{}", output_path.display());
    ExitCode::SUCCESS
}

fn run_validate(config_path: &PathBuf) -> ExitCode {
    eprintln!("Validating config: {}", config_path.display());
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    if let Err(e) = validate_run_config(&config) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    let (family, definitions) = match select_strategies(&config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    eprintln!("\nFamily: {family}");
    for definition in &definitions {
        eprintln!("  {definition}");
    }
    eprintln!("\nConfiguration is valid.");
    ExitCode::SUCCESS
}

fn run_list_strategies(family: Option<&str>) -> ExitCode {
    let registry = StrategyRegistry::with_builtins();

    match family {
        Some(name) => match registry.family(name) {
            Some(definitions) => {
                for definition in definitions {
                    println!("{definition}");
                }
                ExitCode::SUCCESS
            }
            None => {
                let err = SatstackerError::UnknownFamily(name.to_string());
                eprintln!("error: {err}");
                (&err).into()
            }
        },
        None => {
            for family in registry.families() {
                println!("{family}");
                for definition in registry.family(family).unwrap_or_default() {
                    println!("  {definition}");
                }
            }
            ExitCode::SUCCESS
        }
    }
}

fn run_info(config_path: &PathBuf) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };
    if let Err(e) = validate_run_config(&config) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    let params = match build_run_params(&config) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    let base_path = config
        .get_string("backtest", "data_path")
        .unwrap_or_else(|| ".".to_string());
    let source = match require_source(&config) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let data_port = CsvDataAdapter::new(PathBuf::from(base_path));
    let series = match data_port.fetch_series(&source, params.cutoff) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    match (series.first_timestamp(), series.last_timestamp()) {
        (Some(first), Some(last)) => {
            println!("{}: {} bars, {} to {}", source, series.len(), first, last);
        }
        _ => {
            println!("{}: no bars after cutoff {}", source, params.cutoff);
        }
    }
    ExitCode::SUCCESS
}
