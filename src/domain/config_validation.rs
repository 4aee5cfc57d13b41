//! Run configuration validation.
//!
//! Validates every config field before the pipeline touches any data.

use crate::domain::error::SatstackerError;
use crate::ports::config_port::ConfigPort;
use chrono::{NaiveDate, NaiveDateTime};

pub fn validate_run_config(config: &dyn ConfigPort) -> Result<(), SatstackerError> {
    validate_source(config)?;
    validate_cutoff(config)?;
    validate_starting_capital(config)?;
    validate_bet(config)?;
    validate_run_list(config)?;
    validate_recipients(config)?;
    Ok(())
}

/// Cutoffs accept either a full timestamp or a bare date (midnight).
pub fn parse_cutoff(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Split a comma-separated list, trimming whitespace. An empty token is an
/// error; the caller supplies section/key context.
pub fn parse_list(value: &str) -> Result<Vec<String>, String> {
    let mut items = Vec::new();
    for token in value.split(',') {
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return Err("empty token in list".to_string());
        }
        items.push(trimmed.to_string());
    }
    Ok(items)
}

fn validate_source(config: &dyn ConfigPort) -> Result<(), SatstackerError> {
    match config.get_string("backtest", "source") {
        Some(s) if !s.trim().is_empty() => Ok(()),
        _ => Err(SatstackerError::ConfigMissing {
            section: "backtest".to_string(),
            key: "source".to_string(),
        }),
    }
}

fn validate_cutoff(config: &dyn ConfigPort) -> Result<(), SatstackerError> {
    let value = config.get_string("backtest", "cutoff_date").ok_or_else(|| {
        SatstackerError::ConfigMissing {
            section: "backtest".to_string(),
            key: "cutoff_date".to_string(),
        }
    })?;

    match parse_cutoff(&value) {
        Some(_) => Ok(()),
        None => Err(SatstackerError::ConfigInvalid {
            section: "backtest".to_string(),
            key: "cutoff_date".to_string(),
            reason: "expected YYYY-MM-DD or YYYY-MM-DD HH:MM:SS".to_string(),
        }),
    }
}

fn validate_starting_capital(config: &dyn ConfigPort) -> Result<(), SatstackerError> {
    let value = config.get_double("backtest", "starting_capital", 0.0);
    if value <= 0.0 {
        return Err(SatstackerError::ConfigInvalid {
            section: "backtest".to_string(),
            key: "starting_capital".to_string(),
            reason: "starting_capital must be positive".to_string(),
        });
    }
    Ok(())
}

fn validate_bet(config: &dyn ConfigPort) -> Result<(), SatstackerError> {
    let value = config.get_double("backtest", "bet", 0.0);
    if value <= 0.0 {
        return Err(SatstackerError::ConfigInvalid {
            section: "backtest".to_string(),
            key: "bet".to_string(),
            reason: "bet must be positive".to_string(),
        });
    }
    Ok(())
}

fn validate_run_list(config: &dyn ConfigPort) -> Result<(), SatstackerError> {
    if let Some(value) = config.get_string("strategies", "run_list") {
        parse_list(&value).map_err(|reason| SatstackerError::ConfigInvalid {
            section: "strategies".to_string(),
            key: "run_list".to_string(),
            reason,
        })?;
    }
    Ok(())
}

fn validate_recipients(config: &dyn ConfigPort) -> Result<(), SatstackerError> {
    if let Some(value) = config.get_string("email", "recipients") {
        parse_list(&value).map_err(|reason| SatstackerError::ConfigInvalid {
            section: "email".to_string(),
            key: "recipients".to_string(),
            reason,
        })?;
    }
    Ok(())
}
