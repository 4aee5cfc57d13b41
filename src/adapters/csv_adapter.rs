//! CSV file data adapter.
//!
//! Reads the exchange export shape the original dataset ships in: a header
//! row followed by `open,high,low,close,volume,unix,utc` columns, with the
//! `utc` column formatted `%Y-%m-%d %H:%M:%S`. Rows before the cutoff are
//! dropped; the remainder is sorted by timestamp and validated into a
//! `PriceSeries`.

use crate::domain::error::SatstackerError;
use crate::domain::series::{PriceBar, PriceSeries};
use crate::ports::data_port::DataPort;
use chrono::NaiveDateTime;
use std::fs;
use std::path::{Path, PathBuf};

const UTC_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub struct CsvDataAdapter {
    base_path: PathBuf,
}

impl CsvDataAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn resolve(&self, source: &str) -> PathBuf {
        let path = Path::new(source);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_path.join(source)
        }
    }
}

fn data_error(source: &str, reason: String) -> SatstackerError {
    SatstackerError::Data {
        source_id: source.to_string(),
        reason,
    }
}

fn parse_number(
    record: &csv::StringRecord,
    index: usize,
    name: &str,
    source: &str,
) -> Result<f64, SatstackerError> {
    record
        .get(index)
        .ok_or_else(|| data_error(source, format!("missing {} column", name)))?
        .trim()
        .parse()
        .map_err(|e| data_error(source, format!("invalid {} value: {}", name, e)))
}

impl DataPort for CsvDataAdapter {
    fn fetch_series(
        &self,
        source: &str,
        cutoff: NaiveDateTime,
    ) -> Result<PriceSeries, SatstackerError> {
        let path = self.resolve(source);
        let content = fs::read_to_string(&path)
            .map_err(|e| data_error(source, format!("failed to read {}: {}", path.display(), e)))?;

        let mut reader = csv::Reader::from_reader(content.as_bytes());
        let mut bars = Vec::new();

        for result in reader.records() {
            let record =
                result.map_err(|e| data_error(source, format!("CSV parse error: {}", e)))?;

            let utc = record
                .get(6)
                .ok_or_else(|| data_error(source, "missing utc column".to_string()))?;
            let timestamp = NaiveDateTime::parse_from_str(utc.trim(), UTC_FORMAT)
                .map_err(|e| data_error(source, format!("invalid utc value {:?}: {}", utc, e)))?;

            if timestamp < cutoff {
                continue;
            }

            bars.push(PriceBar {
                timestamp,
                open: parse_number(&record, 0, "open", source)?,
                high: parse_number(&record, 1, "high", source)?,
                low: parse_number(&record, 2, "low", source)?,
                close: parse_number(&record, 3, "close", source)?,
                volume: parse_number(&record, 4, "volume", source)?,
            });
        }

        bars.sort_by_key(|b| b.timestamp);
        PriceSeries::new(bars)
    }
}
