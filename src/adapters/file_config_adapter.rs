//! INI file configuration adapter.

use crate::ports::config_port::ConfigPort;
use configparser::ini::Ini;
use std::path::Path;

pub struct FileConfigAdapter {
    config: Ini,
}

impl FileConfigAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let mut config = Ini::new();
        config.load(path).map_err(std::io::Error::other)?;
        Ok(Self { config })
    }

    pub fn from_string(content: &str) -> Result<Self, String> {
        let mut config = Ini::new();
        config.read(content.to_string())?;
        Ok(Self { config })
    }
}

impl ConfigPort for FileConfigAdapter {
    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.config.get(section, key)
    }

    fn get_double(&self, section: &str, key: &str, default: f64) -> f64 {
        self.config
            .getfloat(section, key)
            .ok()
            .flatten()
            .unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn from_string_parses_sections() {
        let content = r#"
[backtest]
source = ohlc_BTCUSD_60minute.csv
cutoff_date = 2020-01-01
starting_capital = 10000
bet = 100

[strategies]
family = cci
"#;
        let adapter = FileConfigAdapter::from_string(content).unwrap();
        assert_eq!(
            adapter.get_string("backtest", "source"),
            Some("ohlc_BTCUSD_60minute.csv".to_string())
        );
        assert_eq!(
            adapter.get_string("strategies", "family"),
            Some("cci".to_string())
        );
    }

    #[test]
    fn get_string_returns_none_for_missing_key() {
        let adapter = FileConfigAdapter::from_string("[backtest]\nbet = 100\n").unwrap();
        assert_eq!(adapter.get_string("backtest", "missing"), None);
        assert_eq!(adapter.get_string("missing_section", "key"), None);
    }

    #[test]
    fn get_double_returns_value() {
        let adapter =
            FileConfigAdapter::from_string("[backtest]\nstarting_capital = 10000.5\n").unwrap();
        assert_eq!(
            adapter.get_double("backtest", "starting_capital", 0.0),
            10000.5
        );
    }

    #[test]
    fn get_double_returns_default_for_missing() {
        let adapter = FileConfigAdapter::from_string("[backtest]\n").unwrap();
        assert_eq!(adapter.get_double("backtest", "missing", 99.9), 99.9);
    }

    #[test]
    fn get_double_returns_default_for_non_numeric() {
        let adapter =
            FileConfigAdapter::from_string("[backtest]\nbet = not_a_number\n").unwrap();
        assert_eq!(adapter.get_double("backtest", "bet", 42.0), 42.0);
    }

    #[test]
    fn from_file_reads_config() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[report]\noutput_path = reports/run.txt\n").unwrap();

        let adapter = FileConfigAdapter::from_file(file.path()).unwrap();
        assert_eq!(
            adapter.get_string("report", "output_path"),
            Some("reports/run.txt".to_string())
        );
    }

    #[test]
    fn from_file_returns_error_for_missing_file() {
        let result = FileConfigAdapter::from_file("/nonexistent/path/config.ini");
        assert!(result.is_err());
    }
}
