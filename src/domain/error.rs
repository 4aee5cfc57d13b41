//! Domain error types.

/// Top-level error type for satstacker.
///
/// Degenerate numeric conditions inside indicators (flat windows, short
/// series) are never errors; they surface as undefined indicator values.
/// Only structural violations of the inputs land here.
#[derive(Debug, thiserror::Error)]
pub enum SatstackerError {
    #[error("malformed series: {reason}")]
    MalformedSeries { reason: String },

    #[error("data error for {source_id}: {reason}")]
    Data { source_id: String, reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("invalid strategy {name}: {reason}")]
    StrategyInvalid { name: String, reason: String },

    #[error("unknown strategy family: {0}")]
    UnknownFamily(String),

    #[error("unknown strategy {name} in family {family}")]
    UnknownStrategy { family: String, name: String },

    #[error("report error: {reason}")]
    Report { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&SatstackerError> for std::process::ExitCode {
    fn from(err: &SatstackerError) -> Self {
        let code: u8 = match err {
            SatstackerError::Io(_) => 1,
            SatstackerError::ConfigParse { .. }
            | SatstackerError::ConfigMissing { .. }
            | SatstackerError::ConfigInvalid { .. } => 2,
            SatstackerError::MalformedSeries { .. } | SatstackerError::Data { .. } => 3,
            SatstackerError::StrategyInvalid { .. }
            | SatstackerError::UnknownFamily(_)
            | SatstackerError::UnknownStrategy { .. } => 4,
            SatstackerError::Report { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}
