//! Domain error types.

/// Top-level error type for foresight.
#[derive(Debug, thiserror::Error)]
pub enum ForesightError {
    #[error("empty input: no dates to process")]
    EmptyInput,

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("trade date {date} has no matching price")]
    DataAlignment { date: chrono::NaiveDate },

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

    #[error("data error: {reason}")]
    Data { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&ForesightError> for std::process::ExitCode {
    fn from(err: &ForesightError) -> Self {
        let code: u8 = match err {
            ForesightError::Io(_) => 1,
            ForesightError::ConfigParse { .. }
            | ForesightError::ConfigMissing { .. }
            | ForesightError::ConfigInvalid { .. }
            | ForesightError::InvalidConfig { .. } => 2,
            ForesightError::Data { .. } => 3,
            ForesightError::EmptyInput | ForesightError::DataAlignment { .. } => 4,
        };
        std::process::ExitCode::from(code)
    }
}
