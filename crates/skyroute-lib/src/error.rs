use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the Skyroute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when an airport code is not present in the network.
    #[error("unknown airport code: {code}{}", format_suggestions(.suggestions))]
    UnknownAirport {
        code: String,
        suggestions: Vec<String>,
    },

    /// Raised when both airports exist but no active route connects them.
    #[error("no route found between {origin} and {destination}")]
    Disconnected { origin: String, destination: String },

    /// Raised when pricing inputs or a tariff are unusable.
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// Raised when a tariff document could not be parsed.
    #[error("invalid tariff configuration: {message}")]
    InvalidTariff { message: String },

    /// Raised when a record file has an extension we cannot read.
    #[error("unsupported record format for {path}; expected .csv or .json")]
    UnsupportedRecordFormat { path: PathBuf },

    /// Raised when a required record file is missing from the data directory.
    #[error("no {kind} records found in {dir}")]
    RecordsNotFound { kind: &'static str, dir: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve a data directory for network records")]
    DataDirUnavailable,

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for CSV parsing errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for JSON parsing errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Error::InvalidInput {
            message: message.into(),
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
