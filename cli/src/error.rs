use item_core::ApiError;
use thiserror::Error;

/// Anything that aborts a client command.
#[derive(Debug, Error)]
pub enum CliError {
    /// The request never produced a response (connection refused, reset, ...).
    #[error("{0}")]
    Transport(String),

    #[error("expected an integer for \"{field}\", got {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("input ended before {0} was entered")]
    MissingInput(&'static str),

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Api(#[from] ApiError),
}
