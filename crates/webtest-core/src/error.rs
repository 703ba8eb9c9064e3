//! Shared error type across webtest crates.

use thiserror::Error;

/// Stable error codes (used in logs and tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// A metric family with the same name is already registered.
    DuplicateName,
    /// Observation supplied the wrong number of label values.
    LabelCardinality,
    /// Metric definition is malformed (name, labels, buckets).
    InvalidMetric,
    /// Configuration could not be loaded or failed validation.
    BadConfig,
    /// Host name could not be determined.
    Hostname,
    /// I/O failure (bind, serve, read).
    Io,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::DuplicateName => "DUPLICATE_NAME",
            ErrorCode::LabelCardinality => "LABEL_CARDINALITY",
            ErrorCode::InvalidMetric => "INVALID_METRIC",
            ErrorCode::BadConfig => "BAD_CONFIG",
            ErrorCode::Hostname => "HOSTNAME",
            ErrorCode::Io => "IO",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, WebtestError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum WebtestError {
    #[error("duplicate metric family: {0}")]
    DuplicateName(String),
    #[error("metric {family}: expected {expected} label values, got {got}")]
    LabelCardinality {
        family: String,
        expected: usize,
        got: usize,
    },
    #[error("invalid metric: {0}")]
    InvalidMetric(String),
    #[error("config: {0}")]
    Config(String),
    #[error("cannot get hostname: {0}")]
    Hostname(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

impl WebtestError {
    pub fn code(&self) -> ErrorCode {
        match self {
            WebtestError::DuplicateName(_) => ErrorCode::DuplicateName,
            WebtestError::LabelCardinality { .. } => ErrorCode::LabelCardinality,
            WebtestError::InvalidMetric(_) => ErrorCode::InvalidMetric,
            WebtestError::Config(_) => ErrorCode::BadConfig,
            WebtestError::Hostname(_) => ErrorCode::Hostname,
            WebtestError::Io(_) => ErrorCode::Io,
        }
    }
}
