// File: crates/chart-downsample/src/error.rs
// Summary: Error type shared by timestamp conversion, config parsing and refresh reporting.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DownsampleError {
    /// A timestamp value could not be interpreted as a point in time.
    #[error("invalid timestamp {value:?}")]
    InvalidTimestamp { value: String },

    /// A date-time lies outside the representable epoch-millisecond range.
    #[error("timestamp out of range: {0}")]
    TimestampOutOfRange(String),

    #[error("invalid downsample options: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DownsampleError>;
