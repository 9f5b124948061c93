// ABOUTME: Parse error types for pool length and threshold pace inputs
// ABOUTME: Converted into AppError with INVALID_FORMAT or VALUE_OUT_OF_RANGE codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use super::{AppError, ErrorCode};
use thiserror::Error;

/// Failure to turn a string like `"25yd"` into a pool length
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolLengthParseError {
    /// Empty or whitespace-only input
    #[error("poolLength is empty")]
    Empty,
    /// Numeric part missing or not a number
    #[error("poolLength '{input}' does not start with a number")]
    InvalidNumber {
        /// Raw input
        input: String,
    },
    /// No unit suffix was given
    #[error("poolLength '{input}' needs a unit suffix such as 'm' or 'yd'")]
    MissingUnit {
        /// Raw input
        input: String,
    },
    /// Unit suffix not recognised
    #[error("poolLength unit '{unit}' is not supported (use 'm' or 'yd')")]
    UnknownUnit {
        /// Unrecognised suffix
        unit: String,
    },
    /// Number parsed but is not finite and positive
    #[error("poolLength must be a positive finite number")]
    NotPositive,
}

/// Failure to turn a threshold pace into seconds per 100
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaceParseError {
    /// Not `m:ss` and not a plain number of seconds
    #[error("thresholdPace '{input}' must be seconds per 100 or 'm:ss'")]
    InvalidFormat {
        /// Raw input
        input: String,
    },
    /// Seconds component of `m:ss` is 60 or more
    #[error("thresholdPace '{input}' has seconds out of range")]
    SecondsOutOfRange {
        /// Raw input
        input: String,
    },
    /// Parsed value is not finite and positive
    #[error("thresholdPace must be a positive number of seconds")]
    NotPositive,
}

impl From<PoolLengthParseError> for AppError {
    fn from(error: PoolLengthParseError) -> Self {
        let code = match error {
            PoolLengthParseError::NotPositive => ErrorCode::ValueOutOfRange,
            _ => ErrorCode::InvalidFormat,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

impl From<PaceParseError> for AppError {
    fn from(error: PaceParseError) -> Self {
        let code = match error {
            PaceParseError::NotPositive => ErrorCode::ValueOutOfRange,
            _ => ErrorCode::InvalidFormat,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}
