use strum_macros::{Display, EnumString};
use thiserror::Error;

/// Failure classes for the analytics pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum ErrCode {
    /// No usable rows survived cleaning (or a date filter)
    #[strum(serialize = "EMPTY_INPUT")]
    EmptyInput,
    /// Caller-supplied date range with start >= end
    #[strum(serialize = "INVALID_RANGE")]
    InvalidRange,
    /// Bad parameter value (zero window, zero row cap, ...)
    #[strum(serialize = "PARA_ERROR")]
    ParaError,
    /// Malformed input data (unparseable date, duplicate timestamps, ...)
    #[strum(serialize = "DATA_INVALID")]
    DataInvalid,
}

#[derive(Debug, Error)]
#[error("{code}: {msg}")]
pub struct AnalysisError {
    pub code: ErrCode,
    pub msg: String,
}

impl AnalysisError {
    pub fn new(message: impl Into<String>, code: ErrCode) -> Self {
        Self {
            code,
            msg: message.into(),
        }
    }

    pub fn is_empty_input(&self) -> bool {
        self.code == ErrCode::EmptyInput
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.code, ErrCode::EmptyInput | ErrCode::InvalidRange)
    }
}
