use crate::timestamp::TimestampFormatError;
use thiserror::Error;

/// Errors that can occur when parsing criterion expressions
#[derive(Debug, Error)]
pub enum CriterionParseError {
    #[error("Unknown filter type: '{0}'. Valid types are: level (l), sid, bid, rid, date")]
    UnknownFilterType(String),

    #[error("Empty filter value for type '{0}'")]
    EmptyValue(String),

    #[error("Invalid date range '{0}'. Expected 'date:<start>..<end>'")]
    InvalidDateRange(String),

    #[error("Invalid filter expression: {0}")]
    InvalidExpression(String),

    #[error(transparent)]
    Timestamp(#[from] TimestampFormatError),
}
