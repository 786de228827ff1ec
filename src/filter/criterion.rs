use crate::parser::ParsedRecord;
use crate::timestamp::{TimestampFormatError, text_to_timestamp};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A single rule selecting records by one field or by a timestamp range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Criterion {
    /// Matches records whose level equals this label, uppercased
    ByLevel(String),
    /// Matches records with exactly this session id
    BySessionId(String),
    /// Matches records with exactly this business id
    ByBusinessId(String),
    /// Matches records with exactly this request id
    ByRequestId(String),
    /// Matches records with `start <= timestamp <= end`
    ByDateRange {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

/// A date-range bound, given either as a typed value or as canonical text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateBound {
    Timestamp(NaiveDateTime),
    Text(String),
}

impl DateBound {
    /// Normalizes the bound to a typed timestamp.
    pub fn resolve(self) -> Result<NaiveDateTime, TimestampFormatError> {
        match self {
            DateBound::Timestamp(ts) => Ok(ts),
            DateBound::Text(text) => text_to_timestamp(&text),
        }
    }
}

impl From<NaiveDateTime> for DateBound {
    fn from(ts: NaiveDateTime) -> Self {
        DateBound::Timestamp(ts)
    }
}

impl From<&str> for DateBound {
    fn from(text: &str) -> Self {
        DateBound::Text(text.to_string())
    }
}

impl From<String> for DateBound {
    fn from(text: String) -> Self {
        DateBound::Text(text)
    }
}

impl Criterion {
    /// Select by level. The value is rendered to text and uppercased, so a
    /// numeric level is accepted but never matches a stored label.
    pub fn by_level(level: impl Display) -> Self {
        Criterion::ByLevel(level.to_string().to_uppercase())
    }

    pub fn by_session_id(id: impl Display) -> Self {
        Criterion::BySessionId(id.to_string())
    }

    pub fn by_business_id(id: impl Display) -> Self {
        Criterion::ByBusinessId(id.to_string())
    }

    pub fn by_request_id(id: impl Display) -> Self {
        Criterion::ByRequestId(id.to_string())
    }

    /// Select by inclusive timestamp range. Text bounds are parsed here;
    /// a reversed range is accepted and matches nothing.
    pub fn by_date_range(
        start: impl Into<DateBound>,
        end: impl Into<DateBound>,
    ) -> Result<Self, TimestampFormatError> {
        Ok(Criterion::ByDateRange {
            start: start.into().resolve()?,
            end: end.into().resolve()?,
        })
    }

    /// Check if a record satisfies this criterion
    pub fn matches(&self, record: &ParsedRecord) -> bool {
        match self {
            Criterion::ByLevel(level) => record.level == level.to_uppercase(),
            Criterion::BySessionId(id) => record.session_id == *id,
            Criterion::ByBusinessId(id) => record.business_id == *id,
            Criterion::ByRequestId(id) => record.request_id == *id,
            Criterion::ByDateRange { start, end } => {
                *start <= record.timestamp && record.timestamp <= *end
            }
        }
    }

    /// Short name of the criterion kind, as used in expressions
    pub fn kind(&self) -> &'static str {
        match self {
            Criterion::ByLevel(_) => "level",
            Criterion::BySessionId(_) => "sid",
            Criterion::ByBusinessId(_) => "bid",
            Criterion::ByRequestId(_) => "rid",
            Criterion::ByDateRange { .. } => "date",
        }
    }
}
