use crate::timestamp::timestamp_to_text;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One log line decomposed into its typed fields.
///
/// Records are built once by the parser and never modified; the filter engine
/// compares the typed `timestamp` directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRecord {
    /// Date and time of the entry, second precision, no timezone
    pub timestamp: NaiveDateTime,
    /// Log level label (e.g., "DEBUG", "ERROR")
    pub level: String,
    /// Value of the `SID:` token
    pub session_id: String,
    /// Value of the `BID:` token
    pub business_id: String,
    /// Value of the `RID:` token
    pub request_id: String,
    /// Text between the outermost pair of single quotes
    pub message: String,
}

/// A selected record ready for output, with its timestamp rendered as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRecord {
    pub timestamp: String,
    pub level: String,
    pub session_id: String,
    pub business_id: String,
    pub request_id: String,
    pub message: String,
}

impl From<&ParsedRecord> for DisplayRecord {
    fn from(record: &ParsedRecord) -> Self {
        DisplayRecord {
            timestamp: timestamp_to_text(&record.timestamp),
            level: record.level.clone(),
            session_id: record.session_id.clone(),
            business_id: record.business_id.clone(),
            request_id: record.request_id.clone(),
            message: record.message.clone(),
        }
    }
}

impl From<ParsedRecord> for DisplayRecord {
    fn from(record: ParsedRecord) -> Self {
        DisplayRecord {
            timestamp: timestamp_to_text(&record.timestamp),
            level: record.level,
            session_id: record.session_id,
            business_id: record.business_id,
            request_id: record.request_id,
            message: record.message,
        }
    }
}

impl fmt::Display for DisplayRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} sid:{} bid:{} rid:{} message:{}",
            self.timestamp,
            self.level,
            self.session_id,
            self.business_id,
            self.request_id,
            self.message
        )
    }
}
