use chrono::NaiveDateTime;
use thiserror::Error;

/// Canonical timestamp layout used both in log lines and in output.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A date/time string did not match `YYYY-MM-DD HH:MM:SS`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Malformed timestamp '{input}'. Expected format: YYYY-MM-DD HH:MM:SS")]
pub struct TimestampFormatError {
    pub input: String,
    /// Set when chrono rejected the text; `None` when it parsed but is not canonical
    #[source]
    pub source: Option<chrono::ParseError>,
}

/// Renders a timestamp in the canonical format, second precision, no offset.
pub fn timestamp_to_text(timestamp: &NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Parses a canonical timestamp string.
///
/// chrono accepts unpadded fields, signs and any run of whitespace for the
/// separator, so the result must render back to exactly `text`.
pub fn text_to_timestamp(text: &str) -> Result<NaiveDateTime, TimestampFormatError> {
    let parsed = NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT).map_err(|source| {
        TimestampFormatError {
            input: text.to_string(),
            source: Some(source),
        }
    })?;

    if timestamp_to_text(&parsed) != text {
        return Err(TimestampFormatError {
            input: text.to_string(),
            source: None,
        });
    }
    Ok(parsed)
}
