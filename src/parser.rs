use crate::timestamp::{TimestampFormatError, text_to_timestamp};
use chrono::NaiveDateTime;
use thiserror::Error;

mod entities;

pub use entities::{DisplayRecord, ParsedRecord};

/// Number of space-separated tokens that precede the message.
const HEADER_TOKENS: usize = 6;

const LEVEL_TOKEN: usize = 2;
const SESSION_ID_TOKEN: usize = 3;
const BUSINESS_ID_TOKEN: usize = 4;
const REQUEST_ID_TOKEN: usize = 5;

/// Parse error types
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Malformed log line: {reason}")]
    MalformedLine { reason: String },

    #[error(transparent)]
    Timestamp(#[from] TimestampFormatError),
}

impl ParseError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        ParseError::MalformedLine {
            reason: reason.into(),
        }
    }
}

/// Parses a single log line into a `ParsedRecord`.
///
/// Expected layout:
///
/// ```text
/// 2012-09-13 16:04:22 DEBUG SID:34523 BID:1329 RID:65d33 'Starting new session'
/// ```
///
/// Tokens are split on single spaces and read by position. Any structural
/// deviation is reported as an error; fields are never defaulted.
pub fn parse_log_line(line: &str) -> Result<ParsedRecord, ParseError> {
    let tokens = header_tokens(line)?;

    Ok(ParsedRecord {
        timestamp: timestamp_from_tokens(&tokens)?,
        level: tokens[LEVEL_TOKEN].to_string(),
        session_id: tag_value(tokens[SESSION_ID_TOKEN])?.to_string(),
        business_id: tag_value(tokens[BUSINESS_ID_TOKEN])?.to_string(),
        request_id: tag_value(tokens[REQUEST_ID_TOKEN])?.to_string(),
        message: log_message(line)?.to_string(),
    })
}

/// Extracts the message: everything between the first and the last `'`.
///
/// Quotes inside the message are not escaped, so the outermost pair wins.
pub fn log_message(line: &str) -> Result<&str, ParseError> {
    let start = line
        .find('\'')
        .ok_or_else(|| ParseError::malformed("missing quoted message"))?;
    let end = line.rfind('\'').unwrap_or(start);
    if end == start {
        return Err(ParseError::malformed("unterminated quoted message"));
    }
    Ok(&line[start + 1..end])
}

/// Extracts the log level token.
pub fn log_level(line: &str) -> Result<&str, ParseError> {
    Ok(header_tokens(line)?[LEVEL_TOKEN])
}

/// Extracts the value of the `SID:` token.
pub fn session_id(line: &str) -> Result<&str, ParseError> {
    tag_value(header_tokens(line)?[SESSION_ID_TOKEN])
}

/// Extracts the value of the `BID:` token.
pub fn business_id(line: &str) -> Result<&str, ParseError> {
    tag_value(header_tokens(line)?[BUSINESS_ID_TOKEN])
}

/// Extracts the value of the `RID:` token.
pub fn request_id(line: &str) -> Result<&str, ParseError> {
    tag_value(header_tokens(line)?[REQUEST_ID_TOKEN])
}

/// Parses the date and time tokens into a timestamp.
pub fn log_time(line: &str) -> Result<NaiveDateTime, ParseError> {
    timestamp_from_tokens(&header_tokens(line)?)
}

fn header_tokens(line: &str) -> Result<Vec<&str>, ParseError> {
    let tokens: Vec<&str> = line.splitn(HEADER_TOKENS + 1, ' ').collect();
    if tokens.len() < HEADER_TOKENS {
        return Err(ParseError::malformed(format!(
            "expected at least {} space-separated fields, found {}",
            HEADER_TOKENS,
            tokens.len()
        )));
    }
    Ok(tokens)
}

fn timestamp_from_tokens(tokens: &[&str]) -> Result<NaiveDateTime, ParseError> {
    let timestamp = format!("{} {}", tokens[0], tokens[1]);
    Ok(text_to_timestamp(&timestamp)?)
}

/// Returns the part after the first `:` and before any following `:`.
fn tag_value(token: &str) -> Result<&str, ParseError> {
    token
        .split(':')
        .nth(1)
        .ok_or_else(|| ParseError::malformed(format!("expected TAG:value, got '{}'", token)))
}
