use crate::parser::{ParseError, ParsedRecord, parse_log_line};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// The log source could not be opened or read.
#[derive(Debug, Error)]
#[error("Log file '{}' can not be read: {source}", .path.display())]
pub struct SourceError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// A line failed to parse while the policy was `Abort`.
#[derive(Debug, Error)]
#[error("Line {line_number}: {source}")]
pub struct LineError {
    /// 1-based line number in the source
    pub line_number: usize,
    #[source]
    pub source: ParseError,
}

#[derive(Debug, Error)]
pub enum ReadError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Line(#[from] LineError),
}

/// What to do with a line that fails to parse
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Drop the line, remember its number, keep going
    #[default]
    Skip,
    /// Stop at the first bad line
    Abort,
}

/// Records parsed from a source plus the lines that were dropped
#[derive(Debug, Default)]
pub struct ParseOutcome {
    pub records: Vec<ParsedRecord>,
    /// 1-based numbers of lines skipped under `MalformedPolicy::Skip`
    pub skipped_lines: Vec<usize>,
}

/// One line read from a source: its text, or the reason it is not text.
pub type SourceLine = Result<String, ParseError>;

/// Reads all lines of a file with line terminators stripped.
///
/// A line that is not valid UTF-8 is returned as a `MalformedLine` error so
/// the malformed-line policy decides its fate; only I/O failures are fatal.
pub fn read_log_lines(path: impl AsRef<Path>) -> Result<Vec<SourceLine>, SourceError> {
    let path = path.as_ref();
    let source_error = |source: std::io::Error| SourceError {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(source_error)?;
    let mut lines = Vec::new();
    for raw in BufReader::new(file).split(b'\n') {
        let mut raw = raw.map_err(source_error)?;
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }
        lines.push(String::from_utf8(raw).map_err(|err| {
            ParseError::malformed(format!("line is not valid UTF-8: {}", err.utf8_error()))
        }));
    }
    Ok(lines)
}

/// Parses lines in order. Blank lines are ignored under either policy.
pub fn parse_log_lines<I, S>(lines: I, policy: MalformedPolicy) -> Result<ParseOutcome, LineError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parsed = lines
        .into_iter()
        .enumerate()
        .filter(|(_, line)| !line.as_ref().trim().is_empty())
        .map(|(idx, line)| (idx + 1, parse_log_line(line.as_ref())));
    collect_records(parsed, policy)
}

/// Reads and parses a log file
pub fn parse_log_file(
    path: impl AsRef<Path>,
    policy: MalformedPolicy,
) -> Result<ParseOutcome, ReadError> {
    let lines = read_log_lines(path)?;
    let parsed = lines
        .into_iter()
        .enumerate()
        .filter(|(_, line)| !matches!(line, Ok(text) if text.trim().is_empty()))
        .map(|(idx, line)| (idx + 1, line.and_then(|text| parse_log_line(&text))));
    Ok(collect_records(parsed, policy)?)
}

/// Applies the malformed-line policy to `(line_number, result)` pairs.
fn collect_records<I>(parsed: I, policy: MalformedPolicy) -> Result<ParseOutcome, LineError>
where
    I: IntoIterator<Item = (usize, Result<ParsedRecord, ParseError>)>,
{
    let mut outcome = ParseOutcome::default();

    for (line_number, result) in parsed {
        match result {
            Ok(record) => outcome.records.push(record),
            Err(source) => match policy {
                MalformedPolicy::Skip => {
                    warn!(line_number, error = %source, "skipping malformed log line");
                    outcome.skipped_lines.push(line_number);
                }
                MalformedPolicy::Abort => {
                    return Err(LineError {
                        line_number,
                        source,
                    });
                }
            },
        }
    }

    debug!(
        parsed = outcome.records.len(),
        skipped = outcome.skipped_lines.len(),
        "parsed log lines"
    );
    Ok(outcome)
}
