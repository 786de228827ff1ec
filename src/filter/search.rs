use super::criterion::Criterion;
use crate::parser::{DisplayRecord, ParsedRecord};

/// Applies `criterion` to each record in order and returns the matches with
/// their timestamps rendered as text.
///
/// Records are tested first; only records that pass are converted.
pub fn search_results<'a, I>(criterion: &Criterion, records: I) -> Vec<DisplayRecord>
where
    I: IntoIterator<Item = &'a ParsedRecord>,
{
    records
        .into_iter()
        .filter(|record| criterion.matches(record))
        .map(DisplayRecord::from)
        .collect()
}
