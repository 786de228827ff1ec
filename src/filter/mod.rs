//! Criterion construction and matching
//!
//! A [`Criterion`] selects records by one field or by an inclusive timestamp
//! range. Exactly one criterion is applied per search; combining criteria is
//! left to callers.
//!
//! # Expression syntax
//!
//! ```text
//! level:DEBUG                                   # by level (case-insensitive value)
//! sid:34523                                     # by session id
//! bid:1329                                      # by business id
//! rid:65d33                                     # by request id
//! date:2012-09-13 16:04:22..2012-09-14 00:00:00 # by inclusive timestamp range
//! ```
//!
//! Aliases: `l:`/`lvl:`, `session:`, `business:`, `request:`, `d:`.

pub mod criterion;
pub mod error;
pub mod parser;
pub mod search;

pub use criterion::{Criterion, DateBound};
pub use error::CriterionParseError;
pub use parser::FilterType;
pub use search::search_results;
