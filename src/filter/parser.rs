use super::criterion::Criterion;
use super::error::CriterionParseError;
use crate::timestamp::timestamp_to_text;
use std::fmt;
use std::str::FromStr;

/// Separator between the start and end of a `date:` range
const RANGE_SEPARATOR: &str = "..";

/// Kinds of criterion that can be named in an expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterType {
    Level,
    SessionId,
    BusinessId,
    RequestId,
    DateRange,
}

impl FromStr for FilterType {
    type Err = CriterionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "level" | "lvl" | "l" => Ok(FilterType::Level),
            "sid" | "session" => Ok(FilterType::SessionId),
            "bid" | "business" => Ok(FilterType::BusinessId),
            "rid" | "request" => Ok(FilterType::RequestId),
            "date" | "d" => Ok(FilterType::DateRange),
            _ => Err(CriterionParseError::UnknownFilterType(s.to_string())),
        }
    }
}

impl FilterType {
    /// Get the canonical name of this filter type
    pub fn canonical_name(&self) -> &'static str {
        match self {
            FilterType::Level => "level",
            FilterType::SessionId => "sid",
            FilterType::BusinessId => "bid",
            FilterType::RequestId => "rid",
            FilterType::DateRange => "date",
        }
    }
}

/// Parses a single `type:value` term, e.g. `sid:34523` or
/// `date:2012-09-13 00:00:00..2012-09-13 23:59:59`.
impl FromStr for Criterion {
    type Err = CriterionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (kind, value) = s.split_once(':').ok_or_else(|| {
            CriterionParseError::InvalidExpression(format!(
                "Expected 'type:value' format, got: {}",
                s
            ))
        })?;

        let filter_type: FilterType = kind.trim().parse()?;
        let value = value.trim();
        if value.is_empty() {
            return Err(CriterionParseError::EmptyValue(
                filter_type.canonical_name().to_string(),
            ));
        }

        let criterion = match filter_type {
            FilterType::Level => Criterion::by_level(value),
            FilterType::SessionId => Criterion::by_session_id(value),
            FilterType::BusinessId => Criterion::by_business_id(value),
            FilterType::RequestId => Criterion::by_request_id(value),
            FilterType::DateRange => {
                let (start, end) = value
                    .split_once(RANGE_SEPARATOR)
                    .ok_or_else(|| CriterionParseError::InvalidDateRange(value.to_string()))?;
                Criterion::by_date_range(start.trim(), end.trim())?
            }
        };

        Ok(criterion)
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Criterion::ByLevel(value)
            | Criterion::BySessionId(value)
            | Criterion::ByBusinessId(value)
            | Criterion::ByRequestId(value) => write!(f, "{}:{}", self.kind(), value),
            Criterion::ByDateRange { start, end } => write!(
                f,
                "date:{}{}{}",
                timestamp_to_text(start),
                RANGE_SEPARATOR,
                timestamp_to_text(end)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_terms() {
        assert_eq!(
            "level:debug".parse::<Criterion>().unwrap(),
            Criterion::ByLevel("DEBUG".to_string())
        );
        assert_eq!(
            "sid:34523".parse::<Criterion>().unwrap(),
            Criterion::by_session_id("34523")
        );
        assert_eq!(
            "business:1329".parse::<Criterion>().unwrap(),
            Criterion::by_business_id("1329")
        );
        assert_eq!(
            "RID:65d33".parse::<Criterion>().unwrap(),
            Criterion::by_request_id("65d33")
        );
    }

    #[test]
    fn test_parse_date_range() {
        let criterion: Criterion = "date:2012-09-13 16:04:22..2012-09-14 16:05:32"
            .parse()
            .unwrap();
        assert_eq!(
            criterion,
            Criterion::by_date_range("2012-09-13 16:04:22", "2012-09-14 16:05:32").unwrap()
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let original =
            Criterion::by_date_range("2012-09-12 16:04:22", "2012-09-13 23:59:59").unwrap();
        let text = original.to_string();
        assert_eq!(text, "date:2012-09-12 16:04:22..2012-09-13 23:59:59");
        assert_eq!(text.parse::<Criterion>().unwrap(), original);
        assert_eq!(Criterion::by_request_id("54ff3").to_string(), "rid:54ff3");
    }

    #[test]
    fn test_invalid_terms() {
        assert!(matches!(
            "34523".parse::<Criterion>(),
            Err(CriterionParseError::InvalidExpression(_))
        ));
        assert!(matches!(
            "component:core".parse::<Criterion>(),
            Err(CriterionParseError::UnknownFilterType(_))
        ));
        assert!(matches!(
            "sid:".parse::<Criterion>(),
            Err(CriterionParseError::EmptyValue(_))
        ));
        assert!(matches!(
            "date:2012-09-13 16:04:22".parse::<Criterion>(),
            Err(CriterionParseError::InvalidDateRange(_))
        ));
        assert!(matches!(
            "date:yesterday..today".parse::<Criterion>(),
            Err(CriterionParseError::Timestamp(_))
        ));
    }
}
