use crate::domain::model::YearMonth;
use crate::utils::error::{Result, UtilError};
use crate::utils::validation::validate_non_empty_string;
use num_bigint::BigInt;

pub const NOT_A_STRING_REASON: &str = "Input must be a string";
pub const EMPTY_STRING_REASON: &str = "Empty string";
pub const UNSUPPORTED_SEPARATOR_REASON: &str = "Unsupported date separator";
pub const MISSING_MONTH_REASON: &str = "Missing month";
pub const NON_INTEGER_REASON: &str = "Year and month must be integers";

/// Parses fragments such as `"2023.06"`, `"2023-06-01"` or `" 2023.6 "`.
///
/// A `.` separator takes precedence over `-`. Anything after the month
/// segment is ignored.
pub fn parse_year_month(s: &str) -> Result<YearMonth> {
    let s = validate_non_empty_string("year_month", s, EMPTY_STRING_REASON)?;

    let separator = if s.contains('.') {
        '.'
    } else if s.contains('-') {
        '-'
    } else {
        tracing::debug!(input = s, "no '.' or '-' separator");
        return Err(UtilError::invalid_input(UNSUPPORTED_SEPARATOR_REASON));
    };

    let mut parts = s.split(separator);
    let (year, month) = match (parts.next(), parts.next()) {
        (Some(year), Some(month)) => (year, month),
        _ => return Err(UtilError::invalid_input(MISSING_MONTH_REASON)),
    };

    let year = parse_integer(year)?;
    let month = parse_integer(month)?;

    let year_month = YearMonth::new(year, month)?;
    tracing::trace!(input = s, %year_month, "parsed year-month");
    Ok(year_month)
}

/// Same as [`parse_year_month`] for dynamically typed JSON values.
pub fn parse_year_month_value(value: &serde_json::Value) -> Result<YearMonth> {
    match value.as_str() {
        Some(s) => parse_year_month(s),
        None => {
            tracing::debug!(input = %value, "year-month input is not a string");
            Err(UtilError::invalid_input(NOT_A_STRING_REASON))
        }
    }
}

/// Parses a trimmed decimal integer of any magnitude.
pub(crate) fn parse_integer(segment: &str) -> Result<BigInt> {
    segment.trim().parse::<BigInt>().map_err(|e| {
        tracing::debug!(segment, error = %e, "segment is not an integer");
        UtilError::invalid_input(NON_INTEGER_REASON)
    })
}
