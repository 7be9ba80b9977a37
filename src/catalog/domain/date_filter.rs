use crate::shared::error::CatalogError;
use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Literal accepted in place of a date for `*_on` filters
pub const TODAY: &str = "today";

/// Which side of a date range a filter bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBound {
    /// Exclusive lower bound (`*_after`)
    After,
    /// Exclusive upper bound (`*_before`)
    Before,
    /// Exact day (`*_on`), also accepts `today`
    On,
}

/// Checks a date filter value before any request is made
///
/// Values must be zero-padded `YYYY-MM-DD` calendar dates. `today`
/// (any case) passes without parsing for [`DateBound::On`] only.
pub fn validate_date(filter: &str, value: &str, bound: DateBound) -> Result<(), CatalogError> {
    if bound == DateBound::On && value.eq_ignore_ascii_case(TODAY) {
        return Ok(());
    }

    if is_iso_date_shape(value) && NaiveDate::parse_from_str(value, DATE_FORMAT).is_ok() {
        return Ok(());
    }

    Err(CatalogError::InvalidDate {
        filter: filter.to_string(),
        value: value.to_string(),
    })
}

// chrono accepts unpadded fields, the service does not
fn is_iso_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
