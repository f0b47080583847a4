use chrono::NaiveDate;

use crate::error::AppError;

/// Checks that every named field is present and non-empty, returning the
/// unwrapped values in declaration order. All absent fields are reported in
/// one error, not just the first. No normalization is applied; a field of
/// whitespace is still a value.
pub fn require_fields<'a, const N: usize>(
    fields: [(&str, Option<&'a str>); N],
) -> Result<[&'a str; N], AppError> {
    let missing: Vec<String> = fields
        .iter()
        .filter(|(_, value)| !matches!(value, Some(v) if !v.is_empty()))
        .map(|(name, _)| (*name).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(AppError::MissingFields(missing));
    }
    Ok(fields.map(|(_, value)| value.unwrap_or_default()))
}

/// A leave range is valid when it starts on or before the day it ends.
pub fn check_date_order(start: NaiveDate, end: NaiveDate) -> Result<(), AppError> {
    if start > end {
        return Err(AppError::InvalidRange);
    }
    Ok(())
}
