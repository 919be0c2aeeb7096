use crate::utils::error::{Result, UtilError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Trims `value` and rejects it when nothing is left.
pub fn validate_non_empty_string<'a>(
    field_name: &str,
    value: &'a str,
    reason: &str,
) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        tracing::debug!(field = field_name, value, "rejected blank value");
        return Err(UtilError::invalid_input(reason));
    }
    Ok(trimmed)
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
    reason: &str,
) -> Result<T> {
    if value < min || value > max {
        tracing::debug!(
            field = field_name,
            value = %value,
            "value must be between {} and {}",
            min,
            max
        );
        return Err(UtilError::invalid_input(reason));
    }
    Ok(value)
}
