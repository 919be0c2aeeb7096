use crate::domain::model::NumericInput;
use crate::utils::error::Result;

/// Divides `a` by `b`, accepting numbers or numeric strings.
///
/// Returns `Ok(None)` when the divisor is zero (including `-0.0`) and
/// `InvalidInput` when either side cannot be read as a number.
pub fn safe_divide(
    a: impl Into<NumericInput>,
    b: impl Into<NumericInput>,
) -> Result<Option<f64>> {
    let x = a.into().to_f64()?;
    let y = b.into().to_f64()?;

    if y == 0.0 {
        tracing::debug!(dividend = x, "division by zero, no result");
        return Ok(None);
    }

    let quotient = x / y;
    tracing::trace!(dividend = x, divisor = y, quotient, "divided");
    Ok(Some(quotient))
}

/// Same as [`safe_divide`] for dynamically typed JSON values.
pub fn safe_divide_values(a: &serde_json::Value, b: &serde_json::Value) -> Result<Option<f64>> {
    let a = NumericInput::try_from(a)?;
    let b = NumericInput::try_from(b)?;
    safe_divide(a, b)
}
