use crate::core::year_month::parse_integer;
use crate::utils::error::{Result, UtilError};
use crate::utils::validation::{validate_range, Validate};
use num_bigint::BigInt;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

pub const NON_NUMERIC_REASON: &str = "Inputs must be numbers or numeric strings";
pub const MONTH_OUT_OF_RANGE_REASON: &str = "Month out of range";

/// A value accepted by [`crate::safe_divide`]: a native number or a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl NumericInput {
    /// Coerces the input to `f64`.
    ///
    /// Strings are trimmed and then parsed with the standard float grammar, so
    /// `"3.5"`, `"-2"`, `"1e3"` and `"inf"` are all accepted.
    pub fn to_f64(&self) -> Result<f64> {
        match self {
            NumericInput::Integer(n) => Ok(*n as f64),
            NumericInput::Float(x) => Ok(*x),
            NumericInput::Text(s) => s.trim().parse::<f64>().map_err(|e| {
                tracing::debug!(input = %s, error = %e, "not a numeric string");
                UtilError::invalid_input(NON_NUMERIC_REASON)
            }),
        }
    }
}

impl From<i32> for NumericInput {
    fn from(value: i32) -> Self {
        NumericInput::Integer(value.into())
    }
}

impl From<i64> for NumericInput {
    fn from(value: i64) -> Self {
        NumericInput::Integer(value)
    }
}

impl From<u32> for NumericInput {
    fn from(value: u32) -> Self {
        NumericInput::Integer(value.into())
    }
}

impl From<f32> for NumericInput {
    fn from(value: f32) -> Self {
        NumericInput::Float(value.into())
    }
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        NumericInput::Float(value)
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        NumericInput::Text(value.to_string())
    }
}

impl From<String> for NumericInput {
    fn from(value: String) -> Self {
        NumericInput::Text(value)
    }
}

impl TryFrom<&serde_json::Value> for NumericInput {
    type Error = UtilError;

    fn try_from(value: &serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::Number(n) => match (n.as_i64(), n.as_f64()) {
                (Some(i), _) => Ok(NumericInput::Integer(i)),
                (None, Some(f)) => Ok(NumericInput::Float(f)),
                (None, None) => Err(UtilError::invalid_input(NON_NUMERIC_REASON)),
            },
            serde_json::Value::String(s) => Ok(NumericInput::Text(s.clone())),
            other => {
                tracing::debug!(input = %other, "unsupported input type for division");
                Err(UtilError::invalid_input(NON_NUMERIC_REASON))
            }
        }
    }
}

/// Year as it appears on the wire: a JSON integer, or a decimal string for
/// years that do not fit in `i64`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RawYear {
    Integer(i64),
    Text(String),
}

/// Unvalidated wire form of a [`YearMonth`].
#[derive(Debug, Deserialize)]
pub struct RawYearMonth {
    pub year: RawYear,
    pub month: i64,
}

/// A parsed `(year, month)` pair. The month always lies in `1..=12`; the year
/// has no size limit.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawYearMonth")]
pub struct YearMonth {
    #[serde(serialize_with = "serialize_year")]
    year: BigInt,
    month: u8,
}

impl YearMonth {
    pub fn new(year: impl Into<BigInt>, month: impl Into<BigInt>) -> Result<Self> {
        let month: BigInt = month.into();
        let month = u8::try_from(&month)
            .map_err(|_| UtilError::invalid_input(MONTH_OUT_OF_RANGE_REASON))?;
        let year_month = Self {
            year: year.into(),
            month,
        };
        year_month.validate()?;
        Ok(year_month)
    }

    pub fn year(&self) -> &BigInt {
        &self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }
}

impl Validate for YearMonth {
    fn validate(&self) -> Result<()> {
        validate_range("month", self.month, 1, 12, MONTH_OUT_OF_RANGE_REASON)?;
        Ok(())
    }
}

impl TryFrom<RawYearMonth> for YearMonth {
    type Error = UtilError;

    fn try_from(raw: RawYearMonth) -> Result<Self> {
        let year = match raw.year {
            RawYear::Integer(year) => BigInt::from(year),
            RawYear::Text(year) => parse_integer(&year)?,
        };
        YearMonth::new(year, raw.month)
    }
}

impl From<YearMonth> for (BigInt, u8) {
    fn from(value: YearMonth) -> Self {
        (value.year, value.month)
    }
}

fn serialize_year<S: Serializer>(
    year: &BigInt,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match i64::try_from(year) {
        Ok(year) => serializer.serialize_i64(year),
        Err(_) => serializer.collect_str(year),
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = UtilError;

    fn from_str(s: &str) -> Result<Self> {
        crate::core::year_month::parse_year_month(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numeric_input_coercion() {
        assert_eq!(NumericInput::from(10).to_f64(), Ok(10.0));
        assert_eq!(NumericInput::from(2.5).to_f64(), Ok(2.5));
        assert_eq!(NumericInput::from("3.5").to_f64(), Ok(3.5));
        assert_eq!(NumericInput::from(" -2 ").to_f64(), Ok(-2.0));
        assert_eq!(NumericInput::from("1e3").to_f64(), Ok(1000.0));

        let err = NumericInput::from("abc").to_f64().unwrap_err();
        assert_eq!(err.reason(), NON_NUMERIC_REASON);
        assert!(NumericInput::from("").to_f64().is_err());
    }

    #[test]
    fn test_numeric_input_from_json() {
        assert_eq!(
            NumericInput::try_from(&json!(10)),
            Ok(NumericInput::Integer(10))
        );
        assert_eq!(
            NumericInput::try_from(&json!(0.5)),
            Ok(NumericInput::Float(0.5))
        );
        assert_eq!(
            NumericInput::try_from(&json!("10")),
            Ok(NumericInput::Text("10".to_string()))
        );
        assert!(NumericInput::try_from(&serde_json::Value::Null).is_err());
        assert!(NumericInput::try_from(&json!(true)).is_err());
        assert!(NumericInput::try_from(&json!([1])).is_err());
        assert!(NumericInput::try_from(&json!({"a": 1})).is_err());
    }

    #[test]
    fn test_numeric_input_deserialize_untagged() {
        let values: Vec<NumericInput> = serde_json::from_str(r#"[10, 2.5, "3.5"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                NumericInput::Integer(10),
                NumericInput::Float(2.5),
                NumericInput::Text("3.5".to_string()),
            ]
        );
    }

    #[test]
    fn test_year_month_new_enforces_month_range() {
        let ym = YearMonth::new(2023, 6).unwrap();
        assert_eq!(ym.year(), &BigInt::from(2023));
        assert_eq!(ym.month(), 6);

        for month in [0, 13, -1, 256, i64::MAX] {
            let err = YearMonth::new(2023, month).unwrap_err();
            assert_eq!(err.reason(), MONTH_OUT_OF_RANGE_REASON, "month {}", month);
        }
    }

    #[test]
    fn test_year_month_display_and_tuple() {
        let ym = YearMonth::new(2023, 6).unwrap();
        assert_eq!(ym.to_string(), "2023-06");
        assert_eq!(<(BigInt, u8)>::from(ym), (BigInt::from(2023), 6));
        assert_eq!(YearMonth::new(-44, 3).unwrap().to_string(), "-044-03");
    }

    #[test]
    fn test_year_month_serde() {
        let ym = YearMonth::new(2023, 6).unwrap();
        assert_eq!(
            serde_json::to_value(&ym).unwrap(),
            json!({"year": 2023, "month": 6})
        );

        let parsed: YearMonth =
            serde_json::from_value(json!({"year": 1999, "month": 12})).unwrap();
        assert_eq!(parsed, YearMonth::new(1999, 12).unwrap());

        let invalid = serde_json::from_value::<YearMonth>(json!({"year": 1999, "month": 13}));
        assert!(invalid.is_err());
    }

    #[test]
    fn test_year_month_serde_large_year() {
        let year: BigInt = "99999999999999999999".parse().unwrap();
        let ym = YearMonth::new(year.clone(), 1).unwrap();

        let value = serde_json::to_value(&ym).unwrap();
        assert_eq!(value, json!({"year": "99999999999999999999", "month": 1}));

        let back: YearMonth = serde_json::from_value(value).unwrap();
        assert_eq!(back.year(), &year);
        assert_eq!(back.month(), 1);
    }
}
