pub mod divide;
pub mod year_month;

pub use crate::domain::model::{NumericInput, YearMonth};
pub use crate::utils::error::Result;
