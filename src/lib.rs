#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use core::divide::{safe_divide, safe_divide_values};
pub use core::year_month::{parse_year_month, parse_year_month_value};
pub use domain::model::{NumericInput, YearMonth};
pub use utils::error::{Result, UtilError};
