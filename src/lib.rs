//! Arithmetic evaluation and unit conversion for launcher-style input.
//!
//! ```
//! assert_eq!(quickcalc::dispatch("15% of 80").result.as_deref(), Some("12"));
//! assert_eq!(quickcalc::convert("100f to c").as_deref(), Some("37.778 c"));
//! ```

pub mod calculator;
pub mod config;
pub mod converter;
pub mod error;
pub mod logging;

pub use calculator::{Dispatch, Dispatcher, FormatStyle, Route, dispatch, evaluate, format_result};
pub use config::Config;
pub use converter::convert;
pub use error::CalcError;
