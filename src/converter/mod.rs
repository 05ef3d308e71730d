//! Unit conversion over a static table of directional rules.
//!
//! Input of the form `<value><unit> (to|in) <unit>` is matched against the
//! table in category order (length, weight, temperature). The first rule
//! whose units match case-insensitively is applied.

mod conversion;
mod table;

pub use conversion::{CONVERTER_EXAMPLES, Conversion, convert, try_convert};
pub(crate) use conversion::CONVERSION_PATTERN;
pub use table::{CATEGORIES, ConversionCategory, ConversionRule, RuleKind, find_rule};
