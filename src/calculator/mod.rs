//! Calculator module for evaluating user input.
//!
//! This module provides functionality to:
//! - Route input to the expression evaluator or the unit converter
//! - Evaluate arithmetic with a recursive-descent parser
//! - Format results for display
//! - Copy results to the clipboard

mod clipboard;
mod detection;
mod dispatch;
mod evaluation;
mod format;
mod lexer;
mod parser;

pub use clipboard::copy_to_clipboard;
pub use detection::{looks_like_conversion, looks_like_expression};
pub use dispatch::{Dispatch, Dispatcher, Route, dispatch, route};
pub use evaluation::{CALCULATOR_EXAMPLES, evaluate, normalize, try_evaluate};
pub use format::{FormatStyle, format_result};
pub use lexer::{Token, tokenize};
pub use parser::parse;
