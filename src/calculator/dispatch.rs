//! Routing of raw input to the evaluator or the unit converter.

use super::detection::{looks_like_conversion, looks_like_expression};
use super::evaluation::evaluate;
use crate::config::Config;
use crate::converter::convert;
use serde::Serialize;

/// Which component handles an input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    /// Neither mode is active.
    Idle,
    /// Unit converter.
    Convert,
    /// Expression evaluator.
    Evaluate,
}

/// Outcome of dispatching one input.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Dispatch {
    /// The original input.
    pub expression: String,
    /// The mode the input was routed to.
    #[serde(rename = "mode")]
    pub route: Route,
    /// The formatted result, if the routed component produced one.
    pub result: Option<String>,
}

impl Dispatch {
    /// Check if the routed component produced a result.
    pub fn is_success(&self) -> bool {
        self.result.is_some()
    }

    /// Get the display line, prefixed per mode (`= 4`, `→ 3.107 miles`).
    pub fn display(&self) -> Option<String> {
        let result = self.result.as_deref()?;
        match self.route {
            Route::Evaluate => Some(format!("= {}", result)),
            Route::Convert => Some(format!("→ {}", result)),
            Route::Idle => None,
        }
    }

    /// Get the text to copy to the clipboard (only for successful results).
    pub fn clipboard(&self) -> Option<&str> {
        self.result.as_deref()
    }
}

/// Routes input with per-mode switches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dispatcher {
    pub calculator: bool,
    pub converter: bool,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self {
            calculator: true,
            converter: true,
        }
    }
}

impl Dispatcher {
    pub fn from_config(config: &Config) -> Self {
        Self {
            calculator: config.calculator,
            converter: config.converter,
        }
    }

    /// Decide which mode handles `input`.
    ///
    /// A conversion match always wins over arithmetic detection. When the
    /// converter is disabled, conversion-shaped input stays idle instead of
    /// falling through to the evaluator.
    pub fn route(&self, input: &str) -> Route {
        if input.trim().is_empty() {
            return Route::Idle;
        }

        if looks_like_conversion(input) {
            return if self.converter {
                Route::Convert
            } else {
                Route::Idle
            };
        }

        if self.calculator && looks_like_expression(input) {
            return Route::Evaluate;
        }

        Route::Idle
    }

    /// Route `input` and run the selected component.
    pub fn dispatch(&self, input: &str) -> Dispatch {
        let route = self.route(input);
        let result = match route {
            Route::Convert => convert(input),
            Route::Evaluate => evaluate(input),
            Route::Idle => None,
        };

        Dispatch {
            expression: input.to_string(),
            route,
            result,
        }
    }
}

/// Route with both modes enabled.
pub fn route(input: &str) -> Route {
    Dispatcher::default().route(input)
}

/// Dispatch with both modes enabled.
pub fn dispatch(input: &str) -> Dispatch {
    Dispatcher::default().dispatch(input)
}
