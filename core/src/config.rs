//! Carousel options.

use serde::{Deserialize, Deserializer, Serialize};

use crate::{breakpoint::BreakpointTable, error::ConfigError};

/// Default cosmetic gap, in rem.
pub const DEFAULT_GAP: f64 = 0.7;

/// Options accepted when constructing a carousel.
///
/// Missing fields fall back to their defaults, so `{}` is a valid
/// configuration. On the wire the shape is
/// `{ "breakpoints": [{ "width": 600, "slidesToShow": 2 }], "gap": 1.0 }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarouselConfig {
    /// Responsive breakpoint table.
    pub breakpoints: BreakpointTable,
    /// Spacing between slides in rem. Purely cosmetic: spacing is left to the
    /// stylesheet and layout math ignores it. Zero, `null` and non-finite
    /// values count as unset.
    #[serde(deserialize_with = "deserialize_gap")]
    pub gap: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            breakpoints: BreakpointTable::default(),
            gap: DEFAULT_GAP,
        }
    }
}

impl CarouselConfig {
    /// Replaces the breakpoint table.
    #[must_use]
    pub fn with_breakpoints(mut self, breakpoints: BreakpointTable) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    /// Sets the cosmetic gap. Zero or non-finite values restore the default.
    #[must_use]
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap_or_default(Some(gap));
        self
    }

    /// Parses and validates options from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Malformed`] when the text is not valid options
    /// JSON, or a breakpoint error when an entry is rejected.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the breakpoint table.
    ///
    /// # Errors
    ///
    /// Returns the first breakpoint error found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.breakpoints.validate()
    }
}

fn gap_or_default(gap: Option<f64>) -> f64 {
    gap.filter(|g| g.is_finite() && *g != 0.0)
        .unwrap_or(DEFAULT_GAP)
}

fn deserialize_gap<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Option::<f64>::deserialize(deserializer).map(gap_or_default)
}
